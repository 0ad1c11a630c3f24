//! Property tests for ListStore.
//!
//! 1. n pushes give length n, and get(i) is the i-th pushed value.
//! 2. remove(idx) shifts the next element into idx.
//! 3. remove/set_at reject idx >= len; get accepts len and rejects len + 1.
//! 4. Push/Remove/Mutation payloads match the operation.
//! 5. A disposed store never invokes a subscriber.

use campfire::{EventType, ListChange, ListStore, StoreError};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Remove(usize),
    SetAt(usize, i32),
    Refresh,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => (0usize..12).prop_map(Op::Remove),
        2 => (0usize..12, any::<i32>()).prop_map(|(i, v)| Op::SetAt(i, v)),
        1 => Just(Op::Refresh),
        1 => Just(Op::Clear),
    ]
}

fn record_changes(list: &ListStore<i32>) -> Rc<RefCell<Vec<(EventType, ListChange<i32>)>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for event in [EventType::Push, EventType::Remove, EventType::Mutation] {
        let log = log.clone();
        list.on(
            event,
            move |p| {
                if let Some(change) = p.change() {
                    log.borrow_mut().push((event, change.clone()));
                }
            },
            false,
        );
    }
    log
}

proptest! {
    #[test]
    fn pushes_are_retrievable_in_order(values in prop::collection::vec(any::<i32>(), 0..40)) {
        let list = ListStore::new(Vec::new());
        for v in &values {
            list.push(*v);
        }
        prop_assert_eq!(list.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(list.get(i), Ok(Some(*v)));
        }
    }

    #[test]
    fn remove_shifts_successor_down(
        values in prop::collection::vec(any::<i32>(), 1..30),
        pick in any::<prop::sample::Index>(),
    ) {
        let list = ListStore::new(values.clone());
        let idx = pick.index(values.len());

        prop_assert_eq!(list.remove(idx), Ok(values[idx]));
        if idx < list.len() {
            prop_assert_eq!(list.get(idx), Ok(Some(values[idx + 1])));
        }
    }

    #[test]
    fn bounds_are_asymmetric(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let list = ListStore::new(values.clone());
        let len = values.len();
        let out_of_range = |idx| StoreError::IndexOutOfRange { idx, len };

        prop_assert_eq!(list.remove(len), Err(out_of_range(len)));
        prop_assert_eq!(list.set_at(len, 0), Err(out_of_range(len)));
        prop_assert_eq!(list.get(len), Ok(None));
        prop_assert_eq!(list.get(len + 1), Err(out_of_range(len + 1)));
        prop_assert_eq!(list.items(), values);
    }

    #[test]
    fn change_payloads_match_a_vec_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let list = ListStore::new(Vec::new());
        let log = record_changes(&list);
        let mut model: Vec<i32> = Vec::new();
        let mut expected = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    list.push(v);
                    model.push(v);
                    expected.push((EventType::Push, ListChange::new(v, model.len() - 1)));
                }
                Op::Remove(i) => {
                    let result = list.remove(i);
                    if i < model.len() {
                        let removed = model.remove(i);
                        prop_assert_eq!(result, Ok(removed));
                        expected.push((EventType::Remove, ListChange::new(removed, i)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::SetAt(i, v) => {
                    let result = list.set_at(i, v);
                    if i < model.len() {
                        let old = std::mem::replace(&mut model[i], v);
                        prop_assert_eq!(result, Ok(old));
                        expected.push((EventType::Mutation, ListChange::new(v, i)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::Refresh => list.refresh(),
                Op::Clear => {
                    list.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(list.items(), model.clone());
        }
        prop_assert_eq!(log.borrow().clone(), expected);
    }

    #[test]
    fn disposed_store_never_notifies(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let list = ListStore::new(vec![0; 4]);
        let calls = Rc::new(RefCell::new(0usize));
        for event in EventType::ALL {
            let calls = calls.clone();
            list.on(event, move |_| *calls.borrow_mut() += 1, false);
        }
        list.dispose();

        for op in ops {
            match op {
                Op::Push(v) => list.push(v),
                Op::Remove(i) => { let _ = list.remove(i); }
                Op::SetAt(i, v) => { let _ = list.set_at(i, v); }
                Op::Refresh => list.refresh(),
                Op::Clear => list.clear(),
            }
        }
        prop_assert_eq!(*calls.borrow(), 0);
    }
}
