// ============================================================================
// campfire - ListStore
// An observable Vec with index-addressed change events
// ============================================================================
//
// Besides the whole-value `update`/`refresh` channels every store has, a
// ListStore reports single-item changes on their own channels:
//
// - push     -> ListChange { value: pushed item, idx: its new index }
// - remove   -> ListChange { value: removed item, idx: where it was }
// - mutation -> ListChange { value: written item, idx }
//
// so a view can patch one row instead of re-rendering the list.
// ============================================================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::core::error::StoreError;
use crate::core::options::StoreOptions;
use crate::core::types::{EventType, Handle, ListChange};
use crate::reactivity::emitter::Emitter;
use crate::reactivity::observable::Observable;

// =============================================================================
// LIST PAYLOAD
// =============================================================================

/// What ListStore subscribers receive.
///
/// `Update` and `Refresh` subscribers get [`ListPayload::Items`] with the
/// whole list; `Push`, `Remove` and `Mutation` subscribers get
/// [`ListPayload::Change`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPayload<T> {
    Items(Vec<T>),
    Change(ListChange<T>),
}

impl<T> ListPayload<T> {
    /// The whole list, for `Update`/`Refresh` payloads.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            ListPayload::Items(items) => Some(items.as_slice()),
            ListPayload::Change(_) => None,
        }
    }

    /// The single-item change, for `Push`/`Remove`/`Mutation` payloads.
    pub fn change(&self) -> Option<&ListChange<T>> {
        match self {
            ListPayload::Items(_) => None,
            ListPayload::Change(change) => Some(change),
        }
    }
}

// =============================================================================
// LIST STORE
// =============================================================================

struct ListStoreInner<T> {
    items: RefCell<Vec<T>>,
    emitter: Emitter<ListPayload<T>>,
}

/// A reactive list store.
///
/// # Example
///
/// ```
/// use campfire::{EventType, ListChange, ListStore};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let todos = ListStore::new(vec!["wash", "cook"]);
/// let pushed = Rc::new(RefCell::new(None));
///
/// let p = pushed.clone();
/// todos.on(
///     EventType::Push,
///     move |payload| *p.borrow_mut() = payload.change().cloned(),
///     false,
/// );
///
/// todos.push("sleep");
/// assert_eq!(todos.len(), 3);
/// assert_eq!(*pushed.borrow(), Some(ListChange::new("sleep", 2)));
///
/// todos.remove(0).unwrap();
/// assert_eq!(todos.get(0).unwrap(), Some("cook"));
/// ```
pub struct ListStore<T> {
    inner: Rc<ListStoreInner<T>>,
}

impl<T> Clone for ListStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> ListStore<T> {
    /// Create a list store from an initial list (possibly empty).
    pub fn new(items: Vec<T>) -> Self {
        Self::with_options(items, StoreOptions::default())
    }

    pub fn with_options(items: Vec<T>, options: StoreOptions) -> Self {
        Self {
            inner: Rc::new(ListStoreInner {
                items: RefCell::new(items),
                emitter: Emitter::new(&options),
            }),
        }
    }

    pub fn label(&self) -> &str {
        self.inner.emitter.label()
    }

    fn check_index(&self, idx: usize, len: usize, inclusive: bool) -> Result<(), StoreError> {
        let in_range = if inclusive { idx <= len } else { idx < len };
        if in_range {
            Ok(())
        } else {
            debug!(store = %self.label(), idx, len, "index out of range");
            Err(StoreError::IndexOutOfRange { idx, len })
        }
    }

    fn emit_change(&self, event: EventType, value: T, idx: usize) {
        self.inner
            .emitter
            .emit(event, &ListPayload::Change(ListChange::new(value, idx)));
    }

    // =========================================================================
    // LENGTH / READ
    // =========================================================================

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.inner.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a clone of the item at `idx`.
    ///
    /// `idx == len()` is accepted and yields `Ok(None)`; only `idx > len()`
    /// is an error. This bound is one wider than `remove` and `set_at`.
    pub fn get(&self, idx: usize) -> Result<Option<T>, StoreError> {
        let items = self.inner.items.borrow();
        self.check_index(idx, items.len(), true)?;
        Ok(items.get(idx).cloned())
    }

    /// Clone of the whole list.
    pub fn items(&self) -> Vec<T> {
        self.inner.items.borrow().clone()
    }

    /// Access the list with a closure (avoids cloning).
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(self.inner.items.borrow().as_slice())
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Register `callback` for events of type `event`.
    ///
    /// With `call_now`, `Update`/`Refresh` subscribers are called once with
    /// [`ListPayload::Items`] before this returns; `Push`, `Remove` and
    /// `Mutation` subscribers never are.
    pub fn on<F>(&self, event: EventType, callback: F, call_now: bool) -> Handle
    where
        F: Fn(&ListPayload<T>) + 'static,
    {
        self.inner.emitter.on(event, Rc::new(callback), call_now, || {
            ListPayload::Items(self.items())
        })
    }

    /// Stop calling the subscriber registered as `handle` under `event`.
    pub fn unsubscribe(&self, event: EventType, handle: Handle) -> bool {
        self.inner.emitter.unsubscribe(event, handle)
    }

    pub fn subscriber_count(&self, event: EventType) -> usize {
        self.inner.emitter.subscriber_count(event)
    }

    // =========================================================================
    // WHOLE-LIST CHANGES
    // =========================================================================

    /// Replace the whole list and notify `Update` subscribers.
    ///
    /// Ignored once the store is disposed.
    pub fn update(&self, items: Vec<T>) {
        if self.is_disposed() {
            debug!(store = %self.label(), "update on disposed store ignored");
            return;
        }
        *self.inner.items.borrow_mut() = items.clone();
        self.inner
            .emitter
            .emit(EventType::Update, &ListPayload::Items(items));
    }

    /// Notify `Refresh` subscribers with the unchanged list.
    pub fn refresh(&self) {
        if self.is_disposed() {
            debug!(store = %self.label(), "refresh on disposed store ignored");
            return;
        }
        let items = self.items();
        self.inner
            .emitter
            .emit(EventType::Refresh, &ListPayload::Items(items));
    }

    /// Empty the list. This is `update(vec![])`: it sends `Update`, not a
    /// list change event.
    pub fn clear(&self) {
        self.update(Vec::new());
    }

    // =========================================================================
    // ITEM CHANGES
    // =========================================================================
    //
    // These always apply the change. A disposed store simply has nobody left
    // to tell.

    /// Append `item` and send `Push` with its index.
    pub fn push(&self, item: T) {
        let idx = {
            let mut items = self.inner.items.borrow_mut();
            items.push(item.clone());
            items.len() - 1
        };
        self.emit_change(EventType::Push, item, idx);
    }

    /// Remove and return the item at `idx`, sending `Remove`.
    ///
    /// Fails unless `idx < len()`.
    pub fn remove(&self, idx: usize) -> Result<T, StoreError> {
        let removed = {
            let mut items = self.inner.items.borrow_mut();
            self.check_index(idx, items.len(), false)?;
            items.remove(idx)
        };
        self.emit_change(EventType::Remove, removed.clone(), idx);
        Ok(removed)
    }

    /// Overwrite the item at `idx`, sending `Mutation`. Returns the old item.
    ///
    /// Fails unless `idx < len()`.
    pub fn set_at(&self, idx: usize, item: T) -> Result<T, StoreError> {
        let old = {
            let mut items = self.inner.items.borrow_mut();
            self.check_index(idx, items.len(), false)?;
            std::mem::replace(&mut items[idx], item.clone())
        };
        self.emit_change(EventType::Mutation, item, idx);
        Ok(old)
    }

    // =========================================================================
    // DISPOSE
    // =========================================================================

    /// Close the store: drop every subscriber and never dispatch again.
    pub fn dispose(&self) {
        self.inner.emitter.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.emitter.is_disposed()
    }
}

impl<T: Clone + 'static> Observable for ListStore<T> {
    type Payload = ListPayload<T>;

    fn on<F>(&self, event: EventType, callback: F, call_now: bool) -> Handle
    where
        F: Fn(&Self::Payload) + 'static,
    {
        ListStore::on(self, event, callback, call_now)
    }

    fn unsubscribe(&self, event: EventType, handle: Handle) -> bool {
        ListStore::unsubscribe(self, event, handle)
    }

    fn refresh(&self) {
        ListStore::refresh(self)
    }

    fn dispose(&self) {
        ListStore::dispose(self)
    }

    fn is_disposed(&self) -> bool {
        ListStore::is_disposed(self)
    }

    fn subscriber_count(&self, event: EventType) -> usize {
        ListStore::subscriber_count(self, event)
    }
}

impl<T: Clone + 'static> Default for ListStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Clone + 'static> FromIterator<T> for ListStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for ListStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.inner.items.borrow();
        f.debug_struct("ListStore")
            .field("label", &self.inner.emitter.label())
            .field("items", &*items)
            .field("len", &items.len())
            .field("disposed", &self.inner.emitter.is_disposed())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
