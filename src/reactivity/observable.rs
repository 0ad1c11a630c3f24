// ============================================================================
// campfire - Observable
// The subscription capability shared by every store
// ============================================================================

use crate::core::types::{EventType, Handle};

/// Subscription interface implemented by [`Store`](crate::Store) and
/// [`ListStore`](crate::ListStore).
///
/// Lets code that only wires up subscribers (view bindings, teardown
/// helpers) stay generic over the kind of store.
///
/// ```
/// use campfire::{EventType, ListStore, Observable, Store};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// fn count_refreshes<O: Observable>(store: &O) -> Rc<Cell<usize>> {
///     let count = Rc::new(Cell::new(0));
///     let c = count.clone();
///     store.on(EventType::Refresh, move |_| c.set(c.get() + 1), false);
///     count
/// }
///
/// let name = Store::new("ada");
/// let todos = ListStore::new(vec!["write docs"]);
/// let a = count_refreshes(&name);
/// let b = count_refreshes(&todos);
///
/// name.refresh();
/// todos.refresh();
/// todos.refresh();
/// assert_eq!((a.get(), b.get()), (1, 2));
/// ```
pub trait Observable {
    /// What subscribers receive.
    type Payload;

    /// Register `callback` under `event`; see [`Store::on`](crate::Store::on).
    fn on<F>(&self, event: EventType, callback: F, call_now: bool) -> Handle
    where
        F: Fn(&Self::Payload) + 'static;

    /// Remove the subscription `handle` from `event`.
    fn unsubscribe(&self, event: EventType, handle: Handle) -> bool;

    /// Re-send the current value on the `refresh` channel.
    fn refresh(&self);

    /// Permanently stop dispatch and release all subscribers.
    fn dispose(&self);

    fn is_disposed(&self) -> bool;

    fn subscriber_count(&self, event: EventType) -> usize;
}
