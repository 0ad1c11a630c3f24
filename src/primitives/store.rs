// ============================================================================
// campfire - Store
// A single observable value with named event channels
// ============================================================================

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::core::options::StoreOptions;
use crate::core::types::{EventType, Handle};
use crate::reactivity::emitter::Emitter;
use crate::reactivity::observable::Observable;

// =============================================================================
// STORE INNER
// =============================================================================

struct StoreInner<T> {
    value: RefCell<T>,
    emitter: Emitter<T>,
}

// =============================================================================
// STORE<T> - The public store handle
// =============================================================================

/// A reactive store holding a value of type T.
///
/// Subscribers register under an [`EventType`] and are called synchronously,
/// in registration order, whenever that event is dispatched. `update()` sends
/// `Update` with the new value, `refresh()` sends `Refresh` with the current
/// one. Cloning a `Store` yields another handle to the same value and
/// subscribers.
///
/// Subscribers are kept until they are unsubscribed or the store is disposed.
/// A subscriber that captures a handle to its own store keeps that store
/// alive until then.
///
/// # Example
///
/// ```
/// use campfire::{EventType, Store};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let count = Store::new(0);
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let s = seen.clone();
/// let handle = count.on(EventType::Update, move |v| s.borrow_mut().push(*v), true);
///
/// count.update(5);
/// count.unsubscribe(EventType::Update, handle);
/// count.update(6);
///
/// assert_eq!(*seen.borrow(), vec![0, 5]);
/// assert_eq!(count.get(), 6);
/// ```
pub struct Store<T> {
    inner: Rc<StoreInner<T>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Store<T> {
    /// Create a new store with the given initial value.
    pub fn new(value: T) -> Self {
        Self::with_options(value, StoreOptions::default())
    }

    pub fn with_options(value: T, options: StoreOptions) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                value: RefCell::new(value),
                emitter: Emitter::new(&options),
            }),
        }
    }

    /// Get the current value (cloning).
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Access the current value with a closure (avoids cloning).
    ///
    /// The value is borrowed for the duration of `f`; calling `update()` from
    /// inside `f` panics.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.inner.value.borrow())
    }

    pub fn label(&self) -> &str {
        self.inner.emitter.label()
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Register `callback` for events of type `event`.
    ///
    /// If `call_now` is true and `event` is `Update` or `Refresh`, `callback`
    /// is also called once with the current value before `on` returns. List
    /// change channels never get this immediate call.
    ///
    /// Returns a handle for [`unsubscribe`](Self::unsubscribe), valid only
    /// together with the same `event`.
    pub fn on<F>(&self, event: EventType, callback: F, call_now: bool) -> Handle
    where
        F: Fn(&T) + 'static,
    {
        self.inner
            .emitter
            .on(event, Rc::new(callback), call_now, || self.get())
    }

    /// Stop calling the subscriber registered as `handle` under `event`.
    ///
    /// Returns false (and does nothing) if there is no such subscription.
    pub fn unsubscribe(&self, event: EventType, handle: Handle) -> bool {
        self.inner.emitter.unsubscribe(event, handle)
    }

    /// Number of live subscribers on `event`.
    pub fn subscriber_count(&self, event: EventType) -> usize {
        self.inner.emitter.subscriber_count(event)
    }

    // =========================================================================
    // UPDATE / REFRESH
    // =========================================================================

    /// Replace the value and notify `Update` subscribers with it.
    ///
    /// Ignored entirely (the value is not replaced) once the store is
    /// disposed.
    pub fn update(&self, value: T) {
        if self.is_disposed() {
            debug!(store = %self.label(), "update on disposed store ignored");
            return;
        }
        *self.inner.value.borrow_mut() = value.clone();
        self.inner.emitter.emit(EventType::Update, &value);
    }

    /// Modify the value in place, then notify `Update` subscribers.
    ///
    /// ```
    /// use campfire::Store;
    ///
    /// let tags = Store::new(vec!["a"]);
    /// tags.modify(|t| t.push("b"));
    /// assert_eq!(tags.get(), vec!["a", "b"]);
    /// ```
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        if self.is_disposed() {
            debug!(store = %self.label(), "modify on disposed store ignored");
            return;
        }
        let value = {
            let mut value = self.inner.value.borrow_mut();
            f(&mut *value);
            value.clone()
        };
        self.inner.emitter.emit(EventType::Update, &value);
    }

    /// Notify `Refresh` subscribers with the unchanged current value.
    pub fn refresh(&self) {
        if self.is_disposed() {
            debug!(store = %self.label(), "refresh on disposed store ignored");
            return;
        }
        let value = self.get();
        self.inner.emitter.emit(EventType::Refresh, &value);
    }

    // =========================================================================
    // DISPOSE
    // =========================================================================

    /// Close the store: drop every subscriber and never dispatch again.
    ///
    /// Call this when whatever owns the store is torn down. Idempotent.
    pub fn dispose(&self) {
        self.inner.emitter.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.emitter.is_disposed()
    }
}

impl<T: Clone + 'static> Observable for Store<T> {
    type Payload = T;

    fn on<F>(&self, event: EventType, callback: F, call_now: bool) -> Handle
    where
        F: Fn(&Self::Payload) + 'static,
    {
        Store::on(self, event, callback, call_now)
    }

    fn unsubscribe(&self, event: EventType, handle: Handle) -> bool {
        Store::unsubscribe(self, event, handle)
    }

    fn refresh(&self) {
        Store::refresh(self)
    }

    fn dispose(&self) {
        Store::dispose(self)
    }

    fn is_disposed(&self) -> bool {
        Store::is_disposed(self)
    }

    fn subscriber_count(&self, event: EventType) -> usize {
        Store::subscriber_count(self, event)
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("label", &self.inner.emitter.label())
            .field("value", &self.inner.value.borrow())
            .field("disposed", &self.inner.emitter.is_disposed())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
