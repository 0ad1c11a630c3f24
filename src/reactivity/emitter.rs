// ============================================================================
// campfire - Emitter
// Synchronous event dispatch shared by Store and ListStore
// ============================================================================
//
// The emitter owns a store's subscriber registry and its disposed flag.
// Dispatch snapshots the channel, releases the registry borrow, then calls
// each subscriber in ascending handle order. Subscribers may therefore
// subscribe, unsubscribe, mutate the store or dispose it while a dispatch is
// running:
//
// - a subscriber removed mid-dispatch is skipped if it has not run yet
// - a subscriber added mid-dispatch first runs on the next dispatch
// - disposing mid-dispatch stops the remaining calls
// ============================================================================

use std::cell::{Cell, RefCell};

use tracing::{debug, trace};

use crate::core::options::StoreOptions;
use crate::core::types::{EventType, Handle};
use crate::reactivity::registry::{Subscriber, SubscriberRegistry};

/// Subscriber registry plus lifecycle state for a single store.
pub struct Emitter<P> {
    registry: RefCell<SubscriberRegistry<P>>,
    dead: Cell<bool>,
    label: String,
}

impl<P> Emitter<P> {
    pub fn new(options: &StoreOptions) -> Self {
        Self {
            registry: RefCell::new(SubscriberRegistry::new()),
            dead: Cell::new(false),
            label: options.label_or_default().to_string(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disposed(&self) -> bool {
        self.dead.get()
    }

    // =========================================================================
    // SUBSCRIBE / UNSUBSCRIBE
    // =========================================================================

    /// Register `subscriber` under `event`.
    ///
    /// When `call_now` is set and `event` is not a list change channel, the
    /// subscriber is invoked with `current()` before this returns.
    ///
    /// A disposed emitter still issues a handle (and honors `call_now`) but
    /// does not retain the subscriber, since nothing will ever be dispatched
    /// to it.
    pub fn on(
        &self,
        event: EventType,
        subscriber: Subscriber<P>,
        call_now: bool,
        current: impl FnOnce() -> P,
    ) -> Handle {
        let handle = if self.dead.get() {
            self.registry.borrow_mut().reserve(event)
        } else {
            self.registry
                .borrow_mut()
                .insert(event, subscriber.clone())
        };
        trace!(store = %self.label, %event, %handle, call_now, "subscribed");

        if call_now && !event.is_list_change() {
            subscriber(&current());
        }
        handle
    }

    /// Remove a subscription. Unknown handles are ignored.
    pub fn unsubscribe(&self, event: EventType, handle: Handle) -> bool {
        let removed = self.registry.borrow_mut().remove(event, handle);
        trace!(store = %self.label, %event, %handle, removed, "unsubscribed");
        removed
    }

    pub fn subscriber_count(&self, event: EventType) -> usize {
        self.registry.borrow().len(event)
    }

    // =========================================================================
    // DISPATCH
    // =========================================================================

    /// Send `payload` to every subscriber of `event`.
    ///
    /// Returns the number of subscribers invoked; always 0 once disposed.
    pub fn emit(&self, event: EventType, payload: &P) -> usize {
        if self.dead.get() {
            debug!(store = %self.label, %event, "dispatch on disposed store ignored");
            return 0;
        }

        let subscribers = self.registry.borrow().snapshot(event);
        trace!(store = %self.label, %event, subscribers = subscribers.len(), "dispatch");

        let mut invoked = 0;
        for (handle, subscriber) in subscribers {
            if self.dead.get() || !self.registry.borrow().contains(event, handle) {
                continue;
            }
            subscriber(payload);
            invoked += 1;
        }
        invoked
    }

    // =========================================================================
    // DISPOSE
    // =========================================================================

    /// Stop all dispatch permanently and release every subscriber.
    pub fn dispose(&self) {
        if !self.dead.replace(true) {
            debug!(store = %self.label, "disposed");
        }
        // Drop the callbacks outside the borrow: their captures may touch
        // this store on drop.
        let released = std::mem::take(&mut *self.registry.borrow_mut());
        drop(released);
    }
}

// =============================================================================
// TESTS
// =============================================================================
