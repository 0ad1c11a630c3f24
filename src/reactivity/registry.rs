// ============================================================================
// campfire - Subscriber Registry
// Per-channel ordered subscriber maps with monotonic handles
// ============================================================================
//
// Each event channel owns a counter and a BTreeMap keyed by handle. Removing a
// subscriber deletes its entry and never compacts, so a handle keeps meaning
// the same subscription for as long as the channel lives. BTreeMap iteration
// is ascending by handle, which is the dispatch order.
// ============================================================================

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::core::types::{EventType, Handle};

/// Shared callback type. Callbacks are reference counted so a dispatch can
/// snapshot them and release the registry before invoking any of them.
pub type Subscriber<P> = Rc<dyn Fn(&P)>;

// =============================================================================
// CHANNEL
// =============================================================================

struct Channel<P> {
    /// Next handle to issue
    next: u64,
    subscribers: BTreeMap<Handle, Subscriber<P>>,
}

impl<P> Channel<P> {
    fn new() -> Self {
        Self {
            next: 0,
            subscribers: BTreeMap::new(),
        }
    }

    fn issue(&mut self) -> Handle {
        let handle = Handle::new(self.next);
        self.next += 1;
        handle
    }
}

// =============================================================================
// SUBSCRIBER REGISTRY
// =============================================================================

/// The subscriber maps of one store, one channel per [`EventType`].
pub struct SubscriberRegistry<P> {
    channels: [Channel<P>; EventType::COUNT],
}

impl<P> SubscriberRegistry<P> {
    pub fn new() -> Self {
        Self {
            channels: std::array::from_fn(|_| Channel::new()),
        }
    }

    fn channel(&self, event: EventType) -> &Channel<P> {
        &self.channels[event.index()]
    }

    fn channel_mut(&mut self, event: EventType) -> &mut Channel<P> {
        &mut self.channels[event.index()]
    }

    /// Register a subscriber, returning its freshly issued handle.
    pub fn insert(&mut self, event: EventType, subscriber: Subscriber<P>) -> Handle {
        let channel = self.channel_mut(event);
        let handle = channel.issue();
        channel.subscribers.insert(handle, subscriber);
        handle
    }

    /// Issue a handle without registering anything.
    pub fn reserve(&mut self, event: EventType) -> Handle {
        self.channel_mut(event).issue()
    }

    /// Remove a subscriber. Returns false if nothing was registered under
    /// `handle` in this channel.
    pub fn remove(&mut self, event: EventType, handle: Handle) -> bool {
        self.channel_mut(event).subscribers.remove(&handle).is_some()
    }

    pub fn contains(&self, event: EventType, handle: Handle) -> bool {
        self.channel(event).subscribers.contains_key(&handle)
    }

    /// Live subscribers of a channel in ascending handle order.
    pub fn snapshot(&self, event: EventType) -> Vec<(Handle, Subscriber<P>)> {
        self.channel(event)
            .subscribers
            .iter()
            .map(|(handle, subscriber)| (*handle, subscriber.clone()))
            .collect()
    }

    pub fn len(&self, event: EventType) -> usize {
        self.channel(event).subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.iter().all(|c| c.subscribers.is_empty())
    }

    /// Drop every subscriber and reset every counter.
    pub fn clear(&mut self) {
        for channel in &mut self.channels {
            *channel = Channel::new();
        }
    }
}

impl<P> Default for SubscriberRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Subscriber<i32> {
        Rc::new(|_: &i32| {})
    }

    #[test]
    fn handles_increase_per_channel() {
        let mut reg = SubscriberRegistry::new();
        assert_eq!(reg.insert(EventType::Update, noop()).id(), 0);
        assert_eq!(reg.insert(EventType::Update, noop()).id(), 1);
        // Independent counter
        assert_eq!(reg.insert(EventType::Push, noop()).id(), 0);
        assert_eq!(reg.insert(EventType::Update, noop()).id(), 2);
    }

    #[test]
    fn removed_handles_are_not_reused() {
        let mut reg = SubscriberRegistry::new();
        let a = reg.insert(EventType::Update, noop());
        let b = reg.insert(EventType::Update, noop());
        assert!(reg.remove(EventType::Update, b));

        let c = reg.insert(EventType::Update, noop());
        assert_ne!(b, c);
        assert!(c > b);

        let order: Vec<Handle> = reg
            .snapshot(EventType::Update)
            .into_iter()
            .map(|(h, _)| h)
            .collect();
        assert_eq!(order, vec![a, c]);
    }

    #[test]
    fn remove_is_scoped_to_channel() {
        let mut reg = SubscriberRegistry::new();
        let h = reg.insert(EventType::Update, noop());

        assert!(!reg.remove(EventType::Refresh, h));
        assert!(reg.contains(EventType::Update, h));

        assert!(reg.remove(EventType::Update, h));
        assert!(!reg.remove(EventType::Update, h));
    }

    #[test]
    fn reserve_advances_counter_only() {
        let mut reg: SubscriberRegistry<i32> = SubscriberRegistry::new();
        assert_eq!(reg.reserve(EventType::Refresh).id(), 0);
        assert_eq!(reg.len(EventType::Refresh), 0);
        assert_eq!(reg.insert(EventType::Refresh, noop()).id(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut reg = SubscriberRegistry::new();
        reg.insert(EventType::Update, noop());
        reg.insert(EventType::Remove, noop());
        assert!(!reg.is_empty());

        reg.clear();
        assert!(reg.is_empty());
        assert_eq!(reg.insert(EventType::Update, noop()).id(), 0);
    }
}
