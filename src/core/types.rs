// ============================================================================
// campfire - Type Definitions
// Event channels, subscription handles and list change payloads
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{MUTATION, PUSH, REFRESH, REMOVE, UPDATE};
use super::error::ParseEventTypeError;

// =============================================================================
// EVENT TYPE
// =============================================================================

/// A named channel under which subscribers are registered and dispatched.
///
/// Every store keeps an independent subscriber list (and handle counter) per
/// event type. `Update` and `Refresh` carry the whole value; `Push`, `Remove`
/// and `Mutation` carry a [`ListChange`] and are only ever sent by a
/// [`ListStore`](crate::ListStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventType {
    Update,
    Refresh,
    Push,
    Remove,
    Mutation,
}

impl EventType {
    /// Number of event channels.
    pub const COUNT: usize = 5;

    /// All event types in channel order.
    pub const ALL: [EventType; Self::COUNT] = [
        EventType::Update,
        EventType::Refresh,
        EventType::Push,
        EventType::Remove,
        EventType::Mutation,
    ];

    /// The channel name.
    pub const fn as_str(self) -> &'static str {
        match self {
            EventType::Update => UPDATE,
            EventType::Refresh => REFRESH,
            EventType::Push => PUSH,
            EventType::Remove => REMOVE,
            EventType::Mutation => MUTATION,
        }
    }

    /// Whether this is one of the list change channels.
    ///
    /// Subscribing to these with `call_now` never invokes the callback
    /// immediately: there is no "current" change to report.
    pub const fn is_list_change(self) -> bool {
        matches!(self, EventType::Push | EventType::Remove | EventType::Mutation)
    }

    /// Slot of this channel in per-channel arrays.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| ParseEventTypeError(s.to_string()))
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Opaque token identifying one subscription within one event channel.
///
/// Handles are issued from a per-channel counter, so the same numeric handle
/// can exist in two different channels. Always unsubscribe with the event type
/// the handle was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Handle(u64);

impl Handle {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw counter value.
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// LIST CHANGE
// =============================================================================

/// Payload of the `push`, `remove` and `mutation` channels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ListChange<T> {
    /// The pushed, removed or written item
    pub value: T,
    /// Index the item now occupies (or occupied, for `remove`)
    pub idx: usize,
}

impl<T> ListChange<T> {
    pub fn new(value: T, idx: usize) -> Self {
        Self { value, idx }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_round_trip_through_from_str() {
        for event in EventType::ALL {
            assert_eq!(event.as_str().parse::<EventType>(), Ok(event));
            assert_eq!(event.to_string(), event.as_str());
        }
    }

    #[test]
    fn unknown_event_name_is_rejected() {
        let err = "setAt".parse::<EventType>().unwrap_err();
        assert_eq!(err, ParseEventTypeError("setAt".to_string()));
        assert!("Update".parse::<EventType>().is_err());
    }

    #[test]
    fn only_list_channels_are_list_changes() {
        assert!(!EventType::Update.is_list_change());
        assert!(!EventType::Refresh.is_list_change());
        assert!(EventType::Push.is_list_change());
        assert!(EventType::Remove.is_list_change());
        assert!(EventType::Mutation.is_list_change());
    }

    #[test]
    fn channel_indices_are_dense() {
        for (i, event) in EventType::ALL.into_iter().enumerate() {
            assert_eq!(event.index(), i);
        }
    }

    #[test]
    fn handles_order_by_id() {
        assert!(Handle::new(1) < Handle::new(2));
        assert_eq!(Handle::new(7).id(), 7);
        assert_eq!(Handle::new(7).to_string(), "#7");
    }
}
