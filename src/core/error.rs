// ============================================================================
// campfire - Errors
// ============================================================================

use thiserror::Error;

/// Errors raised by index-addressed list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The index is outside the bound accepted by the operation.
    ///
    /// `remove` and `set_at` accept `idx < len`; `get` also accepts
    /// `idx == len`.
    #[error("Invalid index {idx} for list of length {len}")]
    IndexOutOfRange { idx: usize, len: usize },
}

/// Returned when parsing an unknown event channel name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown event type {0:?}")]
pub struct ParseEventTypeError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = StoreError::IndexOutOfRange { idx: 4, len: 3 };
        assert_eq!(err.to_string(), "Invalid index 4 for list of length 3");

        let err = ParseEventTypeError("setAt".into());
        assert_eq!(err.to_string(), "Unknown event type \"setAt\"");
    }
}
