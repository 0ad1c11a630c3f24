// ============================================================================
// campfire - Core Module
// Event channels, handles, payloads, errors and options
// ============================================================================

pub mod constants;
pub mod error;
pub mod options;
pub mod types;

// Re-export commonly used items
pub use error::{ParseEventTypeError, StoreError};
pub use options::StoreOptions;
pub use types::{EventType, Handle, ListChange};
