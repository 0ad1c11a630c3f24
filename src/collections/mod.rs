// ============================================================================
// campfire - Collections
// Observable collections with per-item change events
// ============================================================================

mod list;

pub use list::{ListPayload, ListStore};
