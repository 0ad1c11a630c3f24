// ============================================================================
// campfire - Constants
// Event channel names and logging defaults
// ============================================================================

// =============================================================================
// EVENT CHANNEL NAMES
// =============================================================================

/// Sent by `update()` with the new value
pub const UPDATE: &str = "update";

/// Sent by `refresh()` with the unchanged current value
pub const REFRESH: &str = "refresh";

/// Sent by `ListStore::push()` with the appended item and its index
pub const PUSH: &str = "push";

/// Sent by `ListStore::remove()` with the removed item and its former index
pub const REMOVE: &str = "remove";

/// Sent by `ListStore::set_at()` with the written item and its index
pub const MUTATION: &str = "mutation";

// =============================================================================
// LOGGING
// =============================================================================

/// Label used in log events for stores created without one
pub const ANONYMOUS_LABEL: &str = "anonymous";
