// ============================================================================
// campfire - Primitives Module
// The single-value Store
// ============================================================================

pub mod store;

pub use store::Store;
