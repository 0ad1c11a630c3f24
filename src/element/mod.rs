// ============================================================================
// campfire - Elements
// `nu("tag#id.class", props)` element construction
// ============================================================================

mod builder;
mod spec;

pub use builder::{nu, Element, ElementProps};
pub use spec::{ElementSpec, DEFAULT_TAG};
