// ============================================================================
// campfire - Reactive stores and templating helpers
// ============================================================================
//
// Three small pieces for building UIs by hand:
//
// - Store / ListStore: observable values with named event channels
// - mustache / template / escape / unescape: string templating
// - nu: `tag#id.class` element construction rendered to HTML
//
// Everything is single-threaded and synchronous. Subscribers run inside the
// call that triggered them, in registration order.
// ============================================================================

pub mod collections;
pub mod core;
pub mod element;
mod macros;
pub mod primitives;
pub mod reactivity;
pub mod template;

// Re-export core items at crate root for ergonomic access
pub use crate::core::constants;
pub use crate::core::error::{ParseEventTypeError, StoreError};
pub use crate::core::options::StoreOptions;
pub use crate::core::types::{EventType, Handle, ListChange};

// Stores
pub use collections::{ListPayload, ListStore};
pub use primitives::Store;
pub use reactivity::{Observable, Subscriber};

// Templating and elements
pub use element::{nu, Element, ElementProps, ElementSpec};
pub use template::{escape, mustache, template, unescape, Template, TemplateData};

// =============================================================================
// TESTS
// =============================================================================
