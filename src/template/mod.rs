// ============================================================================
// campfire - Templating
// Mustache-style substitution and HTML escaping
// ============================================================================

mod entities;
mod substitute;

pub use entities::{escape, unescape};
pub use substitute::{mustache, template, Template, TemplateData};
