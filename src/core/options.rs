// ============================================================================
// campfire - Store Options
// ============================================================================

use super::constants::ANONYMOUS_LABEL;

/// Options for creating a store.
///
/// ```
/// use campfire::{Store, StoreOptions};
///
/// let theme = Store::with_options("dark", StoreOptions::labeled("theme"));
/// assert_eq!(theme.label(), "theme");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Name reported in log events and `Debug` output
    pub label: Option<String>,
}

impl StoreOptions {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    pub(crate) fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or(ANONYMOUS_LABEL)
    }
}
