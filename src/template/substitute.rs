// ============================================================================
// campfire - Mustache Templating
// `{{ name }}` substitution from a string map
// ============================================================================

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `\`? `{{` name `}}`, whitespace around the name allowed.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\\)?\{\{\s*([^{}]*?)\s*\}\}").expect("placeholder regex")
});

// =============================================================================
// TEMPLATE DATA
// =============================================================================

/// A source of substitution values, looked up by exact name.
pub trait TemplateData {
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl<K, V, S> TemplateData for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.as_ref())
    }
}

impl<K, V> TemplateData for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.as_ref())
    }
}

// =============================================================================
// MUSTACHE
// =============================================================================

/// Replace every `{{ name }}` in `text` whose name is present in `data`.
///
/// Placeholders naming anything not in `data` are left as written. Prefixing
/// a placeholder with a backslash (`\{{ name }}`) keeps it literal: the
/// backslash is dropped and the braces stay.
///
/// Values are inserted verbatim; run them through [`escape`](super::escape)
/// first if they end up in HTML.
///
/// ```
/// use campfire::mustache;
/// use std::collections::HashMap;
///
/// let data = HashMap::from([("name", "Ada")]);
/// assert_eq!(
///     mustache(r"Hi {{ name }}, see \{{name}} and {{ other }}", &data),
///     "Hi Ada, see {{name}} and {{ other }}"
/// );
/// ```
pub fn mustache<D: TemplateData + ?Sized>(text: &str, data: &D) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = &caps[0];
            match data.lookup(&caps[2]) {
                None => whole.to_string(),
                Some(_) if caps.get(1).is_some() => whole[1..].to_string(),
                Some(value) => value.to_string(),
            }
        })
        .into_owned()
}

// =============================================================================
// TEMPLATE
// =============================================================================

/// A reusable template: [`mustache`] with the text fixed up front.
///
/// No HTML sanitizing is performed.
///
/// ```
/// use campfire::template;
/// use std::collections::HashMap;
///
/// let row = template("<li class='todo'>{{ title }}</li>");
/// let data = HashMap::from([("title", "buy milk")]);
/// assert_eq!(row.render(&data), "<li class='todo'>buy milk</li>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render with `data`; equivalent to `mustache(self.source(), data)`.
    pub fn render<D: TemplateData + ?Sized>(&self, data: &D) -> String {
        mustache(&self.source, data)
    }
}

/// Create a [`Template`] from `source`.
pub fn template(source: impl Into<String>) -> Template {
    Template::new(source)
}

// =============================================================================
// TESTS
// =============================================================================
