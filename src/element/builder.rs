// ============================================================================
// campfire - Element Builder
// Terse element construction rendered to HTML text
// ============================================================================

use std::fmt;

use super::spec::ElementSpec;
use crate::template::escape;

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

// =============================================================================
// ELEMENT PROPS
// =============================================================================

/// Optional extras for [`nu`].
///
/// ```
/// use campfire::ElementProps;
///
/// let props = ElementProps::new()
///     .inner_html("<b>hi</b>")
///     .style("color", "red")
///     .attr("title", "greeting");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementProps {
    inner_html: Option<String>,
    style: Vec<(String, String)>,
    attrs: Vec<(String, String)>,
}

impl ElementProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup placed inside the element, unescaped.
    pub fn inner_html(mut self, html: impl Into<String>) -> Self {
        self.inner_html = Some(html.into());
        self
    }

    /// A CSS declaration, e.g. `("margin-top", "4px")`.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((property.into(), value.into()));
        self
    }

    /// An attribute, applied after the spec string (so `id` and `class` here
    /// win over the spec).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }
}

// =============================================================================
// ELEMENT
// =============================================================================

/// An element description. `Display` renders it as HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    inner_html: String,
    style: Vec<(String, String)>,
    attrs: Vec<(String, String)>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            inner_html: String::new(),
            style: Vec::new(),
            attrs: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class unless already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() && !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Set a CSS declaration, replacing an earlier value for `property`.
    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        upsert(&mut self.style, property.into(), value.into());
    }

    /// Attribute value; `id` and `class` read the element's id and classes.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.clone(),
            "class" if self.classes.is_empty() => None,
            "class" => Some(self.classes.join(" ")),
            _ => self
                .attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone()),
        }
    }

    /// Set an attribute. `id` replaces the id, `class` replaces every class.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match name.as_str() {
            "id" => self.id = Some(value),
            "class" => {
                self.classes.clear();
                for class in value.split_whitespace() {
                    self.add_class(class);
                }
            }
            _ => upsert(&mut self.attrs, name, value),
        }
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.to_ascii_lowercase().as_str())
    }

    /// Render as HTML; same as `to_string()`.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

fn upsert(pairs: &mut Vec<(String, String)>, key: String, value: String) {
    match pairs.iter_mut().find(|(k, _)| *k == key) {
        Some((_, existing)) => *existing = value,
        None => pairs.push((key, value)),
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(f, " id=\"{}\"", escape(id))?;
        }
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape(&self.classes.join(" ")))?;
        }
        if !self.style.is_empty() {
            let css: Vec<String> = self
                .style
                .iter()
                .map(|(p, v)| format!("{p}: {v};"))
                .collect();
            write!(f, " style=\"{}\"", escape(&css.join(" ")))?;
        }
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape(value))?;
        }
        if self.is_void() {
            return f.write_str(">");
        }
        write!(f, ">{}</{}>", self.inner_html, self.tag)
    }
}

// =============================================================================
// NU
// =============================================================================

/// Build an element from a `tag#id.class1.class2` spec string plus extras.
///
/// An empty tag means `div`.
///
/// ```
/// use campfire::{nu, ElementProps};
///
/// let card = nu("section#intro.card.wide", ElementProps::new().inner_html("Hello"));
/// assert_eq!(
///     card.to_string(),
///     r#"<section id="intro" class="card wide">Hello</section>"#
/// );
///
/// assert_eq!(nu("", ElementProps::default()).to_string(), "<div></div>");
/// ```
pub fn nu(spec: &str, props: ElementProps) -> Element {
    let spec = ElementSpec::parse(spec);
    let mut element = Element::new(spec.tag_or_default());
    element.id = spec.id;
    for class in spec.classes {
        element.add_class(class);
    }

    if let Some(html) = props.inner_html {
        element.inner_html = html;
    }
    for (property, value) in props.style {
        element.set_style(property, value);
    }
    for (name, value) in props.attrs {
        element.set_attribute(name, value);
    }
    element
}

// =============================================================================
// TESTS
// =============================================================================
