// ============================================================================
// campfire - Element Spec Strings
// Parsing `tag#id.class1.class2`
// ============================================================================

use std::convert::Infallible;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Tag used when the spec string names none.
pub const DEFAULT_TAG: &str = "div";

static SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Za-z-]*)(?:#([0-9A-Za-z-]*))?((?:\.[0-9A-Za-z-]+)*)")
        .expect("element spec regex")
});

/// The parts of a `tag#id.class1.class2` string.
///
/// Every part is optional and any number of classes may follow. Parsing stops
/// at the first character that does not fit the pattern; the rest of the
/// string is ignored.
///
/// ```
/// use campfire::ElementSpec;
///
/// let spec = ElementSpec::parse("li#first.todo.done");
/// assert_eq!(spec.tag.as_deref(), Some("li"));
/// assert_eq!(spec.id.as_deref(), Some("first"));
/// assert_eq!(spec.classes, ["todo", "done"]);
///
/// assert_eq!(ElementSpec::parse(".card").tag_or_default(), "div");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl ElementSpec {
    pub fn parse(spec: &str) -> Self {
        let Some(caps) = SPEC.captures(spec.trim()) else {
            return Self::default();
        };
        let non_empty = |i: usize| {
            caps.get(i)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            tag: non_empty(1),
            id: non_empty(2),
            classes: caps
                .get(3)
                .map(|m| {
                    m.as_str()
                        .split('.')
                        .filter(|c| !c.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn tag_or_default(&self) -> &str {
        self.tag.as_deref().unwrap_or(DEFAULT_TAG)
    }
}

impl FromStr for ElementSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
