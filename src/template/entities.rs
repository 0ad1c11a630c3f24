// ============================================================================
// campfire - HTML Entities
// ============================================================================

use std::sync::LazyLock;

use regex::{Captures, Regex};

static CHARACTER_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:amp|lt|gt|quot|#0*(?:39|96));").expect("character reference regex")
});

/// Escape `&`, `<`, `>`, `"` and `'` as `&amp;`, `&lt;`, `&gt;`, `&quot;`
/// and `&#39;`.
///
/// ```
/// use campfire::escape;
///
/// assert_eq!(escape(r#"<a href="x">Tom & Jerry's</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Undo [`escape`].
///
/// Also turns `&#96;` and zero-padded forms such as `&#039;` into `'`. Any
/// other character reference is left untouched.
pub fn unescape(text: &str) -> String {
    CHARACTER_REFERENCE
        .replace_all(text, |caps: &Captures<'_>| match &caps[0] {
            "&amp;" => "&",
            "&lt;" => "<",
            "&gt;" => ">",
            "&quot;" => "\"",
            _ => "'",
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five() {
        assert_eq!(escape(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
    }

    #[test]
    fn empty_and_plain_text() {
        assert_eq!(escape(""), "");
        assert_eq!(unescape(""), "");
        assert_eq!(escape("plain ünïcode"), "plain ünïcode");
    }

    #[test]
    fn ampersand_is_escaped_once() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
        assert_eq!(unescape("&amp;amp;"), "&amp;");
    }

    #[test]
    fn unescape_backtick_and_padded_forms() {
        assert_eq!(unescape("&#96;&#039;&#0096;&#39;"), "''''");
    }

    #[test]
    fn unescape_leaves_other_references() {
        assert_eq!(unescape("&nbsp;&#40;&copy;"), "&nbsp;&#40;&copy;");
    }

    #[test]
    fn unescape_reverses_escape() {
        let text = r#"<p class="x">it's 1 < 2 && 3 > 2</p>"#;
        assert_eq!(unescape(&escape(text)), text);
    }
}
