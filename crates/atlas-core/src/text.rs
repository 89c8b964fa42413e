// crates/atlas-core/src/text.rs

//! Text helpers shared by the lookup and rendering code.

use std::borrow::Cow;

/// Convert a string into a folded key suitable for lookups.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Puducherry` stays, `Tamil Nādu` -> `Tamil Nadu`)
/// 2\) Collapse runs of whitespace into a single space and trim
/// 3\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use atlas_core::text::fold_key;
///
/// assert_eq!(fold_key("Tamil  Nādu "), "tamil nadu");
/// assert_eq!(fold_key("KERALA"), "kerala");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Compares two strings for equality after folding with [`fold_key`].
///
/// ```rust
/// use atlas_core::text::equals_folded;
///
/// assert!(equals_folded("Jammu & Kashmir", "jammu & kashmir"));
/// assert!(!equals_folded("Goa", "Kerala"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Escape the five markup-significant characters.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&quot;` and
/// `&#39;`. Input without any of them is returned borrowed.
///
/// ```rust
/// use atlas_core::text::escape_html;
///
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("Goa"), "Goa");
/// ```
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_every_significant_character() {
        assert_eq!(
            escape_html(r#"a&b<c>d"e'f"#),
            "a&amp;b&lt;c&gt;d&quot;e&#39;f"
        );
    }

    #[test]
    fn escaping_is_not_idempotent_on_entities() {
        // an already escaped string gets its ampersands escaped again
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_html("Tamil Nadu"), Cow::Borrowed(_)));
    }

    #[test]
    fn fold_key_handles_diacritics_and_spacing() {
        assert_eq!(fold_key("  Dādra   and Nagar Haveli "), "dadra and nagar haveli");
        assert!(equals_folded("ODISHA", "Odisha"));
    }
}
