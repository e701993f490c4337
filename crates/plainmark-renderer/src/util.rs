//! Shared utility functions for plain-text rendering.

use pulldown_cmark::HeadingLevel;

/// Escape HTML special characters.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entities in a single pass.
/// Entity expansions never contain `<`, `>`, `"` or `'`, so the result does not
/// depend on replacement order. Escaping is not idempotent: an already escaped
/// string gets its `&` escaped again.
///
/// # Examples
///
/// ```
/// use plainmark_renderer::escape_html;
///
/// assert_eq!(
///     escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///     "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
/// );
/// assert_eq!(escape_html("&amp;"), "&amp;amp;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
