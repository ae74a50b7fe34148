//! HTML helper functions

/// Escape HTML special characters
///
/// `&` goes first so the entities produced by the later replacements are
/// not escaped a second time.
///
/// # Examples
/// ```ignore
/// html_escape("Tom & \"Jerry\"") // -> "Tom &amp; &quot;Jerry&quot;"
/// ```
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_all_five() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_html_escape_existing_entity() {
        // An entity in the input is text, so its ampersand is escaped once
        assert_eq!(html_escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_html_escape_plain() {
        assert_eq!(html_escape("Hello World"), "Hello World");
        assert_eq!(html_escape(""), "");
    }
}
