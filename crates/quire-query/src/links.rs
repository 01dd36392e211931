//! Helpers for feed and page consumers: canonical URLs and markup escaping.

/// Path segment under which posts are served.
const POST_PATH: &str = "/post/";

/// Builds the canonical absolute URL of a post: `base + "/post/" + slug`.
///
/// Trailing slashes on `base` are dropped so the result never contains `//post/`.
pub fn canonical_url(base: &str, slug: &str) -> String {
    let base = base.trim_end_matches('/');
    let mut url = String::with_capacity(base.len() + POST_PATH.len() + slug.len());
    url.push_str(base);
    url.push_str(POST_PATH);
    url.push_str(slug);
    url
}

/// Escapes text for embedding in XML or HTML.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_url() {
        assert_eq!(
            canonical_url("https://blog.example.com", "hello"),
            "https://blog.example.com/post/hello"
        );
        assert_eq!(
            canonical_url("https://blog.example.com/", "2024/recap"),
            "https://blog.example.com/post/2024/recap"
        );
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_markup(r#"Tom & Jerry's <"show">"#),
            "Tom &amp; Jerry&apos;s &lt;&quot;show&quot;&gt;"
        );
        assert_eq!(escape_markup("plain 中文"), "plain 中文");
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape_markup("&amp;"), "&amp;amp;");
    }
}
