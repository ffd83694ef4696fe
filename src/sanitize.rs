//! HTML Sanitizer
//!
//! Reduces provider rich text to a small allow-list of tags and attributes
//! before it is handed to the front-end for rendering.

use scraper::{ElementRef, Html, Node};

/// Tags kept in sanitized output.
pub const ALLOWED_TAGS: [&str; 9] = ["p", "b", "i", "em", "strong", "a", "ul", "li", "br"];

/// Attributes kept on allowed tags, in output order.
pub const ALLOWED_ATTRIBUTES: [&str; 3] = ["href", "target", "rel"];

/// Elements removed together with everything inside them.
const DROPPED_WITH_CONTENT: [&str; 12] = [
    "script", "style", "iframe", "object", "embed", "noscript", "template", "svg", "math",
    "textarea", "select", "title",
];

const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

// == Sanitize ==
/// Returns `raw` with every tag outside the allow-list removed.
///
/// Disallowed wrappers are unwrapped (their text survives), script-like
/// elements are dropped whole, and `href` values with a non-web scheme are
/// stripped.
pub fn sanitize_html(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    let mut out = String::with_capacity(raw.len());
    write_children(fragment.root_element(), &mut out);
    out
}

fn write_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&html_escape::encode_text(&**text)),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    write_element(child_element, out);
                }
            }
            _ => {}
        }
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();

    if DROPPED_WITH_CONTENT.contains(&name) {
        return;
    }
    if !ALLOWED_TAGS.contains(&name) {
        write_children(element, out);
        return;
    }

    out.push('<');
    out.push_str(name);
    for attr in ALLOWED_ATTRIBUTES {
        let Some(value) = element.value().attr(attr) else {
            continue;
        };
        if attr == "href" && !is_safe_url(value) {
            continue;
        }
        out.push(' ');
        out.push_str(attr);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    if name == "br" {
        return;
    }
    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Relative URLs and web schemes are safe; anything else (javascript:,
/// data:, vbscript:) is not.
fn is_safe_url(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    let scheme_end = compact.find(':');
    let path_start = compact.find(['/', '?', '#']);
    match (scheme_end, path_start) {
        (Some(colon), Some(slash)) if slash < colon => true,
        (Some(colon), _) => SAFE_SCHEMES.contains(&&compact[..colon]),
        (None, _) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_markup_passes_through() {
        assert_eq!(
            sanitize_html("<p>Hello <b>bold</b> <em>world</em></p>"),
            "<p>Hello <b>bold</b> <em>world</em></p>"
        );
        assert_eq!(
            sanitize_html("<ul><li>one</li><li>two</li></ul>"),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn test_disallowed_wrappers_are_unwrapped() {
        assert_eq!(
            sanitize_html("<div><h3>Title</h3><p>Body</p></div>"),
            "Title<p>Body</p>"
        );
    }

    #[test]
    fn test_script_removed_with_content() {
        assert_eq!(
            sanitize_html("<script>alert('x')</script><p>ok</p><style>p{}</style>"),
            "<p>ok</p>"
        );
    }

    #[test]
    fn test_event_handlers_stripped() {
        assert_eq!(
            sanitize_html("<p onclick=\"steal()\" class=\"x\">text</p>"),
            "<p>text</p>"
        );
    }

    #[test]
    fn test_link_attributes() {
        assert_eq!(
            sanitize_html(
                "<a rel=\"noopener\" href=\"https://example.com/?a=1&amp;b=2\" target=\"_blank\">site</a>"
            ),
            "<a href=\"https://example.com/?a=1&amp;b=2\" target=\"_blank\" rel=\"noopener\">site</a>"
        );
    }

    #[test]
    fn test_unsafe_href_dropped() {
        assert_eq!(
            sanitize_html("<a href=\"javascript:alert(1)\">x</a>"),
            "<a>x</a>"
        );
        assert_eq!(
            sanitize_html("<a href=\" JaVa\tScript:alert(1)\">x</a>"),
            "<a>x</a>"
        );
        assert_eq!(
            sanitize_html("<a href=\"/games/42?tab=about\">x</a>"),
            "<a href=\"/games/42?tab=about\">x</a>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(sanitize_html("1 &lt; 2 &amp; 3"), "1 &lt; 2 &amp; 3");
        assert_eq!(sanitize_html("line<br>break"), "line<br>break");
    }

    #[test]
    fn test_comments_dropped() {
        assert_eq!(sanitize_html("<p>a<!-- hidden -->b</p>"), "<p>ab</p>");
    }

    #[test]
    fn test_url_safety() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("mailto:someone@example.com"));
        assert!(is_safe_url("relative/path:with-colon"));
        assert!(!is_safe_url("data:text/html;base64,AAAA"));
        assert!(!is_safe_url("vbscript:msgbox"));
    }
}
