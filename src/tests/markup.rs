use super::{decode_entities, display_lines, strip_markup, DisplayLine, LineKind};
use pretty_assertions::assert_eq;

fn line(kind: LineKind, text: &str) -> DisplayLine {
    DisplayLine {
        kind,
        text: text.to_string(),
    }
}

#[test]
fn test_strip_removes_tags_and_keeps_text() {
    assert_eq!(
        strip_markup("<p>Replace the <strong>launcher</strong> icon</p>"),
        "Replace the launcher icon"
    );
}

#[test]
fn test_strip_handles_attributes_and_multiline_tags() {
    let html = "<a href=\"https://example.com\"\n   target=\"_blank\">link</a>";
    assert_eq!(strip_markup(html), "link");
}

#[test]
fn test_strip_decodes_entities_after_removing_tags() {
    // Escaped markup is text, not a tag.
    assert_eq!(
        strip_markup("<code>&lt;key&gt;Name&lt;/key&gt;</code>"),
        "<key>Name</key>"
    );
}

#[test]
fn test_decode_numeric_and_unknown_entities() {
    assert_eq!(decode_entities("&#65;&#x42;&amp;"), "AB&");
    assert_eq!(decode_entities("&bogus;"), "&bogus;");
}

#[test]
fn test_display_lines_blocks() {
    let html = "<h1>Shop</h1>\n<p>First   paragraph\n  wraps.</p>\n<ul><li>One</li><li>Two</li></ul><h3>More</h3>";
    assert_eq!(
        display_lines(html),
        vec![
            line(LineKind::Heading(1), "Shop"),
            line(LineKind::Text, "First paragraph wraps."),
            line(LineKind::Text, ""),
            line(LineKind::Bullet, "One"),
            line(LineKind::Bullet, "Two"),
            line(LineKind::Text, ""),
            line(LineKind::Heading(3), "More"),
        ]
    );
}

#[test]
fn test_display_lines_keep_preformatted_lines() {
    let html = "<pre><code>fn main() {\n    run();\n}</code></pre><p>After</p>";
    assert_eq!(
        display_lines(html),
        vec![
            line(LineKind::Code, "fn main() {"),
            line(LineKind::Code, "    run();"),
            line(LineKind::Code, "}"),
            line(LineKind::Text, ""),
            line(LineKind::Text, "After"),
        ]
    );
}

#[test]
fn test_display_lines_of_empty_body() {
    assert!(display_lines("").is_empty());
    assert!(display_lines("<p>  </p>").is_empty());
}
