//! Markup handling for opaque content bodies.
//!
//! Content arrives as HTML fragments. The index only needs the text with tags removed and
//! entities decoded; the terminal shell needs that text broken into styled lines.

use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").unwrap());

static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(/?)(h[1-6]|p|li|ul|ol|pre|div|br|tr|table|blockquote)\b[^>]*>").unwrap()
});

/// Removes every tag and decodes character entities, keeping the text between them.
#[must_use]
pub fn strip_markup(markup: &str) -> String {
    decode_entities(&TAG_RE.replace_all(markup, ""))
}

/// Decodes named and numeric character references; unknown ones are left as written.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures| {
            let name = &caps[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => name
                    .strip_prefix("#x")
                    .or_else(|| name.strip_prefix("#X"))
                    .map(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| name.strip_prefix('#').map(|dec| dec.parse().ok()))
                    .flatten()
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a display line should be styled.
pub enum LineKind {
    /// Heading with its level (1 to 6).
    Heading(u8),
    /// Running text.
    Text,
    /// List item.
    Bullet,
    /// Preformatted code.
    Code,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One line of a panel as the terminal shell draws it.
pub struct DisplayLine {
    /// Styling hint.
    pub kind: LineKind,
    /// Plain text with tags removed.
    pub text: String,
}

/// Breaks markup into block-level display lines.
///
/// Whitespace is collapsed outside `<pre>`; inside it line breaks are kept verbatim.
#[must_use]
pub fn display_lines(markup: &str) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    let mut kind = LineKind::Text;
    let mut in_pre = false;
    let mut cursor = 0;

    for caps in BLOCK_RE.captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        push_text(&mut lines, &markup[cursor..whole.start()], kind, in_pre);
        cursor = whole.end();

        let closing = !caps[1].is_empty();
        let tag = caps[2].to_ascii_lowercase();
        match (tag.as_str(), closing) {
            ("pre", false) => in_pre = true,
            ("pre", true) => {
                in_pre = false;
                lines.push(blank());
            }
            (h, false) if h.starts_with('h') && h.len() == 2 => {
                kind = LineKind::Heading(h[1..].parse().unwrap_or(1));
            }
            ("li", false) => kind = LineKind::Bullet,
            ("p" | "ul" | "ol" | "table" | "blockquote", true) => {
                kind = LineKind::Text;
                lines.push(blank());
            }
            (_, true) => kind = LineKind::Text,
            _ => {}
        }
    }
    push_text(&mut lines, &markup[cursor..], kind, in_pre);

    // Drop the blank runs the block boundaries leave behind.
    lines.dedup_by(|b, a| a.text.is_empty() && b.text.is_empty());
    while lines.first().is_some_and(|l| l.text.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.text.is_empty()) {
        lines.pop();
    }
    lines
}

fn push_text(lines: &mut Vec<DisplayLine>, fragment: &str, kind: LineKind, in_pre: bool) {
    let text = strip_markup(fragment);
    if in_pre {
        let text = text.trim_matches('\n');
        for line in text.lines() {
            lines.push(DisplayLine {
                kind: LineKind::Code,
                text: line.to_string(),
            });
        }
        return;
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        lines.push(DisplayLine {
            kind,
            text: collapsed,
        });
    }
}

fn blank() -> DisplayLine {
    DisplayLine {
        kind: LineKind::Text,
        text: String::new(),
    }
}

#[cfg(test)]
#[path = "tests/markup.rs"]
mod tests;
