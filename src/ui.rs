//! The UI renders the shell's state into a terminal frame.
//!
//! Wide terminals get a static sidebar beside the content. Narrow ones get the content alone,
//! with the sidebar sliding over it (and an overlay dimming the rest) while open.

use crate::markup::{DisplayLine, LineKind};
use crate::shell::{HitMap, TerminalShell};
use crate::target::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 32;

/// Draws the whole page and records hit regions on the shell.
pub fn draw(f: &mut Frame, shell: &mut TerminalShell, query: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Sidebar + content
            Constraint::Length(3), // Help / command line
        ])
        .split(f.area());

    let narrow = shell.is_narrow(f.area().width);
    let mut hits = HitMap::default();

    draw_header(f, shell, chunks[0], narrow, &mut hits);

    if narrow {
        draw_content(f, shell, chunks[1]);
        if shell.sidebar_open {
            let width = SIDEBAR_WIDTH.min(chunks[1].width);
            let sidebar = Rect { width, ..chunks[1] };
            if shell.overlay {
                let overlay = Rect {
                    x: sidebar.x + width,
                    width: chunks[1].width - width,
                    ..chunks[1]
                };
                f.render_widget(
                    Block::default().style(Style::default().add_modifier(Modifier::DIM)),
                    overlay,
                );
                hits.overlay = Some(overlay);
            }
            f.render_widget(Clear, sidebar);
            draw_sidebar(f, shell, sidebar, query, &mut hits);
        }
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);
        draw_sidebar(f, shell, body[0], query, &mut hits);
        draw_content(f, shell, body[1]);
    }

    draw_footer(f, shell, chunks[2]);
    shell.hits = hits;
}

fn draw_header(f: &mut Frame, shell: &TerminalShell, area: Rect, narrow: bool, hits: &mut HitMap) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = Vec::new();
    if narrow && !shell.trigger_hidden {
        let style = if shell.focus == Focus::MenuTrigger {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(format!(" {} ", shell.glyph.symbol()), style));
        spans.push(Span::raw(" "));
        hits.trigger = Some(Rect { width: 3, ..inner });
    }
    spans.push(Span::styled(
        "Documentation",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        format!("  {}", shell.fragment),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_sidebar(
    f: &mut Frame,
    shell: &TerminalShell,
    area: Rect,
    query: &str,
    hits: &mut HitMap,
) {
    hits.sidebar = Some(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let search_style = if shell.focus == Focus::SearchInput {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let search = Paragraph::new(query.to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(search_style)
            .title("Search (/)"),
    );
    f.render_widget(search, chunks[0]);
    hits.search = Some(chunks[0]);

    let block = Block::default().borders(Borders::ALL).title("Contents");
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    let mut lines = Vec::new();
    let mut rows: Vec<(usize, usize)> = Vec::new();
    let mut slot = 0;
    for group in &shell.nav.groups {
        lines.push(Line::from(Span::styled(
            group.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        if let Some(ref placeholder) = group.placeholder {
            lines.push(Line::from(Span::styled(
                format!("  {placeholder}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
        for entry in &group.entries {
            let mut style = Style::default();
            if shell.active_entry.as_deref() == Some(entry.id.as_str()) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if shell.focus == Focus::NavEntry(slot) {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            rows.push((lines.len(), slot));
            lines.push(Line::from(Span::styled(format!("  {}", entry.title), style)));
            if let Some(ref section) = entry.section_title {
                lines.push(Line::from(Span::styled(
                    format!("    {section}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            slot += 1;
        }
    }

    // Keep the focused entry on screen.
    let height = usize::from(inner.height);
    let focused_row = match shell.focus {
        Focus::NavEntry(focused) => rows
            .iter()
            .find(|&&(_, s)| s == focused)
            .map_or(0, |&(row, _)| row),
        _ => 0,
    };
    let offset = (focused_row + 1).saturating_sub(height);

    for &(row, slot) in &rows {
        if row < offset || row - offset >= height {
            continue;
        }
        let y = inner.y + u16::try_from(row - offset).unwrap_or(u16::MAX);
        hits.entries.push((Rect { y, height: 1, ..inner }, slot));
    }

    let scroll = u16::try_from(offset).unwrap_or(u16::MAX);
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

fn draw_content(f: &mut Frame, shell: &mut TerminalShell, area: Rect) {
    let (title, lines) = match shell.active() {
        Some(panel) => (
            panel.title.clone(),
            panel.lines.iter().map(styled_line).collect::<Vec<_>>(),
        ),
        None => (String::new(), Vec::new()),
    };

    let border = if shell.focus == Focus::Content {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title);
    let inner = block.inner(area);
    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    if inner.width > 0 {
        shell.content_rows = content.line_count(inner.width);
    }
    f.render_widget(block, area);
    f.render_widget(content.scroll((shell.content_scroll, 0)), inner);
}

fn styled_line(line: &DisplayLine) -> Line<'static> {
    match line.kind {
        LineKind::Heading(1) => Line::from(Span::styled(
            line.text.to_uppercase(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        LineKind::Heading(_) => Line::from(Span::styled(
            line.text.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        LineKind::Bullet => Line::from(vec![Span::raw("  • "), Span::raw(line.text.clone())]),
        LineKind::Code => Line::from(Span::styled(
            format!("    {}", line.text),
            Style::default().fg(Color::Yellow),
        )),
        LineKind::Text => Line::from(line.text.clone()),
    }
}

fn draw_footer(f: &mut Frame, shell: &TerminalShell, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let text = if let Some(ref command) = shell.command {
        format!(":{command}")
    } else {
        let mut help = String::from(
            "/: Search | Tab: Focus | Enter: Open | m: Menu | :#id Go to | Esc: Close | q: Quit",
        );
        if shell.back_to_top {
            help.push_str(" | g: ↑ Top");
        }
        help
    };
    f.render_widget(Paragraph::new(text).block(block), area);
}
