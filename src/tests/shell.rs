use super::{Hit, HitMap, TerminalShell};
use crate::config::Config;
use crate::controller::{DocsController, Event};
use crate::content::ContentStore;
use crate::recording::sample_store;
use crate::ui;
use crate::target::{ClickTarget, Focus};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::time::Instant;

fn shell() -> TerminalShell {
    TerminalShell::new(&Config::default())
}

#[test]
fn test_columns_convert_to_pixels() {
    let shell = shell();
    assert_eq!(shell.width_px(80), 640);
    assert!(shell.is_narrow(96));
    assert!(!shell.is_narrow(97));

    let point = shell.touch_point(1, 2);
    assert!((point.x - 12.0).abs() < f64::EPSILON);
    assert!((point.y - 40.0).abs() < f64::EPSILON);
}

#[test]
fn test_hit_test_prefers_entries_over_sidebar() {
    let mut shell = shell();
    shell.hits = HitMap {
        trigger: Some(Rect::new(1, 1, 3, 1)),
        search: Some(Rect::new(0, 3, 32, 3)),
        sidebar: Some(Rect::new(0, 3, 32, 20)),
        entries: vec![(Rect::new(1, 7, 30, 1), 0), (Rect::new(1, 9, 30, 1), 1)],
        overlay: Some(Rect::new(32, 3, 48, 20)),
    };

    assert_eq!(shell.hit_test(5, 9), Hit::Entry(1));
    assert_eq!(shell.hit_test(5, 4), Hit::Search);
    assert_eq!(shell.hit_test(2, 1), Hit::Region(ClickTarget::Trigger));
    assert_eq!(shell.hit_test(5, 8), Hit::Region(ClickTarget::Sidebar));
    assert_eq!(shell.hit_test(40, 10), Hit::Region(ClickTarget::Overlay));
    assert_eq!(shell.hit_test(40, 30), Hit::Region(ClickTarget::Content));
}

#[test]
fn test_controller_drives_shell() {
    let app = DocsController::new(sample_store(), shell(), 640, &Config::default(), Some("#faq"));
    let shell = app.target();

    assert_eq!(shell.fragment, "#faq");
    assert_eq!(shell.active().map(|p| p.id.as_str()), Some("faq"));
    assert_eq!(shell.active_entry.as_deref(), Some("faq"));
    assert_eq!(shell.panels.len(), 5);
    assert!(shell.panels[4].lines.is_empty());
}

#[test]
fn test_scroll_is_blocked_while_locked() {
    let mut app = DocsController::new(sample_store(), shell(), 640, &Config::default(), None);
    app.dispatch(Event::ToggleSidebar, Instant::now());

    assert!(app.target().scroll_locked);
    assert_eq!(app.target_mut().scroll_content(1), None);

    app.dispatch(Event::Escape, Instant::now());
    assert!(app.target_mut().scroll_content(1).is_some());
}

#[test]
fn test_scroll_is_clamped_to_panel() {
    let mut app = DocsController::new(sample_store(), shell(), 1280, &Config::default(), None);
    // Overview has a heading and a paragraph.
    assert_eq!(app.target_mut().scroll_content(10), Some(16));
    assert_eq!(app.target_mut().scroll_content(-10), Some(0));
}

#[test]
fn test_scroll_reaches_last_wrapped_row() {
    let paragraph = "lorem ipsum dolor sit amet ".repeat(20);
    let json = format!(
        r#"{{"sections": [{{"id": "long", "title": "Long", "content": "<p>{paragraph}</p>"}}]}}"#
    );
    let store = ContentStore::from_json(&json).unwrap();
    let mut app = DocsController::new(store, shell(), 960, &Config::default(), None);

    // One display line before anything is drawn.
    assert_eq!(app.target_mut().scroll_content(100), Some(0));

    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    terminal
        .draw(|f| ui::draw(f, app.target_mut(), ""))
        .unwrap();
    assert!(app.target().content_rows >= 7);

    let offset = app.target_mut().scroll_content(100).unwrap();
    let last_row = u32::try_from(app.target().content_rows - 1).unwrap();
    assert_eq!(offset, last_row * 16);
}

#[test]
fn test_tab_focus_reaches_shell() {
    let mut app = DocsController::new(sample_store(), shell(), 1280, &Config::default(), None);
    app.dispatch(Event::Tab { shift: false }, Instant::now());
    assert_eq!(app.target().focus, Focus::SearchInput);
}
