use super::{
    classify_swipe, SidebarController, SidebarSettings, SidebarState, Swipe, TouchPoint, Viewport,
};
use crate::recording::{Recording, SidebarLook};
use crate::target::{ClickTarget, Focus, MenuGlyph};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

const NARROW: Viewport = Viewport { width: 375 };
const WIDE: Viewport = Viewport { width: 1280 };

fn sidebar() -> SidebarController {
    SidebarController::new(SidebarSettings::default())
}

fn swipe(
    sidebar: &mut SidebarController,
    from: (f64, f64),
    to: (f64, f64),
    surface: &mut Recording,
) -> bool {
    sidebar.touch_start(TouchPoint::new(from.0, from.1));
    sidebar.touch_end(TouchPoint::new(to.0, to.1), NARROW, Instant::now(), surface)
}

#[test]
fn test_starts_closed() {
    let sidebar = sidebar();
    assert_eq!(sidebar.state(), SidebarState::Closed);
    assert!(sidebar.pending_focus().is_none());
}

#[test]
fn test_breakpoint_is_inclusive() {
    let sidebar = sidebar();
    assert!(sidebar.is_narrow(Viewport { width: 768 }));
    assert!(!sidebar.is_narrow(Viewport { width: 769 }));
}

#[test]
fn test_open_on_narrow_applies_all_effects() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    let now = Instant::now();

    assert!(sidebar.open(NARROW, now, &mut surface));
    assert_eq!(
        surface.sidebar,
        SidebarLook {
            open: true,
            overlay: true,
            glyph: MenuGlyph::Close,
            trigger_hidden: true,
            scroll_locked: true,
        }
    );
    let transfer = sidebar.pending_focus().unwrap();
    assert_eq!(transfer.target, Focus::SearchInput);
    assert_eq!(transfer.due, now + Duration::from_millis(300));
}

#[test]
fn test_huge_focus_delay_fires_immediately() {
    let mut sidebar = SidebarController::new(SidebarSettings {
        focus_delay: Duration::MAX,
        ..SidebarSettings::default()
    });
    let mut surface = Recording::default();
    let now = Instant::now();

    assert!(sidebar.open(NARROW, now, &mut surface));
    assert_eq!(sidebar.pending_focus().unwrap().due, now);
    assert_eq!(sidebar.tick(now, &mut surface), Some(Focus::SearchInput));
}

#[test]
fn test_open_on_wide_leaves_trigger_and_scroll_alone() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();

    sidebar.open(WIDE, Instant::now(), &mut surface);
    assert!(surface.sidebar.open);
    assert!(surface.sidebar.overlay);
    assert!(!surface.sidebar.trigger_hidden);
    assert!(!surface.sidebar.scroll_locked);
}

#[test]
fn test_open_close_round_trip_restores_look() {
    for viewport in [NARROW, WIDE] {
        let mut sidebar = sidebar();
        let mut surface = Recording::default();
        let before = surface.sidebar.clone();

        sidebar.open(viewport, Instant::now(), &mut surface);
        sidebar.close(viewport, Instant::now(), &mut surface);
        assert_eq!(surface.sidebar, before);
    }
}

#[test]
fn test_open_and_close_are_idempotent() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    let now = Instant::now();

    assert!(sidebar.open(NARROW, now, &mut surface));
    let pending = sidebar.pending_focus();
    assert!(!sidebar.open(NARROW, now + Duration::from_millis(100), &mut surface));
    assert_eq!(sidebar.pending_focus(), pending);

    assert!(sidebar.close(NARROW, now, &mut surface));
    assert!(!sidebar.close(NARROW, now, &mut surface));
    assert_eq!(sidebar.state(), SidebarState::Closed);
}

#[test]
fn test_toggle_flips_state() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    sidebar.toggle(NARROW, Instant::now(), &mut surface);
    assert!(sidebar.is_open());
    sidebar.toggle(NARROW, Instant::now(), &mut surface);
    assert!(!sidebar.is_open());
}

#[test]
fn test_close_on_narrow_returns_focus_to_trigger() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    let now = Instant::now();
    sidebar.open(NARROW, now, &mut surface);

    sidebar.close(NARROW, now, &mut surface);
    assert_eq!(sidebar.pending_focus().unwrap().target, Focus::MenuTrigger);

    assert_eq!(sidebar.tick(now, &mut surface), None);
    assert_eq!(
        sidebar.tick(now + Duration::from_millis(300), &mut surface),
        Some(Focus::MenuTrigger)
    );
    assert_eq!(surface.focused, Some(Focus::MenuTrigger));
    assert!(sidebar.pending_focus().is_none());
}

#[test]
fn test_later_transition_cancels_pending_focus() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    let now = Instant::now();

    sidebar.open(NARROW, now, &mut surface);
    sidebar.close(WIDE, now, &mut surface);
    assert!(sidebar.pending_focus().is_none());
    assert_eq!(sidebar.tick(now + Duration::from_secs(1), &mut surface), None);
    assert_eq!(surface.focused, None);
}

#[test]
fn test_escape_closes_at_any_width() {
    for viewport in [NARROW, WIDE] {
        let mut sidebar = sidebar();
        let mut surface = Recording::default();
        sidebar.open(viewport, Instant::now(), &mut surface);
        assert!(sidebar.on_escape(viewport, Instant::now(), &mut surface));
        assert!(!sidebar.is_open());
    }
}

#[test]
fn test_outside_click_closes_only_when_narrow() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    let now = Instant::now();

    sidebar.open(WIDE, now, &mut surface);
    assert!(!sidebar.on_click(ClickTarget::Content, WIDE, now, &mut surface));
    assert!(sidebar.is_open());

    assert!(!sidebar.on_click(ClickTarget::Sidebar, NARROW, now, &mut surface));
    assert!(sidebar.is_open());

    assert!(sidebar.on_click(ClickTarget::Overlay, NARROW, now, &mut surface));
    assert!(!sidebar.is_open());
}

#[test]
fn test_trigger_click_toggles() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    sidebar.on_click(ClickTarget::Trigger, NARROW, Instant::now(), &mut surface);
    assert!(sidebar.is_open());
    sidebar.on_click(ClickTarget::Trigger, NARROW, Instant::now(), &mut surface);
    assert!(!sidebar.is_open());
}

#[test]
fn test_resize_to_wide_closes_and_shows_trigger() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    sidebar.open(NARROW, Instant::now(), &mut surface);
    assert!(surface.sidebar.trigger_hidden);

    assert!(sidebar.on_resize(WIDE, Instant::now(), &mut surface));
    assert!(!sidebar.is_open());
    assert_eq!(surface.sidebar, SidebarLook::default());

    // Repeated resize events are harmless.
    assert!(!sidebar.on_resize(WIDE, Instant::now(), &mut surface));
    assert_eq!(surface.sidebar, SidebarLook::default());
}

#[test]
fn test_resize_within_narrow_keeps_open_sidebar() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    sidebar.open(NARROW, Instant::now(), &mut surface);

    assert!(!sidebar.on_resize(Viewport { width: 600 }, Instant::now(), &mut surface));
    assert!(sidebar.is_open());
    assert!(surface.sidebar.trigger_hidden);
}

#[test]
fn test_classify_swipe() {
    let p = TouchPoint::new;
    assert_eq!(
        classify_swipe(p(10.0, 0.0), p(120.0, 5.0), 50.0),
        Some(Swipe::Right { start_x: 10.0 })
    );
    assert_eq!(
        classify_swipe(p(500.0, 0.0), p(400.0, 5.0), 50.0),
        Some(Swipe::Left)
    );
    assert_eq!(classify_swipe(p(10.0, 0.0), p(40.0, 5.0), 50.0), None);
    assert_eq!(classify_swipe(p(10.0, 0.0), p(80.0, 200.0), 50.0), None);
    assert_eq!(classify_swipe(p(10.0, 0.0), p(60.0, 0.0), 50.0), None);
}

#[test]
fn test_swipe_right_from_edge_opens() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    assert!(swipe(&mut sidebar, (10.0, 0.0), (120.0, 5.0), &mut surface));
    assert!(sidebar.is_open());
}

#[test]
fn test_swipe_right_away_from_edge_is_ignored() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    assert!(!swipe(&mut sidebar, (60.0, 0.0), (300.0, 5.0), &mut surface));
    assert!(!sidebar.is_open());
}

#[test]
fn test_swipe_left_closes() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    sidebar.open(NARROW, Instant::now(), &mut surface);

    assert!(swipe(&mut sidebar, (500.0, 0.0), (400.0, 5.0), &mut surface));
    assert!(!sidebar.is_open());
}

#[test]
fn test_short_swipe_does_nothing() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    assert!(!swipe(&mut sidebar, (10.0, 0.0), (40.0, 5.0), &mut surface));
    assert!(!sidebar.is_open());
    assert_eq!(surface.sidebar, SidebarLook::default());
}

#[test]
fn test_touch_end_without_start_is_ignored() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    let end = TouchPoint::new(200.0, 0.0);
    assert!(!sidebar.touch_end(end, NARROW, Instant::now(), &mut surface));

    // The start is consumed by the first end.
    assert!(swipe(&mut sidebar, (5.0, 0.0), (200.0, 0.0), &mut surface));
    assert!(!sidebar.touch_end(end, NARROW, Instant::now(), &mut surface));
}

#[test]
fn test_focus_trap_wraps_when_open_and_narrow() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    let ring = [Focus::SearchInput, Focus::NavEntry(0), Focus::NavEntry(1)];
    sidebar.open(NARROW, Instant::now(), &mut surface);

    assert_eq!(
        sidebar.trap_tab(NARROW, Focus::NavEntry(1), &ring, false),
        Some(Focus::SearchInput)
    );
    assert_eq!(
        sidebar.trap_tab(NARROW, Focus::SearchInput, &ring, true),
        Some(Focus::NavEntry(1))
    );
    assert_eq!(sidebar.trap_tab(NARROW, Focus::NavEntry(0), &ring, false), None);
    assert_eq!(
        sidebar.trap_tab(NARROW, Focus::Content, &ring, false),
        Some(Focus::SearchInput)
    );
}

#[test]
fn test_no_focus_trap_when_wide_or_closed() {
    let mut sidebar = sidebar();
    let mut surface = Recording::default();
    let ring = [Focus::SearchInput, Focus::NavEntry(0)];

    assert_eq!(sidebar.trap_tab(NARROW, Focus::NavEntry(0), &ring, false), None);
    sidebar.open(WIDE, Instant::now(), &mut surface);
    assert_eq!(sidebar.trap_tab(WIDE, Focus::NavEntry(0), &ring, false), None);
}
