//! The terminal page shell.
//!
//! [`TerminalShell`] is what the controller renders into when running interactively. It
//! keeps the last navigation, the panels pre-split into display lines, and the sidebar's
//! visible effects, and [`crate::ui`] draws from it. Drawing records where things landed so
//! mouse input can be hit-tested against the frame the user actually saw.

use crate::config::Config;
use crate::markup::{display_lines, DisplayLine};
use crate::navigation::Navigation;
use crate::panels::Panel;
use crate::sidebar::TouchPoint;
use crate::target::{ClickTarget, Focus, MenuGlyph, RenderTarget, SidebarSurface};
use ratatui::layout::{Position, Rect};

#[derive(Clone, Debug)]
/// A panel ready for drawing.
pub struct PanelView {
    /// Leaf id.
    pub id: String,
    /// Leaf title.
    pub title: String,
    /// Content split into styled lines.
    pub lines: Vec<DisplayLine>,
}

#[derive(Clone, Debug, Default)]
/// Screen regions from the last draw.
pub struct HitMap {
    /// The menu trigger, when drawn.
    pub trigger: Option<Rect>,
    /// The search box, when drawn.
    pub search: Option<Rect>,
    /// The sidebar, when drawn.
    pub sidebar: Option<Rect>,
    /// One row per visible navigation entry, with its slot.
    pub entries: Vec<(Rect, usize)>,
    /// The overlay, when drawn.
    pub overlay: Option<Rect>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a pointer position resolves to.
pub enum Hit {
    /// A navigation entry by slot.
    Entry(usize),
    /// The search box.
    Search,
    /// Some other page region.
    Region(ClickTarget),
}

#[derive(Debug)]
/// Render target backed by a ratatui frame.
pub struct TerminalShell {
    /// Navigation as last rendered.
    pub nav: Navigation,
    /// Every panel, in tree order.
    pub panels: Vec<PanelView>,
    /// Visible panel.
    pub active_panel: Option<String>,
    /// Highlighted entry.
    pub active_entry: Option<String>,
    /// Location fragment, including the `#`.
    pub fragment: String,
    /// Content scroll offset in rows.
    pub content_scroll: u16,
    /// Rows the visible panel occupies once wrapped, as of the last draw.
    pub content_rows: usize,
    /// Whether the back-to-top hint shows.
    pub back_to_top: bool,
    /// Sidebar open class.
    pub sidebar_open: bool,
    /// Overlay active class.
    pub overlay: bool,
    /// Menu trigger glyph.
    pub glyph: MenuGlyph,
    /// Menu trigger hidden class.
    pub trigger_hidden: bool,
    /// Page scroll lock.
    pub scroll_locked: bool,
    /// Element holding focus.
    pub focus: Focus,
    /// Text in the search box.
    pub search_text: String,
    /// Command line buffer while `:` is active.
    pub command: Option<String>,
    /// Regions from the last draw.
    pub hits: HitMap,
    breakpoint_px: u32,
    cell_width_px: u32,
    cell_height_px: u32,
}

impl TerminalShell {
    #[must_use]
    /// Empty shell using the configured cell size and breakpoint.
    pub fn new(config: &Config) -> Self {
        Self {
            nav: Navigation::default(),
            panels: Vec::new(),
            active_panel: None,
            active_entry: None,
            fragment: String::new(),
            content_scroll: 0,
            content_rows: 0,
            back_to_top: false,
            sidebar_open: false,
            overlay: false,
            glyph: MenuGlyph::Menu,
            trigger_hidden: false,
            scroll_locked: false,
            focus: Focus::Content,
            search_text: String::new(),
            command: None,
            hits: HitMap::default(),
            breakpoint_px: config.breakpoint_px,
            cell_width_px: config.cell_width_px.max(1),
            cell_height_px: config.cell_height_px.max(1),
        }
    }

    #[must_use]
    /// Terminal width in columns expressed in pixels.
    pub fn width_px(&self, columns: u16) -> u32 {
        u32::from(columns) * self.cell_width_px
    }

    #[must_use]
    /// Whether a terminal this many columns wide counts as a narrow viewport.
    pub fn is_narrow(&self, columns: u16) -> bool {
        self.width_px(columns) <= self.breakpoint_px
    }

    #[must_use]
    /// Centre of a cell in pixels, used as a touch position.
    pub fn touch_point(&self, column: u16, row: u16) -> TouchPoint {
        let x = u32::from(column) * self.cell_width_px + self.cell_width_px / 2;
        let y = u32::from(row) * self.cell_height_px + self.cell_height_px / 2;
        TouchPoint::new(f64::from(x), f64::from(y))
    }

    #[must_use]
    /// The visible panel.
    pub fn active(&self) -> Option<&PanelView> {
        let id = self.active_panel.as_deref()?;
        self.panels.iter().find(|panel| panel.id == id)
    }

    /// Scrolls the content by `delta` rows and returns the new offset in pixels.
    ///
    /// The offset is clamped to the wrapped height recorded by the last draw. Returns `None`
    /// while page scroll is locked.
    pub fn scroll_content(&mut self, delta: i32) -> Option<u32> {
        if self.scroll_locked {
            return None;
        }
        let max = i32::try_from(self.content_rows.saturating_sub(1)).unwrap_or(i32::MAX);
        let next = (i32::from(self.content_scroll) + delta).clamp(0, max);
        self.content_scroll = u16::try_from(next).unwrap_or(u16::MAX);
        Some(u32::from(self.content_scroll) * self.cell_height_px)
    }

    #[must_use]
    /// Resolves a pointer position against the last draw.
    pub fn hit_test(&self, column: u16, row: u16) -> Hit {
        let at = Position::new(column, row);
        if let Some(&(_, slot)) = self.hits.entries.iter().find(|(rect, _)| rect.contains(at)) {
            return Hit::Entry(slot);
        }
        if self.hits.search.is_some_and(|rect| rect.contains(at)) {
            return Hit::Search;
        }
        if self.hits.trigger.is_some_and(|rect| rect.contains(at)) {
            return Hit::Region(ClickTarget::Trigger);
        }
        if self.hits.sidebar.is_some_and(|rect| rect.contains(at)) {
            return Hit::Region(ClickTarget::Sidebar);
        }
        if self.hits.overlay.is_some_and(|rect| rect.contains(at)) {
            return Hit::Region(ClickTarget::Overlay);
        }
        Hit::Region(ClickTarget::Content)
    }
}

impl RenderTarget for TerminalShell {
    fn render_navigation(&mut self, nav: &Navigation) {
        self.nav = nav.clone();
        self.active_entry = None;
    }

    fn render_panels(&mut self, panels: &[Panel]) {
        self.panels = panels
            .iter()
            .map(|panel| PanelView {
                id: panel.id.clone(),
                title: panel.title.clone(),
                lines: display_lines(&panel.content),
            })
            .collect();
        self.active_panel = None;
    }

    fn set_active_panel(&mut self, id: Option<&str>) {
        self.active_panel = id.map(str::to_string);
        // Unwrapped until the next draw measures it.
        self.content_rows = self.active().map_or(0, |panel| panel.lines.len());
    }

    fn set_active_nav_entry(&mut self, id: Option<&str>) {
        self.active_entry = id.map(str::to_string);
    }

    fn write_fragment(&mut self, id: &str) {
        self.fragment = format!("#{id}");
    }

    fn reset_content_scroll(&mut self) {
        self.content_scroll = 0;
    }

    fn set_back_to_top_visible(&mut self, visible: bool) {
        self.back_to_top = visible;
    }
}

impl SidebarSurface for TerminalShell {
    fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    fn set_overlay_active(&mut self, active: bool) {
        self.overlay = active;
    }

    fn set_menu_glyph(&mut self, glyph: MenuGlyph) {
        self.glyph = glyph;
    }

    fn set_trigger_hidden(&mut self, hidden: bool) {
        self.trigger_hidden = hidden;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn focus(&mut self, target: Focus) {
        self.focus = target;
    }
}

#[cfg(test)]
#[path = "tests/shell.rs"]
mod tests;
