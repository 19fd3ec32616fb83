//! What the controller needs from the page it drives.
//!
//! The page shell owns the actual drawing surface. The controller only ever calls these
//! methods, which keeps routing, search and sidebar logic testable without a terminal.

use crate::navigation::Navigation;
use crate::panels::Panel;

/// Insertion points for navigation, content and location.
pub trait RenderTarget {
    /// Replaces the navigation list wholesale.
    fn render_navigation(&mut self, nav: &Navigation);
    /// Replaces every content panel wholesale.
    fn render_panels(&mut self, panels: &[Panel]);
    /// Marks one panel visible, or none.
    fn set_active_panel(&mut self, id: Option<&str>);
    /// Marks one navigation entry active, or none.
    fn set_active_nav_entry(&mut self, id: Option<&str>);
    /// Writes `#<id>` into the location.
    fn write_fragment(&mut self, id: &str);
    /// Scrolls the content viewport back to its top.
    fn reset_content_scroll(&mut self);
    /// Shows or hides the back-to-top affordance.
    fn set_back_to_top_visible(&mut self, visible: bool);
}

/// Visible effects of the sidebar state machine.
pub trait SidebarSurface {
    /// Adds or removes the sidebar's open class.
    fn set_sidebar_open(&mut self, open: bool);
    /// Shows or hides the overlay behind the sidebar.
    fn set_overlay_active(&mut self, active: bool);
    /// Swaps the glyph on the menu trigger.
    fn set_menu_glyph(&mut self, glyph: MenuGlyph);
    /// Hides or restores the menu trigger.
    fn set_trigger_hidden(&mut self, hidden: bool);
    /// Locks or unlocks page scrolling.
    fn set_scroll_locked(&mut self, locked: bool);
    /// Moves keyboard focus.
    fn focus(&mut self, target: Focus);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Glyph shown on the menu trigger.
pub enum MenuGlyph {
    /// Hamburger, sidebar closed.
    Menu,
    /// Cross, sidebar open.
    Close,
}

impl MenuGlyph {
    #[must_use]
    /// Character drawn for this glyph.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Menu => "☰",
            Self::Close => "×",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Element holding keyboard focus.
pub enum Focus {
    /// The button that toggles the sidebar.
    MenuTrigger,
    /// The search box at the top of the sidebar.
    SearchInput,
    /// A navigation entry, by its slot in the current navigation.
    NavEntry(usize),
    /// The content viewport.
    Content,
}

impl Focus {
    #[must_use]
    /// Whether the element lives inside the sidebar.
    pub fn in_sidebar(self) -> bool {
        matches!(self, Self::SearchInput | Self::NavEntry(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where a pointer click landed, as the shell hit-tests it.
pub enum ClickTarget {
    /// Inside the sidebar but not on an entry.
    Sidebar,
    /// On the menu trigger.
    Trigger,
    /// On the overlay covering the page.
    Overlay,
    /// Anywhere else on the page.
    Content,
}
