//! The documentation controller: one object owning routing, search and the sidebar.
//!
//! A page shell constructs a [`DocsController`] once, feeds it every input as an [`Event`],
//! and calls [`DocsController::tick`] regularly so deferred focus moves can fire. Each event
//! runs to completion before the next one, so the shell always observes a consistent
//! snapshot. The controller holds the render target and never reaches for global state.

use crate::config::Config;
use crate::content::ContentStore;
use crate::index::SearchIndex;
use crate::navigation::NavigationRenderer;
use crate::panels::ContentRenderer;
use crate::router::Router;
use crate::search::SearchEngine;
use crate::sidebar::{SidebarController, TouchPoint, Viewport};
use crate::target::{ClickTarget, Focus, RenderTarget, SidebarSurface};
use std::time::Instant;

#[derive(Clone, Debug, PartialEq)]
/// Input delivered by the page shell.
pub enum Event {
    /// The navigation entry drawn at this slot was clicked.
    NavActivated(usize),
    /// The location fragment changed, with or without a leading `#`.
    FragmentChanged(String),
    /// The search box now holds this text.
    Search(String),
    /// A pointer click somewhere other than a navigation entry.
    Click(ClickTarget),
    /// The menu trigger was activated.
    ToggleSidebar,
    /// Escape was pressed.
    Escape,
    /// Tab was pressed, with Shift when `shift` is set.
    Tab {
        /// Whether Shift was held.
        shift: bool,
    },
    /// The user focused an element directly.
    Focus(Focus),
    /// The viewport was resized to this width in pixels.
    Resize {
        /// New width in pixels.
        width: u32,
    },
    /// A single touch began.
    TouchStart(TouchPoint),
    /// The touch ended.
    TouchEnd(TouchPoint),
    /// The content viewport scrolled to this offset in pixels.
    ContentScrolled(u32),
    /// The back-to-top affordance was activated.
    ScrollToTop,
}

#[derive(Debug)]
/// Visibility of the back-to-top affordance, driven by content scroll.
struct BackToTop {
    threshold: u32,
    visible: bool,
}

impl BackToTop {
    fn update<T: RenderTarget>(&mut self, offset: u32, target: &mut T) {
        let visible = offset > self.threshold;
        if visible != self.visible {
            self.visible = visible;
            target.set_back_to_top_visible(visible);
        }
    }
}

/// Owns every piece of browser state and the target it renders into.
pub struct DocsController<T> {
    store: ContentStore,
    target: T,
    router: Router,
    nav: NavigationRenderer,
    panels: ContentRenderer,
    search: SearchEngine,
    sidebar: SidebarController,
    back_to_top: BackToTop,
    viewport: Viewport,
    focus: Focus,
    query: String,
}

impl<T: RenderTarget + SidebarSurface> DocsController<T> {
    /// Renders navigation and panels, builds the index and shows the first section.
    ///
    /// The home section is `config.home_section` when it exists, else the first leaf.
    /// `initial_fragment`, the fragment present at load, is applied once afterwards.
    pub fn new(
        store: ContentStore,
        target: T,
        width: u32,
        config: &Config,
        initial_fragment: Option<&str>,
    ) -> Self {
        let mut controller = Self {
            target,
            router: Router::default(),
            nav: NavigationRenderer::default(),
            panels: ContentRenderer::default(),
            search: SearchEngine::new(SearchIndex::default()),
            sidebar: SidebarController::new(config.sidebar_settings()),
            back_to_top: BackToTop {
                threshold: config.back_to_top_threshold,
                visible: false,
            },
            viewport: Viewport { width },
            focus: Focus::Content,
            query: String::new(),
            store,
        };

        controller.nav.render_full(&controller.store, &mut controller.target);
        controller
            .panels
            .render_all(&controller.store, &mut controller.target);
        controller.search = SearchEngine::new(SearchIndex::build(&controller.store));

        let home = config
            .home_section()
            .filter(|id| controller.store.contains(id))
            .or_else(|| controller.store.first_leaf_id())
            .map(str::to_string);
        if let Some(home) = home {
            controller.show_section(&home);
        }
        if let Some(fragment) = initial_fragment {
            controller.on_fragment_change(fragment);
        }
        controller
    }

    /// Handles one input to completion.
    pub fn dispatch(&mut self, event: Event, now: Instant) {
        match event {
            Event::NavActivated(slot) => self.on_nav_activated(slot, now),
            Event::FragmentChanged(fragment) => self.on_fragment_change(&fragment),
            Event::Search(query) => self.search(&query),
            Event::Click(target) => {
                self.sidebar
                    .on_click(target, self.viewport, now, &mut self.target);
            }
            Event::ToggleSidebar => {
                self.sidebar.toggle(self.viewport, now, &mut self.target);
            }
            Event::Escape => {
                self.sidebar.on_escape(self.viewport, now, &mut self.target);
            }
            Event::Tab { shift } => self.on_tab(shift),
            Event::Focus(focus) => self.set_focus(focus),
            Event::Resize { width } => {
                self.viewport = Viewport { width };
                self.sidebar.on_resize(self.viewport, now, &mut self.target);
            }
            Event::TouchStart(point) => self.sidebar.touch_start(point),
            Event::TouchEnd(point) => {
                self.sidebar
                    .touch_end(point, self.viewport, now, &mut self.target);
            }
            Event::ContentScrolled(offset) => self.back_to_top.update(offset, &mut self.target),
            Event::ScrollToTop => self.scroll_to_top(),
        }
    }

    /// Fires a deferred focus move when it is due.
    pub fn tick(&mut self, now: Instant) {
        if let Some(focus) = self.sidebar.tick(now, &mut self.target) {
            self.focus = focus;
        }
    }

    /// Routes to `id`; unknown ids change nothing. Returns whether the route happened.
    pub fn show_section(&mut self, id: &str) -> bool {
        let shown =
            self.router
                .show_section(id, &mut self.panels, &mut self.nav, &mut self.target);
        if shown {
            self.back_to_top.update(0, &mut self.target);
        }
        shown
    }

    /// Runs a search, or restores the full navigation for a blank query.
    pub fn search(&mut self, query: &str) {
        query.clone_into(&mut self.query);
        self.search.search(
            query,
            &self.store,
            self.router.current(),
            &mut self.nav,
            &mut self.target,
        );
        if let Focus::NavEntry(slot) = self.focus {
            if slot >= self.nav.len() {
                self.set_focus(Focus::SearchInput);
            }
        }
    }

    /// Scrolls the content back to its top.
    pub fn scroll_to_top(&mut self) {
        self.target.reset_content_scroll();
        self.back_to_top.update(0, &mut self.target);
    }

    fn on_fragment_change(&mut self, fragment: &str) {
        match self.router.fragment_target(fragment) {
            Some(id) => {
                self.show_section(id);
            }
            None => tracing::debug!(fragment, "Fragment already current"),
        }
    }

    fn on_nav_activated(&mut self, slot: usize, now: Instant) {
        let Some(id) = self.nav.resolve(slot).map(str::to_string) else {
            tracing::debug!(slot, "Click on unregistered navigation slot");
            return;
        };
        self.set_focus(Focus::NavEntry(slot));
        self.show_section(&id);
        self.sidebar
            .on_navigate(self.viewport, now, &mut self.target);
    }

    fn on_tab(&mut self, shift: bool) {
        let ring = self.sidebar_ring();
        let next = self
            .sidebar
            .trap_tab(self.viewport, self.focus, &ring, shift)
            .unwrap_or_else(|| self.next_in_page_order(shift));
        self.set_focus(next);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.sidebar.cancel_focus_transfer();
        self.focus = focus;
        self.target.focus(focus);
    }

    /// Focusable elements inside the sidebar, in order.
    fn sidebar_ring(&self) -> Vec<Focus> {
        std::iter::once(Focus::SearchInput)
            .chain((0..self.nav.len()).map(Focus::NavEntry))
            .collect()
    }

    /// Focusable elements of the whole page, in order; the trigger only exists when narrow.
    fn page_order(&self) -> Vec<Focus> {
        let trigger = self
            .sidebar
            .is_narrow(self.viewport)
            .then_some(Focus::MenuTrigger);
        trigger
            .into_iter()
            .chain(self.sidebar_ring())
            .chain(std::iter::once(Focus::Content))
            .collect()
    }

    fn next_in_page_order(&self, shift: bool) -> Focus {
        let order = self.page_order();
        let len = order.len();
        let next = match order.iter().position(|&f| f == self.focus) {
            Some(i) if shift => (i + len - 1) % len,
            Some(i) => (i + 1) % len,
            None if shift => len - 1,
            None => 0,
        };
        order[next]
    }

    #[must_use]
    /// Id of the section on display.
    pub fn current_section(&self) -> &str {
        self.router.current()
    }

    #[must_use]
    /// Element holding keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    /// Text last passed to [`Self::search`].
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    /// The sidebar state machine.
    pub fn sidebar(&self) -> &SidebarController {
        &self.sidebar
    }

    #[must_use]
    /// The navigation renderer and its registry.
    pub fn navigation(&self) -> &NavigationRenderer {
        &self.nav
    }

    #[must_use]
    /// The content panels.
    pub fn panels(&self) -> &ContentRenderer {
        &self.panels
    }

    #[must_use]
    /// The search engine and its index.
    pub fn search_engine(&self) -> &SearchEngine {
        &self.search
    }

    #[must_use]
    /// The render target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the render target, for shell bookkeeping such as layout.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
}

#[cfg(test)]
#[path = "tests/controller.rs"]
mod tests;
