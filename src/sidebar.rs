//! The collapsible sidebar.
//!
//! The state is a single open/closed flag:
//!
//! ```text
//!            open() / toggle() / swipe right from edge
//!   Closed ─────────────────────────────────────────▶ Open
//!          ◀─────────────────────────────────────────
//!     close() / toggle() / Escape / swipe left / outside click (narrow)
//!           / nav click (narrow) / resize to wide
//! ```
//!
//! The viewport width is a second input: below the breakpoint the sidebar also hides the
//! menu trigger, locks page scroll and traps keyboard focus. Focus moves after each
//! transition are deferred by a [`FocusTransfer`] so the slide-in can finish first.

use crate::target::{ClickTarget, Focus, MenuGlyph, SidebarSurface};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Whether the sidebar is shown.
pub enum SidebarState {
    /// Hidden (narrow) or static (wide).
    #[default]
    Closed,
    /// Slid in over the page.
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Current viewport width in pixels.
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Tunables for the sidebar, normally taken from [`crate::config::Config`].
pub struct SidebarSettings {
    /// Widths at or below this are narrow.
    pub breakpoint_px: u32,
    /// Delay before focus moves after a transition.
    pub focus_delay: Duration,
    /// Minimum horizontal travel for a swipe.
    pub swipe_threshold_px: f64,
    /// A right swipe must start within this distance of the left edge.
    pub edge_zone_px: f64,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            focus_delay: Duration::from_millis(300),
            swipe_threshold_px: 50.0,
            edge_zone_px: 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A touch position in pixels.
pub struct TouchPoint {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl TouchPoint {
    #[must_use]
    /// Point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A recognised horizontal swipe.
pub enum Swipe {
    /// Left to right, remembering where it started.
    Right {
        /// Horizontal start position.
        start_x: f64,
    },
    /// Right to left.
    Left,
}

/// Classifies a touch sequence; vertical-dominant or short gestures yield `None`.
#[must_use]
pub fn classify_swipe(start: TouchPoint, end: TouchPoint, threshold: f64) -> Option<Swipe> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs() <= dy.abs() || dx.abs() <= threshold {
        return None;
    }
    if dx > 0.0 {
        Some(Swipe::Right { start_x: start.x })
    } else {
        Some(Swipe::Left)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A deferred focus move tied to one sidebar transition.
pub struct FocusTransfer {
    /// Element that receives focus.
    pub target: Focus,
    /// Earliest moment the move may happen.
    pub due: Instant,
}

impl FocusTransfer {
    #[must_use]
    /// Whether the transfer should fire at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

#[derive(Debug)]
/// Sidebar state machine.
pub struct SidebarController {
    state: SidebarState,
    settings: SidebarSettings,
    pending_focus: Option<FocusTransfer>,
    touch_start: Option<TouchPoint>,
}

impl SidebarController {
    #[must_use]
    /// Closed sidebar with the given tunables.
    pub fn new(settings: SidebarSettings) -> Self {
        Self {
            state: SidebarState::Closed,
            settings,
            pending_focus: None,
            touch_start: None,
        }
    }

    #[must_use]
    /// Current state.
    pub fn state(&self) -> SidebarState {
        self.state
    }

    #[must_use]
    /// Whether the sidebar is open.
    pub fn is_open(&self) -> bool {
        self.state == SidebarState::Open
    }

    #[must_use]
    /// Whether `viewport` is at or below the breakpoint.
    pub fn is_narrow(&self, viewport: Viewport) -> bool {
        viewport.width <= self.settings.breakpoint_px
    }

    #[must_use]
    /// The focus transfer waiting to fire, if any.
    pub fn pending_focus(&self) -> Option<FocusTransfer> {
        self.pending_focus
    }

    /// Drops the waiting focus transfer.
    pub fn cancel_focus_transfer(&mut self) {
        if let Some(transfer) = self.pending_focus.take() {
            tracing::debug!(focus = ?transfer.target, "Cancelled focus transfer");
        }
    }

    fn schedule_focus(&mut self, target: Focus, now: Instant) {
        self.cancel_focus_transfer();
        self.pending_focus = Some(FocusTransfer {
            target,
            due: now.checked_add(self.settings.focus_delay).unwrap_or(now),
        });
    }

    /// Opens the sidebar; does nothing when it is already open.
    ///
    /// Returns whether a transition happened.
    pub fn open<S: SidebarSurface>(
        &mut self,
        viewport: Viewport,
        now: Instant,
        surface: &mut S,
    ) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = SidebarState::Open;
        surface.set_sidebar_open(true);
        surface.set_overlay_active(true);
        surface.set_menu_glyph(MenuGlyph::Close);
        if self.is_narrow(viewport) {
            surface.set_trigger_hidden(true);
            surface.set_scroll_locked(true);
        }
        self.schedule_focus(Focus::SearchInput, now);
        tracing::info!(width = viewport.width, "Sidebar opened");
        true
    }

    /// Closes the sidebar; does nothing when it is already closed.
    ///
    /// Returns whether a transition happened.
    pub fn close<S: SidebarSurface>(
        &mut self,
        viewport: Viewport,
        now: Instant,
        surface: &mut S,
    ) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = SidebarState::Closed;
        surface.set_sidebar_open(false);
        surface.set_overlay_active(false);
        surface.set_menu_glyph(MenuGlyph::Menu);
        surface.set_scroll_locked(false);
        if self.is_narrow(viewport) {
            surface.set_trigger_hidden(false);
            self.schedule_focus(Focus::MenuTrigger, now);
        } else {
            self.cancel_focus_transfer();
        }
        tracing::info!(width = viewport.width, "Sidebar closed");
        true
    }

    /// Flips the state.
    pub fn toggle<S: SidebarSurface>(
        &mut self,
        viewport: Viewport,
        now: Instant,
        surface: &mut S,
    ) -> bool {
        if self.is_open() {
            self.close(viewport, now, surface)
        } else {
            self.open(viewport, now, surface)
        }
    }

    /// Escape closes an open sidebar at any width.
    pub fn on_escape<S: SidebarSurface>(
        &mut self,
        viewport: Viewport,
        now: Instant,
        surface: &mut S,
    ) -> bool {
        self.close(viewport, now, surface)
    }

    /// A click outside both the sidebar and the trigger closes it on narrow viewports.
    pub fn on_click<S: SidebarSurface>(
        &mut self,
        target: ClickTarget,
        viewport: Viewport,
        now: Instant,
        surface: &mut S,
    ) -> bool {
        match target {
            ClickTarget::Trigger => self.toggle(viewport, now, surface),
            ClickTarget::Sidebar => false,
            ClickTarget::Overlay | ClickTarget::Content => {
                self.is_narrow(viewport) && self.close(viewport, now, surface)
            }
        }
    }

    /// Navigating from the sidebar closes it on narrow viewports.
    pub fn on_navigate<S: SidebarSurface>(
        &mut self,
        viewport: Viewport,
        now: Instant,
        surface: &mut S,
    ) -> bool {
        self.is_narrow(viewport) && self.close(viewport, now, surface)
    }

    /// Keeps trigger visibility consistent with the new width and closes on wide viewports.
    pub fn on_resize<S: SidebarSurface>(
        &mut self,
        viewport: Viewport,
        now: Instant,
        surface: &mut S,
    ) -> bool {
        if self.is_narrow(viewport) {
            if !self.is_open() {
                surface.set_trigger_hidden(false);
            }
            return false;
        }
        let closed = self.close(viewport, now, surface);
        surface.set_trigger_hidden(false);
        closed
    }

    /// Records the start of a single-touch sequence.
    pub fn touch_start(&mut self, point: TouchPoint) {
        self.touch_start = Some(point);
    }

    /// Completes a touch sequence and applies a recognised swipe.
    pub fn touch_end<S: SidebarSurface>(
        &mut self,
        point: TouchPoint,
        viewport: Viewport,
        now: Instant,
        surface: &mut S,
    ) -> bool {
        let Some(start) = self.touch_start.take() else {
            tracing::debug!("Touch end without start");
            return false;
        };
        match classify_swipe(start, point, self.settings.swipe_threshold_px) {
            Some(Swipe::Right { start_x }) if start_x < self.settings.edge_zone_px => {
                self.open(viewport, now, surface)
            }
            Some(Swipe::Left) => self.close(viewport, now, surface),
            _ => false,
        }
    }

    /// Where Tab should land when the open sidebar traps focus on a narrow viewport.
    ///
    /// `ring` lists the sidebar's focusable elements in order. `None` means the trap does
    /// not apply and the ordinary focus order should be used.
    #[must_use]
    pub fn trap_tab(
        &self,
        viewport: Viewport,
        focus: Focus,
        ring: &[Focus],
        shift: bool,
    ) -> Option<Focus> {
        if !self.is_open() || !self.is_narrow(viewport) {
            return None;
        }
        let (&first, &last) = (ring.first()?, ring.last()?);
        if !ring.contains(&focus) {
            return Some(if shift { last } else { first });
        }
        match (shift, focus) {
            (true, f) if f == first => Some(last),
            (false, f) if f == last => Some(first),
            _ => None,
        }
    }

    /// Fires the pending focus transfer when it is due.
    pub fn tick<S: SidebarSurface>(&mut self, now: Instant, surface: &mut S) -> Option<Focus> {
        let transfer = self.pending_focus.filter(|t| t.is_due(now))?;
        self.pending_focus = None;
        surface.focus(transfer.target);
        Some(transfer.target)
    }
}

#[cfg(test)]
#[path = "tests/sidebar.rs"]
mod tests;
