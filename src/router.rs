//! Section routing: which panel is visible, which entry is active, what the fragment says.
//!
//! `current` is the single source of truth for the active section and is only written by
//! [`Router::show_section`]. Fragment changes that already match it are dropped, which is
//! what stops a fragment write from echoing back into another route.

use crate::navigation::NavigationRenderer;
use crate::panels::ContentRenderer;
use crate::target::RenderTarget;

#[derive(Debug, Default)]
/// Owns the active section id.
pub struct Router {
    current: String,
}

impl Router {
    #[must_use]
    /// Id of the section on display; empty before the first route.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Displays the section `id` and records it in the fragment.
    ///
    /// When neither a panel nor a navigation entry exists for `id` nothing is touched and
    /// `false` is returned. Otherwise every panel and entry is deactivated, the matching ones
    /// are activated, the fragment is written and the content scrolls to the top.
    pub fn show_section<T: RenderTarget>(
        &mut self,
        id: &str,
        panels: &mut ContentRenderer,
        nav: &mut NavigationRenderer,
        target: &mut T,
    ) -> bool {
        let has_panel = panels.contains(id);
        let has_entry = nav.contains(id);
        if !has_panel && !has_entry {
            tracing::debug!(id, "Ignoring route to unknown section");
            return false;
        }

        panels.deactivate_all(target);
        nav.set_active(None, target);
        if has_panel {
            panels.set_active(id, target);
        }
        if has_entry {
            nav.set_active(Some(id), target);
        }

        id.clone_into(&mut self.current);
        target.write_fragment(id);
        target.reset_content_scroll();
        tracing::info!(id, "Showing section");
        true
    }

    #[must_use]
    /// The section a fragment asks for, if it should trigger a route.
    ///
    /// Strips a leading `#`; empty fragments and the current section yield `None`.
    pub fn fragment_target<'a>(&self, fragment: &'a str) -> Option<&'a str> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        if id.is_empty() || id == self.current {
            return None;
        }
        Some(id)
    }
}

#[cfg(test)]
#[path = "tests/router.rs"]
mod tests;
