//! Content panels, one per leaf, all materialized up front.

use crate::content::ContentStore;
use crate::target::RenderTarget;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A leaf's content as handed to the page.
pub struct Panel {
    /// Leaf id, also the panel key.
    pub id: String,
    /// Leaf title.
    pub title: String,
    /// Untouched markup.
    pub content: String,
}

#[derive(Debug, Default)]
/// Owns the content container and which panel is visible.
pub struct ContentRenderer {
    panels: Vec<Panel>,
    active: Option<String>,
}

impl ContentRenderer {
    /// Builds a panel for every leaf and hands them all to the target.
    pub fn render_all<T: RenderTarget>(&mut self, store: &ContentStore, target: &mut T) {
        self.panels = store
            .leaves()
            .map(|leaf| Panel {
                id: leaf.id.to_string(),
                title: leaf.title.to_string(),
                content: leaf.content.to_string(),
            })
            .collect();
        self.active = None;
        target.render_panels(&self.panels);
    }

    #[must_use]
    /// Whether a panel exists for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.panels.iter().any(|panel| panel.id == id)
    }

    /// Shows exactly the panel for `id`; unknown ids leave the current panel showing.
    ///
    /// Returns whether the panel was found.
    pub fn set_active<T: RenderTarget>(&mut self, id: &str, target: &mut T) -> bool {
        if !self.contains(id) {
            tracing::debug!(id, "No panel to activate");
            return false;
        }
        self.active = Some(id.to_string());
        target.set_active_panel(Some(id));
        true
    }

    /// Hides every panel.
    pub fn deactivate_all<T: RenderTarget>(&mut self, target: &mut T) {
        self.active = None;
        target.set_active_panel(None);
    }

    #[must_use]
    /// Id of the visible panel.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    /// All panels in tree order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }
}

#[cfg(test)]
#[path = "tests/panels.rs"]
mod tests;
