//! Navigation list rendering and the registry that resolves clicks on it.
//!
//! Navigation is either the full tree (one group per top-level section) or a flat list of
//! search results. Each render replaces the previous list and repopulates the slot → id
//! registry, so a click on slot `n` always resolves against what is currently drawn.

use crate::content::ContentStore;
use crate::index::SearchIndexEntry;
use crate::target::RenderTarget;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A clickable entry.
pub struct NavEntry {
    /// Id of the leaf the entry routes to.
    pub id: String,
    /// Label.
    pub title: String,
    /// Parent section title, shown under search results.
    pub section_title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A titled run of entries.
pub struct NavGroup {
    /// Group heading.
    pub title: String,
    /// Entries in display order.
    pub entries: Vec<NavEntry>,
    /// Text shown instead of entries, used by the empty-results placeholder.
    pub placeholder: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// The whole navigation list as last rendered.
pub struct Navigation {
    /// Groups in display order.
    pub groups: Vec<NavGroup>,
}

impl Navigation {
    /// One group per top-level section with an entry per leaf.
    #[must_use]
    pub fn full(store: &ContentStore) -> Self {
        let groups = store
            .sections()
            .iter()
            .map(|section| NavGroup {
                title: section.title.clone(),
                entries: section
                    .leaves()
                    .map(|leaf| NavEntry {
                        id: leaf.id.to_string(),
                        title: leaf.title.to_string(),
                        section_title: None,
                    })
                    .collect(),
                placeholder: None,
            })
            .collect();
        Self { groups }
    }

    /// A single results group, or the no-results placeholder echoing `query`.
    #[must_use]
    pub fn results(query: &str, hits: &[&SearchIndexEntry]) -> Self {
        let group = if hits.is_empty() {
            NavGroup {
                title: "No Results".to_string(),
                entries: Vec::new(),
                placeholder: Some(format!("No results found for \"{query}\"")),
            }
        } else {
            NavGroup {
                title: format!("Search Results ({})", hits.len()),
                entries: hits
                    .iter()
                    .map(|hit| NavEntry {
                        id: hit.id.clone(),
                        title: hit.title.clone(),
                        section_title: Some(hit.parent_section_title.clone()),
                    })
                    .collect(),
                placeholder: None,
            }
        };
        Self {
            groups: vec![group],
        }
    }

    /// Entries across all groups; the position is the entry's slot.
    pub fn entries(&self) -> impl Iterator<Item = &NavEntry> {
        self.groups.iter().flat_map(|group| group.entries.iter())
    }

    #[must_use]
    /// Whether this is the empty-results placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.groups.iter().any(|group| group.placeholder.is_some())
    }
}

#[derive(Debug, Default)]
/// Owns the navigation render target and its click registry.
pub struct NavigationRenderer {
    current: Navigation,
    registry: Vec<String>,
    active: Option<String>,
}

impl NavigationRenderer {
    /// Renders the full tree.
    pub fn render_full<T: RenderTarget>(&mut self, store: &ContentStore, target: &mut T) {
        self.replace(Navigation::full(store), target);
    }

    /// Renders a flat results list for `query`.
    pub fn render_results<T: RenderTarget>(
        &mut self,
        query: &str,
        hits: &[&SearchIndexEntry],
        target: &mut T,
    ) {
        self.replace(Navigation::results(query, hits), target);
    }

    fn replace<T: RenderTarget>(&mut self, nav: Navigation, target: &mut T) {
        self.registry = nav.entries().map(|entry| entry.id.clone()).collect();
        self.active = None;
        target.render_navigation(&nav);
        self.current = nav;
    }

    #[must_use]
    /// Id behind the entry drawn at `slot`.
    pub fn resolve(&self, slot: usize) -> Option<&str> {
        self.registry.get(slot).map(String::as_str)
    }

    #[must_use]
    /// Slot of the entry routing to `id`.
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.registry.iter().position(|entry| entry == id)
    }

    #[must_use]
    /// Whether an entry for `id` is currently drawn.
    pub fn contains(&self, id: &str) -> bool {
        self.slot_of(id).is_some()
    }

    #[must_use]
    /// Number of entries currently drawn.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    /// Whether no entries are drawn.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Marks the entry for `id` active, clearing any other; unknown ids clear all.
    pub fn set_active<T: RenderTarget>(&mut self, id: Option<&str>, target: &mut T) {
        let id = id.filter(|id| self.contains(id));
        self.active = id.map(str::to_string);
        target.set_active_nav_entry(id);
    }

    #[must_use]
    /// Id of the active entry.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    /// Navigation as last rendered.
    pub fn current(&self) -> &Navigation {
        &self.current
    }
}

#[cfg(test)]
#[path = "tests/navigation.rs"]
mod tests;
