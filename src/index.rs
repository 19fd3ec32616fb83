//! Flattened, searchable projection of the content store.

use crate::content::ContentStore;
use crate::markup::strip_markup;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One searchable leaf.
pub struct SearchIndexEntry {
    /// Leaf id.
    pub id: String,
    /// Leaf title as written.
    pub title: String,
    /// Markup-stripped, lower-cased body text.
    pub normalized_content: String,
    /// Title of the top-level section the leaf sits under.
    pub parent_section_title: String,
}

impl SearchIndexEntry {
    /// Whether the entry contains an already lower-cased needle in its title or body.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.normalized_content.contains(needle)
    }
}

#[derive(Clone, Debug, Default)]
/// Read-only index built once from a store.
pub struct SearchIndex {
    entries: Vec<SearchIndexEntry>,
}

impl SearchIndex {
    /// Walks the tree once and projects every leaf.
    #[must_use]
    pub fn build(store: &ContentStore) -> Self {
        let entries: Vec<_> = store
            .leaves()
            .map(|leaf| SearchIndexEntry {
                id: leaf.id.to_string(),
                title: leaf.title.to_string(),
                normalized_content: strip_markup(leaf.content).to_lowercase(),
                parent_section_title: leaf.section_title.to_string(),
            })
            .collect();
        tracing::debug!(entries = entries.len(), "Built search index");
        Self { entries }
    }

    #[must_use]
    /// All entries in tree order.
    pub fn entries(&self) -> &[SearchIndexEntry] {
        &self.entries
    }

    /// Entries whose title or body contains `query`, case-insensitively, in tree order.
    pub fn filter<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a SearchIndexEntry> + 'a {
        let needle = query.to_lowercase();
        self.entries.iter().filter(move |entry| entry.matches(&needle))
    }
}

#[cfg(test)]
#[path = "tests/index.rs"]
mod tests;
