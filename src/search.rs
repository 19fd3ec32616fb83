//! Substring search over the index, rendered into the navigation list.
//!
//! Matching is plain case-insensitive containment on title or body text. Results keep
//! tree order; there is no ranking and no debouncing, every query re-filters the index.

use crate::content::ContentStore;
use crate::index::{SearchIndex, SearchIndexEntry};
use crate::navigation::NavigationRenderer;
use crate::target::RenderTarget;

#[derive(Debug, PartialEq, Eq)]
/// What a query resolves to before anything is rendered.
pub enum SearchOutcome<'a> {
    /// Blank query: restore the full navigation.
    Cleared,
    /// Matching entries, possibly none.
    Results(Vec<&'a SearchIndexEntry>),
}

#[derive(Debug)]
/// Queries the index and drives the navigation renderer with the outcome.
pub struct SearchEngine {
    index: SearchIndex,
}

impl SearchEngine {
    #[must_use]
    /// Wraps a built index.
    pub fn new(index: SearchIndex) -> Self {
        Self { index }
    }

    #[must_use]
    /// The underlying index.
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    #[must_use]
    /// Resolves `query` against the index.
    pub fn query(&self, query: &str) -> SearchOutcome<'_> {
        if query.trim().is_empty() {
            return SearchOutcome::Cleared;
        }
        SearchOutcome::Results(self.index.filter(query).collect())
    }

    /// Runs `query` and re-renders navigation, keeping `current` marked when it is listed.
    pub fn search<T: RenderTarget>(
        &self,
        query: &str,
        store: &ContentStore,
        current: &str,
        nav: &mut NavigationRenderer,
        target: &mut T,
    ) {
        match self.query(query) {
            SearchOutcome::Cleared => {
                tracing::debug!("Search cleared");
                nav.render_full(store, target);
            }
            SearchOutcome::Results(hits) => {
                tracing::debug!(query, hits = hits.len(), "Search");
                nav.render_results(query, &hits, target);
            }
        }
        if nav.contains(current) {
            nav.set_active(Some(current), target);
        }
    }
}

#[cfg(test)]
#[path = "tests/search.rs"]
mod tests;
