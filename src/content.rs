//! The documentation tree the browser displays.
//!
//! A store is a list of top-level sections. Each section is either a leaf carrying its own
//! markup, or a group of subsections, and every subsection is a leaf. Leaves are what the
//! browser routes to: each one gets a content panel, a navigation entry, and a search index
//! entry. Ids double as fragment values, so they must be unique across the whole tree.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
#[serde(try_from = "RawSection")]
/// Top-level node of the documentation tree.
pub struct Section {
    /// Unique id, used as the fragment value.
    pub id: String,
    /// Heading shown in navigation.
    pub title: String,
    /// Either the section's own markup or its subsections.
    pub body: SectionBody,
}

#[derive(Clone, Debug)]
/// The two mutually exclusive shapes a section can take.
pub enum SectionBody {
    /// A grouping of leaf subsections.
    Group {
        /// Leaves in display order.
        subsections: Vec<Subsection>,
    },
    /// A section that is itself a leaf.
    Leaf {
        /// Opaque markup; absent bodies render as empty panels.
        content: Option<String>,
    },
}

/// A section as written in the file, before its shape is decided.
#[derive(Deserialize)]
struct RawSection {
    id: String,
    title: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    subsections: Option<Vec<Subsection>>,
}

impl TryFrom<RawSection> for Section {
    type Error = String;

    fn try_from(raw: RawSection) -> std::result::Result<Self, Self::Error> {
        let body = match (raw.subsections, raw.content) {
            (Some(_), Some(_)) => {
                return Err(format!(
                    "section `{}` has both content and subsections",
                    raw.id
                ))
            }
            (Some(subsections), None) => SectionBody::Group { subsections },
            (None, content) => SectionBody::Leaf { content },
        };
        Ok(Self {
            id: raw.id,
            title: raw.title,
            body,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Leaf nested under a grouping section.
pub struct Subsection {
    /// Unique id, used as the fragment value.
    pub id: String,
    /// Entry label shown in navigation.
    pub title: String,
    /// Opaque markup; absent bodies render as empty panels.
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Borrowed view of one routable leaf and the section it belongs to.
pub struct Leaf<'a> {
    /// Leaf id.
    pub id: &'a str,
    /// Leaf title.
    pub title: &'a str,
    /// Leaf markup, empty when the body is missing.
    pub content: &'a str,
    /// Title of the top-level section; equal to `title` for leaf sections.
    pub section_title: &'a str,
}

#[derive(Deserialize)]
struct StoreFile {
    sections: Vec<Section>,
}

#[derive(Clone, Debug)]
/// Immutable documentation tree, validated on construction.
pub struct ContentStore {
    sections: Vec<Section>,
}

impl ContentStore {
    /// Wraps a tree after checking that ids are non-empty and unique and that it has leaves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyId`], [`Error::DuplicateId`] or [`Error::NoSections`] when the
    /// tree breaks its contract.
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut leaves = 0usize;

        for section in &sections {
            check_id(&mut seen, &section.id, &section.title)?;
            match &section.body {
                SectionBody::Leaf { .. } => leaves += 1,
                SectionBody::Group { subsections } => {
                    for subsection in subsections {
                        check_id(&mut seen, &subsection.id, &subsection.title)?;
                        leaves += 1;
                    }
                }
            }
        }

        if leaves == 0 {
            return Err(Error::NoSections);
        }
        Ok(Self { sections })
    }

    /// Parses a `{"sections": [...]}` document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the tree is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: StoreFile = serde_json::from_str(json)?;
        Self::new(file.sections)
    }

    /// Reads and parses a content file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid tree.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), sections = store.sections.len(), "Loaded content");
        Ok(store)
    }

    #[must_use]
    /// Top-level sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Every routable leaf in tree order.
    pub fn leaves(&self) -> impl Iterator<Item = Leaf<'_>> {
        self.sections.iter().flat_map(Section::leaves)
    }

    #[must_use]
    /// Whether some leaf has this id.
    pub fn contains(&self, id: &str) -> bool {
        self.leaves().any(|leaf| leaf.id == id)
    }

    #[must_use]
    /// Id of the first leaf, the fallback home section.
    pub fn first_leaf_id(&self) -> Option<&str> {
        self.leaves().next().map(|leaf| leaf.id)
    }
}

impl Section {
    /// The leaves under this section: itself, or each subsection.
    pub fn leaves(&self) -> Box<dyn Iterator<Item = Leaf<'_>> + '_> {
        match &self.body {
            SectionBody::Leaf { content } => Box::new(std::iter::once(Leaf {
                id: &self.id,
                title: &self.title,
                content: content.as_deref().unwrap_or_default(),
                section_title: &self.title,
            })),
            SectionBody::Group { subsections } => {
                Box::new(subsections.iter().map(move |sub| Leaf {
                    id: &sub.id,
                    title: &sub.title,
                    content: sub.content.as_deref().unwrap_or_default(),
                    section_title: &self.title,
                }))
            }
        }
    }
}

fn check_id<'a>(seen: &mut HashSet<&'a str>, id: &'a str, title: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::EmptyId {
            title: title.to_string(),
        });
    }
    if !seen.insert(id) {
        return Err(Error::DuplicateId(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/content.rs"]
mod tests;
