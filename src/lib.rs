//! docnav: browse a nested documentation tree.
//!
//! The core is [`controller::DocsController`], which renders the navigation and content
//! panels once, builds a search index, routes between sections by fragment, and drives the
//! collapsible sidebar. Everything it draws goes through the traits in [`target`], so the
//! same controller runs behind the terminal shell in [`shell`] or a recording double in tests.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod index;
pub mod markup;
pub mod navigation;
pub mod panels;
pub mod router;
pub mod search;
pub mod shell;
pub mod sidebar;
pub mod target;
pub mod ui;

pub use error::{Error, Result};

#[cfg(test)]
#[path = "tests/recording.rs"]
pub(crate) mod recording;
