//! Configuration for breakpoints, gesture thresholds and the terminal shell.
//!
//! We look for a docnav.toml in the working directory, and if present load settings from
//! there. Anything missing falls back to the defaults: a 768px
//! breakpoint, a 300ms focus delay and 50px swipe thresholds.

use crate::sidebar::SidebarSettings;
use facet::Facet;
use std::fs;
use std::time::Duration;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "docnav.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from docnav.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 768)]
    /// Viewport widths at or below this many pixels are narrow.
    pub breakpoint_px: u32,
    #[facet(default = 300)]
    /// Delay before focus moves after the sidebar opens or closes.
    pub focus_delay_ms: u64,
    #[facet(default = 50)]
    /// Minimum horizontal travel for a swipe.
    pub swipe_threshold_px: u32,
    #[facet(default = 50)]
    /// Distance from the left edge a right swipe must start within.
    pub edge_zone_px: u32,
    #[facet(default = 300)]
    /// Content scroll offset past which the back-to-top affordance shows.
    pub back_to_top_threshold: u32,
    #[facet(default = 8)]
    /// Pixel width of one terminal cell.
    pub cell_width_px: u32,
    #[facet(default = 16)]
    /// Pixel height of one terminal cell.
    pub cell_height_px: u32,
    #[facet(default = String::new())]
    /// Section shown at startup; empty means the first one.
    pub home_section: String,
    #[facet(default = String::new())]
    /// Directory for the log file; empty disables logging.
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            focus_delay_ms: 300,
            swipe_threshold_px: 50,
            edge_zone_px: 50,
            back_to_top_threshold: 300,
            cell_width_px: 8,
            cell_height_px: 16,
            home_section: String::new(),
            log_dir: String::new(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from docnav.toml if present.
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    /// Parses TOML, falling back to defaults when it is invalid.
    pub fn parse(contents: &str) -> Self {
        facet_toml::from_str::<Self>(contents).unwrap_or_else(|e| {
            tracing::warn!(error = ?e, file = CONFIG_FILE, "Ignoring invalid config");
            Self::default()
        })
    }

    #[must_use]
    /// Sidebar tunables derived from this configuration.
    pub fn sidebar_settings(&self) -> SidebarSettings {
        SidebarSettings {
            breakpoint_px: self.breakpoint_px,
            focus_delay: Duration::from_millis(self.focus_delay_ms),
            swipe_threshold_px: f64::from(self.swipe_threshold_px),
            edge_zone_px: f64::from(self.edge_zone_px),
        }
    }

    #[must_use]
    /// Configured home section, if any.
    pub fn home_section(&self) -> Option<&str> {
        Some(self.home_section.as_str()).filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
