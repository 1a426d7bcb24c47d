//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a scrollspy.toml, and if present we load settings from there.
//! This provides the page line height, scroll step and file extension preferences. The
//! activation margin is fixed and deliberately absent.

use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "scrollspy.toml";

const DEFAULT_LINE_HEIGHT: u32 = 20;
const DEFAULT_SCROLL_STEP: usize = 3;

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from scrollspy.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_LINE_HEIGHT)]
    /// Page units covered by one rendered line.
    pub line_height: u32,
    #[facet(default = DEFAULT_SCROLL_STEP)]
    /// Lines scrolled per arrow key press.
    pub scroll_step: usize,
    #[facet(default = default_extensions())]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_height: DEFAULT_LINE_HEIGHT,
            scroll_step: DEFAULT_SCROLL_STEP,
            file_extensions: default_extensions(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from scrollspy.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        Self::parse(&contents).unwrap_or_else(|| {
            warn!(path = %path.display(), "ignoring invalid configuration");
            Self::default()
        })
    }

    #[must_use]
    /// Parses TOML settings, filling unset keys with defaults.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
