//! Configuration to acknowledge site preferences as well as set defaults.
//!
//! We try to find a postport.toml, and if present we load settings from there. This covers the
//! image path marker and the tags that make up the header block. The input and output paths
//! are fixed.

use facet::Facet;
use std::fs;
use std::path::Path;

/// Post exported from the old site, relative to the working directory.
pub const INPUT_PATH: &str = "2020-06-20-continuous-piecewise.html";
/// Page written for the new site, one directory above the input.
pub const OUTPUT_PATH: &str = "../_posts/2020-06-20-continuous-piecewise.html";
/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "postport.toml";

const DEFAULT_MARKER: &str = "/blog";
const DEFAULT_HEADING_TAG: &str = "h2";
const DEFAULT_SEPARATOR_TAG: &str = "hr";

#[derive(Facet, Clone, Debug, PartialEq)]
/// Site preferences loaded from postport.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_MARKER.to_string())]
    /// Path segment that image sources are cut back to.
    pub marker: String,
    #[facet(default = DEFAULT_HEADING_TAG.to_string())]
    /// Tag of the heading lifted into front matter.
    pub heading_tag: String,
    #[facet(default = DEFAULT_SEPARATOR_TAG.to_string())]
    /// Tag that must sit directly before the heading.
    pub separator_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            heading_tag: DEFAULT_HEADING_TAG.to_string(),
            separator_tag: DEFAULT_SEPARATOR_TAG.to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from postport.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults when it is absent or invalid.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                log::debug!("loaded settings from {}", path.display());
                return config;
            }
            log::warn!("ignoring {}: not a valid settings file", path.display());
        }
        Self::default()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
