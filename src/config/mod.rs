//! Configuration system for yamlflat.
//!
//! This module provides the user defaults for yamlflat. Configuration is
//! loaded from a TOML file and overridden by command-line arguments.
//!
//! # Example
//!
//! ```
//! use yamlflat::config::Config;
//! use yamlflat::flatten::Separator;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.separator, Separator::Colon);
//! assert_eq!(config.depth, -1);
//!
//! // Create custom configuration
//! let custom = Config {
//!     separator: Separator::Equals,
//!     ..Config::default()
//! };
//! ```

use crate::flatten::{Depth, FlattenOptions, Separator};
use crate::yamlpath::IndexPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the yamlflat tool.
///
/// # Fields
///
/// * `separator` - Key/value separator, `": "` or `"="` (default: `": "`)
/// * `depth` - Depth budget, negative for unlimited (default: -1)
/// * `include_empty` - Print empty values (default: false)
/// * `strict_index` - Reject malformed `[N]` segments in entry paths (default: false)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Key/value separator
    #[serde(default)]
    pub separator: Separator,

    /// Depth budget, negative for unlimited
    #[serde(default = "default_depth")]
    pub depth: i64,

    /// Print empty values instead of skipping them
    #[serde(default)]
    pub include_empty: bool,

    /// Reject malformed index segments instead of defaulting them to 0
    #[serde(default)]
    pub strict_index: bool,
}

/// Returns the default depth budget (unlimited).
fn default_depth() -> i64 {
    -1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: Separator::default(),
            depth: default_depth(),
            include_empty: false,
            strict_index: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamlflat/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamlflat");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                log::warn!("could not read config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Returns the flattening options these settings describe.
    pub fn flatten_options(&self) -> FlattenOptions {
        FlattenOptions {
            depth: Depth::from_budget(self.depth),
            include_empty: self.include_empty,
            separator: self.separator,
        }
    }

    pub fn index_policy(&self) -> IndexPolicy {
        IndexPolicy::from_strict(self.strict_index)
    }
}
