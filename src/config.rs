//! Generation configuration
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! reserved_colors = ["primary", "clear"]
//! reserved_text_styles = ["body"]
//! max_nesting_depth = 64
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default limit on nested block expansion
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Options consumed by the template parser
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Generated color identifiers that must not appear in the project
    pub reserved_colors: BTreeSet<String>,
    /// Generated text style identifiers that must not appear in the project
    pub reserved_text_styles: BTreeSet<String>,
    /// Maximum depth of nested block expansion
    pub max_nesting_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reserved_colors: BTreeSet::new(),
            reserved_text_styles: BTreeSet::new(),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl Config {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the reserved color identifiers
    pub fn with_reserved_colors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_colors = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the reserved text style identifiers
    pub fn with_reserved_text_styles<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_text_styles = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum nesting depth
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}
