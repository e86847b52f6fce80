//! Project assets: the colors and text styles a template is generated from
//!
//! Assets arrive as JSON exported from the design service:
//!
//! ```json
//! {
//!   "colors": [{ "name": "Primary", "r": 51, "g": 91, "b": 210, "a": 1.0 }],
//!   "textStyles": [{
//!     "name": "Body", "fontName": "Helvetica", "fontSize": 17,
//!     "color": { "r": 51, "g": 91, "b": 210, "a": 1.0 }
//!   }]
//! }
//! ```

mod color;
mod naming;
mod text_style;

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub use color::{identity, Color, RawColor, ALPHA_EPSILON};
pub use naming::{split_words, IdentifierStyle};
pub use text_style::{TextAlignment, TextStyle};

/// Errors that can occur when loading project assets
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Failed to read project file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse project JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// All colors and text styles of a design project, in project order
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssets {
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub text_styles: Vec<TextStyle>,
}

impl ProjectAssets {
    pub fn new(colors: Vec<Color>, text_styles: Vec<TextStyle>) -> Self {
        Self {
            colors,
            text_styles,
        }
    }

    /// Load assets from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ProjectError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load assets from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ProjectError> {
        Ok(serde_json::from_str(content)?)
    }
}
