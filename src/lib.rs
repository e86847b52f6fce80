//! tokengen - generate platform source code from design assets
//!
//! This library interprets a small line-oriented template language against the
//! colors and text styles of a design project.
//!
//! # Example
//!
//! ```rust
//! use tokengen::{generate, Color, ProjectAssets};
//!
//! let assets = ProjectAssets::new(vec![Color::new("Primary Blue", 51, 91, 210, 1.0)], vec![]);
//! let template = "{{% FOR color %}}\nlet {{% color.identity.camelcase %}} = \"{{% color.rgb %}}\"\n{{% ENDFOR %}}";
//!
//! let output = generate(template, &assets).unwrap();
//! assert_eq!(output, "let primaryBlue = \"#335bd2\"");
//! ```

pub mod config;
pub mod error;
pub mod project;
pub mod template;
pub mod transform;

pub use config::{Config, ConfigError};
pub use error::{ParseError, TemplateError};
pub use project::{Color, ProjectAssets, ProjectError, RawColor, TextAlignment, TextStyle};
pub use template::TemplateParser;

/// Generate output for a template with default configuration
pub fn generate(template: &str, assets: &ProjectAssets) -> Result<String, ParseError> {
    generate_with_config(template, assets, &Config::default())
}

/// Generate output for a template with custom configuration
///
/// # Example
///
/// ```rust
/// use tokengen::{generate_with_config, Color, Config, ProjectAssets, TemplateError};
///
/// let assets = ProjectAssets::new(vec![Color::new("Clear", 0, 0, 0, 0.0)], vec![]);
/// let config = Config::new().with_reserved_colors(["clear"]);
///
/// let err = generate_with_config("no tokens here", &assets, &config).unwrap_err();
/// assert!(matches!(err.kind, TemplateError::ProhibitedIdentities { .. }));
/// ```
pub fn generate_with_config(
    template: &str,
    assets: &ProjectAssets,
    config: &Config,
) -> Result<String, ParseError> {
    TemplateParser::new(assets, config).parse(template)
}
