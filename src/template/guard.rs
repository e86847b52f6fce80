//! Reserved identifier check, run once before a template is parsed

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::Config;
use crate::error::TemplateError;
use crate::project::{IdentifierStyle, ProjectAssets};

/// Fail if any identifier the project would generate, in any
/// [`IdentifierStyle`], is reserved by the configuration.
///
/// The check covers every asset regardless of which tokens the template uses.
pub fn check_reserved(assets: &ProjectAssets, config: &Config) -> Result<(), TemplateError> {
    let color_names = assets.colors.iter().filter_map(|c| c.identity());
    let text_style_names = assets.text_styles.iter().map(|t| t.name.as_str());

    let mut prohibited: BTreeSet<String> = collisions(color_names, &config.reserved_colors);
    prohibited.extend(collisions(text_style_names, &config.reserved_text_styles));

    if prohibited.is_empty() {
        return Ok(());
    }

    debug!(count = prohibited.len(), "reserved identifiers generated");
    Err(TemplateError::ProhibitedIdentities {
        identities: prohibited.into_iter().collect::<Vec<_>>().join(", "),
    })
}

fn collisions<'a>(
    names: impl Iterator<Item = &'a str>,
    reserved: &BTreeSet<String>,
) -> BTreeSet<String> {
    if reserved.is_empty() {
        return BTreeSet::new();
    }
    names
        .flat_map(|name| IdentifierStyle::ALL.iter().map(move |style| style.apply(name)))
        .filter(|identifier| reserved.contains(identifier))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{Color, RawColor, TextStyle};

    fn assets() -> ProjectAssets {
        ProjectAssets::new(
            vec![
                Color::new("Primary", 51, 91, 210, 1.0),
                Color::new("Light Gray", 200, 200, 200, 1.0),
                Color::anonymous(0, 0, 0, 1.0),
            ],
            vec![TextStyle::new("Body Text", "Helvetica", 17.0, RawColor::new(0, 0, 0, 1.0))],
        )
    }

    #[test]
    fn test_no_reserved_names() {
        assert!(check_reserved(&assets(), &Config::default()).is_ok());
    }

    #[test]
    fn test_reserved_color_in_any_style() {
        let config = Config::new().with_reserved_colors(["light_gray", "primary", "unused"]);
        let err = check_reserved(&assets(), &config).unwrap_err();
        assert_eq!(
            err,
            TemplateError::ProhibitedIdentities {
                identities: "light_gray, primary".to_string()
            }
        );
    }

    #[test]
    fn test_reserved_text_style() {
        let config = Config::new().with_reserved_text_styles(["BodyText"]);
        let err = check_reserved(&assets(), &config).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::ProhibitedIdentities { identities } if identities == "BodyText"
        ));
    }

    #[test]
    fn test_reserved_sets_are_separate() {
        // A text style name reserved only for colors is allowed
        let config = Config::new().with_reserved_colors(["bodyText"]);
        assert!(check_reserved(&assets(), &config).is_ok());
    }
}
