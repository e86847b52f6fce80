//! Token resolution - turns a token name into a value for the active context

use tracing::trace;

use crate::error::TemplateError;
use crate::project::{identity, Color, IdentifierStyle, RawColor, TextStyle};
use crate::transform::{self, Transformation};

/// The asset a token is resolved against
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Context<'a> {
    /// Outside of any loop
    None,
    /// Inside `FOR color`
    Color(&'a Color),
    /// Inside `FOR textStyle`
    TextStyle(&'a TextStyle),
}

/// Resolve `token` against `context`, then run the value through `transformations`.
///
/// `Ok(None)` means the attribute exists but has no value for this asset, such
/// as the identity of an anonymous color or an unset line height.
pub fn resolve(
    token: &str,
    context: Context<'_>,
    colors: &[Color],
    transformations: &[&Transformation],
) -> Result<Option<String>, TemplateError> {
    let value = match context {
        Context::Color(color) => token
            .strip_prefix("color.")
            .and_then(|attribute| color_token(color, attribute)),
        Context::TextStyle(style) => match token.strip_prefix("textStyle.") {
            Some(attribute) => text_style_token(style, attribute, colors)?,
            None => None,
        },
        Context::None => None,
    };

    let Some(value) = value else {
        return Err(TemplateError::unknown_token(token));
    };

    trace!(token, value = ?value, "resolved token");
    Ok(value.map(|v| transform::apply(transformations, &v)))
}

/// Resolve a token used as an `IF` condition.
///
/// A text style whose color matches no project color makes its color identity
/// tokens false rather than an error.
pub fn resolve_condition(
    token: &str,
    context: Context<'_>,
    colors: &[Color],
) -> Result<Option<String>, TemplateError> {
    match resolve(token, context, colors, &[]) {
        Err(TemplateError::MissingColorForTextStyle { .. }) => Ok(None),
        other => other,
    }
}

/// `Some(value)` for a known attribute, `None` for an unknown one
type Attribute = Option<Option<String>>;

fn color_token(color: &Color, attribute: &str) -> Attribute {
    if let Some(styled) = identity_token(attribute) {
        return Some(color.identity().map(|name| styled.render(name)));
    }
    raw_color_token(&color.value, attribute)
}

fn text_style_token(
    style: &TextStyle,
    attribute: &str,
    colors: &[Color],
) -> Result<Attribute, TemplateError> {
    if let Some(styled) = identity_token(attribute) {
        return Ok(Some(Some(styled.render(&style.name))));
    }

    if let Some(color_attribute) = attribute.strip_prefix("color.") {
        if let Some(styled) = identity_token(color_attribute) {
            let matched = identity(&style.color, colors)
                .and_then(Color::identity)
                .ok_or_else(|| TemplateError::MissingColorForTextStyle {
                    text_style: style.name.clone(),
                })?;
            return Ok(Some(Some(styled.render(matched))));
        }
        return Ok(raw_color_token(&style.color, color_attribute));
    }

    let value = match attribute {
        "fontName" => Some(style.font_name.clone()),
        "fontSize" => Some(style.font_size.to_string()),
        "fontWeight" => style.font_weight.map(|w| w.to_string()),
        "letterSpacing" => style.letter_spacing.map(|s| s.to_string()),
        "lineHeight" => style.line_height.map(|h| h.to_string()),
        "alignment" => style.alignment.map(|a| a.as_str().to_string()),
        _ => return Ok(None),
    };
    Ok(Some(value))
}

fn raw_color_token(color: &RawColor, attribute: &str) -> Attribute {
    let value = match attribute {
        "rgb" => color.rgb_hex(),
        "argb" => color.argb_hex(),
        "r" => color.r.to_string(),
        "g" => color.g.to_string(),
        "b" => color.b.to_string(),
        "a" => color.a.to_string(),
        _ => return None,
    };
    Some(Some(value))
}

/// `identity` or `identity.<style>`
struct StyledIdentity(Option<IdentifierStyle>);

impl StyledIdentity {
    fn render(&self, name: &str) -> String {
        match self.0 {
            Some(style) => style.apply(name),
            None => name.to_string(),
        }
    }
}

fn identity_token(attribute: &str) -> Option<StyledIdentity> {
    if attribute == "identity" {
        return Some(StyledIdentity(None));
    }
    attribute
        .strip_prefix("identity.")
        .and_then(IdentifierStyle::from_suffix)
        .map(|style| StyledIdentity(Some(style)))
}
