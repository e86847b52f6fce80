//! Text style assets

use serde::Deserialize;

use super::color::RawColor;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    Left,
    Right,
    Center,
    Justified,
}

impl TextAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlignment::Left => "left",
            TextAlignment::Right => "right",
            TextAlignment::Center => "center",
            TextAlignment::Justified => "justified",
        }
    }
}

/// A named text style.
///
/// `color` is a value copied from the design tool; it is matched back to a
/// named project color with [`super::identity`] when a template asks for it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub name: String,
    pub font_name: String,
    pub font_size: f64,
    #[serde(default)]
    pub font_weight: Option<u16>,
    #[serde(default)]
    pub letter_spacing: Option<f64>,
    #[serde(default)]
    pub line_height: Option<f64>,
    #[serde(default)]
    pub alignment: Option<TextAlignment>,
    pub color: RawColor,
}

impl TextStyle {
    pub fn new(
        name: impl Into<String>,
        font_name: impl Into<String>,
        font_size: f64,
        color: RawColor,
    ) -> Self {
        Self {
            name: name.into(),
            font_name: font_name.into(),
            font_size,
            font_weight: None,
            letter_spacing: None,
            line_height: None,
            alignment: None,
            color,
        }
    }

    pub fn with_font_weight(mut self, weight: u16) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn with_letter_spacing(mut self, spacing: f64) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    pub fn with_line_height(mut self, height: f64) -> Self {
        self.line_height = Some(height);
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}
