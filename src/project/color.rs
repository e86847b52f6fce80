//! Color samples, named project colors and approximate identity matching

use serde::Deserialize;

/// Tolerance applied to alpha when matching colors.
///
/// Design tools serialize alpha as single-precision floats, so a stored `0.8`
/// regularly comes back as `0.79999995`.
pub const ALPHA_EPSILON: f64 = 1e-4;

/// A raw RGBA sample as it appears in the project data
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `[0, 1]`
    pub a: f64,
}

impl RawColor {
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Lowercase `#rrggbb`
    pub fn rgb_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Lowercase `#aarrggbb`, alpha rounded to the nearest byte
    pub fn argb_hex(&self) -> String {
        format!("#{:02x}{}", self.alpha_byte(), &self.rgb_hex()[1..])
    }

    fn alpha_byte(&self) -> u8 {
        (self.a * 255.0).round().clamp(0.0, 255.0) as u8
    }

    /// Integer channels equal, alpha within [`ALPHA_EPSILON`]
    pub fn approx_eq(&self, other: &RawColor) -> bool {
        self.r == other.r
            && self.g == other.g
            && self.b == other.b
            && (self.a - other.a).abs() <= ALPHA_EPSILON
    }
}

/// A color asset of the project. Anonymous colors have no identity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Color {
    #[serde(rename = "name", default)]
    pub identity: Option<String>,
    #[serde(flatten)]
    pub value: RawColor,
}

impl Color {
    pub fn new(identity: impl Into<String>, r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            identity: Some(identity.into()),
            value: RawColor::new(r, g, b, a),
        }
    }

    pub fn anonymous(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            identity: None,
            value: RawColor::new(r, g, b, a),
        }
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }
}

/// Find the named project color a raw sample refers to.
///
/// Linear scan in project order; when several colors share the same value the
/// first one wins. Anonymous colors never match.
pub fn identity<'a>(matching: &RawColor, within: &'a [Color]) -> Option<&'a Color> {
    within
        .iter()
        .filter(|color| color.identity.is_some())
        .find(|color| color.value.approx_eq(matching))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_encodings() {
        let white = RawColor::new(255, 255, 255, 1.0);
        assert_eq!(white.rgb_hex(), "#ffffff");
        assert_eq!(white.argb_hex(), "#ffffffff");

        let blue = RawColor::new(51, 91, 210, 0.0);
        assert_eq!(blue.rgb_hex(), "#335bd2");
        assert_eq!(blue.argb_hex(), "#00335bd2");
    }

    #[test]
    fn test_argb_rounds_alpha() {
        assert_eq!(RawColor::new(0, 0, 0, 0.5).argb_hex(), "#80000000");
        assert_eq!(RawColor::new(1, 2, 3, 0.79999995).argb_hex(), "#cc010203");
    }

    #[test]
    fn test_argb_clamps_out_of_range_alpha() {
        assert_eq!(RawColor::new(0, 0, 0, 1.2).argb_hex(), "#ff000000");
        assert_eq!(RawColor::new(0, 0, 0, -0.3).argb_hex(), "#00000000");
    }

    #[test]
    fn test_identity_tolerates_alpha_noise() {
        let colors = vec![
            Color::new("Blue", 51, 91, 210, 1.0),
            Color::new("Clear Blue", 51, 91, 210, 0.8),
        ];
        let sample = RawColor::new(51, 91, 210, 0.79999995);
        let found = identity(&sample, &colors).expect("should match");
        assert_eq!(found.identity(), Some("Clear Blue"));
    }

    #[test]
    fn test_identity_no_match() {
        let colors = vec![Color::new("Blue", 51, 91, 210, 1.0)];
        assert!(identity(&RawColor::new(51, 91, 211, 1.0), &colors).is_none());
        assert!(identity(&RawColor::new(51, 91, 210, 0.5), &colors).is_none());
    }

    #[test]
    fn test_identity_first_match_wins() {
        let colors = vec![
            Color::anonymous(10, 10, 10, 1.0),
            Color::new("First", 10, 10, 10, 1.0),
            Color::new("Second", 10, 10, 10, 1.0),
        ];
        let found = identity(&RawColor::new(10, 10, 10, 1.0), &colors).unwrap();
        assert_eq!(found.identity(), Some("First"));
    }
}
