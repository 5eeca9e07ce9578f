use derive_more::{AsRef, Deref, From, Into};
use palette::{Srgb, Srgba};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// An sRGB color parsed from `#rrggbb`, carried with full opacity until a
/// draw call overrides the alpha.
#[derive(
    Debug, Clone, Copy, PartialEq, Deref, From, Into, AsRef, SerializeDisplay, DeserializeFromStr,
)]
pub struct HexColor(Srgba<f64>);

impl HexColor {
    pub fn srgba(&self) -> Srgba<f64> {
        self.0
    }
}

impl FromStr for HexColor {
    type Err = palette::rgb::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rgb = s.trim().parse::<Srgb<u8>>()?.into_format::<f64>();
        Ok(Self(Srgba::new(rgb.red, rgb.green, rgb.blue, 1.0)))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgb = self.0.color.into_format::<u8>();
        write!(f, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}

/// Theming collaborator shared by the ring and legend passes: ring hue,
/// background gradient endpoints and label styling.
#[derive(Debug, Clone)]
pub struct ChartTheme {
    pub ring_color: HexColor,
    pub background_from: HexColor,
    pub background_to: HexColor,
    pub label_color: HexColor,
    pub label_font_family: String,
    pub label_font_size: f64,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            ring_color: HexColor(Srgba::new(26.0 / 255.0, 1.0, 146.0 / 255.0, 1.0)),
            background_from: HexColor(Srgba::new(30.0 / 255.0, 41.0 / 255.0, 35.0 / 255.0, 1.0)),
            background_to: HexColor(Srgba::new(8.0 / 255.0, 19.0 / 255.0, 13.0 / 255.0, 1.0)),
            label_color: HexColor(Srgba::new(1.0, 1.0, 1.0, 1.0)),
            label_font_family: "Sans".to_string(),
            label_font_size: 12.0,
        }
    }
}

impl ChartTheme {
    /// Ring color at the given opacity. The base theme uses a single hue, so
    /// `_index` only exists to keep the collaborator contract; alpha is
    /// clamped because some call sites intentionally overshoot 1.0.
    pub fn color(&self, opacity: f64, _index: usize) -> Srgba<f64> {
        let mut color = self.ring_color.srgba();
        color.alpha = opacity.clamp(0.0, 1.0);
        color
    }

    /// Vertical background gradient spanning the chart height.
    pub fn background_gradient(&self, height: f64) -> cairo::LinearGradient {
        let gradient = cairo::LinearGradient::new(0.0, 0.0, 0.0, height);
        let (r, g, b, a) = self.background_from.srgba().into_components();
        gradient.add_color_stop_rgba(0.0, r, g, b, a);
        let (r, g, b, a) = self.background_to.srgba().into_components();
        gradient.add_color_stop_rgba(1.0, r, g, b, a);
        gradient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        let red: HexColor = "#ff0000".parse().unwrap();
        assert_eq!(red.srgba(), Srgba::new(1.0, 0.0, 0.0, 1.0));

        let blue: HexColor = "0000ff".parse().unwrap();
        assert_eq!(blue.srgba(), Srgba::new(0.0, 0.0, 1.0, 1.0));

        assert!("not-a-color".parse::<HexColor>().is_err());
    }

    #[test]
    fn displays_as_lowercase_hex() {
        let color: HexColor = "#1AFF92".parse().unwrap();
        assert_eq!(color.to_string(), "#1aff92");
    }

    #[test]
    fn color_clamps_opacity() {
        let theme = ChartTheme::default();
        assert_eq!(theme.color(1.8, 2).alpha, 1.0);
        assert_eq!(theme.color(-0.5, 0).alpha, 0.0);
        assert!((theme.color(0.2, 0).alpha - 0.2).abs() < 1e-9);
    }

    #[test]
    fn hex_color_serde_round_trip() {
        let color: HexColor = "#336699".parse().unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#336699\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, color);
    }
}
