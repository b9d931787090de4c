pub use csscolorparser::Color as CssColor;
pub use csscolorparser::ParseColorError;
use serde::{Deserialize, Serialize};

/// An RGB color with floating point channels in [0,1].
///
/// In config files a color may be written either as an `(r, g, b)` tuple or
/// as any CSS color string (`"#fdeed6"`, `"lavender"`, `"rgb(250 235 240)"`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(try_from = "ColorSpec", into = "(f64, f64, f64)")]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorSpec {
    Tuple(f64, f64, f64),
    Css(String),
}

impl TryFrom<ColorSpec> for Rgb {
    type Error = String;

    fn try_from(spec: ColorSpec) -> Result<Self, Self::Error> {
        match spec {
            ColorSpec::Tuple(r, g, b) => Ok(Rgb::new(r, g, b)),
            ColorSpec::Css(css) => Rgb::parse(&css).map_err(|e| e.to_string()),
        }
    }
}

impl From<Rgb> for (f64, f64, f64) {
    fn from(rgb: Rgb) -> Self {
        (rgb.r, rgb.g, rgb.b)
    }
}

impl From<(f64, f64, f64)> for Rgb {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Rgb::new(r, g, b)
    }
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Rgb { r, g, b }
    }

    /// Flat gray, same value on every channel.
    pub const fn gray(value: f64) -> Self {
        Rgb::new(value, value, value)
    }

    /// Parse any CSS color string. Alpha is discarded.
    pub fn parse(css: &str) -> Result<Self, ParseColorError> {
        let color = csscolorparser::parse(css)?;
        Ok(Rgb::new(color.r as f64, color.g as f64, color.b as f64))
    }

    /// Quantized to 8 bits per channel, fully opaque.
    pub fn to_css(&self) -> CssColor {
        CssColor::from_rgba8(
            Self::quantize(self.r),
            Self::quantize(self.g),
            Self::quantize(self.b),
            255,
        )
    }

    /// `#rrggbb`, suitable for an SVG fill attribute.
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_css().to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    fn quantize(channel: f64) -> u8 {
        (channel.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::new(1.0, 1.0, 1.0).to_hex(), "#ffffff");
        assert_eq!(Rgb::new(0.0, 0.0, 0.0).to_hex(), "#000000");
        // Out of range channels clamp instead of wrapping.
        assert_eq!(Rgb::new(1.5, -0.2, 0.0).to_hex(), "#ff0000");
    }

    #[test]
    fn test_parse_css() {
        let red = Rgb::parse("#ff0000").unwrap();
        assert!((red.r - 1.0).abs() < 1e-6);
        assert!(red.g.abs() < 1e-6);
        assert!(red.b.abs() < 1e-6);
        assert!(Rgb::parse("not a color").is_err());
    }

    #[test]
    fn test_ron_tuple_and_css() {
        let colors: Vec<Rgb> = ron::from_str("[(0.5, 0.25, 1.0), \"#000000\"]").unwrap();
        assert_eq!(colors[0], Rgb::new(0.5, 0.25, 1.0));
        assert_eq!(colors[1].to_hex(), "#000000");
    }

    #[test]
    fn test_ron_serializes_as_tuple() {
        let text = ron::to_string(&Rgb::new(0.5, 0.25, 1.0)).unwrap();
        assert_eq!(text, "(0.5,0.25,1.0)");
    }
}
