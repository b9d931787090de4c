//! Poster configuration. Everything the composer needs besides the per-render
//! parameters lives here, as plain immutable data. The default is the stock
//! "Soft Geometry" look; any of it can be overridden from a RON file.
use std::io::Read;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::PosterError;
use crate::palette::{PaletteSet, Rgb};
use crate::scene::{FontWeight, TextAnchor};
use crate::shapes::DEFAULT_BLOB_POINTS;

/// Canvas size is in inches; the scene itself is always drawn in the unit
/// square and stretched over it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub background: Rgb,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 6.0,
            height: 8.0,
            background: Rgb::new(0.95, 0.95, 0.97),
        }
    }
}

/// Sampling ranges for each blob. All ranges are inclusive `(low, high)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BlobConfig {
    pub points: usize,
    pub center: (f64, f64),
    pub radius: (f64, f64),
    pub wobble: (f64, f64),
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_BLOB_POINTS,
            center: (0.2, 0.8),
            radius: (0.2, 0.45),
            wobble: (0.05, 0.25),
        }
    }
}

/// One text label. A `color` of `None` means "pick one from the palette".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub anchor: TextAnchor,
    #[serde(default)]
    pub color: Option<Rgb>,
}

/// Labels are loaded as partial overrides of their slot's default, so a
/// config only has to mention the fields it changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "TypographyOverride")]
pub struct TypographyConfig {
    pub title: TextStyle,
    pub subtitle: TextStyle,
    /// `text` is a prefix; the edition number is appended to it.
    pub edition: TextStyle,
    pub edition_range: (u32, u32),
}

// RON only reads `Option` fields written as `Some(..)`, so every field goes
// through `present` and a missing field stays `None`.
#[derive(Deserialize, Default)]
#[serde(default)]
struct TextStyleOverride {
    #[serde(deserialize_with = "present")]
    text: Option<String>,
    #[serde(deserialize_with = "present")]
    x: Option<f64>,
    #[serde(deserialize_with = "present")]
    y: Option<f64>,
    #[serde(deserialize_with = "present")]
    size: Option<f64>,
    #[serde(deserialize_with = "present")]
    weight: Option<FontWeight>,
    #[serde(deserialize_with = "present")]
    anchor: Option<TextAnchor>,
    // Outer `None` keeps the slot's color, `Some(None)` asks for a palette pick.
    #[serde(deserialize_with = "present")]
    color: Option<Option<Rgb>>,
}

impl TextStyleOverride {
    fn apply(self, base: TextStyle) -> TextStyle {
        TextStyle {
            text: self.text.unwrap_or(base.text),
            x: self.x.unwrap_or(base.x),
            y: self.y.unwrap_or(base.y),
            size: self.size.unwrap_or(base.size),
            weight: self.weight.unwrap_or(base.weight),
            anchor: self.anchor.unwrap_or(base.anchor),
            color: self.color.unwrap_or(base.color),
        }
    }
}

fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct TypographyOverride {
    title: TextStyleOverride,
    subtitle: TextStyleOverride,
    edition: TextStyleOverride,
    #[serde(deserialize_with = "present")]
    edition_range: Option<(u32, u32)>,
}

impl From<TypographyOverride> for TypographyConfig {
    fn from(over: TypographyOverride) -> Self {
        let base = TypographyConfig::default();
        TypographyConfig {
            title: over.title.apply(base.title),
            subtitle: over.subtitle.apply(base.subtitle),
            edition: over.edition.apply(base.edition),
            edition_range: over.edition_range.unwrap_or(base.edition_range),
        }
    }
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            title: TextStyle {
                text: "Soft Geometry".to_string(),
                x: 0.5,
                y: 0.82,
                size: 28.0,
                weight: FontWeight::Bold,
                anchor: TextAnchor::Middle,
                color: None,
            },
            subtitle: TextStyle {
                text: "Generative Poster".to_string(),
                x: 0.5,
                y: 0.77,
                size: 12.0,
                weight: FontWeight::Normal,
                anchor: TextAnchor::Middle,
                color: Some(Rgb::gray(0.3)),
            },
            edition: TextStyle {
                text: "Edition #".to_string(),
                x: 0.9,
                y: 0.06,
                size: 8.0,
                weight: FontWeight::Normal,
                anchor: TextAnchor::End,
                color: Some(Rgb::gray(0.4)),
            },
            edition_range: (1000, 9999),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PosterConfig {
    pub canvas: CanvasConfig,
    pub blob: BlobConfig,
    pub typography: TypographyConfig,
    pub palettes: PaletteSet,
}

impl PosterConfig {
    /// Checks the ranges are the right way round and the canvas has an area.
    pub fn validate(&self) -> Result<(), PosterError> {
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(PosterError::InvalidConfig(format!(
                "canvas must have a positive size, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        for (name, (low, high)) in [
            ("blob.center", self.blob.center),
            ("blob.radius", self.blob.radius),
            ("blob.wobble", self.blob.wobble),
        ] {
            if !(low <= high) {
                return Err(PosterError::InvalidConfig(format!(
                    "{} range is empty: ({}, {})",
                    name, low, high
                )));
            }
        }
        let (low, high) = self.typography.edition_range;
        if low > high {
            return Err(PosterError::InvalidConfig(format!(
                "typography.edition_range is empty: ({}, {})",
                low, high
            )));
        }
        Ok(())
    }

    pub fn from_ron_str(text: &str) -> Result<PosterConfig> {
        let config: PosterConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<PosterConfig> {
        let mut reader = std::fs::File::open(path)?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::from_ron_str(data.as_str())
    }

    pub fn to_ron(&self) -> Result<String> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        PosterConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_ron_falls_back_to_defaults() {
        let config = PosterConfig::from_ron_str(
            r##"(
                canvas: (width: 12.0),
                palettes: [
                    (name: "Mono", colors: [(0.1, 0.1, 0.1), "#ffffff"]),
                ],
            )"##,
        )
        .unwrap();
        assert_eq!(config.canvas.width, 12.0);
        assert_eq!(config.canvas.height, 8.0);
        assert_eq!(config.blob, BlobConfig::default());
        assert_eq!(config.palettes.names(), vec!["Mono"]);
        assert_eq!(
            config.palettes.get("Mono").unwrap().colors[1],
            Rgb::new(1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_partial_text_style() {
        let config = PosterConfig::from_ron_str("(typography: (title: (size: 40.0)))").unwrap();
        let stock = TypographyConfig::default();
        assert_eq!(config.typography.title.size, 40.0);
        assert_eq!(config.typography.title.text, "Soft Geometry");
        assert_eq!(config.typography.title.x, 0.5);
        assert_eq!(config.typography.title.y, 0.82);
        assert_eq!(config.typography.title.weight, FontWeight::Bold);
        assert_eq!(config.typography.title.color, None);
        assert_eq!(config.typography.subtitle, stock.subtitle);
        assert_eq!(config.typography.edition, stock.edition);
        assert_eq!(config.typography.edition_range, stock.edition_range);
    }

    #[test]
    fn test_text_color_override() {
        let config = PosterConfig::from_ron_str(
            r##"(typography: (
                subtitle: (color: None),
                edition: (color: Some("#ff0000"), text: "No. "),
                edition_range: (1, 9),
            ))"##,
        )
        .unwrap();
        assert_eq!(config.typography.subtitle.color, None);
        assert_eq!(config.typography.subtitle.size, 12.0);
        assert_eq!(config.typography.edition.color, Some(Rgb::new(1.0, 0.0, 0.0)));
        assert_eq!(config.typography.edition.text, "No. ");
        assert_eq!(config.typography.edition.anchor, TextAnchor::End);
        assert_eq!(config.typography.edition_range, (1, 9));
    }

    #[test]
    fn test_round_trip_default() {
        let text = PosterConfig::default().to_ron().unwrap();
        let back = PosterConfig::from_ron_str(&text).unwrap();
        assert_eq!(back, PosterConfig::default());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = PosterConfig::from_ron_str("(blob: (radius: (0.5, 0.1)))").unwrap_err();
        assert!(err.to_string().contains("blob.radius"));
    }

    #[test]
    fn test_rejects_bad_css_color() {
        assert!(PosterConfig::from_ron_str("(canvas: (background: \"nope\"))").is_err());
    }
}
