//! Named color palettes. A [`PaletteSet`] is plain immutable data handed to
//! the composer; there is no global palette table.
use serde::{Deserialize, Serialize};

use crate::errors::PosterError;

pub mod color;

pub use color::Rgb;

/// A named, ordered list of colors.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(name: &str, colors: Vec<Rgb>) -> Self {
        Palette {
            name: name.to_string(),
            colors,
        }
    }

    pub fn contains(&self, color: &Rgb) -> bool {
        self.colors.contains(color)
    }

    pub fn peach_sky() -> Self {
        Palette::new(
            "Peach Sky",
            vec![
                Rgb::new(0.996, 0.867, 0.839),
                Rgb::new(0.992, 0.745, 0.682),
                Rgb::new(0.592, 0.741, 0.867),
                Rgb::new(0.8, 0.88, 0.97),
            ],
        )
    }

    pub fn mint_cloud() -> Self {
        Palette::new(
            "Mint Cloud",
            vec![
                Rgb::new(0.85, 0.96, 0.91),
                Rgb::new(0.67, 0.82, 0.9),
                Rgb::new(0.98, 0.89, 0.87),
                Rgb::new(0.94, 0.96, 0.98),
            ],
        )
    }

    pub fn lavender_mist() -> Self {
        Palette::new(
            "Lavender Mist",
            vec![
                Rgb::new(0.89, 0.86, 0.98),
                Rgb::new(0.82, 0.77, 0.93),
                Rgb::new(0.98, 0.92, 0.95),
                Rgb::new(0.94, 0.98, 0.99),
            ],
        )
    }
}

/// Ordered `{name: palette}` table. Order is declaration order, which is
/// the order a palette picker should list them in. Loading from a config
/// goes through [`PaletteSet::new`], so duplicate names collapse the same way.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "Vec<Palette>", into = "Vec<Palette>")]
pub struct PaletteSet {
    palettes: Vec<Palette>,
}

impl From<Vec<Palette>> for PaletteSet {
    fn from(palettes: Vec<Palette>) -> Self {
        PaletteSet::new(palettes)
    }
}

impl From<PaletteSet> for Vec<Palette> {
    fn from(set: PaletteSet) -> Self {
        set.palettes
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        PaletteSet::builtin()
    }
}

impl PaletteSet {
    /// The three stock palettes.
    pub fn builtin() -> Self {
        PaletteSet {
            palettes: vec![
                Palette::peach_sky(),
                Palette::mint_cloud(),
                Palette::lavender_mist(),
            ],
        }
    }

    /// Build a set from arbitrary palettes. A later palette with the same
    /// name replaces the earlier one but keeps the earlier position.
    pub fn new(palettes: Vec<Palette>) -> Self {
        let mut set = PaletteSet { palettes: vec![] };
        for palette in palettes {
            set.insert(palette);
        }
        set
    }

    fn insert(&mut self, palette: Palette) {
        match self.palettes.iter_mut().find(|p| p.name == palette.name) {
            Some(existing) => *existing = palette,
            None => self.palettes.push(palette),
        }
    }

    /// Look a palette up by its exact name.
    pub fn get(&self, name: &str) -> Result<&Palette, PosterError> {
        self.palettes
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PosterError::UnknownPalette(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.palettes.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
