//! The poster composer: palette + shape count + opacity in, [`Scene`] out.
//!
//! ```rust
//! use soft_geometry::poster::{Composer, PosterParams};
//! use soft_geometry::config::PosterConfig;
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let config = PosterConfig::default();
//! let mut rng = SmallRng::seed_from_u64(42);
//! let scene = Composer::new(&config)
//!     .compose(&PosterParams::new("Mint Cloud", 5, 0.4), &mut rng)
//!     .unwrap();
//! assert_eq!(scene.shapes.len(), 5);
//! ```
use geo_types::coord;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::config::{PosterConfig, TextStyle};
use crate::errors::PosterError;
use crate::palette::Rgb;
use crate::scene::{Scene, TextElement};
use crate::shapes::blob;

pub mod params;

pub use params::{PosterParams, ALPHA_RANGE, SHAPE_COUNT_RANGE};

/// Builds scenes from a borrowed, immutable [`PosterConfig`].
pub struct Composer<'a> {
    config: &'a PosterConfig,
}

impl<'a> Composer<'a> {
    pub fn new(config: &'a PosterConfig) -> Self {
        Composer { config }
    }

    /// Compose one poster. Randomness comes only from `rng`, so a seeded
    /// source gives the same poster every time.
    ///
    /// The shape count and alpha are used as given; keeping them in the
    /// slider ranges is the caller's job (see [`PosterParams::clamped`]).
    /// An unknown palette fails before anything is drawn.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        params: &PosterParams,
        rng: &mut R,
    ) -> Result<Scene, PosterError> {
        let palette = self.config.palettes.get(&params.palette)?;
        if palette.colors.is_empty() {
            return Err(PosterError::EmptyPalette(palette.name.clone()));
        }
        debug!(
            palette = %palette.name,
            shapes = params.shapes,
            alpha = params.alpha,
            "composing poster"
        );

        let mut colors = palette.colors.clone();
        colors.shuffle(rng);

        let canvas = &self.config.canvas;
        let mut scene = Scene::new(canvas.width, canvas.height, canvas.background, params.alpha);

        let ranges = &self.config.blob;
        for i in 0..params.shapes {
            let center = coord! {
                x: uniform(rng, ranges.center),
                y: uniform(rng, ranges.center),
            };
            let radius = uniform(rng, ranges.radius);
            let wobble = uniform(rng, ranges.wobble);
            let outline = blob(center, radius, wobble, ranges.points, rng);
            let fill = pick(&colors, rng);
            trace!(i, ?center, radius, wobble, fill = %fill.to_hex(), "blob");
            scene.add_shape(outline, fill);
        }

        let typography = &self.config.typography;
        let title_color = pick(&colors, rng);
        scene.add_text(label(&typography.title, &typography.title.text, title_color));
        scene.add_text(label(&typography.subtitle, &typography.subtitle.text, title_color));
        let (low, high) = typography.edition_range;
        let edition = if low < high { rng.gen_range(low..=high) } else { low };
        scene.add_text(label(
            &typography.edition,
            &format!("{}{}", typography.edition.text, edition),
            title_color,
        ));
        debug!(edition, "poster composed");
        Ok(scene)
    }
}

/// Uniform draw from an inclusive `(low, high)` range. A collapsed or
/// inverted range yields `low` without consuming randomness.
fn uniform<R: Rng + ?Sized>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    if low < high {
        rng.gen_range(low..=high)
    } else {
        low
    }
}

/// Uniform pick, with replacement. `colors` must not be empty.
fn pick<R: Rng + ?Sized>(colors: &[Rgb], rng: &mut R) -> Rgb {
    colors[rng.gen_range(0..colors.len())]
}

/// A text element from its style. Styles without a fixed color use
/// `palette_color`.
fn label(style: &TextStyle, content: &str, palette_color: Rgb) -> TextElement {
    TextElement {
        content: content.to_string(),
        position: coord! {x: style.x, y: style.y},
        size: style.size,
        weight: style.weight,
        anchor: style.anchor,
        color: style.color.unwrap_or(palette_color),
    }
}

/// One-shot poster with the stock config and a fresh entropy-seeded RNG.
pub fn generate_poster(
    palette_name: &str,
    n_shapes: usize,
    alpha: f64,
) -> Result<Scene, PosterError> {
    let config = PosterConfig::default();
    let mut rng = SmallRng::from_entropy();
    Composer::new(&config).compose(&PosterParams::new(palette_name, n_shapes, alpha), &mut rng)
}

/// Like [`generate_poster`], but reproducible.
pub fn generate_poster_seeded(
    palette_name: &str,
    n_shapes: usize,
    alpha: f64,
    seed: u64,
) -> Result<Scene, PosterError> {
    let config = PosterConfig::default();
    let mut rng = SmallRng::seed_from_u64(seed);
    Composer::new(&config).compose(&PosterParams::new(palette_name, n_shapes, alpha), &mut rng)
}
