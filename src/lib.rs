//! Soft Geometry: generative poster art
//!
//! Scatters a handful of wobbly, translucent blobs over a pale canvas, picks
//! their colors from a small pastel palette, and stamps a title, subtitle
//! and edition number on top. Three knobs drive it: palette, shape count and
//! opacity.
//!
//! The pieces are deliberately separate:
//!
//! * [`shapes::blob`] builds one wobbly outline.
//! * [`poster::Composer`] turns a [`config::PosterConfig`] plus
//!   [`poster::PosterParams`] into a [`scene::Scene`].
//! * [`scene::Scene::to_svg`] draws a scene as an SVG document.
//!
//! Every random draw goes through an `rand::Rng` you pass in, so a seeded
//! generator gives you the same poster every time.
//!
//! ```rust
//! use soft_geometry::prelude::*;
//!
//! let scene = generate_poster_seeded("Lavender Mist", 7, 0.5, 1234).unwrap();
//! assert_eq!(scene.shapes.len(), 7);
//! let _document = scene.to_svg();
//! ```

/// Error types.
pub mod errors;

/// Palettes and colors.
pub mod palette;

/// Loadable poster configuration.
pub mod config;

/// Blob outlines.
pub mod shapes;

/// Typed scene description handed to renderers.
pub mod scene;

/// SVG rendering of scenes.
pub mod render;

/// Poster composition.
pub mod poster;

/// Everything you need to make a poster in one import.
pub mod prelude {
    pub use crate::config::PosterConfig;
    pub use crate::errors::PosterError;
    pub use crate::palette::{Palette, PaletteSet, Rgb};
    pub use crate::poster::{
        generate_poster, generate_poster_seeded, Composer, PosterParams, ALPHA_RANGE,
        SHAPE_COUNT_RANGE,
    };
    pub use crate::scene::{FilledShape, FontWeight, Scene, TextAnchor, TextElement};
    pub use crate::shapes::{blob, blob_with_frequency, DEFAULT_BLOB_POINTS};
}
