use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Shape counts a UI should offer.
pub const SHAPE_COUNT_RANGE: RangeInclusive<usize> = 3..=12;

/// Opacities a UI should offer.
pub const ALPHA_RANGE: RangeInclusive<f64> = 0.2..=0.9;

/// The three knobs a user turns before pressing "generate".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PosterParams {
    pub palette: String,
    pub shapes: usize,
    pub alpha: f64,
}

impl Default for PosterParams {
    fn default() -> Self {
        PosterParams {
            palette: "Peach Sky".to_string(),
            shapes: 6,
            alpha: 0.6,
        }
    }
}

impl PosterParams {
    pub fn new(palette: &str, shapes: usize, alpha: f64) -> Self {
        PosterParams {
            palette: palette.to_string(),
            shapes,
            alpha,
        }
    }

    /// Copy with `shapes` and `alpha` forced into the slider ranges.
    pub fn clamped(&self) -> Self {
        PosterParams {
            palette: self.palette.clone(),
            shapes: self
                .shapes
                .clamp(*SHAPE_COUNT_RANGE.start(), *SHAPE_COUNT_RANGE.end()),
            alpha: self.alpha.clamp(*ALPHA_RANGE.start(), *ALPHA_RANGE.end()),
        }
    }
}
