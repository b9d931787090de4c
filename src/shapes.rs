//! Wobbly circles.
use geo_types::{coord, Coord, LineString};
use rand::Rng;
use std::f64::consts::PI;
use std::ops::RangeInclusive;

/// Outline resolution used by the poster composer.
pub const DEFAULT_BLOB_POINTS: usize = 100;

/// Wobble frequencies (lobes per revolution) a blob may be given.
pub const BLOB_FREQUENCY_RANGE: RangeInclusive<u32> = 2..=5;

/// A blob: a circle whose radius is modulated by a sine wave of a random
/// integer frequency.
///
/// `wobble` is a fraction of `radius`, so every point sits between
/// `radius * (1 - wobble)` and `radius * (1 + wobble)` from `center`.
/// Angles are spaced evenly over `[0, 2π]` including both ends, which means
/// the first and last points land on top of each other. One frequency is
/// drawn from `rng` per blob.
///
/// Zero or negative radii and tiny point counts are not rejected; they just
/// produce a degenerate outline.
pub fn blob<R: Rng + ?Sized>(
    center: Coord<f64>,
    radius: f64,
    wobble: f64,
    points: usize,
    rng: &mut R,
) -> LineString<f64> {
    let frequency = rng.gen_range(BLOB_FREQUENCY_RANGE);
    blob_with_frequency(center, radius, wobble, points, frequency)
}

/// Same as [`blob`] with the frequency picked by the caller.
pub fn blob_with_frequency(
    center: Coord<f64>,
    radius: f64,
    wobble: f64,
    points: usize,
    frequency: u32,
) -> LineString<f64> {
    let k = f64::from(frequency);
    LineString::new(
        (0..points)
            .map(|i| {
                let angle = sweep_angle(i, points);
                let r = radius * (1.0 + wobble * (k * angle).sin());
                coord! {x: center.x + r * angle.cos(), y: center.y + r * angle.sin()}
            })
            .collect(),
    )
}

/// The i'th of `count` angles spread over [0, 2π], endpoints included.
fn sweep_angle(i: usize, count: usize) -> f64 {
    if count < 2 {
        return 0.0;
    }
    2.0 * PI * (i as f64) / ((count - 1) as f64)
}
