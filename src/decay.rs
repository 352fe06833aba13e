//! Synthetic height decay model for coastline segments.
//!
//! Heights erode linearly from a sampled base value, with a small bounded
//! perturbation so the animation looks natural rather than mechanical. The
//! perturbation can push a later year above an earlier one; that local
//! non-monotonicity is accepted simulated noise, not a defect.

use rand::Rng;

/// Year the simulated survey record starts.
pub const REFERENCE_YEAR: i32 = 2000;

/// Heights never drop below this floor, in meters.
pub const HEIGHT_FLOOR: f64 = 0.5;

/// Initial segment height range, in meters.
pub const BASE_HEIGHT_RANGE: (f64, f64) = (2.0, 5.0);

/// Annual height loss range, in meters per year.
pub const EROSION_RATE_RANGE: (f64, f64) = (0.1, 0.3);

/// Symmetric perturbation amplitude, in meters.
pub const NOISE_AMPLITUDE: f64 = 0.2;

/// Project a segment height to a given year.
///
/// `noise` is a pre-sampled perturbation in [-0.2, 0.2]. The result is
/// clamped to [`HEIGHT_FLOOR`] after both decay and perturbation, so the
/// output is always >= 0.5.
pub fn project_height(
    base_height: f64,
    erosion_rate: f64,
    year: i32,
    reference_year: i32,
    noise: f64,
) -> f64 {
    let elapsed = (year - reference_year) as f64;
    (base_height - erosion_rate * elapsed + noise).max(HEIGHT_FLOOR)
}

/// Sample a plausible height for one (segment, year) pair.
///
/// Base height, erosion rate, and perturbation are drawn fresh from the
/// injected random source on every call.
pub fn sample_height(year: i32, rng: &mut impl Rng) -> f64 {
    let erosion_rate = rng.gen_range(EROSION_RATE_RANGE.0..=EROSION_RATE_RANGE.1);
    let base_height = rng.gen_range(BASE_HEIGHT_RANGE.0..=BASE_HEIGHT_RANGE.1);
    let noise = rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE);
    project_height(base_height, erosion_rate, year, REFERENCE_YEAR, noise)
}
