//! Circular mean of angular samples
//!
//! ## Why circular
//!
//! The arithmetic mean of angles is wrong across the wrap boundary: the
//! mean of 1° and 359° must be 0°, not 180°. The statistically correct
//! average sums unit vectors instead:
//!
//! ```text
//! mean = atan2(Σ sin θᵢ, Σ cos θᵢ)
//! ```
//!
//! Samples near north contribute vectors that nearly cancel in the sine
//! component and reinforce in the cosine component, so the arctangent
//! lands near north regardless of which side of the boundary each sample
//! fell on.
//!
//! `sinf`/`cosf`/`atan2f` come from `libm` so the computation is identical
//! with and without `std`.

use crate::constants::TWO_PI;

/// Accumulates (sin, cos) pairs and produces a mean angle on demand
///
/// The sine and cosine sums always reset together; resetting one without
/// the other would bias every subsequent mean toward a stale component.
#[derive(Debug, Clone)]
pub struct CircularMeanAccumulator {
    sum_sin: f32,
    sum_cos: f32,
    samples: u32,
    last_mean: f32,
}

impl CircularMeanAccumulator {
    /// Empty accumulator; the held mean starts at 0.0 rad
    pub const fn new() -> Self {
        Self {
            sum_sin: 0.0,
            sum_cos: 0.0,
            samples: 0,
            last_mean: 0.0,
        }
    }

    /// Add one angular sample in radians
    pub fn add_sample(&mut self, angle_rad: f32) {
        self.sum_sin += libm::sinf(angle_rad);
        self.sum_cos += libm::cosf(angle_rad);
        self.samples = self.samples.saturating_add(1);
    }

    /// Samples accumulated since the last reset
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Compute the mean angle in `[0, 2π)` and reset the accumulator
    ///
    /// If no samples arrived since the last reset, returns the previous
    /// mean unchanged (initially 0.0): a wind vane's average direction
    /// stays meaningful across an empty window, and holding the last
    /// value is the deterministic alternative to emitting NaN.
    pub fn mean_and_reset(&mut self) -> f32 {
        if self.samples == 0 {
            return self.last_mean;
        }

        let mean = libm::atan2f(self.sum_sin, self.sum_cos);
        let mean = if mean < 0.0 { mean + TWO_PI } else { mean };

        self.sum_sin = 0.0;
        self.sum_cos = 0.0;
        self.samples = 0;
        self.last_mean = mean;
        mean
    }
}

impl Default for CircularMeanAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shortest angular distance between two angles
    fn angular_diff(a: f32, b: f32) -> f32 {
        let d = libm::fabsf(a - b) % TWO_PI;
        if d > TWO_PI / 2.0 {
            TWO_PI - d
        } else {
            d
        }
    }

    #[test]
    fn mean_across_wrap_boundary() {
        let mut acc = CircularMeanAccumulator::new();
        acc.add_sample(0.01);
        acc.add_sample(TWO_PI - 0.01);

        // Mean of samples straddling north is north, not south
        let mean = acc.mean_and_reset();
        assert!(angular_diff(mean, 0.0) < 1e-3, "mean was {mean}");
    }

    #[test]
    fn mean_of_identical_samples() {
        let mut acc = CircularMeanAccumulator::new();
        for _ in 0..5 {
            acc.add_sample(1.25);
        }
        let mean = acc.mean_and_reset();
        assert!(angular_diff(mean, 1.25) < 1e-5);
    }

    #[test]
    fn result_is_normalized() {
        let mut acc = CircularMeanAccumulator::new();
        acc.add_sample(TWO_PI - 0.5);

        let mean = acc.mean_and_reset();
        assert!((0.0..TWO_PI).contains(&mean));
        assert!(angular_diff(mean, TWO_PI - 0.5) < 1e-5);
    }

    #[test]
    fn empty_window_holds_previous_mean() {
        let mut acc = CircularMeanAccumulator::new();

        // Nothing sampled yet: documented initial fallback
        assert_eq!(acc.mean_and_reset(), 0.0);

        acc.add_sample(2.0);
        let first = acc.mean_and_reset();

        // Empty window afterwards returns the held mean, not NaN
        assert_eq!(acc.mean_and_reset(), first);
        assert_eq!(acc.samples(), 0);
    }

    #[test]
    fn reset_clears_both_sums_together() {
        let mut acc = CircularMeanAccumulator::new();
        acc.add_sample(0.5);
        let _ = acc.mean_and_reset();

        acc.add_sample(3.0);
        let mean = acc.mean_and_reset();

        // A stale sine or cosine component would drag this off 3.0
        assert!(angular_diff(mean, 3.0) < 1e-5);
    }
}
