//! Multi-window running sum for long-period averages

/// Accumulates raw per-window outputs across many report windows
///
/// Distinguished from [`super::PulseCounter`] by lifetime: a counter is
/// consumed every short window, while the integrator keeps summing until
/// the long-period reporter reads it. The ratio of the two cadences is
/// arbitrary: `add` may be called any number of times between reads.
///
/// There is no bounds checking on the sum. An `f32` sum of per-window
/// counts loses integer precision past 2^24 and saturates at `f32::MAX`;
/// both are unreachable under sane reporting periods (a 10-minute average
/// of 3-second windows sums 200 values) and the read-and-reset contract
/// keeps the accumulation period bounded. Pathological configurations get
/// degraded precision, not wraparound.
#[derive(Debug, Clone, Default)]
pub struct WindowIntegrator {
    sum: f32,
    windows: u32,
}

impl WindowIntegrator {
    /// Empty integrator
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            windows: 0,
        }
    }

    /// Add one underlying window's output to the running sum
    pub fn add(&mut self, value: f32) {
        self.sum += value;
        self.windows = self.windows.saturating_add(1);
    }

    /// Windows accumulated since the last reset
    pub fn windows(&self) -> u32 {
        self.windows
    }

    /// Return the accumulated sum and reset sum and window count to zero
    pub fn read_and_reset(&mut self) -> f32 {
        let sum = self.sum;
        self.sum = 0.0;
        self.windows = 0;
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_across_windows() {
        let mut integrator = WindowIntegrator::new();
        integrator.add(3.0);
        integrator.add(4.5);
        assert_eq!(integrator.windows(), 2);
        assert_eq!(integrator.read_and_reset(), 7.5);
    }

    #[test]
    fn read_resets_both_fields() {
        let mut integrator = WindowIntegrator::new();
        integrator.add(1.0);
        let _ = integrator.read_and_reset();

        assert_eq!(integrator.windows(), 0);
        assert_eq!(integrator.read_and_reset(), 0.0);
    }
}
