//! Linear calibration from raw counts to physical units

/// Pure linear map `value = raw * gain + offset`
///
/// Gain and offset are fixed at construction; scaling has no state and no
/// error paths. NaN and infinity inputs propagate unchanged: sanitizing
/// garbage from a faulty sensor is the reading collaborator's job, and
/// masking it here would hide the fault from downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScaler {
    gain: f32,
    offset: f32,
}

impl LinearScaler {
    /// Scaler with explicit gain and offset
    pub const fn new(gain: f32, offset: f32) -> Self {
        Self { gain, offset }
    }

    /// Identity scaler (gain 1, offset 0)
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Pulse-frequency calibration over a count window
    ///
    /// Converts a per-window count into a rate quantity:
    /// `gain = units_per_hz * 1000 / window_ms`. The anemometer case is
    /// `per_window(1.02, 3000)`: 3 pulses in a 3 s window reads 1.02 m/s.
    pub fn per_window(units_per_hz: f32, window_ms: u32) -> Self {
        Self::new(units_per_hz * 1000.0 / window_ms as f32, 0.0)
    }

    /// Apply the calibration
    pub fn scale(&self, raw: f32) -> f32 {
        raw * self.gain + self.offset
    }

    /// Configured gain
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Configured offset
    pub fn offset(&self) -> f32 {
        self.offset
    }
}
