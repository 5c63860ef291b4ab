//! Named constants for window timing, calibration and capacity limits
//!
//! Values here are the production defaults observed on the reference
//! installation; all of them can be overridden through the config structs
//! in [`crate::config`]. Names carry their unit to keep call sites honest.

/// Full circle in radians
pub const TWO_PI: f32 = core::f32::consts::TAU;

// ============================================================================
// Report window timing
// ============================================================================

/// Wind pulse count window: one instantaneous speed report every 3 s
pub const DEFAULT_WIND_WINDOW_MS: u32 = 3_000;

/// Rain bucket-tip count window: one precipitation report every 5 min
pub const DEFAULT_RAIN_WINDOW_MS: u32 = 300_000;

/// Long averaging period for wind speed, direction and gust: 10 min
pub const DEFAULT_AVERAGING_INTERVAL_MS: u32 = 600_000;

/// Environment quantities (pressure, temperature, humidity) report every 5 s
pub const DEFAULT_ENVIRONMENT_INTERVAL_MS: u32 = 5_000;

/// Gust sub-window length in wind reports: 4 reports of 3 s = 12 s bursts
pub const DEFAULT_GUST_SUBWINDOW_REPORTS: u16 = 4;

// ============================================================================
// Pulse input
// ============================================================================

/// Minimum spacing between debounced edges
///
/// The debouncer is an external collaborator; this constant documents the
/// contract it is expected to enforce before edges reach the counter.
pub const MIN_EDGE_SPACING_MS: u32 = 15;

/// Saturation ceiling for a pulse counter within one window
///
/// An anemometer at survival wind speeds produces well under 1 kHz; any
/// count near this ceiling is a fast-pulsing electrical fault. Counts clamp
/// here rather than wrap so the fault cannot read back as a plausible low
/// value.
pub const MAX_PULSES_PER_WINDOW: u32 = 10_000;

// ============================================================================
// Calibration
// ============================================================================

/// Anemometer calibration: metres per second of wind per Hz of pulses
pub const DEFAULT_MPS_PER_HZ: f32 = 1.02;

/// Rain gauge calibration: millimetres of precipitation per bucket tip
pub const DEFAULT_MM_PER_PULSE: f32 = 0.18;

// ============================================================================
// Capacity limits
// ============================================================================

/// Maximum channels of each kind per station
pub const MAX_CHANNELS: usize = 4;

/// Maximum bytes in an inline output path (e.g. "environment.wind.gust")
pub const MAX_PATH_LEN: usize = 47;
