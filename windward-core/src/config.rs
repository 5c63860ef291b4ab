//! Channel configuration
//!
//! Two layers per channel, split by how a host treats them:
//!
//! - **Tuning structs** (`WindConfig`, `RainConfig`, ...) hold the numeric
//!   calibration and timing values an installer adjusts. They derive
//!   `serde` traits behind the `serde` feature so a host with persistent
//!   configuration can round-trip them; persistence itself is outside
//!   this crate.
//! - **Output specs** (`OutputSpec` and the per-channel bundles) hold the
//!   static paths and presentation metadata. These are fixed at firmware
//!   build time and carry `&'static str`, so they are not serializable by
//!   design.
//!
//! Defaults are the production values of the reference installation:
//! 3 s wind windows averaged over 10 min, 12 s gust sub-windows, 5 min
//! rain windows, 1.02 m/s per Hz, 0.18 mm per bucket tip.

use crate::constants::{
    DEFAULT_AVERAGING_INTERVAL_MS, DEFAULT_GUST_SUBWINDOW_REPORTS, DEFAULT_MM_PER_PULSE,
    DEFAULT_MPS_PER_HZ, DEFAULT_RAIN_WINDOW_MS, DEFAULT_WIND_WINDOW_MS,
};
use crate::measurement::Metadata;

/// Path and presentation metadata for one published output
#[derive(Debug, Clone, Copy)]
pub struct OutputSpec {
    /// Logical output path, e.g. `"environment.wind.speed"`
    pub path: &'static str,
    /// Static metadata published alongside every value
    pub metadata: Metadata,
}

impl OutputSpec {
    /// Spec with the given path, units and description
    pub const fn new(path: &'static str, units: &'static str, description: &'static str) -> Self {
        Self {
            path,
            metadata: Metadata::new(units, description),
        }
    }
}

// ============================================================================
// Wind
// ============================================================================

/// Tuning for a wind speed channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindConfig {
    /// Anemometer calibration: m/s of wind per Hz of pulses
    pub mps_per_hz: f32,
    /// Pulse count window, ms; one instantaneous report per window
    pub window_ms: u32,
    /// Long averaging period, ms
    pub average_interval_ms: u32,
    /// Gust reporting period, ms
    pub gust_interval_ms: u32,
    /// Count windows per gust sub-window
    pub gust_subwindow_reports: u16,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            mps_per_hz: DEFAULT_MPS_PER_HZ,
            window_ms: DEFAULT_WIND_WINDOW_MS,
            average_interval_ms: DEFAULT_AVERAGING_INTERVAL_MS,
            gust_interval_ms: DEFAULT_AVERAGING_INTERVAL_MS,
            gust_subwindow_reports: DEFAULT_GUST_SUBWINDOW_REPORTS,
        }
    }
}

/// Output specs for a wind channel's three quantities
#[derive(Debug, Clone, Copy)]
pub struct WindOutputs {
    /// Instantaneous speed, published every count window
    pub speed: OutputSpec,
    /// Long-period average speed
    pub average: OutputSpec,
    /// Peak burst speed within the gust period
    pub gust: OutputSpec,
}

impl Default for WindOutputs {
    fn default() -> Self {
        Self {
            speed: OutputSpec {
                path: "environment.wind.speedApparent",
                metadata: Metadata {
                    units: "m/s",
                    description: "Apparent wind speed",
                    display_name: "Wind Speed",
                    short_name: "AWS",
                },
            },
            average: OutputSpec {
                path: "environment.wind.speedAverage",
                metadata: Metadata {
                    units: "m/s",
                    description: "10 minute average wind speed",
                    display_name: "Average Wind Speed",
                    short_name: "AWS avg",
                },
            },
            gust: OutputSpec {
                path: "environment.wind.gust",
                metadata: Metadata {
                    units: "m/s",
                    description: "Maximum gust within the reporting period",
                    display_name: "Wind Gust",
                    short_name: "Gust",
                },
            },
        }
    }
}

// ============================================================================
// Rain
// ============================================================================

/// Tuning for a rain gauge channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RainConfig {
    /// Gauge calibration: mm of precipitation per bucket tip
    pub mm_per_pulse: f32,
    /// Tip count window, ms; one precipitation report per window
    pub window_ms: u32,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            mm_per_pulse: DEFAULT_MM_PER_PULSE,
            window_ms: DEFAULT_RAIN_WINDOW_MS,
        }
    }
}

/// Output spec for a rain channel
#[derive(Debug, Clone, Copy)]
pub struct RainOutputs {
    /// Precipitation per window
    pub volume: OutputSpec,
}

impl Default for RainOutputs {
    fn default() -> Self {
        Self {
            volume: OutputSpec {
                path: "environment.rain.volume",
                metadata: Metadata {
                    units: "mm",
                    description: "Precipitation within the reporting period",
                    display_name: "Rainfall",
                    short_name: "Rain",
                },
            },
        }
    }
}

// ============================================================================
// Wind direction
// ============================================================================

/// Tuning for a wind direction channel
///
/// The raw angle source has its own sampling cadence owned by the host;
/// only the averaging period is configured here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionConfig {
    /// Circular-mean reporting period, ms
    pub average_interval_ms: u32,
}

impl Default for DirectionConfig {
    fn default() -> Self {
        Self {
            average_interval_ms: DEFAULT_AVERAGING_INTERVAL_MS,
        }
    }
}

/// Output specs for a direction channel's two quantities
#[derive(Debug, Clone, Copy)]
pub struct DirectionOutputs {
    /// Instantaneous direction, published on every sample
    pub instantaneous: OutputSpec,
    /// Long-period circular mean direction
    pub average: OutputSpec,
}

impl Default for DirectionOutputs {
    fn default() -> Self {
        Self {
            instantaneous: OutputSpec {
                path: "environment.wind.angleApparent",
                metadata: Metadata {
                    units: "rad",
                    description: "Apparent wind direction",
                    display_name: "Wind Direction",
                    short_name: "AWA",
                },
            },
            average: OutputSpec {
                path: "environment.wind.directionAverage",
                metadata: Metadata {
                    units: "rad",
                    description: "10 minute circular mean wind direction",
                    display_name: "Average Wind Direction",
                    short_name: "AWA avg",
                },
            },
        }
    }
}

// ============================================================================
// Environment
// ============================================================================

/// Tuning for an environment channel (pressure, temperature, humidity)
///
/// The host reads and sanitizes the underlying I2C sensor on its own
/// cadence and pushes one float per reading; this channel only applies
/// the unit conversion and publishes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentConfig {
    /// Unit conversion gain
    pub gain: f32,
    /// Unit conversion offset
    pub offset: f32,
}

impl EnvironmentConfig {
    /// Pa → hPa conversion for barometric pressure
    pub const fn pressure_pa_to_hpa() -> Self {
        Self {
            gain: 0.01,
            offset: 0.0,
        }
    }

    /// °C → K conversion for air temperature
    pub const fn celsius_to_kelvin() -> Self {
        Self {
            gain: 1.0,
            offset: 273.15,
        }
    }

    /// % → ratio conversion for relative humidity
    pub const fn percent_to_ratio() -> Self {
        Self {
            gain: 0.01,
            offset: 0.0,
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            gain: 1.0,
            offset: 0.0,
        }
    }
}

/// Output spec for an environment channel
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentOutputs {
    /// The converted quantity, published on every pushed sample
    pub value: OutputSpec,
}

impl EnvironmentOutputs {
    /// Indoor barometric pressure in hectopascals
    pub const fn pressure() -> Self {
        Self {
            value: OutputSpec::new("environment.indoor.pressure", "hPa", "Hectopascals"),
        }
    }

    /// Indoor air temperature in kelvin
    pub const fn temperature() -> Self {
        Self {
            value: OutputSpec::new("environment.indoor.temp", "K", "degrees Kelvin"),
        }
    }

    /// Indoor relative humidity as a fraction of one
    pub const fn humidity() -> Self {
        Self {
            value: OutputSpec::new(
                "environment.indoor.humidity",
                "ratio",
                "Humidity as a fraction of one",
            ),
        }
    }
}
