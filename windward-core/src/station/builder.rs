//! Static wiring of the station graph
//!
//! All configuration validation happens here, at add time: invalid
//! intervals, empty gust sub-windows and over-long paths are rejected
//! before the station exists, so the runtime tick loop has no
//! configuration error paths at all. Construction and operation are
//! strictly separate phases.

use crate::config::{
    DirectionConfig, DirectionOutputs, EnvironmentConfig, EnvironmentOutputs, RainConfig,
    RainOutputs, WindConfig, WindOutputs,
};
use crate::constants::MAX_CHANNELS;
use crate::errors::{StationError, StationResult};
use crate::measurement::Sink;
use crate::time::Timestamp;

use super::channels::{DirectionChannel, EnvironmentChannel, RainChannel, WindChannel};
use super::{DirectionId, EnvironmentId, RainId, Station, WindId};
use heapless::Vec;

/// Builder for a [`Station`]
///
/// Channels are registered one by one; each registration returns a typed
/// handle used to route inputs after the build. Handles are assigned in
/// registration order, which is also the tick order within each kind.
pub struct StationBuilder {
    wind: Vec<WindChannel, MAX_CHANNELS>,
    rain: Vec<RainChannel, MAX_CHANNELS>,
    direction: Vec<DirectionChannel, MAX_CHANNELS>,
    environment: Vec<EnvironmentChannel, MAX_CHANNELS>,
}

impl StationBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self {
            wind: Vec::new(),
            rain: Vec::new(),
            direction: Vec::new(),
            environment: Vec::new(),
        }
    }

    /// Register an anemometer channel
    pub fn add_wind(&mut self, cfg: &WindConfig, outputs: &WindOutputs) -> StationResult<WindId> {
        let channel = WindChannel::new(cfg, outputs)?;
        let id = WindId(self.wind.len());
        self.wind.push(channel).map_err(|_| StationError::CapacityExceeded {
            resource: "wind channels",
        })?;
        Ok(id)
    }

    /// Register a rain gauge channel
    pub fn add_rain(&mut self, cfg: &RainConfig, outputs: &RainOutputs) -> StationResult<RainId> {
        let channel = RainChannel::new(cfg, outputs)?;
        let id = RainId(self.rain.len());
        self.rain.push(channel).map_err(|_| StationError::CapacityExceeded {
            resource: "rain channels",
        })?;
        Ok(id)
    }

    /// Register a wind vane channel
    pub fn add_direction(
        &mut self,
        cfg: &DirectionConfig,
        outputs: &DirectionOutputs,
    ) -> StationResult<DirectionId> {
        let channel = DirectionChannel::new(cfg, outputs)?;
        let id = DirectionId(self.direction.len());
        self.direction
            .push(channel)
            .map_err(|_| StationError::CapacityExceeded {
                resource: "direction channels",
            })?;
        Ok(id)
    }

    /// Register an environment channel
    pub fn add_environment(
        &mut self,
        cfg: &EnvironmentConfig,
        outputs: &EnvironmentOutputs,
    ) -> StationResult<EnvironmentId> {
        let channel = EnvironmentChannel::new(cfg, outputs)?;
        let id = EnvironmentId(self.environment.len());
        self.environment
            .push(channel)
            .map_err(|_| StationError::CapacityExceeded {
                resource: "environment channels",
            })?;
        Ok(id)
    }

    /// Finish wiring: arm every report window against `now` and hand the
    /// graph its sink
    ///
    /// Infallible by construction: every channel was validated when it
    /// was added.
    pub fn build<S: Sink>(mut self, sink: S, now: Timestamp) -> Station<S> {
        for channel in self.wind.iter_mut() {
            channel.arm(now);
        }
        for channel in self.rain.iter_mut() {
            channel.arm(now);
        }
        for channel in self.direction.iter_mut() {
            channel.arm(now);
        }

        Station::wire(self.wind, self.rain, self.direction, self.environment, sink)
    }
}

impl Default for StationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::MemorySink;

    #[test]
    fn handles_follow_registration_order() {
        let mut builder = StationBuilder::new();

        let first = builder
            .add_rain(&RainConfig::default(), &RainOutputs::default())
            .unwrap();
        let second = builder
            .add_rain(&RainConfig::default(), &RainOutputs::default())
            .unwrap();

        assert_eq!(first, RainId(0));
        assert_eq!(second, RainId(1));
    }

    #[test]
    fn rejects_invalid_interval_at_add_time() {
        let mut builder = StationBuilder::new();
        let cfg = RainConfig {
            window_ms: 0,
            ..RainConfig::default()
        };

        assert_eq!(
            builder.add_rain(&cfg, &RainOutputs::default()).unwrap_err(),
            StationError::InvalidInterval { interval_ms: 0 }
        );
    }

    #[test]
    fn capacity_is_bounded() {
        let mut builder = StationBuilder::new();
        for _ in 0..MAX_CHANNELS {
            builder
                .add_wind(&WindConfig::default(), &WindOutputs::default())
                .unwrap();
        }

        assert_eq!(
            builder
                .add_wind(&WindConfig::default(), &WindOutputs::default())
                .unwrap_err(),
            StationError::CapacityExceeded {
                resource: "wind channels"
            }
        );
    }

    #[test]
    fn unknown_handle_is_rejected() {
        let builder = StationBuilder::new();
        let mut station = builder.build(MemorySink::<8>::new(), 0);

        assert!(!station.pulse_wind(WindId(0)));
        assert!(!station.pulse_rain(RainId(3)));
    }
}
