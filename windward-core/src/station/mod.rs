//! Station: the explicit dataflow graph and its tick loop
//!
//! ## Overview
//!
//! The station is built once at startup from channel configurations and
//! then driven by a single cooperative scheduler: the host calls
//! [`Station::tick`] on its periodic callback and forwards sensor inputs
//! through the typed entry points ([`Station::pulse_wind`],
//! [`Station::direction_sample`], ...). All accumulator state lives
//! inside the station for the process lifetime; there are no globals and
//! no dynamic allocation after construction.
//!
//! ```text
//!              ┌─────────────────────── Station ───────────────────────┐
//! edges ──────→│ WindChannel   ── speed / speedAverage / gust ──┐      │
//! edges ──────→│ RainChannel   ── volume ───────────────────────┤      │
//! angles ─────→│ DirectionChan ── angle / directionAverage ─────┼─→ Sink
//! floats ─────→│ EnvironChan   ── pressure / temp / humidity ───┘      │
//!              └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering
//!
//! Within one tick, due reporters run in a deterministic order: wind
//! channels in registration order, then rain, then direction. Within a
//! wind channel the short count window closes before the long-period
//! readers, so a coinciding boundary always averages over the window
//! that just closed.

mod builder;
mod channels;
mod reporter;

pub use builder::StationBuilder;
pub use reporter::ReportWindow;

use crate::constants::MAX_CHANNELS;
use crate::measurement::Sink;
use crate::time::Timestamp;

use channels::{DirectionChannel, EnvironmentChannel, RainChannel, WindChannel};
use heapless::Vec;

/// Handle to a wind channel, issued by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindId(pub(crate) usize);

/// Handle to a rain channel, issued by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainId(pub(crate) usize);

/// Handle to a direction channel, issued by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionId(pub(crate) usize);

/// Handle to an environment channel, issued by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentId(pub(crate) usize);

/// Delivery counters for monitoring
#[derive(Debug, Clone, Copy, Default)]
pub struct StationMetrics {
    /// Measurements accepted by the sink
    pub published: u32,
    /// Measurements the sink rejected
    pub dropped: u32,
    /// Ticks processed
    pub ticks: u32,
}

/// The wired station
///
/// Construct with [`StationBuilder`]; afterwards the only mutation paths
/// are the input methods and [`tick`](Station::tick).
pub struct Station<S: Sink> {
    wind: Vec<WindChannel, MAX_CHANNELS>,
    rain: Vec<RainChannel, MAX_CHANNELS>,
    direction: Vec<DirectionChannel, MAX_CHANNELS>,
    environment: Vec<EnvironmentChannel, MAX_CHANNELS>,
    sink: S,
    metrics: StationMetrics,
}

impl<S: Sink> Station<S> {
    pub(crate) fn wire(
        wind: Vec<WindChannel, MAX_CHANNELS>,
        rain: Vec<RainChannel, MAX_CHANNELS>,
        direction: Vec<DirectionChannel, MAX_CHANNELS>,
        environment: Vec<EnvironmentChannel, MAX_CHANNELS>,
        sink: S,
    ) -> Self {
        Self {
            wind,
            rain,
            direction,
            environment,
            sink,
            metrics: StationMetrics::default(),
        }
    }

    /// Record one debounced anemometer edge
    ///
    /// Returns false if the handle does not belong to this station.
    pub fn pulse_wind(&mut self, id: WindId) -> bool {
        match self.wind.get_mut(id.0) {
            Some(channel) => {
                channel.on_pulse();
                true
            }
            None => false,
        }
    }

    /// Record one debounced rain gauge tip
    pub fn pulse_rain(&mut self, id: RainId) -> bool {
        match self.rain.get_mut(id.0) {
            Some(channel) => {
                channel.on_pulse();
                true
            }
            None => false,
        }
    }

    /// Push one wind vane angle sample in radians
    ///
    /// Publishes the instantaneous direction immediately and feeds the
    /// published value into the circular mean.
    pub fn direction_sample(&mut self, id: DirectionId, angle_rad: f32, now: Timestamp) -> bool {
        let Self {
            direction,
            sink,
            metrics,
            ..
        } = self;

        match direction.get_mut(id.0) {
            Some(channel) => {
                channel.sample(angle_rad, now, sink, metrics);
                true
            }
            None => false,
        }
    }

    /// Push one environment reading (already read and sanitized upstream)
    pub fn environment_sample(&mut self, id: EnvironmentId, value: f32, now: Timestamp) -> bool {
        let Self {
            environment,
            sink,
            metrics,
            ..
        } = self;

        match environment.get_mut(id.0) {
            Some(channel) => {
                channel.sample(value, now, sink, metrics);
                true
            }
            None => false,
        }
    }

    /// Run all due reporters
    ///
    /// Called from the host's periodic scheduler callback. Returns the
    /// number of measurements published during this tick; sink
    /// rejections are recorded in [`StationMetrics::dropped`] and do not
    /// abort the tick.
    pub fn tick(&mut self, now: Timestamp) -> u32 {
        let Self {
            wind,
            rain,
            direction,
            sink,
            metrics,
            ..
        } = self;

        let before = metrics.published;
        metrics.ticks = metrics.ticks.saturating_add(1);

        for channel in wind.iter_mut() {
            channel.tick(now, sink, metrics);
        }
        for channel in rain.iter_mut() {
            channel.tick(now, sink, metrics);
        }
        for channel in direction.iter_mut() {
            channel.tick(now, sink, metrics);
        }

        metrics.published - before
    }

    /// Delivery counters
    pub fn metrics(&self) -> &StationMetrics {
        &self.metrics
    }

    /// Borrow the downstream sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the downstream sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear down the station, recovering the sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
