//! Typed channel nodes of the station's dataflow graph
//!
//! Each channel owns its full chain end to end: the accumulators, the
//! report windows that consume them and the output points they publish
//! to. Ownership is the concurrency story: nothing outside the owning
//! channel can touch an accumulator, so update and read-and-reset can
//! never interleave within a tick.

use crate::accum::{
    CircularMeanAccumulator, GustAccumulator, LinearScaler, PulseCounter, WindowIntegrator,
};
use crate::config::{
    DirectionConfig, DirectionOutputs, EnvironmentConfig, EnvironmentOutputs, OutputSpec,
    RainConfig, RainOutputs, WindConfig, WindOutputs,
};
use crate::errors::StationResult;
use crate::measurement::{Measurement, Metadata, PathStr, Sink, Value};
use crate::time::Timestamp;

use super::reporter::ReportWindow;
use super::StationMetrics;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Validated output destination: inline path plus static metadata
#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputPoint {
    path: PathStr,
    metadata: Metadata,
}

impl OutputPoint {
    fn from_spec(spec: &OutputSpec) -> StationResult<Self> {
        Ok(Self {
            path: PathStr::new(spec.path)?,
            metadata: spec.metadata,
        })
    }
}

/// Forward one value downstream, recording the outcome
fn publish<S: Sink>(
    sink: &mut S,
    metrics: &mut StationMetrics,
    point: &OutputPoint,
    value: Value,
    now: Timestamp,
) {
    let measurement = Measurement {
        path: point.path,
        value,
        timestamp: now,
    };

    match sink.publish(&measurement, &point.metadata) {
        Ok(()) => metrics.published = metrics.published.saturating_add(1),
        Err(_) => {
            metrics.dropped = metrics.dropped.saturating_add(1);
            log_warn!("sink rejected measurement for {}", point.path.as_str());
        }
    }
}

// ============================================================================
// WindChannel - pulse counter fanned out to speed, average and gust
// ============================================================================

/// Anemometer channel
///
/// One pulse counter feeds three derived quantities:
/// instantaneous speed every count window, average speed over the long
/// period via the integrator, and peak burst via the gust accumulator.
/// The gust reporter runs on its own window at the long period; it is
/// deliberately not chained off any other quantity's report cycle.
pub(crate) struct WindChannel {
    counter: PulseCounter,

    speed_scaler: LinearScaler,
    speed_window: ReportWindow,
    speed_out: OutputPoint,

    integrator: WindowIntegrator,
    average_scaler: LinearScaler,
    average_window: ReportWindow,
    average_out: OutputPoint,

    gust: GustAccumulator,
    gust_window: ReportWindow,
    gust_out: OutputPoint,
}

impl WindChannel {
    pub(crate) fn new(cfg: &WindConfig, outputs: &WindOutputs) -> StationResult<Self> {
        let subwindow_ms = (cfg.gust_subwindow_reports as u32).saturating_mul(cfg.window_ms);

        Ok(Self {
            counter: PulseCounter::new(),

            speed_scaler: LinearScaler::per_window(cfg.mps_per_hz, cfg.window_ms),
            speed_window: ReportWindow::new(cfg.window_ms)?,
            speed_out: OutputPoint::from_spec(&outputs.speed)?,

            integrator: WindowIntegrator::new(),
            average_scaler: LinearScaler::per_window(cfg.mps_per_hz, cfg.average_interval_ms),
            average_window: ReportWindow::new(cfg.average_interval_ms)?,
            average_out: OutputPoint::from_spec(&outputs.average)?,

            gust: GustAccumulator::new(
                cfg.gust_subwindow_reports,
                LinearScaler::per_window(cfg.mps_per_hz, subwindow_ms),
            )?,
            gust_window: ReportWindow::new(cfg.gust_interval_ms)?,
            gust_out: OutputPoint::from_spec(&outputs.gust)?,
        })
    }

    pub(crate) fn arm(&mut self, now: Timestamp) {
        self.speed_window.arm(now);
        self.average_window.arm(now);
        self.gust_window.arm(now);
    }

    pub(crate) fn on_pulse(&mut self) {
        self.counter.on_edge();
    }

    pub(crate) fn tick<S: Sink>(
        &mut self,
        now: Timestamp,
        sink: &mut S,
        metrics: &mut StationMetrics,
    ) {
        // Count window closes first so a coinciding long boundary sees
        // this window's count in the integrator and gust accumulator.
        if self.speed_window.due(now) {
            let count = self.counter.emit_and_reset();

            publish(
                sink,
                metrics,
                &self.speed_out,
                Value::Float(self.speed_scaler.scale(count as f32)),
                now,
            );

            self.integrator.add(count as f32);
            self.gust.add_report(count);
            self.speed_window.advance(now);
        }

        if self.average_window.due(now) {
            let sum = self.integrator.read_and_reset();

            publish(
                sink,
                metrics,
                &self.average_out,
                Value::Float(self.average_scaler.scale(sum)),
                now,
            );
            self.average_window.advance(now);
        }

        if self.gust_window.due(now) {
            publish(
                sink,
                metrics,
                &self.gust_out,
                Value::Float(self.gust.consume_max()),
                now,
            );
            self.gust_window.advance(now);
        }
    }
}

// ============================================================================
// RainChannel - pulse counter scaled to precipitation per window
// ============================================================================

/// Tipping-bucket rain gauge channel
pub(crate) struct RainChannel {
    counter: PulseCounter,
    scaler: LinearScaler,
    window: ReportWindow,
    out: OutputPoint,
}

impl RainChannel {
    pub(crate) fn new(cfg: &RainConfig, outputs: &RainOutputs) -> StationResult<Self> {
        Ok(Self {
            counter: PulseCounter::new(),
            scaler: LinearScaler::new(cfg.mm_per_pulse, 0.0),
            window: ReportWindow::new(cfg.window_ms)?,
            out: OutputPoint::from_spec(&outputs.volume)?,
        })
    }

    pub(crate) fn arm(&mut self, now: Timestamp) {
        self.window.arm(now);
    }

    pub(crate) fn on_pulse(&mut self) {
        self.counter.on_edge();
    }

    pub(crate) fn tick<S: Sink>(
        &mut self,
        now: Timestamp,
        sink: &mut S,
        metrics: &mut StationMetrics,
    ) {
        if self.window.due(now) {
            let count = self.counter.emit_and_reset();

            publish(
                sink,
                metrics,
                &self.out,
                Value::Float(self.scaler.scale(count as f32)),
                now,
            );
            self.window.advance(now);
        }
    }
}

// ============================================================================
// DirectionChannel - pushed angles to instantaneous and circular mean
// ============================================================================

/// Wind vane channel
///
/// The host pushes angle samples on the vane's own cadence. Each sample
/// is published instantaneously and the *published* value feeds the
/// circular mean. One point of truth, so the instantaneous stream and
/// the average can never disagree about what was sampled.
pub(crate) struct DirectionChannel {
    mean: CircularMeanAccumulator,
    average_window: ReportWindow,
    instant_out: OutputPoint,
    average_out: OutputPoint,
}

impl DirectionChannel {
    pub(crate) fn new(cfg: &DirectionConfig, outputs: &DirectionOutputs) -> StationResult<Self> {
        Ok(Self {
            mean: CircularMeanAccumulator::new(),
            average_window: ReportWindow::new(cfg.average_interval_ms)?,
            instant_out: OutputPoint::from_spec(&outputs.instantaneous)?,
            average_out: OutputPoint::from_spec(&outputs.average)?,
        })
    }

    pub(crate) fn arm(&mut self, now: Timestamp) {
        self.average_window.arm(now);
    }

    pub(crate) fn sample<S: Sink>(
        &mut self,
        angle_rad: f32,
        now: Timestamp,
        sink: &mut S,
        metrics: &mut StationMetrics,
    ) {
        publish(
            sink,
            metrics,
            &self.instant_out,
            Value::Float(angle_rad),
            now,
        );
        self.mean.add_sample(angle_rad);
    }

    pub(crate) fn tick<S: Sink>(
        &mut self,
        now: Timestamp,
        sink: &mut S,
        metrics: &mut StationMetrics,
    ) {
        if self.average_window.due(now) {
            publish(
                sink,
                metrics,
                &self.average_out,
                Value::Float(self.mean.mean_and_reset()),
                now,
            );
            self.average_window.advance(now);
        }
    }
}

// ============================================================================
// EnvironmentChannel - pushed floats through a unit conversion
// ============================================================================

/// Environment quantity channel (pressure, temperature, humidity)
///
/// No windows: the host's sensor task owns the cadence, this channel
/// converts units and publishes.
pub(crate) struct EnvironmentChannel {
    scaler: LinearScaler,
    out: OutputPoint,
}

impl EnvironmentChannel {
    pub(crate) fn new(
        cfg: &EnvironmentConfig,
        outputs: &EnvironmentOutputs,
    ) -> StationResult<Self> {
        Ok(Self {
            scaler: LinearScaler::new(cfg.gain, cfg.offset),
            out: OutputPoint::from_spec(&outputs.value)?,
        })
    }

    pub(crate) fn sample<S: Sink>(
        &mut self,
        value: f32,
        now: Timestamp,
        sink: &mut S,
        metrics: &mut StationMetrics,
    ) {
        publish(
            sink,
            metrics,
            &self.out,
            Value::Float(self.scaler.scale(value)),
            now,
        );
    }
}
