//! Integration tests for the station dataflow graph
//!
//! Drives complete stations through pulse inputs, angle samples and
//! scheduler ticks, and checks what arrives at the sink: values,
//! metadata, window boundaries and ordering.

use windward_core::config::{
    DirectionConfig, DirectionOutputs, EnvironmentConfig, EnvironmentOutputs, RainConfig,
    RainOutputs, WindConfig, WindOutputs,
};
use windward_core::constants::TWO_PI;
use windward_core::{MemorySink, Station, StationBuilder, Value, WindId};

type TestSink = MemorySink<128>;

fn value_at(station: &Station<TestSink>, path: &str, index: usize) -> f32 {
    station
        .sink()
        .for_path(path)
        .nth(index)
        .unwrap_or_else(|| panic!("no record {index} for {path}"))
        .measurement
        .value
        .as_f32()
}

fn pulse_wind_n(station: &mut Station<TestSink>, id: WindId, n: u32) {
    for _ in 0..n {
        station.pulse_wind(id);
    }
}

#[test]
fn rain_reports_precipitation_per_window() {
    let mut builder = StationBuilder::new();
    let rain = builder
        .add_rain(&RainConfig::default(), &RainOutputs::default())
        .unwrap();
    let mut station = builder.build(TestSink::new(), 0);

    // 10 bucket tips at 0.18 mm each within the first 5 minute window
    for _ in 0..10 {
        station.pulse_rain(rain);
    }
    assert_eq!(station.tick(300_000), 1);

    let volume = value_at(&station, "environment.rain.volume", 0);
    assert!((volume - 1.8).abs() < 1e-6, "volume was {volume}");

    // A dry second window reports 0.0, not a repeat of the last value
    assert_eq!(station.tick(600_000), 1);
    assert_eq!(value_at(&station, "environment.rain.volume", 1), 0.0);

    let units = station
        .sink()
        .for_path("environment.rain.volume")
        .next()
        .unwrap()
        .metadata
        .units;
    assert_eq!(units, "mm");
}

#[test]
fn wind_speed_from_pulse_frequency() {
    let mut builder = StationBuilder::new();
    let wind = builder
        .add_wind(&WindConfig::default(), &WindOutputs::default())
        .unwrap();
    let mut station = builder.build(TestSink::new(), 0);

    // 3 pulses in a 3 s window at 1.02 m/s per Hz reads 1.02 m/s
    pulse_wind_n(&mut station, wind, 3);
    station.tick(3000);

    let speed = value_at(&station, "environment.wind.speedApparent", 0);
    assert!((speed - 1.02).abs() < 1e-5, "speed was {speed}");
}

#[test]
fn wind_average_and_gust_over_long_period() {
    // Short test-scale periods: 3 s windows averaged over 12 s, gust
    // sub-window of 4 reports (one full sub-window per period).
    let cfg = WindConfig {
        average_interval_ms: 12_000,
        gust_interval_ms: 12_000,
        ..WindConfig::default()
    };

    let mut builder = StationBuilder::new();
    let wind = builder.add_wind(&cfg, &WindOutputs::default()).unwrap();
    let mut station = builder.build(TestSink::new(), 0);

    // Steady 3 pulses per 3 s window for four windows
    for boundary in [3000u64, 6000, 9000, 12_000] {
        pulse_wind_n(&mut station, wind, 3);
        station.tick(boundary);
    }

    // Four instantaneous reports, one average, one gust
    assert_eq!(
        station
            .sink()
            .for_path("environment.wind.speedApparent")
            .count(),
        4
    );

    // 12 pulses over 12 s = 1 Hz = 1.02 m/s, both as average and as the
    // (only) sub-window burst
    let average = value_at(&station, "environment.wind.speedAverage", 0);
    assert!((average - 1.02).abs() < 1e-5, "average was {average}");

    let gust = value_at(&station, "environment.wind.gust", 0);
    assert!((gust - 1.02).abs() < 1e-5, "gust was {gust}");
}

#[test]
fn gust_is_peak_burst_not_average() {
    let cfg = WindConfig {
        mps_per_hz: 0.2,
        window_ms: 1000,
        average_interval_ms: 8000,
        gust_interval_ms: 8000,
        gust_subwindow_reports: 2,
    };

    let mut builder = StationBuilder::new();
    let wind = builder.add_wind(&cfg, &WindOutputs::default()).unwrap();
    let mut station = builder.build(TestSink::new(), 0);

    // Per-window counts: sub-window sums are 3, 10, 2, 0
    let counts = [1u32, 2, 10, 0, 1, 1, 0, 0];
    for (i, count) in counts.iter().enumerate() {
        pulse_wind_n(&mut station, wind, *count);
        station.tick((i as u64 + 1) * 1000);
    }

    // Peak: 10 pulses over one 2 s sub-window
    let expected = 10.0 * cfg.mps_per_hz * 1000.0 / (2.0 * 1000.0);
    let gust = value_at(&station, "environment.wind.gust", 0);
    assert!((gust - expected).abs() < 1e-5, "gust was {gust}");

    // The average over the full period is far below the gust
    let average = value_at(&station, "environment.wind.speedAverage", 0);
    assert!(average < gust / 2.0);

    // Nothing new in the next period: "no gust observed"
    station.tick(16_000);
    assert_eq!(value_at(&station, "environment.wind.gust", 1), 0.0);
}

#[test]
fn direction_average_is_circular() {
    let cfg = DirectionConfig {
        average_interval_ms: 10_000,
    };

    let mut builder = StationBuilder::new();
    let vane = builder
        .add_direction(&cfg, &DirectionOutputs::default())
        .unwrap();
    let mut station = builder.build(TestSink::new(), 0);

    // Samples straddling north: published instantaneously as-is
    station.direction_sample(vane, 0.01, 1000);
    station.direction_sample(vane, TWO_PI - 0.01, 2000);

    let instant_path = "environment.wind.angleApparent";
    assert_eq!(station.sink().for_path(instant_path).count(), 2);
    assert!((value_at(&station, instant_path, 0) - 0.01).abs() < 1e-6);

    // The average lands at north, not south
    station.tick(10_000);
    let mean = value_at(&station, "environment.wind.directionAverage", 0);
    let wrapped = if mean > TWO_PI / 2.0 { TWO_PI - mean } else { mean };
    assert!(wrapped < 1e-3, "mean was {mean}");

    // An empty period holds the previous mean rather than emitting NaN
    station.tick(20_000);
    let held = value_at(&station, "environment.wind.directionAverage", 1);
    assert_eq!(held, mean);
}

#[test]
fn tick_runs_reporters_in_registration_order() {
    let wind_cfg = WindConfig {
        window_ms: 3000,
        ..WindConfig::default()
    };
    let rain_cfg = RainConfig {
        window_ms: 3000,
        ..RainConfig::default()
    };

    let mut builder = StationBuilder::new();
    let wind = builder.add_wind(&wind_cfg, &WindOutputs::default()).unwrap();
    let rain = builder.add_rain(&rain_cfg, &RainOutputs::default()).unwrap();
    let mut station = builder.build(TestSink::new(), 0);

    station.pulse_wind(wind);
    station.pulse_rain(rain);
    station.tick(3000);

    let paths: Vec<&str> = station
        .sink()
        .records()
        .iter()
        .map(|r| r.measurement.path.as_str())
        .collect();

    // Wind channels tick before rain channels, every time
    assert_eq!(
        paths,
        ["environment.wind.speedApparent", "environment.rain.volume"]
    );
}

#[test]
fn environment_presets_convert_units() {
    let mut builder = StationBuilder::new();
    let pressure = builder
        .add_environment(
            &EnvironmentConfig::pressure_pa_to_hpa(),
            &EnvironmentOutputs::pressure(),
        )
        .unwrap();
    let temp = builder
        .add_environment(
            &EnvironmentConfig::celsius_to_kelvin(),
            &EnvironmentOutputs::temperature(),
        )
        .unwrap();
    let humidity = builder
        .add_environment(
            &EnvironmentConfig::percent_to_ratio(),
            &EnvironmentOutputs::humidity(),
        )
        .unwrap();
    let mut station = builder.build(TestSink::new(), 0);

    station.environment_sample(pressure, 101_325.0, 5000);
    station.environment_sample(temp, 20.0, 5000);
    station.environment_sample(humidity, 55.0, 5000);

    let hpa = value_at(&station, "environment.indoor.pressure", 0);
    assert!((hpa - 1013.25).abs() < 1e-2);

    let kelvin = value_at(&station, "environment.indoor.temp", 0);
    assert!((kelvin - 293.15).abs() < 1e-3);

    let ratio = value_at(&station, "environment.indoor.humidity", 0);
    assert!((ratio - 0.55).abs() < 1e-6);
}

#[test]
fn sink_rejections_are_counted_not_fatal() {
    let mut builder = StationBuilder::new();
    builder
        .add_wind(&WindConfig::default(), &WindOutputs::default())
        .unwrap();
    // Room for exactly one record; the long boundary publishes three
    let mut station = builder.build(MemorySink::<1>::new(), 0);

    let published = station.tick(600_000);

    assert_eq!(published, 1);
    assert_eq!(station.metrics().published, 1);
    assert_eq!(station.metrics().dropped, 2);
    assert_eq!(station.metrics().ticks, 1);
}

#[test]
fn timestamps_carry_the_tick_time() {
    let mut builder = StationBuilder::new();
    let rain = builder
        .add_rain(&RainConfig::default(), &RainOutputs::default())
        .unwrap();
    let mut station = builder.build(TestSink::new(), 0);

    station.pulse_rain(rain);
    station.tick(300_000);

    let record = station
        .sink()
        .for_path("environment.rain.volume")
        .next()
        .unwrap();
    assert_eq!(record.measurement.timestamp, 300_000);
    assert!(matches!(record.measurement.value, Value::Float(_)));
}
