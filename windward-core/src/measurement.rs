//! Measurement Tuples Produced by the Station
//!
//! ## Overview
//!
//! Everything the station publishes is a [`Measurement`]: a logical path
//! (`"environment.wind.speedAverage"`), a value and the timestamp of the
//! tick that produced it, accompanied by static [`Metadata`] describing
//! units and presentation names. Transport and serialization are external
//! collaborators behind the [`Sink`] trait; this crate only produces the
//! tuples.
//!
//! ## Memory Model
//!
//! Measurements are built for embedded constraints:
//! - **Stack-allocated**: paths are stored inline, no heap required
//! - **Copy**: measurements move through the sink boundary by value
//! - **Static metadata**: units and display names are `&'static str`
//!   configured once at wiring time

use crate::constants::MAX_PATH_LEN;
use crate::errors::{StationError, StationResult};
use crate::time::Timestamp;
use core::fmt;

/// Inline string for output paths
///
/// Avoids heap allocation for dotted logical paths. Paths longer than
/// [`MAX_PATH_LEN`] bytes are rejected at wiring time.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PathStr {
    len: u8,
    data: [u8; MAX_PATH_LEN],
}

impl PathStr {
    /// Create from string slice
    pub fn new(s: &str) -> StationResult<Self> {
        let bytes = s.as_bytes();
        if bytes.len() > MAX_PATH_LEN {
            return Err(StationError::PathTooLong { max: MAX_PATH_LEN });
        }

        let mut data = [0u8; MAX_PATH_LEN];
        data[..bytes.len()].copy_from_slice(bytes);

        Ok(Self {
            len: bytes.len() as u8,
            data,
        })
    }

    /// Get as string slice
    pub fn as_str(&self) -> &str {
        // Only valid UTF-8 is stored by new()
        core::str::from_utf8(&self.data[..self.len as usize]).unwrap_or("")
    }
}

impl fmt::Debug for PathStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

/// Published value
///
/// Counts stay integral through the sink boundary so a transport that
/// distinguishes integer and float encodings can do so losslessly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// Scaled physical quantity
    Float(f32),
    /// Raw event count
    Count(u32),
}

impl Value {
    /// Numeric view regardless of variant
    pub fn as_f32(&self) -> f32 {
        match self {
            Value::Float(v) => *v,
            Value::Count(c) => *c as f32,
        }
    }
}

/// Static descriptive metadata attached to an output
///
/// Mirrors what a telemetry consumer wants alongside a bare number:
/// units for interpretation, names for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    /// Unit of measurement (e.g. "m/s", "rad", "mm", "hPa")
    pub units: &'static str,
    /// Human-readable description of the quantity
    pub description: &'static str,
    /// Long display name for dashboards
    pub display_name: &'static str,
    /// Abbreviated name for dense displays
    pub short_name: &'static str,
}

impl Metadata {
    /// Metadata with units and description, no display names
    pub const fn new(units: &'static str, description: &'static str) -> Self {
        Self {
            units,
            description,
            display_name: "",
            short_name: "",
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// A single published measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Logical output path
    pub path: PathStr,
    /// Published value
    pub value: Value,
    /// Timestamp of the tick that produced the value
    pub timestamp: Timestamp,
}

/// Downstream consumer of measurements
///
/// Implementations own transport and serialization. `publish` must not
/// block: a sink that cannot accept the measurement returns
/// [`StationError::SinkRejected`] and the station records the drop.
pub trait Sink {
    /// Accept one measurement with its static metadata
    fn publish(&mut self, measurement: &Measurement, metadata: &Metadata) -> StationResult<()>;
}

/// A measurement paired with the metadata it was published with
#[derive(Debug, Clone, Copy)]
pub struct SinkRecord {
    /// The published measurement
    pub measurement: Measurement,
    /// Metadata attached at publish time
    pub metadata: Metadata,
}

/// Bounded in-memory sink for tests and simulation
///
/// Records measurements in publish order up to a fixed capacity, then
/// rejects. The rejection path doubles as a test fixture for the
/// station's drop accounting.
pub struct MemorySink<const N: usize> {
    records: heapless::Vec<SinkRecord, N>,
}

impl<const N: usize> MemorySink<N> {
    /// Create an empty sink
    pub const fn new() -> Self {
        Self {
            records: heapless::Vec::new(),
        }
    }

    /// All records in publish order
    pub fn records(&self) -> &[SinkRecord] {
        &self.records
    }

    /// Records published under `path`, in publish order
    pub fn for_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a SinkRecord> {
        self.records
            .iter()
            .filter(move |r| r.measurement.path.as_str() == path)
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records were published
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discard all records
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<const N: usize> Default for MemorySink<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Sink for MemorySink<N> {
    fn publish(&mut self, measurement: &Measurement, metadata: &Metadata) -> StationResult<()> {
        self.records
            .push(SinkRecord {
                measurement: *measurement,
                metadata: *metadata,
            })
            .map_err(|_| StationError::SinkRejected)
    }
}
