//! Accumulators: the algorithmic core of the station
//!
//! ## Overview
//!
//! Every derived quantity the station reports is produced by one of five
//! small accumulators, each with the same shape of contract: zero or more
//! O(1) update operations, and a single read-and-reset operation invoked
//! once per report window by the owning channel.
//!
//! ```text
//! debounced edges ──→ PulseCounter ──┬─→ LinearScaler ──→ instantaneous
//!                                    ├─→ WindowIntegrator ──→ long average
//!                                    └─→ GustAccumulator ──→ peak burst
//!
//! angle samples ──→ (reported) ──→ CircularMeanAccumulator ──→ mean angle
//! ```
//!
//! ## Design Rules
//!
//! - **Read-and-reset, not running totals**: every accumulator is zeroed
//!   when consumed, bounding floating-point drift over process lifetimes
//!   measured in months.
//! - **Single owner**: each accumulator is owned by exactly one channel;
//!   updates and reads never interleave within a tick because the channel
//!   sequences them.
//! - **Numeric edge cases are defined, not errors**: saturation, empty
//!   windows and NaN propagation all have documented deterministic
//!   behavior. Nothing here panics.

pub mod circular;
pub mod gust;
pub mod integrate;
pub mod pulse;
pub mod scale;

pub use circular::CircularMeanAccumulator;
pub use gust::GustAccumulator;
pub use integrate::WindowIntegrator;
pub use pulse::PulseCounter;
pub use scale::LinearScaler;
