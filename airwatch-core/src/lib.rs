//! Core monitoring engine for Airwatch
//!
//! Keeps a bounded sliding window of environmental readings (temperature,
//! humidity, air-quality index), classifies current conditions against
//! fixed thresholds and projects near-future values with a least-squares
//! polynomial fit.
//!
//! Key constraints:
//! - One authoritative window, owned by the caller and passed by reference
//! - Classification is pure and deterministic
//! - Warm-up (too few readings to forecast) is a normal state, not a failure
//! - Builds without `std` (needs `alloc`)
//!
//! ```no_run
//! use airwatch_core::{classify_reading, Forecaster, Reading, SlidingWindowStore};
//!
//! let mut window = SlidingWindowStore::default();
//! window.append(Reading::new(1_000, 23.4, 46.0, 140));
//!
//! if let Some(latest) = window.latest() {
//!     let report = classify_reading(latest);
//!     println!("{}", report.assessment);
//! }
//!
//! match Forecaster::default().forecast(&window.snapshot()) {
//!     Ok(forecast) => println!("{} points ahead", forecast.len()),
//!     Err(e) if e.is_warm_up() => println!("Collecting more data for predictions..."),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod classify;
pub mod constants;
pub mod errors;
pub mod forecast;
pub mod monitor;
pub mod reading;
pub mod time;
pub mod traits;
pub mod window;

// Public API
pub use classify::{classify_reading, Assessment, Classification, ConditionReport};
pub use errors::{MonitorError, MonitorResult};
pub use forecast::{ForecastConfig, ForecastPoint, ForecastResult, Forecaster, MetricForecast};
pub use monitor::{CycleOutcome, DashboardView, MetricDeltas, Monitor, MonitorConfig};
pub use reading::{DeviceReading, Metric, Reading};
pub use time::{FixedTime, TimeSource, Timestamp};
pub use traits::{Category, ReadingSource};
pub use window::SlidingWindowStore;

#[cfg(feature = "std")]
pub use time::SystemTime;
#[cfg(feature = "std")]
pub use window::SharedWindow;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
