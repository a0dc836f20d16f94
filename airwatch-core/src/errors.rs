//! Error Types for the Monitoring Core
//!
//! ## Design Philosophy
//!
//! Errors raised by the core follow the same rules as the rest of the
//! crate so they stay usable on `no_std` targets:
//!
//! 1. **No Heap Allocation**: context is carried in integers and
//!    `&'static str`, never `String`.
//!
//! 2. **Copy Semantics**: errors are `Copy` so they can be returned from the
//!    hot path and stored in a dashboard view without cloning.
//!
//! ## Error Categories
//!
//! - `InvalidConfiguration`: a parameter was rejected at the call that set it
//!   (zero capacity, zero forecast horizon, degree too large for the window).
//!   Values are never silently clamped.
//! - `InsufficientData`: the window is still warming up. This is a normal
//!   state; callers skip forecasting and keep displaying what they have.
//!
//! Network failures belong to the reading sources and are reported through
//! their own error types (see `airwatch-connectors`).
//!
//! ```rust
//! use airwatch_core::{Forecaster, MonitorError, SlidingWindowStore};
//!
//! let window = SlidingWindowStore::default();
//! let forecaster = Forecaster::default();
//!
//! match forecaster.forecast(&window.snapshot()) {
//!     Ok(_forecast) => { /* render predictions */ }
//!     Err(MonitorError::InsufficientData { .. }) => { /* display-only mode */ }
//!     Err(MonitorError::InvalidConfiguration { .. }) => { /* report to operator */ }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for core operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Errors raised by the window store, forecaster and monitor
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError {
    /// A configuration value was rejected
    #[error("Invalid configuration for {parameter}: {reason}")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Not enough readings in the window for the requested operation
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum number of readings needed
        required: usize,
        /// Readings currently available
        available: usize,
    },
}

impl MonitorError {
    /// Shorthand for an `InvalidConfiguration` error
    pub const fn invalid(parameter: &'static str, reason: &'static str) -> Self {
        Self::InvalidConfiguration { parameter, reason }
    }

    /// True when the error only means "keep collecting readings"
    pub fn is_warm_up(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}
