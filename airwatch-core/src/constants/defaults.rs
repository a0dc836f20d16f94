//! Configuration Defaults

/// Default number of readings retained by the sliding window.
pub const DEFAULT_WINDOW_CAPACITY: usize = 1000;

/// Default forecast horizon (future points per metric).
pub const DEFAULT_PREDICT_POINTS: usize = 5;

/// Default polynomial degree for the forecaster.
pub const DEFAULT_POLYNOMIAL_DEGREE: usize = 2;

/// Nominal sampling step of the device, used to synthesize forecast timestamps.
pub const DEFAULT_UPDATE_INTERVAL_SECS: f64 = 5.0;

/// Highest polynomial degree the forecaster accepts.
pub const MAX_POLYNOMIAL_DEGREE: usize = 10;

/// Wait after a failed fetch before trying the source again.
pub const RETRY_DELAY_MS: u64 = 1000;

/// Fewest readings the forecaster will fit, whatever the degree.
pub const MIN_FORECAST_SAMPLES: usize = 5;

/// Bound on a single source fetch.
pub const DEFAULT_SOURCE_TIMEOUT_SECS: u64 = 5;

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;
