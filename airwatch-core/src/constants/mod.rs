//! Constants for the Airwatch Core
//!
//! All numeric breakpoints and defaults live here so the classifier,
//! forecaster and monitor never carry magic numbers.
//!
//! ## Organization
//!
//! - **Thresholds**: classification breakpoints and concern limits
//! - **Defaults**: run-time configuration defaults and warm-up limits
//!
//! Names carry their unit (`_C`, `_PCT`, `_SECS`, `_MS`).

/// Classification breakpoints for temperature, humidity and air quality.
pub mod thresholds;

/// Configuration defaults for the window, forecaster and sources.
pub mod defaults;

pub use thresholds::{
    TEMP_COOL_BELOW_C, TEMP_COMFORTABLE_MAX_C, TEMP_WARM_MAX_C,
    HUMIDITY_DRY_BELOW_PCT, HUMIDITY_COMFORTABLE_MAX_PCT, HUMIDITY_SLIGHTLY_HUMID_MAX_PCT,
    AIR_QUALITY_BANDS,
};

pub use defaults::{
    DEFAULT_WINDOW_CAPACITY, DEFAULT_PREDICT_POINTS, DEFAULT_POLYNOMIAL_DEGREE,
    DEFAULT_UPDATE_INTERVAL_SECS, MIN_FORECAST_SAMPLES, DEFAULT_SOURCE_TIMEOUT_SECS,
    MAX_POLYNOMIAL_DEGREE, RETRY_DELAY_MS,
};
