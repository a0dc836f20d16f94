//! Reading Sources for the Airwatch Monitor
//!
//! ## Overview
//!
//! Every source implements [`airwatch_core::ReadingSource`]: one call, one
//! reading, or a [`SourceError`] the monitor turns into a "no new data"
//! cycle. Sources never retry on their own; the next scheduled cycle is the
//! retry.
//!
//! ### HTTP device
//!
//! The sensor board serves its latest measurement as a small JSON document:
//!
//! ```text
//! GET http://<device>/data
//!
//! {"temperature": 24.6, "humidity": 47.9, "airQuality": 152}
//! ```
//!
//! Requests are bounded by a timeout (5 s by default) so a powered-off
//! board cannot stall the dashboard.
//!
//! ### Synthetic generator
//!
//! A random walk around typical indoor values, for demos and for running
//! the dashboard without hardware. Seedable for reproducible output.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use airwatch_connectors::http::{HttpSource, HttpSourceConfig};
//! use airwatch_core::ReadingSource;
//!
//! let config = HttpSourceConfig::from_host("192.168.137.91").timeout_secs(5);
//! let mut source = HttpSource::new(config)?;
//!
//! match source.fetch() {
//!     Ok(reading) => println!("{:.1} °C", reading.temperature),
//!     Err(err) => eprintln!("{}", err),
//! }
//! # Ok::<(), airwatch_connectors::SourceError>(())
//! ```

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "synthetic")]
pub mod synthetic;

#[cfg(feature = "http")]
pub use http::{HttpSource, HttpSourceConfig};
#[cfg(feature = "synthetic")]
pub use synthetic::SyntheticSource;

use airwatch_core::DeviceReading;
use thiserror::Error;

/// Errors raised while fetching a reading
///
/// All variants are recoverable: the monitor keeps its window and retries
/// on the next cycle.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network, DNS or timeout failure
    #[error("Error fetching data: {0}")]
    Request(String),

    /// Device answered with a non-success status
    #[error("Device returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not a valid reading document
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Source misconfigured
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Counters kept by every source
#[derive(Debug, Default, Clone)]
pub struct SourceStats {
    /// Fetch attempts
    pub requests: u64,
    /// Attempts that returned a reading
    pub successes: u64,
    /// Attempts that failed
    pub failures: u64,
    /// Description of the most recent failure
    pub last_error: Option<String>,
}

impl SourceStats {
    pub(crate) fn record<T>(&mut self, result: &Result<T, SourceError>) {
        self.requests += 1;
        match result {
            Ok(_) => self.successes += 1,
            Err(err) => {
                self.failures += 1;
                self.last_error = Some(err.to_string());
            }
        }
    }
}

/// Decode a device JSON document
///
/// Unknown fields are ignored; missing or mistyped metrics are rejected.
pub fn parse_payload(body: &str) -> Result<DeviceReading, SourceError> {
    let reading: DeviceReading =
        serde_json::from_str(body).map_err(|e| SourceError::MalformedPayload(e.to_string()))?;

    if !reading.temperature.is_finite() || !reading.humidity.is_finite() {
        return Err(SourceError::MalformedPayload(
            "non-finite temperature or humidity".into(),
        ));
    }

    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_document() {
        let reading =
            parse_payload(r#"{"temperature": 24.6, "humidity": 47.9, "airQuality": 152}"#).unwrap();
        assert_eq!(reading, DeviceReading::new(24.6, 47.9, 152));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"{"temperature": 20, "humidity": 40, "airQuality": 90, "uptime": 1234}"#;
        let reading = parse_payload(body).unwrap();
        assert_eq!(reading.air_quality, 90);
    }

    #[test]
    fn test_parse_rejects_missing_metric() {
        let result = parse_payload(r#"{"temperature": 20.0, "humidity": 40.0}"#);
        assert!(matches!(result, Err(SourceError::MalformedPayload(_))));
    }

    #[test]
    fn test_parse_rejects_negative_index() {
        let result = parse_payload(r#"{"temperature": 20.0, "humidity": 40.0, "airQuality": -3}"#);
        assert!(matches!(result, Err(SourceError::MalformedPayload(_))));
    }

    #[test]
    fn test_parse_rejects_html() {
        assert!(parse_payload("<html>busy</html>").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = SourceError::Request("timed out".into());
        assert_eq!(err.to_string(), "Error fetching data: timed out");

        let err = SourceError::Status {
            status: 503,
            message: "busy".into(),
        };
        assert_eq!(err.to_string(), "Device returned status 503: busy");
    }

    #[test]
    fn test_stats_record() {
        let mut stats = SourceStats::default();
        stats.record::<()>(&Ok(()));
        stats.record::<()>(&Err(SourceError::Request("refused".into())));

        assert_eq!(stats.requests, 2);
        assert_eq!(stats.successes, 1);
        assert_eq!(stats.failures, 1);
        assert_eq!(stats.last_error.as_deref(), Some("Error fetching data: refused"));
    }
}
