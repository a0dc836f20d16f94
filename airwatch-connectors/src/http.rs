//! HTTP Source for the Sensor Device
//!
//! ## Overview
//!
//! Polls the device's `/data` endpoint with a blocking `ureq` agent. One
//! request per cycle, no retries: a failed request becomes a banner on the
//! dashboard and the next cycle tries again.
//!
//! ## Failure Mapping
//!
//! | ureq outcome                | SourceError        |
//! |-----------------------------|--------------------|
//! | transport (DNS, refused, timeout) | `Request`    |
//! | non-2xx status              | `Status`           |
//! | body not a reading document | `MalformedPayload` |
//!
//! ## Example Usage
//!
//! ```rust
//! use airwatch_connectors::http::{HttpSource, HttpSourceConfig};
//!
//! let config = HttpSourceConfig::from_host("192.168.137.91").timeout_secs(3);
//! assert_eq!(config.url, "http://192.168.137.91/data");
//!
//! let source = HttpSource::new(config)?;
//! assert_eq!(source.stats().requests, 0);
//! # Ok::<(), airwatch_connectors::SourceError>(())
//! ```

use std::time::Duration;

use airwatch_core::{constants::defaults::DEFAULT_SOURCE_TIMEOUT_SECS, DeviceReading, ReadingSource};

use crate::{parse_payload, SourceError, SourceStats};

/// Path the device serves its latest reading on
pub const DATA_PATH: &str = "/data";

/// HTTP source configuration
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Full URL of the data endpoint
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl HttpSourceConfig {
    /// Create new configuration for a full endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_SOURCE_TIMEOUT_SECS),
            user_agent: format!("Airwatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Configuration for a device address, e.g. `192.168.137.91`
    pub fn from_host(host: &str) -> Self {
        Self::new(format!("http://{}{}", host.trim_end_matches('/'), DATA_PATH))
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    fn validate(&self) -> Result<(), SourceError> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(SourceError::Config(
                "URL must start with http:// or https://".into(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(SourceError::Config("timeout must be positive".into()));
        }
        Ok(())
    }
}

/// Reading source backed by the device's HTTP endpoint
pub struct HttpSource {
    config: HttpSourceConfig,
    agent: ureq::Agent,
    stats: SourceStats,
}

impl HttpSource {
    /// Create new HTTP source
    pub fn new(config: HttpSourceConfig) -> Result<Self, SourceError> {
        config.validate()?;

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self {
            config,
            agent,
            stats: SourceStats::default(),
        })
    }

    pub fn config(&self) -> &HttpSourceConfig {
        &self.config
    }

    pub fn stats(&self) -> &SourceStats {
        &self.stats
    }

    fn request(&self) -> Result<DeviceReading, SourceError> {
        let response = match self.agent.get(&self.config.url).set("Accept", "application/json").call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                return Err(SourceError::Status {
                    status,
                    message: response.into_string().unwrap_or_default(),
                });
            }
            Err(ureq::Error::Transport(e)) => return Err(SourceError::Request(e.to_string())),
        };

        let body = response
            .into_string()
            .map_err(|e| SourceError::Request(e.to_string()))?;

        parse_payload(&body)
    }
}

impl ReadingSource for HttpSource {
    type Error = SourceError;

    fn fetch(&mut self) -> Result<DeviceReading, Self::Error> {
        let result = self.request();
        self.stats.record(&result);

        match &result {
            Ok(reading) => log::debug!(
                "{}: {:.1} °C, {:.1} %, {}",
                self.config.url,
                reading.temperature,
                reading.humidity,
                reading.air_quality
            ),
            Err(err) => log::warn!("{}: {}", self.config.url, err),
        }

        result
    }

    fn describe(&self) -> &str {
        &self.config.url
    }
}
