//! Polling Cycle and Dashboard View
//!
//! ## Overview
//!
//! The monitor owns the one authoritative window. Each cycle runs to
//! completion before the next begins:
//!
//! ```text
//! fetch ──► stamp ──► append ──► classify ──► forecast ──► render
//!   │                                ▲
//!   └─ error: keep window, banner ───┘
//! ```
//!
//! A failed fetch never stalls or empties the window: the cycle degrades to
//! "no new data", the error is kept as a banner for the presentation layer,
//! and the previous readings remain on display.
//!
//! Scheduling is pull-based. `poll_if_due` only fetches once the update
//! interval has elapsed since the last successful reading, so any loop,
//! timer or button can drive it; `request_refresh` forces the next call.
//! After a failed fetch the source is retried once `RETRY_DELAY_MS` (or the
//! update interval, if shorter) has passed.
//!
//! ## Usage Example
//!
//! ```rust
//! use airwatch_core::{
//!     DeviceReading, FixedTime, Monitor, MonitorConfig, ReadingSource,
//! };
//!
//! struct Constant;
//!
//! impl ReadingSource for Constant {
//!     type Error = &'static str;
//!     fn fetch(&mut self) -> Result<DeviceReading, Self::Error> {
//!         Ok(DeviceReading::new(21.0, 45.0, 120))
//!     }
//!     fn describe(&self) -> &str { "constant" }
//! }
//!
//! let mut monitor = Monitor::new(Constant, FixedTime::new(0), MonitorConfig::default())?;
//! for _ in 0..6 {
//!     monitor.poll();
//!     monitor.clock_mut().advance_secs(5);
//! }
//!
//! let view = monitor.dashboard();
//! assert_eq!(view.window.len(), 6);
//! assert!(view.forecast.is_some());
//! # Ok::<(), airwatch_core::MonitorError>(())
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{
    classify::{classify_reading, ConditionReport},
    constants::defaults::{DEFAULT_WINDOW_CAPACITY, RETRY_DELAY_MS},
    errors::{MonitorError, MonitorResult},
    forecast::{ForecastConfig, ForecastResult, Forecaster},
    reading::{Metric, Reading},
    time::{delta_ms, secs_to_ms, TimeManager, TimeSource, Timestamp},
    traits::ReadingSource,
    window::SlidingWindowStore,
};

/// Run-time configuration of the monitor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorConfig {
    /// Readings retained by the window
    pub capacity: usize,
    /// Forecast horizon, degree and update interval
    pub forecast: ForecastConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_WINDOW_CAPACITY,
            forecast: ForecastConfig::default(),
        }
    }
}

impl MonitorConfig {
    /// Set the window capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the forecast horizon
    pub fn with_predict_points(mut self, points: usize) -> Self {
        self.forecast.predict_points = points;
        self
    }

    /// Set the polynomial degree
    pub fn with_degree(mut self, degree: usize) -> Self {
        self.forecast.degree = degree;
        self
    }

    /// Polling interval, also used as the forecast time step
    pub fn with_update_interval_secs(mut self, secs: f64) -> Self {
        self.forecast.update_interval_secs = secs;
        self
    }

    /// Reject settings the monitor could never forecast with
    pub fn validate(&self) -> MonitorResult<()> {
        if self.capacity == 0 {
            return Err(MonitorError::invalid("capacity", "must be a positive integer"));
        }
        self.forecast.validate()?;
        check_forecast_fits(&self.forecast, self.capacity, "capacity")
    }
}

// A window that can never hold the readings a forecast needs is a
// configuration error, not a warm-up state.
fn check_forecast_fits(
    forecast: &ForecastConfig,
    capacity: usize,
    parameter: &'static str,
) -> MonitorResult<()> {
    if forecast.required_samples() > capacity {
        return Err(MonitorError::invalid(
            parameter,
            "window cannot hold enough readings to forecast",
        ));
    }
    Ok(())
}

/// Result of one polling cycle
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// A reading was fetched and appended
    Appended(Reading),
    /// The source failed; the window is unchanged
    NoNewData {
        /// Description of the failure
        reason: String,
    },
}

impl CycleOutcome {
    /// Appended reading, if any
    pub fn reading(&self) -> Option<&Reading> {
        match self {
            Self::Appended(reading) => Some(reading),
            Self::NoNewData { .. } => None,
        }
    }
}

/// Counters over the monitor's lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    /// Cycles that attempted a fetch
    pub cycles: u64,
    /// Readings appended
    pub appended: u64,
    /// Fetches that failed
    pub failures: u64,
}

/// Change between the two most recent readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDeltas {
    /// Second-newest reading
    pub previous: Reading,
    /// Newest reading
    pub current: Reading,
}

impl MetricDeltas {
    /// Deltas from the tail of a window; `None` with fewer than two readings
    pub fn from_recent(recent: &[Reading]) -> Option<Self> {
        match recent {
            [.., previous, current] => Some(Self {
                previous: *previous,
                current: *current,
            }),
            _ => None,
        }
    }

    /// `current - previous` for one metric
    pub fn get(&self, metric: Metric) -> f64 {
        self.current.value(metric) - self.previous.value(metric)
    }

    /// Whether the change is an improvement (lower air quality index is better)
    pub fn is_improvement(&self, metric: Metric) -> bool {
        let delta = self.get(metric);
        if metric.higher_is_worse() {
            delta < 0.0
        } else {
            delta > 0.0
        }
    }
}

/// Everything the presentation layer needs for one render
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Description of the reading source
    pub source: String,
    /// Window contents, oldest first
    pub window: Vec<Reading>,
    /// Window capacity
    pub capacity: usize,
    /// Newest reading
    pub latest: Option<Reading>,
    /// Change between the two newest readings
    pub deltas: Option<MetricDeltas>,
    /// Classification of the newest reading
    pub report: Option<ConditionReport>,
    /// `None` while the window is warming up
    pub forecast: Option<ForecastResult>,
    /// Readings still needed before forecasts appear
    pub readings_until_forecast: usize,
    /// Banner for the most recent failed fetch
    pub connection_error: Option<String>,
    /// Time of the last successful fetch
    pub last_update: Option<Timestamp>,
}

impl DashboardView {
    /// The source is failing and there is nothing to show yet
    pub fn no_history(&self) -> bool {
        self.connection_error.is_some() && self.window.is_empty()
    }

    /// No forecast yet because the window is still filling
    pub fn is_warming_up(&self) -> bool {
        self.forecast.is_none() && self.readings_until_forecast > 0
    }
}

/// Owns the window and drives fetch, append, classify and forecast
pub struct Monitor<S: ReadingSource, C: TimeSource> {
    source: S,
    clock: TimeManager<C>,
    window: SlidingWindowStore,
    forecaster: Forecaster,
    last_update: Option<Timestamp>,
    last_failure: Option<Timestamp>,
    connection_error: Option<String>,
    refresh_requested: bool,
    stats: CycleStats,
}

impl<S: ReadingSource, C: TimeSource> Monitor<S, C> {
    /// Monitor with an empty window; the configuration is validated first
    pub fn new(source: S, clock: C, config: MonitorConfig) -> MonitorResult<Self> {
        config.validate()?;

        Ok(Self {
            source,
            clock: TimeManager::new(clock),
            window: SlidingWindowStore::with_capacity(config.capacity)?,
            forecaster: Forecaster::new(config.forecast)?,
            last_update: None,
            last_failure: None,
            connection_error: None,
            refresh_requested: false,
            stats: CycleStats::default(),
        })
    }

    /// Run one cycle unconditionally
    pub fn poll(&mut self) -> CycleOutcome {
        self.stats.cycles += 1;
        self.refresh_requested = false;

        match self.source.fetch() {
            Ok(payload) => {
                let timestamp = self.clock.now();
                let reading = payload.at(timestamp);

                self.window.append(reading);
                self.last_update = Some(timestamp);
                self.last_failure = None;
                self.connection_error = None;
                self.stats.appended += 1;

                log_debug!(
                    "appended reading from {} ({} in window)",
                    self.source.describe(),
                    self.window.size()
                );
                CycleOutcome::Appended(reading)
            }
            Err(err) => {
                let reason = format!("{}", err);
                log_warn!("no new data from {}: {}", self.source.describe(), reason);

                self.last_failure = Some(self.clock.now());
                self.connection_error = Some(reason.clone());
                self.stats.failures += 1;
                CycleOutcome::NoNewData { reason }
            }
        }
    }

    /// Run a cycle only if the update interval has elapsed (or a refresh was requested)
    pub fn poll_if_due(&mut self) -> Option<CycleOutcome> {
        if self.is_due() {
            Some(self.poll())
        } else {
            None
        }
    }

    /// Whether the next `poll_if_due` will fetch
    pub fn is_due(&self) -> bool {
        self.time_until_due() == 0
    }

    /// Milliseconds until the next scheduled fetch (zero when due)
    pub fn time_until_due(&self) -> u64 {
        if self.refresh_requested {
            return 0;
        }

        let (since, wait) = match (self.last_failure, self.last_update) {
            (Some(failed), _) => (failed, self.retry_delay_ms()),
            (None, Some(updated)) => (updated, self.interval_ms()),
            (None, None) => return 0,
        };
        wait.saturating_sub(delta_ms(since, self.clock.peek()))
    }

    /// Force the next `poll_if_due` to fetch
    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    /// Build the read-only view of the current state
    pub fn dashboard(&self) -> DashboardView {
        let window = self.window.snapshot();
        let latest = window.last().copied();
        let required = self.forecaster.config().required_samples();

        let forecast = match self.forecaster.forecast(&window) {
            Ok(forecast) => Some(forecast),
            Err(err) if err.is_warm_up() => None,
            Err(err) => {
                log_warn!("forecast skipped: {}", err);
                None
            }
        };

        DashboardView {
            source: self.source.describe().into(),
            capacity: self.window.capacity(),
            latest,
            deltas: MetricDeltas::from_recent(&self.window.last(2)),
            report: latest.as_ref().map(classify_reading),
            forecast,
            readings_until_forecast: required.saturating_sub(window.len()),
            connection_error: self.connection_error.clone(),
            last_update: self.last_update,
            window,
        }
    }

    /// Resize the window, evicting the oldest readings if it shrinks
    pub fn set_capacity(&mut self, capacity: usize) -> MonitorResult<()> {
        if capacity > 0 {
            check_forecast_fits(self.forecaster.config(), capacity, "capacity")?;
        }
        self.window.set_capacity(capacity)
    }

    /// Change the forecast horizon
    pub fn set_predict_points(&mut self, points: usize) -> MonitorResult<()> {
        self.reconfigure(self.forecaster.config().with_predict_points(points))
    }

    /// Change the polynomial degree
    pub fn set_degree(&mut self, degree: usize) -> MonitorResult<()> {
        let config = self.forecaster.config().with_degree(degree);
        config.validate()?;
        check_forecast_fits(&config, self.window.capacity(), "degree")?;
        self.reconfigure(config)
    }

    /// Change the polling interval (also the forecast time step)
    pub fn set_update_interval_secs(&mut self, secs: f64) -> MonitorResult<()> {
        self.reconfigure(self.forecaster.config().with_update_interval_secs(secs))
    }

    fn reconfigure(&mut self, config: ForecastConfig) -> MonitorResult<()> {
        self.forecaster = Forecaster::new(config)?;
        Ok(())
    }

    fn interval_ms(&self) -> u64 {
        secs_to_ms(self.forecaster.config().update_interval_secs)
    }

    fn retry_delay_ms(&self) -> u64 {
        RETRY_DELAY_MS.min(self.interval_ms())
    }

    /// Window owned by the monitor
    pub fn window(&self) -> &SlidingWindowStore {
        &self.window
    }

    /// Active forecaster
    pub fn forecaster(&self) -> &Forecaster {
        &self.forecaster
    }

    /// Lifetime counters
    pub fn stats(&self) -> CycleStats {
        self.stats
    }

    /// Banner for the most recent failed fetch
    pub fn connection_error(&self) -> Option<&str> {
        self.connection_error.as_deref()
    }

    /// Reading source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Reading source, mutably
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Underlying clock, for adjusting test clocks
    pub fn clock_mut(&mut self) -> &mut C {
        self.clock.source_mut()
    }
}

#[cfg(feature = "std")]
impl<S: ReadingSource> Monitor<S, crate::time::SystemTime> {
    /// Monitor stamping readings with the system clock
    pub fn with_system_clock(source: S, config: MonitorConfig) -> MonitorResult<Self> {
        Self::new(source, crate::time::SystemTime, config)
    }
}
