//! Sensor readings and the device wire format
//!
//! A `Reading` is one timestamped observation of the three metrics. It is
//! created by a source, appended to the window exactly once and never
//! mutated afterwards; the window only changes which readings it holds.
//!
//! The device itself reports bare JSON without a timestamp:
//!
//! ```text
//! {"temperature": 24.6, "humidity": 47.9, "airQuality": 152}
//! ```
//!
//! `DeviceReading` mirrors that payload; the monitor stamps it with its own
//! clock when it arrives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// One timestamped observation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Milliseconds since the Unix epoch
    pub timestamp: Timestamp,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent; out-of-range noise is kept as reported
    pub humidity: f64,
    /// Unitless gas-sensor index, higher is worse
    pub air_quality: u32,
}

impl Reading {
    /// Reading from explicit values
    pub fn new(timestamp: Timestamp, temperature: f64, humidity: f64, air_quality: u32) -> Self {
        Self {
            timestamp,
            temperature,
            humidity,
            air_quality,
        }
    }

    /// Value of one metric as a float
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::AirQuality => self.air_quality as f64,
        }
    }
}

/// Payload reported by the sensor device
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DeviceReading {
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    /// Gas-sensor index, higher is worse
    #[cfg_attr(feature = "serde", serde(rename = "airQuality"))]
    pub air_quality: u32,
}

impl DeviceReading {
    /// Payload from explicit values
    pub fn new(temperature: f64, humidity: f64, air_quality: u32) -> Self {
        Self {
            temperature,
            humidity,
            air_quality,
        }
    }

    /// Stamp the payload into a window reading
    pub fn at(self, timestamp: Timestamp) -> Reading {
        Reading::new(timestamp, self.temperature, self.humidity, self.air_quality)
    }
}

/// The three tracked metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Metric {
    /// °C
    Temperature,
    /// Relative humidity, %
    Humidity,
    /// Air-quality index
    AirQuality,
}

impl Metric {
    /// All metrics in display order
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Humidity, Metric::AirQuality];

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Humidity => "Humidity",
            Metric::AirQuality => "Air Quality",
        }
    }

    /// Unit suffix
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::AirQuality => "PPM",
        }
    }

    /// Position of the metric in `Metric::ALL`
    pub fn index(&self) -> usize {
        match self {
            Metric::Temperature => 0,
            Metric::Humidity => 1,
            Metric::AirQuality => 2,
        }
    }

    /// Whether a rising value is an improvement (only air quality is inverted)
    pub fn higher_is_worse(&self) -> bool {
        matches!(self, Metric::AirQuality)
    }
}

impl core::fmt::Display for Metric {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}
