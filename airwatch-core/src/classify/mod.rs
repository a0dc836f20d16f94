//! Threshold Classification of Readings
//!
//! ## Overview
//!
//! Pure, stateless functions that map a single metric value onto a fixed,
//! exhaustive table of categories, plus an aggregate assessment across all
//! three metrics. Nothing here looks at history; the presentation layer
//! feeds in the most recent reading.
//!
//! ## Per-Metric Bands
//!
//! - **Temperature** (°C): Cool `< 18`, Comfortable `[18, 24]`,
//!   Warm `(24, 28]`, Hot `> 28`
//! - **Humidity** (%): Dry `< 30`, Comfortable `[30, 50]`,
//!   Slightly Humid `(50, 70]`, Very Humid `> 70`
//! - **Air quality** (index): six half-open bands from Excellent `< 100`
//!   to Hazardous `>= 500`
//!
//! ## Usage Example
//!
//! ```rust
//! use airwatch_core::classify::{
//!     classify_reading, interpret_air_quality, Assessment, AirQualityCategory,
//! };
//! use airwatch_core::Reading;
//!
//! let result = interpret_air_quality(100);
//! assert_eq!(result.category, AirQualityCategory::Good);
//!
//! let report = classify_reading(&Reading::new(0, 10.0, 50.0, 50));
//! assert_eq!(report.assessment.headline(), "Temperature Concern");
//! ```

pub mod air_quality;
pub mod assessment;
pub mod humidity;
pub mod temperature;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{reading::Reading, traits::Category};

pub use air_quality::{interpret_air_quality, AirQualityCategory};
pub use assessment::{
    overall_assessment, Assessment, ConcernFlags, HumidityConcern, TemperatureConcern,
};
pub use humidity::{interpret_humidity, HumidityCategory};
pub use temperature::{interpret_temperature, TemperatureCategory};

/// A category together with its human-readable rationale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Classification<C: Category> {
    /// Band the value fell into
    pub category: C,
    /// Human-readable rationale
    pub message: &'static str,
}

impl<C: Category> Classification<C> {
    /// Pair a category with its message
    pub fn new(category: C, message: &'static str) -> Self {
        Self { category, message }
    }

    /// Category label
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// Category icon
    pub fn icon(&self) -> &'static str {
        self.category.icon()
    }
}

impl<C: Category> core::fmt::Display for Classification<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

/// Every classification of one reading
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ConditionReport {
    /// Temperature band
    pub temperature: Classification<TemperatureCategory>,
    /// Humidity band
    pub humidity: Classification<HumidityCategory>,
    /// Air-quality band and advisory
    pub air_quality: Classification<AirQualityCategory>,
    /// Metrics outside their comfort limits
    pub concerns: ConcernFlags,
    /// Aggregate verdict
    pub assessment: Assessment,
}

/// Classify all three metrics of a reading and assess them together
pub fn classify_reading(reading: &Reading) -> ConditionReport {
    let concerns =
        ConcernFlags::evaluate(reading.temperature, reading.humidity, reading.air_quality);

    ConditionReport {
        temperature: interpret_temperature(reading.temperature),
        humidity: interpret_humidity(reading.humidity),
        air_quality: interpret_air_quality(reading.air_quality),
        concerns,
        assessment: Assessment::from_flags(concerns, reading.temperature, reading.humidity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_combines_all_metrics() {
        let report = classify_reading(&Reading::new(0, 26.0, 75.0, 320));

        assert_eq!(report.temperature.category, TemperatureCategory::Warm);
        assert_eq!(report.humidity.category, HumidityCategory::VeryHumid);
        assert_eq!(
            report.air_quality.category,
            AirQualityCategory::UnhealthyForSensitiveGroups
        );
        assert!(!report.concerns.temperature);
        assert!(report.concerns.humidity);
        assert!(report.concerns.air_quality);
        assert_eq!(report.assessment, Assessment::SomeConcerns);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_renders_badge_and_label() {
        assert_eq!(interpret_temperature(12.0).to_string(), "❄️ Cool");
        assert_eq!(interpret_air_quality(650).to_string(), "🟣 Hazardous");
    }
}
