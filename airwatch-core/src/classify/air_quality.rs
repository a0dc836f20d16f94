//! Air-quality index bands
//!
//! The gas sensor reports a unitless index proportional to its resistance;
//! higher is worse. The bands are an exhaustive, ordered table of half-open
//! intervals, so a value on a boundary belongs to the band that starts
//! there (exactly 100 is Good, not Excellent).
//!
//! ```text
//!   0        100       200       300       400       500
//!   |Excellent| Good    |Moderate |Sensitive|Unhealthy|Hazardous ...
//! ```
//!
//! The breakpoints approximate an MQ135-class sensor and may need
//! adjustment for other gas sensors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{constants::thresholds::AIR_QUALITY_BANDS, traits::Category};

use super::Classification;

/// Air-quality category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirQualityCategory {
    /// Below 100
    Excellent,
    /// 100 to 199
    Good,
    /// 200 to 299
    Moderate,
    /// 300 to 399
    UnhealthyForSensitiveGroups,
    /// 400 to 499
    Unhealthy,
    /// 500 and above
    Hazardous,
}

impl AirQualityCategory {
    /// Categories in table order, one per band of `AIR_QUALITY_BANDS` plus
    /// the open-ended last band
    pub const TABLE: [AirQualityCategory; 6] = [
        Self::Excellent,
        Self::Good,
        Self::Moderate,
        Self::UnhealthyForSensitiveGroups,
        Self::Unhealthy,
        Self::Hazardous,
    ];

    /// Band for an air-quality index
    pub fn from_index(index: u32) -> Self {
        let band = AIR_QUALITY_BANDS
            .iter()
            .position(|&upper| index < upper)
            .unwrap_or(AIR_QUALITY_BANDS.len());
        Self::TABLE[band]
    }

    /// Advisory shown under the air-quality analysis
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::Excellent => {
                "The air quality is excellent. The environment is clean and healthy."
            }
            Self::Good => {
                "The air quality is good. Most people won't experience negative health effects."
            }
            Self::Moderate => {
                "The air quality is moderate. Sensitive individuals may experience slight irritation."
            }
            Self::UnhealthyForSensitiveGroups => {
                "Members of sensitive groups may experience health effects. Consider improving ventilation."
            }
            Self::Unhealthy => {
                "Everyone may begin to experience health effects. Consider improving ventilation immediately."
            }
            Self::Hazardous => {
                "Health alert: everyone may experience more serious health effects. Improve ventilation urgently."
            }
        }
    }
}

impl Category for AirQualityCategory {
    fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Excellent => "✅",
            Self::Good => "🟢",
            Self::Moderate => "🟡",
            Self::UnhealthyForSensitiveGroups => "🟠",
            Self::Unhealthy => "🔴",
            Self::Hazardous => "🟣",
        }
    }
}

/// Classify an air-quality index, with its advisory message
pub fn interpret_air_quality(index: u32) -> Classification<AirQualityCategory> {
    let category = AirQualityCategory::from_index(index);
    Classification::new(category, category.advisory())
}
