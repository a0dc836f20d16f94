//! Relative humidity comfort bands
//!
//! | Range (%RH)  | Category       |
//! |--------------|----------------|
//! | `< 30`       | Dry            |
//! | `[30, 50]`   | Comfortable    |
//! | `(50, 70]`   | Slightly Humid |
//! | `> 70`       | Very Humid     |
//!
//! Readings outside 0–100 % are classified like any other value.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::thresholds::{
        HUMIDITY_COMFORTABLE_MAX_PCT, HUMIDITY_DRY_BELOW_PCT, HUMIDITY_SLIGHTLY_HUMID_MAX_PCT,
    },
    traits::Category,
};

use super::Classification;

/// Humidity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HumidityCategory {
    /// Below 30 %
    Dry,
    /// 30 to 50 %
    Comfortable,
    /// Above 50, up to 70 %
    SlightlyHumid,
    /// Above 70 %
    VeryHumid,
}

impl HumidityCategory {
    /// Band for a relative humidity in percent
    pub fn from_percent(percent: f64) -> Self {
        if percent < HUMIDITY_DRY_BELOW_PCT {
            Self::Dry
        } else if percent <= HUMIDITY_COMFORTABLE_MAX_PCT {
            Self::Comfortable
        } else if percent <= HUMIDITY_SLIGHTLY_HUMID_MAX_PCT {
            Self::SlightlyHumid
        } else {
            Self::VeryHumid
        }
    }

    /// Status text for the band
    pub fn message(&self) -> &'static str {
        match self {
            Self::Dry => "Below 30 %. Dry air can irritate skin, eyes and throat.",
            Self::Comfortable => "Between 30 and 50 %. Comfortable for most people.",
            Self::SlightlyHumid => "Between 50 and 70 %. Slightly humid; watch for condensation.",
            Self::VeryHumid => "Above 70 %. Very humid; mould growth becomes likely.",
        }
    }
}

impl Category for HumidityCategory {
    fn label(&self) -> &'static str {
        match self {
            Self::Dry => "Dry",
            Self::Comfortable => "Comfortable",
            Self::SlightlyHumid => "Slightly Humid",
            Self::VeryHumid => "Very Humid",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Dry => "🏜️",
            Self::Comfortable => "✅",
            Self::SlightlyHumid => "💧",
            Self::VeryHumid => "💦",
        }
    }
}

/// Classify a relative humidity reading in percent
pub fn interpret_humidity(percent: f64) -> Classification<HumidityCategory> {
    let category = HumidityCategory::from_percent(percent);
    Classification::new(category, category.message())
}
