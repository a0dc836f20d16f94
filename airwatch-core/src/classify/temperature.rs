//! Temperature comfort bands
//!
//! | Range (°C)   | Category    |
//! |--------------|-------------|
//! | `< 18`       | Cool        |
//! | `[18, 24]`   | Comfortable |
//! | `(24, 28]`   | Warm        |
//! | `> 28`       | Hot         |
//!
//! A non-finite reading fails every comparison and lands in `Hot`, the
//! fall-through band, which keeps the table exhaustive.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::thresholds::{TEMP_COMFORTABLE_MAX_C, TEMP_COOL_BELOW_C, TEMP_WARM_MAX_C},
    traits::Category,
};

use super::Classification;

/// Temperature category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureCategory {
    /// Below 18 °C
    Cool,
    /// 18 to 24 °C
    Comfortable,
    /// Above 24, up to 28 °C
    Warm,
    /// Above 28 °C
    Hot,
}

impl TemperatureCategory {
    /// Band for a temperature in °C
    pub fn from_celsius(celsius: f64) -> Self {
        if celsius < TEMP_COOL_BELOW_C {
            Self::Cool
        } else if celsius <= TEMP_COMFORTABLE_MAX_C {
            Self::Comfortable
        } else if celsius <= TEMP_WARM_MAX_C {
            Self::Warm
        } else {
            Self::Hot
        }
    }

    /// Status text for the band
    pub fn message(&self) -> &'static str {
        match self {
            Self::Cool => "Below 18 °C. Most people will want extra heating or clothing.",
            Self::Comfortable => "Between 18 and 24 °C. Comfortable for most people.",
            Self::Warm => "Between 24 and 28 °C. Warm; consider ventilation or cooling.",
            Self::Hot => "Above 28 °C. Hot; cooling is recommended.",
        }
    }
}

impl Category for TemperatureCategory {
    fn label(&self) -> &'static str {
        match self {
            Self::Cool => "Cool",
            Self::Comfortable => "Comfortable",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Self::Cool => "❄️",
            Self::Comfortable => "✅",
            Self::Warm => "🌡️",
            Self::Hot => "🔥",
        }
    }
}

/// Classify a temperature reading in °C
pub fn interpret_temperature(celsius: f64) -> Classification<TemperatureCategory> {
    let category = TemperatureCategory::from_celsius(celsius);
    Classification::new(category, category.message())
}
