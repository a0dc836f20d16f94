//! Overall environmental assessment
//!
//! Three concern flags are derived from the latest reading:
//!
//! ```text
//! temperature: t < 16 °C  or t > 28 °C
//! humidity:    h < 20 %   or h > 70 %
//! air quality: aq >= 300
//! ```
//!
//! The flags are dispatched through an explicit truth table so every
//! combination is visible in one `match`:
//!
//! | temp | hum | air | Assessment            |
//! |------|-----|-----|-----------------------|
//! |  T   |  T  |  T  | Multiple concerns     |
//! |  T   |  T  |  F  | Some concerns         |
//! |  T   |  F  |  T  | Some concerns         |
//! |  F   |  T  |  T  | Some concerns         |
//! |  T   |  F  |  F  | Temperature (cold/hot)|
//! |  F   |  T  |  F  | Humidity (dry/humid)  |
//! |  F   |  F  |  T  | Air quality           |
//! |  F   |  F  |  F  | Good conditions       |

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::thresholds::{
    AIR_QUALITY_CONCERN_AT, HUMIDITY_CONCERN_ABOVE_PCT, HUMIDITY_CONCERN_BELOW_PCT,
    TEMP_CONCERN_ABOVE_C, TEMP_CONCERN_BELOW_C,
};

/// Which metrics are outside their acceptable range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConcernFlags {
    /// Temperature outside 16 to 28 °C
    pub temperature: bool,
    /// Humidity outside 20 to 70 %
    pub humidity: bool,
    /// Air-quality index at or above 300
    pub air_quality: bool,
}

impl ConcernFlags {
    /// Raise the flags for one set of values
    pub fn evaluate(temperature: f64, humidity: f64, air_quality: u32) -> Self {
        Self {
            temperature: temperature < TEMP_CONCERN_BELOW_C || temperature > TEMP_CONCERN_ABOVE_C,
            humidity: humidity < HUMIDITY_CONCERN_BELOW_PCT || humidity > HUMIDITY_CONCERN_ABOVE_PCT,
            air_quality: air_quality >= AIR_QUALITY_CONCERN_AT,
        }
    }

    /// Number of raised flags
    pub fn count(&self) -> usize {
        [self.temperature, self.humidity, self.air_quality]
            .iter()
            .filter(|&&raised| raised)
            .count()
    }
}

/// Direction of a temperature concern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureConcern {
    /// Below the comfort floor
    TooCold,
    /// Above the comfort ceiling
    TooHot,
}

/// Direction of a humidity concern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HumidityConcern {
    /// Below the humidity floor
    TooDry,
    /// Above the humidity ceiling
    TooHumid,
}

/// Aggregate cross-metric assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Assessment {
    /// All three metrics raised a concern
    MultipleConcerns,
    /// Exactly two metrics raised a concern
    SomeConcerns,
    /// Only temperature raised a concern
    Temperature(TemperatureConcern),
    /// Only humidity raised a concern
    Humidity(HumidityConcern),
    /// Only air quality raised a concern
    AirQuality,
    /// No concerns
    GoodConditions,
}

impl Assessment {
    /// Dispatch the concern flags through the precedence table
    pub fn from_flags(flags: ConcernFlags, temperature: f64, humidity: f64) -> Self {
        match (flags.temperature, flags.humidity, flags.air_quality) {
            (true, true, true) => Self::MultipleConcerns,
            (true, true, false) | (true, false, true) | (false, true, true) => Self::SomeConcerns,
            (true, false, false) => Self::Temperature(if temperature < TEMP_CONCERN_BELOW_C {
                TemperatureConcern::TooCold
            } else {
                TemperatureConcern::TooHot
            }),
            (false, true, false) => Self::Humidity(if humidity < HUMIDITY_CONCERN_BELOW_PCT {
                HumidityConcern::TooDry
            } else {
                HumidityConcern::TooHumid
            }),
            (false, false, true) => Self::AirQuality,
            (false, false, false) => Self::GoodConditions,
        }
    }

    /// Emoji shown before the headline
    pub fn icon(&self) -> &'static str {
        match self {
            Self::MultipleConcerns => "🚨",
            Self::SomeConcerns => "⚠️",
            Self::Temperature(_) => "🌡️",
            Self::Humidity(_) => "💧",
            Self::AirQuality => "🌬️",
            Self::GoodConditions => "✅",
        }
    }

    /// Short title of the assessment
    pub fn headline(&self) -> &'static str {
        match self {
            Self::MultipleConcerns => "Multiple Environmental Concerns",
            Self::SomeConcerns => "Some Environmental Concerns",
            Self::Temperature(_) => "Temperature Concern",
            Self::Humidity(_) => "Humidity Concern",
            Self::AirQuality => "Air Quality Concern",
            Self::GoodConditions => "Good Environmental Conditions",
        }
    }

    /// Sub-variant wording for single-metric concerns ("too cold", ...)
    pub fn detail(&self) -> Option<&'static str> {
        match self {
            Self::Temperature(TemperatureConcern::TooCold) => Some("too cold"),
            Self::Temperature(TemperatureConcern::TooHot) => Some("too hot"),
            Self::Humidity(HumidityConcern::TooDry) => Some("too dry"),
            Self::Humidity(HumidityConcern::TooHumid) => Some("too humid"),
            _ => None,
        }
    }

    /// Full advisory text
    pub fn message(&self) -> &'static str {
        match self {
            Self::MultipleConcerns => {
                "The temperature, humidity, and air quality are all outside ideal ranges. \
                 This environment may be uncomfortable and potentially harmful to health over \
                 extended periods. Consider adjusting ventilation, temperature control, and air cleaning."
            }
            Self::SomeConcerns => {
                "Multiple environmental factors are outside ideal ranges. This may affect comfort \
                 and potentially health. Review the individual measurements and consider making \
                 appropriate adjustments to improve the environment."
            }
            Self::Temperature(TemperatureConcern::TooCold) => {
                "The environment is too cold. While other factors are within acceptable ranges, \
                 the temperature may cause discomfort. Consider adjusting heating or cooling as appropriate."
            }
            Self::Temperature(TemperatureConcern::TooHot) => {
                "The environment is too hot. While other factors are within acceptable ranges, \
                 the temperature may cause discomfort. Consider adjusting heating or cooling as appropriate."
            }
            Self::Humidity(HumidityConcern::TooDry) => {
                "The environment is too dry. This may cause discomfort such as dry skin/throat or \
                 excess moisture/condensation. Consider using a humidifier or dehumidifier as appropriate."
            }
            Self::Humidity(HumidityConcern::TooHumid) => {
                "The environment is too humid. This may cause discomfort such as dry skin/throat or \
                 excess moisture/condensation. Consider using a humidifier or dehumidifier as appropriate."
            }
            Self::AirQuality => {
                "The air quality readings suggest contamination above recommended levels. This may \
                 cause respiratory irritation or other health effects. Consider improving ventilation, \
                 identifying pollution sources, or using air purification."
            }
            Self::GoodConditions => {
                "All measured parameters are within comfortable ranges. The current environment \
                 should feel comfortable and be healthy for most people."
            }
        }
    }
}

impl core::fmt::Display for Assessment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}: {}", self.icon(), self.headline(), self.message())
    }
}

/// Assess the environment from one reading's values
pub fn overall_assessment(temperature: f64, humidity: f64, air_quality: u32) -> Assessment {
    let flags = ConcernFlags::evaluate(temperature, humidity, air_quality);
    Assessment::from_flags(flags, temperature, humidity)
}
