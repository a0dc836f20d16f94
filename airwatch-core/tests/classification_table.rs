//! Band boundaries and aggregate assessments across the full table

use airwatch_core::classify::{
    interpret_air_quality, interpret_humidity, interpret_temperature, overall_assessment,
    AirQualityCategory, Assessment, HumidityCategory, HumidityConcern, TemperatureCategory,
    TemperatureConcern,
};
use airwatch_core::{classify_reading, Reading};

#[test]
fn temperature_boundaries() {
    let cases = [
        (17.99, TemperatureCategory::Cool),
        (18.0, TemperatureCategory::Comfortable),
        (24.0, TemperatureCategory::Comfortable),
        (24.01, TemperatureCategory::Warm),
        (28.0, TemperatureCategory::Warm),
        (28.01, TemperatureCategory::Hot),
    ];
    for (celsius, expected) in cases {
        assert_eq!(interpret_temperature(celsius).category, expected, "{celsius} °C");
    }
}

#[test]
fn humidity_boundaries() {
    let cases = [
        (29.9, HumidityCategory::Dry),
        (30.0, HumidityCategory::Comfortable),
        (50.0, HumidityCategory::Comfortable),
        (50.1, HumidityCategory::SlightlyHumid),
        (70.0, HumidityCategory::SlightlyHumid),
        (70.1, HumidityCategory::VeryHumid),
    ];
    for (percent, expected) in cases {
        assert_eq!(interpret_humidity(percent).category, expected, "{percent} %");
    }
}

#[test]
fn air_quality_bands_are_half_open() {
    let cases = [
        (0, AirQualityCategory::Excellent),
        (99, AirQualityCategory::Excellent),
        (100, AirQualityCategory::Good),
        (199, AirQualityCategory::Good),
        (200, AirQualityCategory::Moderate),
        (300, AirQualityCategory::UnhealthyForSensitiveGroups),
        (400, AirQualityCategory::Unhealthy),
        (499, AirQualityCategory::Unhealthy),
        (500, AirQualityCategory::Hazardous),
        (u32::MAX, AirQualityCategory::Hazardous),
    ];
    for (index, expected) in cases {
        assert_eq!(interpret_air_quality(index).category, expected, "index {index}");
    }
}

#[test]
fn assessment_counts_concerns() {
    assert_eq!(overall_assessment(22.0, 45.0, 150), Assessment::GoodConditions);
    assert_eq!(overall_assessment(16.0, 20.0, 299), Assessment::GoodConditions);
    assert_eq!(
        overall_assessment(15.0, 45.0, 150),
        Assessment::Temperature(TemperatureConcern::TooCold)
    );
    assert_eq!(
        overall_assessment(29.0, 45.0, 150),
        Assessment::Temperature(TemperatureConcern::TooHot)
    );
    assert_eq!(
        overall_assessment(22.0, 19.0, 150),
        Assessment::Humidity(HumidityConcern::TooDry)
    );
    assert_eq!(
        overall_assessment(22.0, 71.0, 150),
        Assessment::Humidity(HumidityConcern::TooHumid)
    );
    assert_eq!(overall_assessment(22.0, 45.0, 300), Assessment::AirQuality);
    assert_eq!(overall_assessment(29.0, 71.0, 150), Assessment::SomeConcerns);
    assert_eq!(overall_assessment(29.0, 71.0, 300), Assessment::MultipleConcerns);
}

#[test]
fn report_matches_individual_interpreters() {
    let reading = Reading::new(0, 26.0, 55.0, 250);
    let report = classify_reading(&reading);

    assert_eq!(report.temperature, interpret_temperature(26.0));
    assert_eq!(report.humidity, interpret_humidity(55.0));
    assert_eq!(report.air_quality, interpret_air_quality(250));
    assert_eq!(report.concerns.count(), 0);
    assert_eq!(report.assessment, Assessment::GoodConditions);
}
