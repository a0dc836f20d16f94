//! Deterministic reading generators
//!
//! A small LCG keeps the series reproducible without pulling a random
//! number generator into the core's test dependencies.

use airwatch_core::{DeviceReading, Reading, Timestamp};

/// Nominal device step used throughout the tests
pub const STEP_MS: u64 = 5_000;

/// Generates indoor readings with a slow drift and bounded noise
pub struct IndoorGenerator {
    seed: u32,
    temperature: f64,
    humidity: f64,
    air_quality: f64,
}

impl IndoorGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            temperature: 24.5,
            humidity: 48.0,
            air_quality: 150.0,
        }
    }

    /// Next device payload
    pub fn next_payload(&mut self) -> DeviceReading {
        self.temperature = (self.temperature + self.noise(0.1)).clamp(18.0, 30.0);
        self.humidity = (self.humidity + self.noise(0.2)).clamp(30.0, 70.0);
        self.air_quality = (self.air_quality + self.noise(5.0)).clamp(50.0, 500.0);

        DeviceReading::new(
            self.temperature + self.noise(0.5),
            self.humidity + self.noise(2.0),
            (self.air_quality + self.noise(10.0)).max(0.0) as u32,
        )
    }

    /// `count` readings stamped every `STEP_MS` from `start`
    pub fn series(&mut self, start: Timestamp, count: usize) -> Vec<Reading> {
        (0..count)
            .map(|i| self.next_payload().at(start + i as u64 * STEP_MS))
            .collect()
    }

    // Uniform in [-amplitude, amplitude]
    fn noise(&mut self, amplitude: f64) -> f64 {
        self.seed = self.seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let uniform = self.seed as f64 / u32::MAX as f64;
        (uniform - 0.5) * 2.0 * amplitude
    }
}

/// Readings whose metrics follow exact polynomials of the index
pub fn polynomial_series(
    count: usize,
    temperature: impl Fn(f64) -> f64,
    humidity: impl Fn(f64) -> f64,
    air_quality: impl Fn(f64) -> u32,
) -> Vec<Reading> {
    (0..count)
        .map(|i| {
            let x = i as f64;
            Reading::new(i as u64 * STEP_MS, temperature(x), humidity(x), air_quality(x))
        })
        .collect()
}

/// Readings numbered by their insertion order (air quality carries the sequence)
pub fn numbered(count: usize) -> Vec<Reading> {
    (0..count)
        .map(|i| Reading::new(i as u64 * STEP_MS, 21.0, 45.0, i as u32))
        .collect()
}
