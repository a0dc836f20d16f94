//! Synthetic demo source
//!
//! Each fetch nudges the base values by a small random drift (kept within
//! plausible indoor ranges) and reports the base plus independent jitter.
//!
//! | Metric      | Start | Jitter | Drift | Base range |
//! |-------------|-------|--------|-------|------------|
//! | Temperature | 24.5  | ±0.5   | ±0.1  | 18 ..= 30  |
//! | Humidity    | 48.0  | ±2.0   | ±0.2  | 30 ..= 70  |
//! | Air quality | 150   | ±10    | ±5    | 50 ..= 500 |

use airwatch_core::{DeviceReading, ReadingSource};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{SourceError, SourceStats};

/// Bounds and noise for one simulated metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    pub start: f64,
    pub jitter: f64,
    pub drift: f64,
    pub min: f64,
    pub max: f64,
}

pub const TEMPERATURE_WALK: WalkParams = WalkParams {
    start: 24.5,
    jitter: 0.5,
    drift: 0.1,
    min: 18.0,
    max: 30.0,
};

pub const HUMIDITY_WALK: WalkParams = WalkParams {
    start: 48.0,
    jitter: 2.0,
    drift: 0.2,
    min: 30.0,
    max: 70.0,
};

pub const AIR_QUALITY_WALK: WalkParams = WalkParams {
    start: 150.0,
    jitter: 10.0,
    drift: 5.0,
    min: 50.0,
    max: 500.0,
};

/// Random-walk generator standing in for the device
pub struct SyntheticSource {
    rng: StdRng,
    bases: [f64; 3],
    stats: SourceStats,
}

impl SyntheticSource {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible generator
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            bases: [TEMPERATURE_WALK.start, HUMIDITY_WALK.start, AIR_QUALITY_WALK.start],
            stats: SourceStats::default(),
        }
    }

    /// Produce the next sample; never fails
    pub fn generate(&mut self) -> DeviceReading {
        let temperature = self.step(0, &TEMPERATURE_WALK);
        let humidity = self.step(1, &HUMIDITY_WALK);
        let air_quality = self.step(2, &AIR_QUALITY_WALK);

        // Truncation toward zero, floored at 0
        DeviceReading::new(temperature, humidity, air_quality.max(0.0) as u32)
    }

    /// Current base values (temperature, humidity, air quality)
    pub fn bases(&self) -> [f64; 3] {
        self.bases
    }

    pub fn stats(&self) -> &SourceStats {
        &self.stats
    }

    fn step(&mut self, slot: usize, params: &WalkParams) -> f64 {
        let value = self.bases[slot] + self.rng.gen_range(-params.jitter..=params.jitter);
        let drifted = self.bases[slot] + self.rng.gen_range(-params.drift..=params.drift);
        self.bases[slot] = drifted.clamp(params.min, params.max);
        value
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSource for SyntheticSource {
    type Error = SourceError;

    fn fetch(&mut self) -> Result<DeviceReading, Self::Error> {
        let result = Ok(self.generate());
        self.stats.record(&result);
        result
    }

    fn describe(&self) -> &str {
        "synthetic demo data"
    }
}
