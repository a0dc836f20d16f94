//! Shared helpers for the integration tests
//!
//! - Deterministic reading generators with realistic indoor patterns
//! - Scripted sources for driving the monitor through failures

#![allow(dead_code)]

pub mod generators;

use std::collections::VecDeque;

use airwatch_core::{DeviceReading, ReadingSource};

/// Source that replays a fixed script of payloads and failures
pub struct ScriptedSource {
    script: VecDeque<Result<DeviceReading, String>>,
    pub fetches: usize,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = Result<DeviceReading, String>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fetches: 0,
        }
    }

    /// Source that succeeds with the given payloads, in order
    pub fn replay(payloads: impl IntoIterator<Item = DeviceReading>) -> Self {
        Self::new(payloads.into_iter().map(Ok))
    }
}

impl ReadingSource for ScriptedSource {
    type Error = String;

    fn fetch(&mut self) -> Result<DeviceReading, Self::Error> {
        self.fetches += 1;
        self.script
            .pop_front()
            .unwrap_or_else(|| Err("Error fetching data: connection refused".to_string()))
    }

    fn describe(&self) -> &str {
        "scripted test source"
    }
}

/// Assert two floats agree within `tolerance`
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() <= $tolerance,
            "expected {} ≈ {} (±{})",
            left,
            right,
            $tolerance
        );
    }};
}
