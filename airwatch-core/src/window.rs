//! Capacity-Bounded Sliding Window of Readings
//!
//! ## Overview
//!
//! The window keeps the most recent readings for display and forecasting.
//! Unlike a compile-time ring buffer, its capacity is a run-time setting the
//! operator can change at any moment, so storage is a `VecDeque` that is
//! trimmed from the front.
//!
//! ## Invariants
//!
//! - `len() <= capacity()` after every operation
//! - Readings are kept in insertion order; iteration is oldest to newest
//! - Eviction is strictly oldest-first
//! - Stored readings are never modified, only evicted
//!
//! ```text
//! capacity = 4
//!
//! append(E):  [A, B, C, D]  ->  [A, B, C, D, E]  ->  [B, C, D, E]
//!                                             evict A ^
//! set_capacity(2):            [B, C, D, E]  ->  [D, E]
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use airwatch_core::{Reading, SlidingWindowStore};
//!
//! let mut window = SlidingWindowStore::with_capacity(3)?;
//! for i in 0..5u64 {
//!     window.append(Reading::new(i * 5_000, 22.0, 45.0, 120));
//! }
//!
//! assert_eq!(window.size(), 3);
//! assert_eq!(window.snapshot()[0].timestamp, 10_000);
//!
//! // Deltas need the two most recent readings
//! let recent = window.last(2);
//! assert_eq!(recent.len(), 2);
//! # Ok::<(), airwatch_core::MonitorError>(())
//! ```

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::{
    constants::defaults::DEFAULT_WINDOW_CAPACITY,
    errors::{MonitorError, MonitorResult},
    reading::{Metric, Reading},
};

/// Bounded FIFO window of sensor readings
///
/// Not thread-safe on its own; see `SharedWindow` for a locked wrapper.
#[derive(Debug, Clone)]
pub struct SlidingWindowStore {
    readings: VecDeque<Reading>,
    capacity: usize,
}

impl SlidingWindowStore {
    /// Create an empty window holding at most `capacity` readings
    pub fn with_capacity(capacity: usize) -> MonitorResult<Self> {
        Self::check_capacity(capacity)?;

        Ok(Self {
            // Capacity may be large and mostly unused; grow on demand
            readings: VecDeque::with_capacity(capacity.min(DEFAULT_WINDOW_CAPACITY)),
            capacity,
        })
    }

    /// Add a reading, evicting the oldest ones once the window is over capacity
    pub fn append(&mut self, reading: Reading) {
        self.readings.push_back(reading);
        self.evict_overflow();
    }

    /// Change the bound, evicting immediately if the window is now too large
    pub fn set_capacity(&mut self, capacity: usize) -> MonitorResult<()> {
        Self::check_capacity(capacity)?;

        let evicted = self.readings.len().saturating_sub(capacity);
        self.capacity = capacity;
        self.evict_overflow();

        if evicted > 0 {
            log_debug!("window capacity set to {}, evicted {} readings", capacity, evicted);
        }
        Ok(())
    }

    /// Owned copy of the window, oldest first
    pub fn snapshot(&self) -> Vec<Reading> {
        self.readings.iter().copied().collect()
    }

    /// The most recent `k` readings in chronological order
    ///
    /// Returns fewer when the window holds less, and an empty vector when it
    /// is empty.
    pub fn last(&self, k: usize) -> Vec<Reading> {
        let skip = self.readings.len().saturating_sub(k);
        self.readings.iter().skip(skip).copied().collect()
    }

    /// Most recent reading, if any
    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    /// Values of one metric across the window, oldest first
    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.readings.iter().map(|r| r.value(metric)).collect()
    }

    /// Iterate over readings from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Reading> + '_ {
        self.readings.iter()
    }

    /// Readings currently held
    pub fn size(&self) -> usize {
        self.readings.len()
    }

    /// Most readings the window holds
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether no readings are held
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Whether the next append evicts
    pub fn is_full(&self) -> bool {
        self.readings.len() == self.capacity
    }

    /// Drop every reading, keeping the capacity
    pub fn clear(&mut self) {
        self.readings.clear();
    }

    fn evict_overflow(&mut self) {
        while self.readings.len() > self.capacity {
            self.readings.pop_front();
        }
    }

    fn check_capacity(capacity: usize) -> MonitorResult<()> {
        if capacity == 0 {
            return Err(MonitorError::invalid("capacity", "must be a positive integer"));
        }
        Ok(())
    }
}

impl Default for SlidingWindowStore {
    fn default() -> Self {
        Self {
            readings: VecDeque::with_capacity(DEFAULT_WINDOW_CAPACITY),
            capacity: DEFAULT_WINDOW_CAPACITY,
        }
    }
}

/// Window shared between threads
///
/// Every mutation and every copy happens under the same exclusive lock, so a
/// reader never observes a partially updated window.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct SharedWindow {
    inner: std::sync::Arc<std::sync::Mutex<SlidingWindowStore>>,
}

#[cfg(feature = "std")]
impl SharedWindow {
    /// Share an existing window
    pub fn new(window: SlidingWindowStore) -> Self {
        Self {
            inner: std::sync::Arc::new(std::sync::Mutex::new(window)),
        }
    }

    /// Append under the lock
    pub fn append(&self, reading: Reading) {
        self.lock().append(reading);
    }

    /// Resize under the lock
    pub fn set_capacity(&self, capacity: usize) -> MonitorResult<()> {
        self.lock().set_capacity(capacity)
    }

    /// Copy of the window, oldest first
    pub fn snapshot(&self) -> Vec<Reading> {
        self.lock().snapshot()
    }

    /// Newest `k` readings, oldest first
    pub fn last(&self, k: usize) -> Vec<Reading> {
        self.lock().last(k)
    }

    /// Readings currently held
    pub fn size(&self) -> usize {
        self.lock().size()
    }

    /// Run a closure against the window while holding the lock
    pub fn with<R>(&self, f: impl FnOnce(&SlidingWindowStore) -> R) -> R {
        f(&self.lock())
    }

    // Readings are plain data, so a panic elsewhere cannot leave the window
    // half-updated; recover the guard instead of propagating the poison.
    fn lock(&self) -> std::sync::MutexGuard<'_, SlidingWindowStore> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
