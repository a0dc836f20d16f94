//! Property tests for the sliding window invariants

mod common;

use airwatch_core::{MonitorError, Reading, SlidingWindowStore};
use proptest::prelude::*;

use common::generators::numbered;

proptest! {
    #[test]
    fn size_is_min_of_appended_and_capacity(capacity in 1usize..64, total in 0usize..200) {
        let mut window = SlidingWindowStore::with_capacity(capacity).unwrap();
        for reading in numbered(total) {
            window.append(reading);
            prop_assert!(window.size() <= capacity);
        }

        prop_assert_eq!(window.size(), total.min(capacity));
    }

    #[test]
    fn snapshot_preserves_insertion_order(capacity in 1usize..64, total in 0usize..200) {
        let mut window = SlidingWindowStore::with_capacity(capacity).unwrap();
        for reading in numbered(total) {
            window.append(reading);
        }

        let sequence: Vec<u32> = window.snapshot().iter().map(|r| r.air_quality).collect();
        prop_assert!(sequence.windows(2).all(|pair| pair[1] == pair[0] + 1));
    }

    #[test]
    fn oldest_retained_is_first_not_evicted(capacity in 1usize..64, extra in 1usize..100) {
        let total = capacity + extra;
        let mut window = SlidingWindowStore::with_capacity(capacity).unwrap();
        for reading in numbered(total) {
            window.append(reading);
        }

        // The (total - capacity + 1)-th reading appended, i.e. index total - capacity
        prop_assert_eq!(window.snapshot()[0].air_quality as usize, total - capacity);
    }

    #[test]
    fn shrinking_keeps_newest(size in 1usize..100, new_capacity in 1usize..100) {
        let mut window = SlidingWindowStore::with_capacity(100).unwrap();
        let readings = numbered(size);
        for reading in &readings {
            window.append(*reading);
        }

        window.set_capacity(new_capacity).unwrap();
        let kept = size.min(new_capacity);
        prop_assert_eq!(window.size(), kept);
        prop_assert_eq!(window.snapshot(), readings[size - kept..].to_vec());
    }

    #[test]
    fn last_never_exceeds_window(total in 0usize..50, k in 0usize..60) {
        let mut window = SlidingWindowStore::with_capacity(20).unwrap();
        for reading in numbered(total) {
            window.append(reading);
        }

        let tail = window.last(k);
        prop_assert_eq!(tail.len(), k.min(window.size()));
        if let Some(newest) = tail.last() {
            prop_assert_eq!(Some(newest), window.latest());
        }
    }
}

#[test]
fn empty_window_last_is_empty() {
    let window = SlidingWindowStore::default();
    let recent: Vec<Reading> = window.last(1);
    assert!(recent.is_empty());
    assert!(window.last(2).first().is_none());
}

#[test]
fn non_positive_capacity_is_rejected() {
    assert!(matches!(
        SlidingWindowStore::with_capacity(0),
        Err(MonitorError::InvalidConfiguration { .. })
    ));
}
