//! Tests for CountUp

use super::*;
use std::time::Duration;

#[test]
fn test_starts_at_zero() {
    let count = CountUp::new(250);
    assert_eq!(count.value_at(Duration::ZERO), 0);
    assert!(!count.is_finished(Duration::ZERO));
}

#[test]
fn test_linear_progress_per_tick() {
    // 125 ticks of 16ms: 250 / 125 = 2 per tick
    let count = CountUp::new(250);
    assert_eq!(count.value_at(Duration::from_millis(16)), 2);
    assert_eq!(count.value_at(Duration::from_millis(31)), 2);
    assert_eq!(count.value_at(Duration::from_millis(32)), 4);
    assert_eq!(count.value_at(Duration::from_millis(1000)), 124);
}

#[test]
fn test_small_totals_floor() {
    let count = CountUp::new(3);
    assert_eq!(count.value_at(Duration::from_millis(16 * 41)), 0);
    assert_eq!(count.value_at(Duration::from_millis(16 * 42)), 1);
}

#[test]
fn test_reaches_total_exactly() {
    let count = CountUp::new(1234);
    assert_eq!(count.value_at(Duration::from_millis(2000)), 1234);
    assert_eq!(count.value_at(Duration::from_secs(60)), 1234);
    assert!(count.is_finished(Duration::from_millis(2000)));
}

#[test]
fn test_never_exceeds_total() {
    let count = CountUp::new(7);
    for ms in (0..2100).step_by(16) {
        assert!(count.value_at(Duration::from_millis(ms)) <= 7);
    }
}

#[test]
fn test_zero_total_is_finished() {
    let count = CountUp::new(0);
    assert!(count.is_finished(Duration::ZERO));
}

#[test]
fn test_tick() {
    assert_eq!(CountUp::tick(), Duration::from_millis(16));
    assert_eq!(CountUp::new(9).total(), 9);
}
