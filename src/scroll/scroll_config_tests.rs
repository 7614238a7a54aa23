//! Tests for ScrollConfig

use super::*;

#[test]
fn test_default_values() {
    let config = ScrollConfig::default();
    assert_eq!(config.delta_scale, 0.5);
    assert_eq!(config.easing_factor, 0.08);
    assert_eq!(config.stop_threshold, 0.5);
}

#[test]
fn test_sanitized_keeps_valid_values() {
    let config = ScrollConfig::new(1.0, 1.0, 0.1);
    assert_eq!(config.sanitized(), config);
}

#[test]
fn test_sanitized_rejects_zero_easing() {
    let config = ScrollConfig::new(0.5, 0.0, 0.5).sanitized();
    assert_eq!(config.easing_factor, DEFAULT_EASING_FACTOR);
}

#[test]
fn test_sanitized_rejects_easing_above_one() {
    let config = ScrollConfig::new(0.5, 1.5, 0.5).sanitized();
    assert_eq!(config.easing_factor, DEFAULT_EASING_FACTOR);
}

#[test]
fn test_sanitized_rejects_non_finite() {
    let config = ScrollConfig::new(f64::NAN, f64::INFINITY, f64::NAN).sanitized();
    assert_eq!(config, ScrollConfig::default());
}

#[test]
fn test_sanitized_rejects_non_positive_threshold() {
    let config = ScrollConfig::new(0.5, 0.08, 0.0).sanitized();
    assert_eq!(config.stop_threshold, DEFAULT_STOP_THRESHOLD);
}

#[test]
fn test_sanitized_rejects_negative_delta_scale() {
    let config = ScrollConfig::new(-2.0, 0.08, 0.5).sanitized();
    assert_eq!(config.delta_scale, DEFAULT_DELTA_SCALE);
}

#[test]
fn test_sanitized_allows_zero_delta_scale() {
    let config = ScrollConfig::new(0.0, 0.08, 0.5).sanitized();
    assert_eq!(config.delta_scale, 0.0);
}
