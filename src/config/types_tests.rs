//! Tests for types

use super::*;
use proptest::prelude::*;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.scroll.enabled);
    assert_eq!(config.scroll.delta_scale, 0.5);
    assert_eq!(config.scroll.easing_factor, 0.08);
    assert_eq!(config.scroll.stop_threshold, 0.5);
    assert_eq!(config.pager.wheel_delta, 6.0);
    assert_eq!(config.pager.frame_interval(), Duration::from_millis(16));
    assert_eq!(config.pager.section_offset, 1);
    assert!(config.views.enabled);
}

#[test]
fn test_empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert!(config.scroll.enabled);
    assert_eq!(config.scroll.easing_factor, 0.08);
    assert_eq!(config.pager.frame_interval_ms, 16);
}

#[test]
fn test_parse_scroll_section() {
    let toml = r#"
[scroll]
enabled = false
delta_scale = 1.0
easing_factor = 0.2
stop_threshold = 0.25
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(!config.scroll.enabled);
    assert_eq!(
        config.scroll.scroll_config(),
        crate::scroll::ScrollConfig::new(1.0, 0.2, 0.25)
    );
}

#[test]
fn test_partial_scroll_section() {
    let toml = r#"
[scroll]
easing_factor = 0.15
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(config.scroll.enabled);
    assert_eq!(config.scroll.easing_factor, 0.15);
    assert_eq!(config.scroll.delta_scale, 0.5);
}

#[test]
fn test_parse_pager_section() {
    let toml = r#"
[pager]
wheel_delta = 4.0
frame_interval_ms = 8
section_offset = 3
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.pager.wheel_delta, 4.0);
    assert_eq!(config.pager.frame_interval(), Duration::from_millis(8));
    assert_eq!(config.pager.section_offset, 3);
}

#[test]
fn test_parse_views_disabled() {
    let toml = r#"
[views]
enabled = false
"#;
    let config: Config = toml::from_str(toml).unwrap();
    assert!(!config.views.enabled);
}

#[test]
fn test_wrong_type_fails() {
    let toml = r#"
[scroll]
easing_factor = "fast"
"#;
    let result: Result<Config, _> = toml::from_str(toml);
    assert!(result.is_err());
}

// Feature: config-system, Property: Valid easing parsing
// Any float written for easing_factor is read back unchanged; range checks
// happen when the controller is activated, not at parse time.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_easing_factor_round_trips(easing in 0.001f64..1.0) {
        let toml_content = format!("[scroll]\neasing_factor = {:?}\n", easing);
        let config: Result<Config, _> = toml::from_str(&toml_content);
        prop_assert!(config.is_ok(), "Failed to parse easing_factor {}", easing);
        prop_assert_eq!(config.unwrap().scroll.easing_factor, easing);
    }
}

// Feature: config-system, Property: Missing sections use defaults
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_missing_sections_use_defaults(
        include_scroll in prop::bool::ANY,
        include_pager in prop::bool::ANY,
    ) {
        let mut toml_content = String::new();
        if include_scroll {
            toml_content.push_str("[scroll]\n");
        }
        if include_pager {
            toml_content.push_str("[pager]\n");
        }

        let config: Config = toml::from_str(&toml_content).unwrap();
        prop_assert!(config.scroll.enabled);
        prop_assert_eq!(config.scroll.delta_scale, 0.5);
        prop_assert_eq!(config.pager.wheel_delta, 6.0);
    }
}

#[test]
fn test_wheel_delta_accepts_positive_value() {
    let config: Config = toml::from_str("[pager]\nwheel_delta = 9.0\n").unwrap();
    assert_eq!(config.pager.wheel_delta(), 9.0);
}

#[test]
fn test_wheel_delta_falls_back_when_not_positive() {
    for raw in ["-6.0", "0.0", "nan", "inf"] {
        let toml_content = format!("[pager]\nwheel_delta = {}\n", raw);
        let config: Config = toml::from_str(&toml_content).unwrap();
        assert_eq!(config.pager.wheel_delta(), 6.0, "wheel_delta = {}", raw);
    }
}
