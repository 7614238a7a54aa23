// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::scroll::{
    DEFAULT_DELTA_SCALE, DEFAULT_EASING_FACTOR, DEFAULT_STOP_THRESHOLD, ScrollConfig,
};

/// Inertial scroll section
#[derive(Debug, Clone, Deserialize)]
pub struct ScrollSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_delta_scale")]
    pub delta_scale: f64,
    #[serde(default = "default_easing_factor")]
    pub easing_factor: f64,
    #[serde(default = "default_stop_threshold")]
    pub stop_threshold: f64,
}

impl ScrollSection {
    pub fn scroll_config(&self) -> ScrollConfig {
        ScrollConfig::new(self.delta_scale, self.easing_factor, self.stop_threshold)
    }
}

impl Default for ScrollSection {
    fn default() -> Self {
        ScrollSection {
            enabled: true,
            delta_scale: DEFAULT_DELTA_SCALE,
            easing_factor: DEFAULT_EASING_FACTOR,
            stop_threshold: DEFAULT_STOP_THRESHOLD,
        }
    }
}

/// Pager section
#[derive(Debug, Clone, Deserialize)]
pub struct PagerConfig {
    /// Rows of wheel delta produced by one notch
    #[serde(default = "default_wheel_delta")]
    pub wheel_delta: f64,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Rows kept above a section heading after a jump
    #[serde(default = "default_section_offset")]
    pub section_offset: usize,
}

impl PagerConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Wheel delta per notch, falling back to the default unless positive
    pub fn wheel_delta(&self) -> f64 {
        if self.wheel_delta.is_finite() && self.wheel_delta > 0.0 {
            self.wheel_delta
        } else {
            #[cfg(debug_assertions)]
            log::warn!("Invalid wheel_delta {}, using default", self.wheel_delta);
            default_wheel_delta()
        }
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        PagerConfig {
            wheel_delta: default_wheel_delta(),
            frame_interval_ms: default_frame_interval_ms(),
            section_offset: default_section_offset(),
        }
    }
}

/// View counter section
#[derive(Debug, Clone, Deserialize)]
pub struct ViewsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        ViewsConfig { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

fn default_delta_scale() -> f64 {
    DEFAULT_DELTA_SCALE
}

fn default_easing_factor() -> f64 {
    DEFAULT_EASING_FACTOR
}

fn default_stop_threshold() -> f64 {
    DEFAULT_STOP_THRESHOLD
}

fn default_wheel_delta() -> f64 {
    6.0
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_section_offset() -> usize {
    1
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scroll: ScrollSection,
    #[serde(default)]
    pub pager: PagerConfig,
    #[serde(default)]
    pub views: ViewsConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
