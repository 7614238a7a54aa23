//! Tuning parameters for the inertial scroll controller

pub const DEFAULT_DELTA_SCALE: f64 = 0.5;
pub const DEFAULT_EASING_FACTOR: f64 = 0.08;
pub const DEFAULT_STOP_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Multiplier applied to the raw wheel delta
    pub delta_scale: f64,
    /// Fraction of the remaining distance covered per frame, in (0, 1]
    pub easing_factor: f64,
    /// Remaining distance below which the animation snaps and stops
    pub stop_threshold: f64,
}

impl ScrollConfig {
    pub fn new(delta_scale: f64, easing_factor: f64, stop_threshold: f64) -> Self {
        Self {
            delta_scale,
            easing_factor,
            stop_threshold,
        }
    }

    /// Replace every out-of-range value with its default
    ///
    /// A zero easing factor would never converge and a zero threshold would
    /// schedule sub-pixel frames forever, so both are rejected along with
    /// non-finite input.
    pub fn sanitized(self) -> Self {
        let delta_scale = if self.delta_scale.is_finite() && self.delta_scale >= 0.0 {
            self.delta_scale
        } else {
            #[cfg(debug_assertions)]
            log::warn!("Invalid delta_scale {}, using default", self.delta_scale);
            DEFAULT_DELTA_SCALE
        };

        let easing_factor = if self.easing_factor > 0.0 && self.easing_factor <= 1.0 {
            self.easing_factor
        } else {
            #[cfg(debug_assertions)]
            log::warn!("Invalid easing_factor {}, using default", self.easing_factor);
            DEFAULT_EASING_FACTOR
        };

        let stop_threshold = if self.stop_threshold.is_finite() && self.stop_threshold > 0.0 {
            self.stop_threshold
        } else {
            #[cfg(debug_assertions)]
            log::warn!("Invalid stop_threshold {}, using default", self.stop_threshold);
            DEFAULT_STOP_THRESHOLD
        };

        Self {
            delta_scale,
            easing_factor,
            stop_threshold,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_DELTA_SCALE,
            DEFAULT_EASING_FACTOR,
            DEFAULT_STOP_THRESHOLD,
        )
    }
}
