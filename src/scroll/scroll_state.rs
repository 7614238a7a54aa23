/// Eased scroll position: where input wants to be and where the view is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub target: f64,
    pub current: f64,
    pub is_animating: bool,
}

/// Result of advancing the state by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStep {
    /// Moved closer to the target; another frame is needed
    Eased(f64),
    /// Close enough: snapped onto the target and stopped
    Settled(f64),
}

impl FrameStep {
    pub fn offset(self) -> f64 {
        match self {
            FrameStep::Eased(offset) | FrameStep::Settled(offset) => offset,
        }
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self::at(0.0)
    }

    /// State resting at `offset` with nothing pending
    pub fn at(offset: f64) -> Self {
        Self {
            target: offset,
            current: offset,
            is_animating: false,
        }
    }

    /// Move the target by `delta`, keeping it within `[0, max_scroll]`
    pub fn push_target(&mut self, delta: f64, max_scroll: f64) {
        self.set_target(self.target + delta, max_scroll);
    }

    pub fn set_target(&mut self, target: f64, max_scroll: f64) {
        self.target = clamp_offset(target, max_scroll);
    }

    /// Close `easing_factor` of the remaining distance, or snap when the
    /// remainder is within `stop_threshold`
    pub fn step(&mut self, easing_factor: f64, stop_threshold: f64) -> FrameStep {
        let diff = self.target - self.current;

        if diff.abs() > stop_threshold {
            self.current += diff * easing_factor;
            FrameStep::Eased(self.current)
        } else {
            self.current = self.target;
            self.is_animating = false;
            FrameStep::Settled(self.current)
        }
    }

    /// Distance still to travel
    pub fn remaining(&self) -> f64 {
        (self.target - self.current).abs()
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp an offset into `[0, max_scroll]`; a negative or non-finite bound
/// collapses to zero
pub fn clamp_offset(offset: f64, max_scroll: f64) -> f64 {
    let max_scroll = if max_scroll.is_finite() {
        max_scroll.max(0.0)
    } else {
        0.0
    };
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(0.0, max_scroll)
}
