//! Inertial scroll controller
//!
//! Turns discrete wheel input into a continuously eased scroll offset.
//! Wheel events move a target offset; every frame the rendered offset closes
//! a fixed fraction of the remaining distance (first-order lag), so motion
//! decelerates smoothly, never overshoots, and stops once the remainder
//! drops under the stop threshold.

use super::scroll_config::ScrollConfig;
use super::scroll_host::{FrameHandle, FrameScheduler, ScrollHost};
use super::scroll_state::{FrameStep, ScrollState};
use crate::error::ScrollError;

/// Whether the caller must suppress native handling of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDisposition {
    /// The controller took the input; do not scroll natively
    Consumed,
    /// The controller is inactive; scroll natively
    Passthrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Inactive,
    Active,
    /// Activation failed; input passes through to native scrolling
    Passthrough,
}

pub struct InertialScroll<S: FrameScheduler, H: ScrollHost> {
    scheduler: S,
    host: H,
    config: ScrollConfig,
    state: ScrollState,
    mode: Mode,
    pending_frame: Option<FrameHandle>,
    /// Native smooth-scroll setting to restore on deactivation
    saved_native_smooth: Option<bool>,
}

impl<S: FrameScheduler, H: ScrollHost> InertialScroll<S, H> {
    pub fn new(scheduler: S, host: H) -> Self {
        Self {
            scheduler,
            host,
            config: ScrollConfig::default(),
            state: ScrollState::new(),
            mode: Mode::Inactive,
            pending_frame: None,
            saved_native_smooth: None,
        }
    }

    /// Start intercepting wheel input
    ///
    /// Re-activating an active controller tears it down first. Without a frame
    /// primitive the controller stays in passthrough and the error is returned
    /// for the caller to note; native scrolling keeps working either way.
    pub fn activate(&mut self, config: ScrollConfig) -> Result<(), ScrollError> {
        self.deactivate();

        if !self.scheduler.is_supported() {
            #[cfg(debug_assertions)]
            log::warn!("Frame scheduler unsupported, inertial scroll disabled");
            self.mode = Mode::Passthrough;
            return Err(ScrollError::UnsupportedEnvironment);
        }

        self.config = config.sanitized();
        self.state = ScrollState::at(self.host.rendered_offset());
        self.saved_native_smooth = Some(self.host.native_smooth());
        self.host.set_native_smooth(false);
        self.host.set_wheel_capture(true);
        self.mode = Mode::Active;

        #[cfg(debug_assertions)]
        log::debug!(
            "Inertial scroll active at {} ({:?})",
            self.state.current,
            self.config
        );

        Ok(())
    }

    /// Stop intercepting input and cancel any pending frame
    ///
    /// Safe to call repeatedly and before any activation.
    pub fn deactivate(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.state.is_animating = false;

        if self.mode == Mode::Active {
            self.host.set_wheel_capture(false);
            if let Some(smooth) = self.saved_native_smooth.take() {
                self.host.set_native_smooth(smooth);
            }

            #[cfg(debug_assertions)]
            log::debug!("Inertial scroll deactivated at {}", self.state.current);
        }

        self.mode = Mode::Inactive;
    }

    /// Feed one wheel event
    pub fn on_wheel(&mut self, delta_y: f64) -> WheelDisposition {
        if !self.is_active() {
            return WheelDisposition::Passthrough;
        }

        let delta = delta_y * self.config.delta_scale;
        if !delta.is_finite() {
            return WheelDisposition::Consumed;
        }

        let max_scroll = self.host.max_scroll();
        self.state.push_target(delta, max_scroll);
        self.ensure_animating();
        WheelDisposition::Consumed
    }

    /// Ease toward an absolute offset
    pub fn scroll_to(&mut self, offset: f64) -> WheelDisposition {
        if !self.is_active() {
            return WheelDisposition::Passthrough;
        }
        if !offset.is_finite() {
            return WheelDisposition::Consumed;
        }

        let max_scroll = self.host.max_scroll();
        self.state.set_target(offset, max_scroll);
        self.ensure_animating();
        WheelDisposition::Consumed
    }

    /// Ease by a relative amount of rows, bypassing `delta_scale`
    pub fn scroll_by(&mut self, delta: f64) -> WheelDisposition {
        let target = self.state.target + delta;
        self.scroll_to(target)
    }

    /// Advance one frame; handles that are not the pending one are dropped
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.pending_frame != Some(handle) {
            #[cfg(debug_assertions)]
            log::trace!("Ignoring stale frame {:?}", handle);
            return;
        }
        self.pending_frame = None;

        if !self.is_active() {
            return;
        }

        match self
            .state
            .step(self.config.easing_factor, self.config.stop_threshold)
        {
            FrameStep::Eased(offset) => {
                self.host.scroll_to(offset);
                self.pending_frame = Some(self.scheduler.request_frame());
            }
            FrameStep::Settled(offset) => {
                self.host.scroll_to(offset);
            }
        }
    }

    fn ensure_animating(&mut self) {
        if !self.state.is_animating {
            self.state.is_animating = true;
            self.pending_frame = Some(self.scheduler.request_frame());
        }
    }

    pub fn is_active(&self) -> bool {
        self.mode == Mode::Active
    }

    /// True when activation failed and input is routed natively
    pub fn is_passthrough(&self) -> bool {
        self.mode == Mode::Passthrough
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access for layout updates and native scrolling.
    /// Writes made here are not fed back into the controller's state.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<S: FrameScheduler, H: ScrollHost> Drop for InertialScroll<S, H> {
    fn drop(&mut self) {
        self.deactivate();
    }
}
