//! Capabilities the inertial controller needs from its environment
//!
//! The controller holds no ambient references: everything it reads or writes
//! goes through a [`ScrollHost`] and every frame it waits for comes from a
//! [`FrameScheduler`], both injected at construction.

/// Identifies one requested frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Source of once-per-frame callbacks
///
/// Requesting a frame only records intent. The owner of the scheduler is
/// responsible for calling back into the controller with the handle once the
/// frame comes due.
pub trait FrameScheduler {
    /// Whether this environment can deliver frames at all
    fn is_supported(&self) -> bool {
        true
    }

    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a pending frame; unknown or already-fired handles are ignored
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// The scrollable surface being driven
pub trait ScrollHost {
    /// Total height of the scrollable content
    fn document_height(&self) -> f64;

    /// Height of the visible portion
    fn viewport_height(&self) -> f64;

    /// Offset the surface is currently rendered at. Read once on activation
    /// to seed the controller, never as the source of truth afterwards.
    fn rendered_offset(&self) -> f64;

    /// Write an absolute scroll offset
    fn scroll_to(&mut self, offset: f64);

    /// Route wheel input to the controller instead of native scrolling
    fn set_wheel_capture(&mut self, captured: bool);

    fn native_smooth(&self) -> bool;

    fn set_native_smooth(&mut self, enabled: bool);

    /// Largest reachable offset, never negative
    fn max_scroll(&self) -> f64 {
        let max = self.document_height() - self.viewport_height();
        if max.is_finite() { max.max(0.0) } else { 0.0 }
    }
}
