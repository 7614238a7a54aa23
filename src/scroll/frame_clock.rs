//! Frame scheduling for the terminal event loop
//!
//! The terminal has no vsync callback, so frames are deadlines. The event
//! loop sleeps in `event::poll` until the next deadline, then asks the clock
//! which frame came due and hands that handle to the controller.

use std::time::{Duration, Instant};

use super::scroll_host::{FrameHandle, FrameScheduler};

/// Roughly 60 frames per second
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    next_id: u64,
    pending: Option<(FrameHandle, Instant)>,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_id: 0,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Take the pending frame if its deadline has passed
    pub fn due(&mut self, now: Instant) -> Option<FrameHandle> {
        match self.pending {
            Some((handle, deadline)) if now >= deadline => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }

    /// How long the event loop may block before the next frame is due
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.pending {
            Some((_, deadline)) => deadline.saturating_duration_since(now).min(idle),
            None => idle,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn request_frame_at(&mut self, now: Instant) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some((handle, now + self.interval));
        handle
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

impl FrameScheduler for FrameClock {
    /// A zero interval would spin the event loop
    fn is_supported(&self) -> bool {
        !self.interval.is_zero()
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.request_frame_at(Instant::now())
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if matches!(self.pending, Some((pending, _)) if pending == handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
impl FrameClock {
    pub(crate) fn request_frame_for_test(&mut self, now: Instant) -> FrameHandle {
        self.request_frame_at(now)
    }
}
