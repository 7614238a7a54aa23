//! Mouse scroll handling
//!
//! Wheel notches go to the inertial controller while it holds the wheel.
//! When it lets input pass through, the viewport scrolls natively by whole
//! lines instead.

use super::app_state::App;
use crate::pager::NATIVE_WHEEL_LINES;
use crate::scroll::WheelDisposition;

/// Scroll direction for mouse wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Handle one wheel notch
pub fn handle_scroll(app: &mut App, direction: ScrollDirection) {
    let delta = match direction {
        ScrollDirection::Up => -app.wheel_delta,
        ScrollDirection::Down => app.wheel_delta,
    };

    app.deselect_section();
    if app.scroll.on_wheel(delta) == WheelDisposition::Passthrough {
        let viewport = app.scroll.host_mut();
        match direction {
            ScrollDirection::Up => viewport.scroll_up(NATIVE_WHEEL_LINES),
            ScrollDirection::Down => viewport.scroll_down(NATIVE_WHEEL_LINES),
        }
    }
    app.mark_dirty();
}
