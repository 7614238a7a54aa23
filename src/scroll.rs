//! Inertial scrolling
//!
//! [`InertialScroll`] eases a scroll offset toward a wheel-driven target.
//! It is independent of the terminal: the environment is reached through the
//! [`ScrollHost`] and [`FrameScheduler`] traits, with [`FrameClock`] as the
//! scheduler used by the pager.

mod frame_clock;
mod inertial;
mod scroll_config;
mod scroll_host;
mod scroll_state;

pub use frame_clock::{DEFAULT_FRAME_INTERVAL, FrameClock};
pub use inertial::{InertialScroll, WheelDisposition};
pub use scroll_config::{
    DEFAULT_DELTA_SCALE, DEFAULT_EASING_FACTOR, DEFAULT_STOP_THRESHOLD, ScrollConfig,
};
pub use scroll_host::{FrameHandle, FrameScheduler, ScrollHost};
pub use scroll_state::{FrameStep, ScrollState, clamp_offset};


#[cfg(test)]
#[path = "scroll/scroll_config_tests.rs"]
mod scroll_config_tests;
