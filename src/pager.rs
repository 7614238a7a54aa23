//! Pager surface
//!
//! The terminal side of scrolling: the viewport the controller writes to,
//! section dock navigation, and the indicators derived from the offset.

mod pager_viewport;
mod scroll_indicators;
mod section_dock;

pub use pager_viewport::{NATIVE_WHEEL_LINES, PagerViewport};
pub use scroll_indicators::ScrollIndicators;
pub use section_dock::SectionDock;



#[cfg(test)]
#[path = "pager/scroll_indicators_tests.rs"]
mod scroll_indicators_tests;
