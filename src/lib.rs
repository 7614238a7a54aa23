//! glide library - terminal pager with inertial scrolling
//!
//! This library exposes the core functionality of glide for testing purposes.

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod notification;
pub mod pager;
pub mod scroll;
pub mod theme;
pub mod views;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use document::Document;
