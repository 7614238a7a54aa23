//! Reusable rendering helpers shared by UI components

pub mod popup;
pub mod scrollbar;
