//! Local view counter
//!
//! Counts how many times glide has been opened on this machine and animates
//! the number up from zero in the status bar.

mod count_up;
mod view_store;

pub use count_up::CountUp;
pub use view_store::{ViewRecord, default_store_path, format_count, record_view};


#[cfg(test)]
#[path = "views/count_up_tests.rs"]
mod count_up_tests;
