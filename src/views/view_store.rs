use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GlideError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewRecord {
    pub views: u64,
}

/// `<data_local_dir>/glide/views.json`, or None when the platform has no
/// data directory
pub fn default_store_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("glide").join("views.json"))
}

/// Increment and persist the counter, returning the new count
///
/// A missing store starts from zero. A corrupt one is reported so the caller
/// can decide whether to show a counter at all.
pub fn record_view(path: &Path) -> Result<u64, GlideError> {
    let mut record = load_record(path)?;
    record.views = record.views.saturating_add(1);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string(&record)?)?;

    #[cfg(debug_assertions)]
    log::debug!("Recorded view {} in {:?}", record.views, path);

    Ok(record.views)
}

fn load_record(path: &Path) -> Result<ViewRecord, GlideError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ViewRecord::default()),
        Err(e) => Err(e.into()),
    }
}

/// Group digits in threes: 1234567 -> "1 234 567"
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}
