use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlideError {
    #[error("No input: pass a file or pipe text into glide.\n\nUsage: glide [FILE]")]
    NoInput,

    #[error("View counter store is corrupt: {0}")]
    ViewStore(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScrollError {
    #[error("No frame scheduler available, falling back to native scrolling")]
    UnsupportedEnvironment,
}
