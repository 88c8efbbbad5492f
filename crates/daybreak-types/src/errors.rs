use thiserror::Error;

pub type Result<T, E = DaybreakError> = std::result::Result<T, E>;

/// Unified error type covering the failure points of a wallpaper run.
#[derive(Debug, Error)]
pub enum DaybreakError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("metadata parse error: {0}")]
    Parse(String),
    #[error("image decode error: {0}")]
    Decode(String),
    #[error("filesystem error: {0}")]
    Filesystem(String),
    #[error("platform error: {0}")]
    Platform(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
