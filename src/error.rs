use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("day must be between {min} and {max} (inclusive), got {input}")]
    DayOutOfRange { input: String, min: i64, max: i64 },

    #[error("{0}")]
    Session(#[from] SessionError),

    #[error("{0}")]
    Download(#[from] DownloadError),
}

#[derive(Debug, Error)]
pub(crate) enum SessionError {
    #[error("session file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read session file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub(crate) enum DownloadError {
    #[error("server responded with HTTP {code}")]
    Status { code: u16 },

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
