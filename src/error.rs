//! Crate-wide error type.
//!
//! The game itself never fails; everything here comes from the host devices
//! (terminal, keyboard) or from reporting. None of it is recoverable, so callers
//! propagate with `?` up to `main`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("device I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
