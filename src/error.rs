//! Error types for masthead operations.

use thiserror::Error;

/// Errors that can occur at the outer decoration surfaces.
///
/// The decoration path itself never fails: malformed rows are skipped and
/// missing fields fall back to documented defaults. Errors only arise when
/// working with whole documents or files.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no block element with class \"{0}\" found")]
    MissingBlock(String),
}

pub type Result<T> = std::result::Result<T, Error>;
