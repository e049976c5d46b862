//! Error types for vantage

use thiserror::Error;

/// Main error type for vantage operations
///
/// Input-validation failures (`InvalidData`) are fatal to the call that
/// raised them. Collaborator failures (`Load`, `Render`, `Io`,
/// `UnsupportedFormat`) are propagated unchanged; this crate does not own
/// or retry those operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("Load error: {0}")]
    Load(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for vantage operations
pub type Result<T> = std::result::Result<T, Error>;
