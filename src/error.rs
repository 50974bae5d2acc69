use thiserror::Error as ThisError;

/// Errors that can occur in the logging library
#[derive(ThisError, Debug)]
pub enum Error {
    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Date computation or formatting failed.
    #[error("Time error: {0}")]
    Time(#[from] time::error::Error),
    /// The program identity could not be derived from the process.
    #[error("Identity error: {0}")]
    Identity(String),
    /// Initialization failed.
    #[error("Initialization error: {0}")]
    Init(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
