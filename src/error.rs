//! Error types for the pdfsift library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document could not be opened or its pages could not be decoded.
    #[error("Document decode error: {0}")]
    Decode(String),

    /// The document is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,

    /// A page's content stream could not be interpreted.
    #[error("Content stream error: {0}")]
    ContentStream(String),

    /// Collection configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A computed result could not be serialized or written out.
    #[error("Output error: {0}")]
    Output(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::Decode(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Output(err.to_string())
        } else {
            Error::Config(err.to_string())
        }
    }
}
