use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened or read.
    #[error("unable to read {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not the structure we expected.
    #[error("unable to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Parsed fine, but the values contradict each other.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            _ => false,
        }
    }

    pub fn is_parse(&self) -> bool {
        match self {
            Error::Parse { .. } => true,
            _ => false,
        }
    }
}
