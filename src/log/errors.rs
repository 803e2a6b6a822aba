//! Logging-related error types

use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum LogError {
    Io(io::Error),
    MissingHomeDirectory,
    DirectoryCreation(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::Io(err) => write!(f, "I/O error: {}", err),
            LogError::MissingHomeDirectory => write!(f, "could not determine home directory"),
            LogError::DirectoryCreation(msg) => write!(f, "failed to create log directory: {}", msg),
        }
    }
}

impl Error for LogError {}

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        LogError::Io(err)
    }
}
