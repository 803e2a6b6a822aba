//! Hosts-file error types

use std::{error::Error, fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum StoreError {
    /// The hosts file does not exist yet.
    NotFound(PathBuf),
    /// Could not determine the user's home directory.
    MissingHomeDirectory,
    /// The header row is missing one or more required columns.
    MissingColumns,
    /// A row failed validation; `row` is the 1-based line in the file.
    Format { row: usize, message: String },
    /// Two rows share the same (host, user) pair.
    Duplicate(String),
    /// No record matches the given `user@host` key.
    RecordNotFound(String),
    /// The file could not be read or written.
    Io(io::Error),
    /// The CSV layer rejected the file (ragged rows, broken quoting).
    Csv(csv::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(path) => write!(
                f,
                "hosts file not found: {}\nadd a host first with 'xssh add user@host[:port]'",
                path.display()
            ),
            Self::MissingHomeDirectory => write!(f, "could not determine home directory"),
            Self::MissingColumns => write!(f, "hosts file is missing required columns: host, port, user, password"),
            Self::Format { row, message } => write!(f, "hosts file row {}: {}", row, message),
            Self::Duplicate(key) => write!(f, "duplicate host+user record: {}", key),
            Self::RecordNotFound(key) => write!(f, "host record not found: {}", key),
            Self::Io(err) => write!(f, "unable to access hosts file: {}", err),
            Self::Csv(err) => write!(f, "invalid hosts file: {}", err),
        }
    }
}

impl Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
