// xssh library modules
pub mod cli;
pub mod command_path;
pub mod commands;
pub mod log;
pub mod resolve;
pub mod ssh;
pub mod store;
pub mod target;
pub mod ui;

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Target(target::TargetError),
    Store(store::StoreError),
    Resolve(resolve::ResolveError),
    UI(ui::UIError),
    Ssh(ssh::SshError),
    Log(log::LogError),
}

impl Error {
    /// True when the error is a user cancellation (EOF or interrupt at a
    /// prompt) rather than a genuine failure. Maps to exit status 130.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::UI(ui::UIError::Cancelled))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Target(err) => write!(f, "{}", err),
            Error::Store(err) => write!(f, "{}", err),
            Error::Resolve(err) => write!(f, "{}", err),
            Error::UI(err) => write!(f, "{}", err),
            Error::Ssh(err) => write!(f, "{}", err),
            Error::Log(err) => write!(f, "Logging error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

// Implement From for each error type
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<target::TargetError> for Error {
    fn from(err: target::TargetError) -> Self {
        Error::Target(err)
    }
}

impl From<store::StoreError> for Error {
    fn from(err: store::StoreError) -> Self {
        Error::Store(err)
    }
}

impl From<resolve::ResolveError> for Error {
    fn from(err: resolve::ResolveError) -> Self {
        Error::Resolve(err)
    }
}

impl From<ui::UIError> for Error {
    fn from(err: ui::UIError) -> Self {
        Error::UI(err)
    }
}

impl From<ssh::SshError> for Error {
    fn from(err: ssh::SshError) -> Self {
        Error::Ssh(err)
    }
}

impl From<log::LogError> for Error {
    fn from(err: log::LogError) -> Self {
        Error::Log(err)
    }
}
