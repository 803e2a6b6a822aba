use std::{error::Error, fmt, io};

#[derive(Debug)]
pub enum UIError {
    /// The user cancelled a prompt (EOF or interrupt). Not a failure;
    /// the top level turns this into exit status 130.
    Cancelled,
    PasswordMismatch,
    EmptyPassword,
    Io(io::Error),
}

impl fmt::Display for UIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "operation cancelled"),
            Self::PasswordMismatch => write!(f, "the two passwords did not match"),
            Self::EmptyPassword => write!(f, "password cannot be empty"),
            Self::Io(err) => write!(f, "prompt failed: {}", err),
        }
    }
}

impl Error for UIError {}

impl From<io::Error> for UIError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted => Self::Cancelled,
            _ => Self::Io(err),
        }
    }
}
