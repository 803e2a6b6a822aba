//! Target string parsing.
//!
//! A connection target has the shape `[user@]host[:port]`. The port split uses
//! the last `:` in the host portion; bracketed IPv6 literals are not supported.

use std::fmt;

pub const MIN_PORT: i64 = 1;
pub const MAX_PORT: i64 = 65535;

/// A parsed connection target. Built fresh per invocation, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub user: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum TargetError {
    Empty,
    EmptyUser,
    /// The operation needs an explicit user but the target named none.
    MissingUser,
    EmptyHost,
    InvalidPort(String),
    PortOutOfRange(i64),
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "target cannot be empty"),
            Self::EmptyUser => write!(f, "user cannot be empty"),
            Self::MissingUser => write!(f, "a user is required, format: user@host[:port]"),
            Self::EmptyHost => write!(f, "host cannot be empty"),
            Self::InvalidPort(value) => write!(f, "port must be an integer: {}", value),
            Self::PortOutOfRange(port) => write!(f, "port out of range ({}-{}): {}", MIN_PORT, MAX_PORT, port),
        }
    }
}

impl std::error::Error for TargetError {}

/// Parses a port string with distinct errors for non-numeric and
/// out-of-range values. Shared by target parsing and hosts-file validation.
pub fn parse_port(value: &str) -> Result<u16, TargetError> {
    let port: i64 = value.parse().map_err(|_| TargetError::InvalidPort(value.to_string()))?;
    if !(MIN_PORT..=MAX_PORT).contains(&port) {
        return Err(TargetError::PortOutOfRange(port));
    }
    Ok(port as u16)
}

/// Parses a `[user@]host[:port]` target string.
pub fn parse_target(input: &str) -> Result<Target, TargetError> {
    if input.is_empty() {
        return Err(TargetError::Empty);
    }

    let mut user = None;
    let mut host = input;

    if let Some((user_part, host_part)) = input.split_once('@') {
        let user_part = user_part.trim();
        if user_part.is_empty() {
            return Err(TargetError::EmptyUser);
        }
        user = Some(user_part.to_string());
        host = host_part;
    }

    let host = host.trim();
    if host.is_empty() {
        return Err(TargetError::EmptyHost);
    }

    let (host, port) = match host.rsplit_once(':') {
        Some((host_part, port_part)) => {
            let port = parse_port(port_part.trim())?;
            let host_part = host_part.trim();
            if host_part.is_empty() {
                return Err(TargetError::EmptyHost);
            }
            (host_part.to_string(), Some(port))
        }
        None => (host.to_string(), None),
    };

    Ok(Target { host, user, port })
}

#[cfg(test)]
#[path = "test/target.rs"]
mod tests;
