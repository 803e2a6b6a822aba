//! Matches a parsed target against the host store.
//!
//! Ambiguity (several users for one host, none named) is an explicit result
//! variant rather than an error; the caller resolves it interactively.

use crate::log_debug;
use crate::store::{HostRecord, HostStore};
use crate::target::Target;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A single record matched. `port` is the effective port: the target's
    /// explicit port when given, the stored one otherwise.
    Selected { record: HostRecord, port: u16 },
    /// The host has several users and the target named none.
    NeedsSelection { host: String, candidates: Vec<HostRecord> },
}

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    HostNotFound(String),
    UserNotFound {
        host: String,
        user: String,
        available: Vec<String>,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostNotFound(host) => write!(f, "host not found in hosts file: {}", host),
            Self::UserNotFound { host, user, available } => {
                write!(
                    f,
                    "user '{}' not found on host '{}'\navailable users: {}",
                    user,
                    host,
                    available.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Effective port for a resolved record.
pub fn effective_port(target: &Target, record: &HostRecord) -> u16 {
    target.port.unwrap_or(record.port)
}

/// Resolves `target` against a loaded store.
pub fn resolve(store: &HostStore, target: &Target) -> Result<Resolution, ResolveError> {
    let candidates = store
        .find_by_host(&target.host)
        .filter(|records| !records.is_empty())
        .ok_or_else(|| ResolveError::HostNotFound(target.host.clone()))?;

    if let Some(user) = &target.user {
        let record = store
            .find_by_host_user(&target.host, user)
            .ok_or_else(|| ResolveError::UserNotFound {
                host: target.host.clone(),
                user: user.clone(),
                available: candidates.iter().map(|record| record.user.clone()).collect(),
            })?;
        log_debug!("Resolved {} by explicit user", record.key());
        return Ok(Resolution::Selected {
            record: record.clone(),
            port: effective_port(target, record),
        });
    }

    if candidates.len() == 1 {
        let record = candidates[0];
        log_debug!("Resolved {} as the only user on {}", record.key(), target.host);
        return Ok(Resolution::Selected {
            record: record.clone(),
            port: effective_port(target, record),
        });
    }

    log_debug!("Host {} has {} users; selection required", target.host, candidates.len());
    Ok(Resolution::NeedsSelection {
        host: target.host.clone(),
        candidates: candidates.into_iter().cloned().collect(),
    })
}

#[cfg(test)]
#[path = "test/resolve.rs"]
mod tests;
