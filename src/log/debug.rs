//! File-backed debug log.
//!
//! Entries are appended to `~/.xssh/xssh.log` with a timestamp and level.
//! Single-shot CLI, so writes are synchronous; the directory is created on
//! first use and kept private on Unix.

use super::{LogError, LogLevel};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

const LOG_DIR: &str = ".xssh";
const LOG_FILE: &str = "xssh.log";
#[cfg(unix)]
const PRIVATE_LOG_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_LOG_FILE_MODE: u32 = 0o600;

#[derive(Clone, Default)]
pub(super) struct DebugLogger;

impl DebugLogger {
    pub(super) fn new() -> Self {
        Self
    }

    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let path = log_path()?;
        ensure_log_dir(&path)?;

        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        options.mode(PRIVATE_LOG_FILE_MODE);

        let mut file = options.open(&path)?;
        file.write_all(format_log_line(level, message).as_bytes())?;
        Ok(())
    }
}

pub(super) fn format_log_line(level: LogLevel, message: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    format!("[{}] [{}] {}\n", timestamp, level.as_str(), message)
}

fn log_path() -> Result<PathBuf, LogError> {
    let home = dirs::home_dir().ok_or(LogError::MissingHomeDirectory)?;
    Ok(home.join(LOG_DIR).join(LOG_FILE))
}

fn ensure_log_dir(path: &std::path::Path) -> Result<(), LogError> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    if dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|err| LogError::DirectoryCreation(format!("{}: {}", dir.display(), err)))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = fs::Permissions::from_mode(PRIVATE_LOG_DIR_MODE);
        fs::set_permissions(dir, permissions)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "../test/log/debug.rs"]
mod tests;
