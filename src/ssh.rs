//! Builds and launches the sshpass/ssh command line.
//!
//! Host-key checking is disabled on purpose: this tool trades verification
//! for zero-friction logins to lab boxes, and the stored password is already
//! the weaker link. On Unix the process image is replaced by sshpass so the
//! session's terminal control, signals, and exit code reach the shell
//! directly; elsewhere a child is spawned and its exit code adopted.

use crate::command_path;
use crate::store::HostRecord;
use crate::{log_debug, log_error, log_info};
use std::{
    fmt, io,
    path::PathBuf,
    process::{Command, ExitCode},
};

const INSTALL_HINTS: &str = "sshpass is not installed\n\
install it first:\n  \
macOS: brew install hudochenkov/sshpass/sshpass\n  \
Ubuntu/Debian: sudo apt-get install sshpass\n  \
CentOS/RHEL: sudo yum install sshpass";

#[derive(Debug)]
pub enum SshError {
    HelperNotFound,
    Launch(io::Error),
}

impl fmt::Display for SshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HelperNotFound => write!(f, "{}", INSTALL_HINTS),
            Self::Launch(err) => write!(f, "unable to launch SSH session: {}", err),
        }
    }
}

impl std::error::Error for SshError {}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PreparedCommand {
    program: PathBuf,
    args: Vec<String>,
}

/// Resolves sshpass, turning an absent binary into the install-hint error.
pub fn ensure_helper() -> Result<PathBuf, SshError> {
    match command_path::sshpass_path() {
        Ok(path) => Ok(path),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(SshError::HelperNotFound),
        Err(err) => Err(SshError::Launch(err)),
    }
}

fn build_command(record: &HostRecord, port: u16, sshpass: PathBuf) -> PreparedCommand {
    PreparedCommand {
        program: sshpass,
        args: build_args(record, port),
    }
}

fn build_args(record: &HostRecord, port: u16) -> Vec<String> {
    vec![
        "-p".to_string(),
        record.password.clone(),
        "ssh".to_string(),
        // Force a PTY so full-screen programs work over the wrapped session.
        "-tt".to_string(),
        "-p".to_string(),
        port.to_string(),
        "-o".to_string(),
        "StrictHostKeyChecking=no".to_string(),
        "-o".to_string(),
        "UserKnownHostsFile=/dev/null".to_string(),
        format!("{}@{}", record.user, record.host),
    ]
}

/// Command-line arguments with the password blanked, safe for the debug log.
fn redacted(args: &[String]) -> Vec<String> {
    let mut redacted = args.to_vec();
    if let Some(position) = redacted.iter().position(|arg| arg == "-p") {
        if let Some(password) = redacted.get_mut(position + 1) {
            *password = "***".to_string();
        }
    }
    redacted
}

/// Launches the SSH session for `record` on `port`.
///
/// On Unix this replaces the current process and only returns on failure.
pub fn launch(record: &HostRecord, port: u16) -> Result<ExitCode, SshError> {
    let sshpass = ensure_helper()?;
    let command_spec = build_command(record, port, sshpass);
    log_info!("Connecting to {}:{}", record.key(), port);
    log_debug!("Launching {} with args: {:?}", command_spec.program.display(), redacted(&command_spec.args));

    run_command(command_spec)
}

#[cfg(unix)]
fn run_command(command_spec: PreparedCommand) -> Result<ExitCode, SshError> {
    use std::os::unix::process::CommandExt;

    // exec only returns on failure.
    let err = Command::new(&command_spec.program).args(&command_spec.args).exec();
    log_error!("exec of {} failed: {}", command_spec.program.display(), err);
    Err(SshError::Launch(err))
}

#[cfg(not(unix))]
fn run_command(command_spec: PreparedCommand) -> Result<ExitCode, SshError> {
    let status = Command::new(&command_spec.program)
        .args(&command_spec.args)
        .status()
        .map_err(|err| {
            log_error!("Failed to run {}: {}", command_spec.program.display(), err);
            SshError::Launch(err)
        })?;

    log_info!("SSH session exited with code: {}", status.code().unwrap_or(1));
    Ok(map_exit_code(status.success(), status.code()))
}

#[cfg(any(test, not(unix)))]
fn map_exit_code(success: bool, code: Option<i32>) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        // Clamp exit code to valid u8 range (0-255)
        let clamped_code = code.map_or(1, |status_code| u8::try_from(status_code).unwrap_or(255));
        ExitCode::from(clamped_code)
    }
}

#[cfg(test)]
#[path = "test/ssh.rs"]
mod tests;
