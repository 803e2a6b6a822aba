//! PATH lookup for the sshpass helper, resolved once per process.

use once_cell::sync::OnceCell;
use std::{fs, io, path::PathBuf};

#[cfg(unix)]
use std::os::unix::fs::{MetadataExt, PermissionsExt};

#[cfg(unix)]
const EXECUTE_BITS: u32 = 0o111;
#[cfg(unix)]
const WORLD_WRITABLE_BIT: u32 = 0o002;

static SSHPASS_PATH: OnceCell<Result<PathBuf, (io::ErrorKind, String)>> = OnceCell::new();

/// Absolute path of the sshpass binary. The first call walks PATH and
/// sanity-checks the hit; later calls return the cached result.
pub fn sshpass_path() -> io::Result<PathBuf> {
    let cached = SSHPASS_PATH.get_or_init(|| locate_sshpass().map_err(|err| (err.kind(), err.to_string())));
    match cached {
        Ok(path) => Ok(path.clone()),
        Err((kind, message)) => Err(io::Error::new(*kind, message.clone())),
    }
}

fn locate_sshpass() -> io::Result<PathBuf> {
    let located = which::which("sshpass")
        .map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("sshpass not found in PATH: {err}")))?;

    let canonical = fs::canonicalize(&located).map_err(|err| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("unable to canonicalize sshpass path '{}': {err}", located.display()),
        )
    })?;

    let metadata = fs::metadata(&canonical)?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("sshpass path '{}' is not a regular file", canonical.display()),
        ));
    }

    #[cfg(unix)]
    {
        // The password passes through this binary; refuse tampered installs.
        let mode = metadata.permissions().mode();
        if mode & WORLD_WRITABLE_BIT != 0 {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("sshpass path '{}' is world-writable", canonical.display()),
            ));
        }
        if mode & EXECUTE_BITS == 0 {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("sshpass path '{}' is not executable", canonical.display()),
            ));
        }
        let owner_uid = metadata.uid();
        let effective_uid = nix::unistd::Uid::effective().as_raw();
        if owner_uid != 0 && owner_uid != effective_uid {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("sshpass path '{}' must be owned by root or the current user", canonical.display()),
            ));
        }
    }

    Ok(canonical)
}
