//! `xssh [connect] <target>` — resolve a target and hand off to ssh.

use crate::resolve::{self, Resolution};
use crate::store::HostStore;
use crate::{Result, ssh, target, ui};
use std::path::PathBuf;
use std::process::ExitCode;

pub fn run(target_str: &str, config: Option<PathBuf>) -> Result<ExitCode> {
    // Fail on a missing sshpass before touching the hosts file.
    ssh::ensure_helper()?;

    let mut store = HostStore::new(config)?;
    store.load()?;

    let target = target::parse_target(target_str)?;

    let (record, port) = match resolve::resolve(&store, &target)? {
        Resolution::Selected { record, port } => (record, port),
        Resolution::NeedsSelection { host, candidates } => {
            let record = ui::prompt::select_user(&host, &candidates)?;
            let port = resolve::effective_port(&target, &record);
            (record, port)
        }
    };

    Ok(ssh::launch(&record, port)?)
}
