//! `xssh add <user@host[:port]>` — store a credential.

use crate::store::HostStore;
use crate::target::{self, TargetError};
use crate::{Result, ui};
use std::path::PathBuf;

const DEFAULT_SSH_PORT: u16 = 22;

pub fn run(target_str: &str, config: Option<PathBuf>) -> Result<()> {
    let target = target::parse_target(target_str)?;
    let Some(user) = target.user else {
        return Err(TargetError::MissingUser.into());
    };
    let port = target.port.unwrap_or(DEFAULT_SSH_PORT);

    let password = ui::prompt::prompt_new_password()?;

    let mut store = HostStore::new(config)?;
    store.add(&target.host, port, &user, &password)?;

    println!("✓ Added {}@{}:{}", user, target.host, port);
    Ok(())
}
