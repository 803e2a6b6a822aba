//! `xssh delete <user@host>` — remove a stored credential.

use crate::Result;
use crate::store::HostStore;
use crate::target::{self, TargetError};
use std::path::PathBuf;

pub fn run(target_str: &str, config: Option<PathBuf>) -> Result<()> {
    let target = target::parse_target(target_str)?;
    let Some(user) = target.user else {
        return Err(TargetError::MissingUser.into());
    };

    let mut store = HostStore::new(config)?;
    store.delete(&target.host, &user)?;

    println!("✓ Removed {}@{}", user, target.host);
    Ok(())
}
