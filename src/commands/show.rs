//! `xssh show [host]` — list stored credentials (never the passwords).

use crate::resolve::ResolveError;
use crate::store::HostStore;
use crate::Result;
use std::path::PathBuf;

pub fn run(host: Option<&str>, config: Option<PathBuf>) -> Result<()> {
    let mut store = HostStore::new(config)?;
    store.load()?;

    match host {
        Some(host) => {
            let records = store
                .find_by_host(host)
                .ok_or_else(|| ResolveError::HostNotFound(host.to_string()))?;
            println!("\nHost: {}\n", host);
            for record in records {
                println!("  - {}", record);
            }
        }
        None => {
            if store.is_empty() {
                println!("\nNo hosts configured yet\n");
                return Ok(());
            }
            println!("\nAll hosts:\n");
            for host in store.hosts_in_order() {
                println!("{}:", host);
                for record in store.find_by_host(host).unwrap_or_default() {
                    println!("  - {}", record);
                }
            }
            println!();
        }
    }

    Ok(())
}
