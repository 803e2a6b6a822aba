use super::{Resolution, ResolveError, effective_port, resolve};
use crate::store::{HostRecord, HostStore};
use crate::target::Target;
use std::fs;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicUsize, Ordering};

fn loaded_store(name: &str, rows: &[(&str, u16, &str)]) -> HostStore {
    static SERIAL: AtomicUsize = AtomicUsize::new(0);
    let serial = SERIAL.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!("xssh-resolve-{name}-{serial}.csv"));

    let mut content = String::from("host,port,user,password\n");
    for (host, port, user) in rows {
        writeln!(content, "{host},{port},{user},pw").unwrap();
    }
    fs::write(&path, content).expect("write fixture");

    let mut store = HostStore::new(Some(path)).expect("store");
    store.load().expect("load fixture");
    let _ = fs::remove_file(store.path());
    store
}

fn target(host: &str, user: Option<&str>, port: Option<u16>) -> Target {
    Target {
        host: host.to_string(),
        user: user.map(str::to_string),
        port,
    }
}

fn record(host: &str, port: u16, user: &str) -> HostRecord {
    HostRecord {
        host: host.to_string(),
        port,
        user: user.to_string(),
        password: "pw".to_string(),
    }
}

#[test]
fn auto_selects_the_only_user_of_a_host() {
    let store = loaded_store("single", &[("box1", 22, "root")]);
    let resolution = resolve(&store, &target("box1", None, None)).expect("resolves");
    assert_eq!(
        resolution,
        Resolution::Selected {
            record: record("box1", 22, "root"),
            port: 22,
        }
    );
}

#[test]
fn explicit_user_matches_exactly() {
    let store = loaded_store("explicit", &[("box1", 22, "root"), ("box1", 22, "admin")]);
    let resolution = resolve(&store, &target("box1", Some("admin"), None)).expect("resolves");
    assert_eq!(
        resolution,
        Resolution::Selected {
            record: record("box1", 22, "admin"),
            port: 22,
        }
    );
}

#[test]
fn target_port_overrides_stored_port() {
    let store = loaded_store("port-override", &[("box1", 22, "root")]);
    let resolution = resolve(&store, &target("box1", Some("root"), Some(2200))).expect("resolves");
    assert!(matches!(resolution, Resolution::Selected { port: 2200, .. }));
}

#[test]
fn unknown_host_fails() {
    let store = loaded_store("unknown-host", &[("box1", 22, "root")]);
    assert_eq!(
        resolve(&store, &target("box9", None, None)),
        Err(ResolveError::HostNotFound("box9".to_string()))
    );
}

#[test]
fn unknown_user_lists_available_users() {
    let store = loaded_store("unknown-user", &[("box1", 22, "root"), ("box1", 22, "admin")]);
    assert_eq!(
        resolve(&store, &target("box1", Some("deploy"), None)),
        Err(ResolveError::UserNotFound {
            host: "box1".to_string(),
            user: "deploy".to_string(),
            available: vec!["root".to_string(), "admin".to_string()],
        })
    );
}

#[test]
fn multiple_users_without_explicit_user_need_selection() {
    let store = loaded_store("ambiguous", &[("box1", 22, "root"), ("box1", 2222, "admin")]);
    assert_eq!(
        resolve(&store, &target("box1", None, None)),
        Ok(Resolution::NeedsSelection {
            host: "box1".to_string(),
            candidates: vec![record("box1", 22, "root"), record("box1", 2222, "admin")],
        })
    );
}

#[test]
fn effective_port_prefers_the_target() {
    let stored = record("box1", 22, "root");
    assert_eq!(effective_port(&target("box1", None, Some(2200)), &stored), 2200);
    assert_eq!(effective_port(&target("box1", None, None), &stored), 22);
}
