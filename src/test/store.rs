use super::{HostStore, StoreError};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

fn temp_hosts_path(name: &str) -> PathBuf {
    static SERIAL: AtomicUsize = AtomicUsize::new(0);
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let serial = SERIAL.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("xssh-hosts-{name}-{nanos}-{serial}.csv"))
}

fn store_with_content(name: &str, content: &str) -> HostStore {
    let path = temp_hosts_path(name);
    fs::write(&path, content).expect("write fixture");
    HostStore::new(Some(path)).expect("store")
}

fn cleanup(store: &HostStore) {
    let _ = fs::remove_file(store.path());
}

#[test]
fn load_fails_when_file_is_missing() {
    let mut store = HostStore::new(Some(temp_hosts_path("missing"))).expect("store");
    assert!(matches!(store.load(), Err(StoreError::NotFound(_))));
}

#[test]
fn load_rejects_missing_password_column() {
    let mut store = store_with_content("no-password-column", "host,port,user\nbox1,22,root\n");
    assert!(matches!(store.load(), Err(StoreError::MissingColumns)));
    cleanup(&store);
}

#[test]
fn load_rejects_duplicate_host_user_pair() {
    let mut store = store_with_content(
        "duplicate",
        "host,port,user,password\nbox1,22,root,pw1\nbox1,2222,root,pw2\n",
    );
    match store.load() {
        Err(StoreError::Duplicate(key)) => assert_eq!(key, "root@box1"),
        other => panic!("expected duplicate error, got {:?}", other),
    }
    cleanup(&store);
}

#[test]
fn load_reports_offending_row_for_bad_port() {
    let mut store = store_with_content(
        "bad-port",
        "host,port,user,password\nbox1,22,root,pw\nbox2,abc,root,pw\n",
    );
    match store.load() {
        Err(StoreError::Format { row, message }) => {
            assert_eq!(row, 3);
            assert!(message.contains("abc"), "unexpected message: {message}");
        }
        other => panic!("expected format error, got {:?}", other),
    }
    cleanup(&store);
}

#[test]
fn load_rejects_empty_password() {
    let mut store = store_with_content("empty-password", "host,port,user,password\nbox1,22,root,\n");
    match store.load() {
        Err(StoreError::Format { row, message }) => {
            assert_eq!(row, 2);
            assert!(message.contains("password"), "unexpected message: {message}");
        }
        other => panic!("expected format error, got {:?}", other),
    }
    cleanup(&store);
}

#[test]
fn add_creates_file_with_header_and_reloads() {
    let mut store = HostStore::new(Some(temp_hosts_path("add-creates"))).expect("store");
    store.add("box1", 22, "root", "secret").expect("add");

    let raw = fs::read_to_string(store.path()).expect("read back");
    assert!(raw.starts_with("host,port,user,password\n"));

    let record = store.find_by_host_user("box1", "root").expect("record present");
    assert_eq!(record.port, 22);
    assert_eq!(record.password, "secret");
    cleanup(&store);
}

#[test]
fn add_rejects_duplicate_pair() {
    let mut store = HostStore::new(Some(temp_hosts_path("add-duplicate"))).expect("store");
    store.add("box1", 22, "root", "pw").expect("first add");
    match store.add("box1", 2222, "root", "pw2") {
        Err(StoreError::Duplicate(key)) => assert_eq!(key, "root@box1"),
        other => panic!("expected duplicate error, got {:?}", other),
    }
    cleanup(&store);
}

#[test]
fn add_round_trips_passwords_containing_csv_metacharacters() {
    let mut store = HostStore::new(Some(temp_hosts_path("add-quoting"))).expect("store");
    let password = "pa,ss\"word";
    store.add("box1", 22, "root", password).expect("add");

    let record = store.find_by_host_user("box1", "root").expect("record present");
    assert_eq!(record.password, password);
    cleanup(&store);
}

#[test]
fn delete_removes_exactly_one_row() {
    let mut store = store_with_content(
        "delete-one",
        "host,port,user,password\nbox1,22,root,pw\nbox1,22,admin,pw\nbox2,22,root,pw\n",
    );
    store.delete("box1", "admin").expect("delete");

    assert!(store.find_by_host_user("box1", "admin").is_none());
    assert!(store.find_by_host_user("box1", "root").is_some());
    assert!(store.find_by_host_user("box2", "root").is_some());

    let raw = fs::read_to_string(store.path()).expect("read back");
    assert_eq!(raw.lines().count(), 3); // header plus the two surviving rows
    cleanup(&store);
}

#[test]
fn delete_missing_pair_is_not_found() {
    let mut store = store_with_content("delete-missing", "host,port,user,password\nbox1,22,root,pw\n");
    match store.delete("box1", "admin") {
        Err(StoreError::RecordNotFound(key)) => assert_eq!(key, "admin@box1"),
        other => panic!("expected not-found error, got {:?}", other),
    }
    cleanup(&store);
}

#[test]
fn find_by_host_preserves_persisted_order() {
    let mut store = store_with_content(
        "host-order",
        "host,port,user,password\nbox1,22,zeta,pw\nbox1,22,alpha,pw\n",
    );
    store.load().expect("load");

    let users: Vec<&str> = store
        .find_by_host("box1")
        .expect("host present")
        .iter()
        .map(|record| record.user.as_str())
        .collect();
    assert_eq!(users, vec!["zeta", "alpha"]);
    cleanup(&store);
}

#[test]
fn hosts_in_order_lists_first_seen_hosts_once() {
    let mut store = store_with_content(
        "first-seen",
        "host,port,user,password\nbox2,22,root,pw\nbox1,22,root,pw\nbox2,22,admin,pw\n",
    );
    store.load().expect("load");
    assert_eq!(store.hosts_in_order(), vec!["box2", "box1"]);
    cleanup(&store);
}

#[test]
fn failed_load_keeps_previous_state() {
    let mut store = store_with_content("keep-state", "host,port,user,password\nbox1,22,root,pw\n");
    store.load().expect("load");

    fs::write(store.path(), "host,port,user,password\nbox1,oops,root,pw\n").expect("rewrite fixture");
    assert!(store.load().is_err());
    assert!(store.find_by_host_user("box1", "root").is_some());
    cleanup(&store);
}
