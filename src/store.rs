//! CSV-backed host credential store.
//!
//! Records live in `~/.ssh/hosts.csv` (header `host,port,user,password`).
//! Passwords are stored in plaintext; that is the documented trade-off this
//! tool makes for one-command logins. The in-memory indices are rebuilt
//! wholesale on every load so they always mirror the last successful read.

mod errors;

pub use errors::StoreError;

use crate::target;
use crate::{log_debug, log_error};
use std::{
    collections::HashMap,
    fmt,
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
};

pub const REQUIRED_FIELDS: [&str; 4] = ["host", "port", "user", "password"];

const DEFAULT_HOSTS_DIR: &str = ".ssh";
const DEFAULT_HOSTS_FILE: &str = "hosts.csv";

/// One stored credential. (host, user) is unique across the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl HostRecord {
    /// Identity key, `user@host`.
    pub fn key(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

impl fmt::Display for HostRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.user, self.host, self.port)
    }
}

/// Column positions of the required fields within the header row.
struct ColumnIndex {
    host: usize,
    port: usize,
    user: usize,
    password: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Option<Self> {
        let position = |name: &str| headers.iter().position(|header| header.trim() == name);
        Some(Self {
            host: position("host")?,
            port: position("port")?,
            user: position("user")?,
            password: position("password")?,
        })
    }
}

pub struct HostStore {
    path: PathBuf,
    records: Vec<HostRecord>,
    by_host: HashMap<String, Vec<usize>>,
    by_key: HashMap<String, usize>,
}

impl HostStore {
    /// Default hosts-file location, `~/.ssh/hosts.csv`.
    pub fn default_path() -> Result<PathBuf, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::MissingHomeDirectory)?;
        Ok(home.join(DEFAULT_HOSTS_DIR).join(DEFAULT_HOSTS_FILE))
    }

    /// Creates a store bound to `path`, or to the default location.
    /// No file access happens until `load`, `add` or `delete`.
    pub fn new(path: Option<PathBuf>) -> Result<Self, StoreError> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        Ok(Self {
            path,
            records: Vec::new(),
            by_host: HashMap::new(),
            by_key: HashMap::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the hosts file, replacing all in-memory state.
    /// On any error the previous state is left untouched.
    pub fn load(&mut self) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NotFound(self.path.clone()));
        }

        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(file);
        let columns = ColumnIndex::from_headers(reader.headers()?).ok_or(StoreError::MissingColumns)?;

        let mut records: Vec<HostRecord> = Vec::new();
        let mut by_host: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_key: HashMap<String, usize> = HashMap::new();

        for (index, row) in reader.records().enumerate() {
            // Row 1 is the header.
            let row_num = index + 2;
            let row = row?;
            let record = parse_row(&columns, &row).map_err(|message| {
                log_error!("Rejecting hosts file {}: row {}: {}", self.path.display(), row_num, message);
                StoreError::Format { row: row_num, message }
            })?;

            let key = record.key();
            if by_key.contains_key(&key) {
                return Err(StoreError::Duplicate(key));
            }
            by_key.insert(key, records.len());
            by_host.entry(record.host.clone()).or_default().push(records.len());
            records.push(record);
        }

        log_debug!("Loaded {} host records from {}", records.len(), self.path.display());
        self.records = records;
        self.by_host = by_host;
        self.by_key = by_key;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records for `host`, in persisted order.
    pub fn find_by_host(&self, host: &str) -> Option<Vec<&HostRecord>> {
        self.by_host
            .get(host)
            .map(|indices| indices.iter().map(|&index| &self.records[index]).collect())
    }

    /// Exact lookup by (host, user).
    pub fn find_by_host_user(&self, host: &str, user: &str) -> Option<&HostRecord> {
        let key = format!("{}@{}", user, host);
        self.by_key.get(&key).map(|&index| &self.records[index])
    }

    /// Hosts in first-seen persisted order, for grouped listings.
    pub fn hosts_in_order(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.host.as_str()) {
                seen.push(&record.host);
            }
        }
        seen
    }

    /// Appends one record, creating the file (with header) and its parent
    /// directory when absent. Rejects a duplicate (host, user) pair.
    /// Reloads afterwards so in-memory state matches the file.
    pub fn add(&mut self, host: &str, port: u16, user: &str, password: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        if self.path.exists() {
            self.load()?;
            if self.find_by_host_user(host, user).is_some() {
                return Err(StoreError::Duplicate(format!("{}@{}", user, host)));
            }
        } else {
            log_debug!("Creating hosts file {}", self.path.display());
            let mut writer = csv::Writer::from_path(&self.path)?;
            writer.write_record(REQUIRED_FIELDS)?;
            writer.flush()?;
        }

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);
        let port = port.to_string();
        writer.write_record([host, port.as_str(), user, password])?;
        writer.flush()?;

        self.load()
    }

    /// Removes the record matching (host, user), rewriting the whole file.
    /// Fails when no such record exists. Reloads afterwards.
    pub fn delete(&mut self, host: &str, user: &str) -> Result<(), StoreError> {
        self.load()?;

        let key = format!("{}@{}", user, host);
        if !self.by_key.contains_key(&key) {
            return Err(StoreError::RecordNotFound(key));
        }

        {
            let mut writer = csv::Writer::from_path(&self.path)?;
            writer.write_record(REQUIRED_FIELDS)?;
            for record in self.records.iter().filter(|record| !(record.host == host && record.user == user)) {
                let port = record.port.to_string();
                writer.write_record([record.host.as_str(), port.as_str(), record.user.as_str(), record.password.as_str()])?;
            }
            writer.flush()?;
        }
        log_debug!("Removed {} from {}", key, self.path.display());

        self.load()
    }
}

fn parse_row(columns: &ColumnIndex, row: &csv::StringRecord) -> Result<HostRecord, String> {
    let field = |index: usize| row.get(index).unwrap_or("").trim();

    let host = field(columns.host);
    let user = field(columns.user);
    let password = field(columns.password);

    if host.is_empty() {
        return Err("host cannot be empty".to_string());
    }
    if user.is_empty() {
        return Err("user cannot be empty".to_string());
    }
    if password.is_empty() {
        return Err("password cannot be empty".to_string());
    }

    let port = target::parse_port(field(columns.port)).map_err(|err| err.to_string())?;

    Ok(HostRecord {
        host: host.to_string(),
        port,
        user: user.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
#[path = "test/store.rs"]
mod tests;
