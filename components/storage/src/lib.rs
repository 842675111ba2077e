use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::error::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// A single stored value with an optional expiry.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub value: String,
    pub expires: Option<DateTime<Utc>>,
}

impl Entry {
    pub fn new(value: String, expires: Option<DateTime<Utc>>) -> Self {
        Self { value, expires }
    }

    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        match self.expires {
            Some(expires) => now < expires,
            None => true,
        }
    }
}

/// Expiry timestamp for an entry that should live for `days`,
/// `None` when the timestamp is not representable.
pub fn expires_in_days(days: u32) -> Option<DateTime<Utc>> {
    let expires = Utc::now().checked_add_signed(Duration::days(days as i64));
    if expires.is_none() {
        warn!("Expiry of {} days is out of range", days);
    }
    expires
}

/// Durable client side key/value storage.
///
/// Reads never fail: an absent or expired entry is `None`. Writes
/// return a `Result` but callers inside the site core treat them
/// as best effort.
pub trait Storage {
    /// Read a value if it exists and has not expired at `now`.
    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<String>;

    /// Store a value, replacing any previous entry for the key.
    fn set(
        &mut self,
        key: &str,
        value: &str,
        expires: Option<DateTime<Utc>>,
    ) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;

    fn get(&self, key: &str) -> Option<String> {
        self.get_at(key, Utc::now())
    }
}

/// Storage that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, Entry>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Storage for MemoryStorage {
    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<String> {
        self.entries
            .get(key)
            .filter(|e| e.is_live(now))
            .map(|e| e.value.clone())
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
        expires: Option<DateTime<Utc>>,
    ) -> Result<()> {
        self.entries
            .insert(key.to_string(), Entry::new(value.to_string(), expires));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Storage persisted as a single JSON document mapping keys to entries.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, Entry>,
}

impl FileStorage {
    /// Open a storage file; a missing or unreadable document is
    /// treated as empty storage.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring malformed storage {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!("Unable to read storage {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        debug!("Wrote storage {}", self.path.display());
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_at(&self, key: &str, now: DateTime<Utc>) -> Option<String> {
        self.entries
            .get(key)
            .filter(|e| e.is_live(now))
            .map(|e| e.value.clone())
    }

    fn set(
        &mut self,
        key: &str,
        value: &str,
        expires: Option<DateTime<Utc>>,
    ) -> Result<()> {
        self.entries
            .insert(key.to_string(), Entry::new(value.to_string(), expires));
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
