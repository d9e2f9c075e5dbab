//! One-time-seen flag persistence
//!
//! The modifier tooltip is shown at most once per installation. That fact
//! is recorded as a single key-value pair, key `hasSeenModifierTooltip`,
//! value the literal string `"true"`. Absent storage, an unreadable file,
//! or any other value all read as "not seen" — the degrade-to-default
//! contract means a missing capability costs the user one extra tooltip,
//! never an error.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

/// Storage key for the seen flag
pub const SEEN_FLAG_KEY: &str = "hasSeenModifierTooltip";

/// Persisted value marking the flag as committed
const SEEN_FLAG_VALUE: &str = "true";

/// Errors internal to the persistence layer.
///
/// These never cross the [`SeenFlagStore`] API: reads soft-fail to false
/// and writes are silently skipped.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no persistent storage available in this execution context")]
    Unavailable,

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read/commit access to the one-time seen flag.
///
/// `read` returns false when storage is absent or unreadable. `commit` is
/// idempotent and permanent; there is no reset.
pub trait SeenFlagStore: Send + Sync {
    /// Whether the tooltip has already been seen
    fn read(&self) -> bool;

    /// Record the tooltip as seen. No-op when already committed.
    fn commit(&self);
}

/// Seen flag backed by a JSON file in the data directory
pub struct FileSeenFlagStore {
    path: PathBuf,
}

impl FileSeenFlagStore {
    /// Create a store persisting to the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the configured default location.
    ///
    /// Hosts without a usable data directory should fall back to
    /// [`MemorySeenFlagStore`]; the page then hints once per process.
    pub fn at_default_location() -> Result<Self, StoreError> {
        let config = crate::config::Config::load()?;
        config.ensure_dirs()?;
        Ok(Self::new(config.seen_flag_path))
    }

    fn read_map(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_seen(path: &Path) -> Result<(), StoreError> {
        let mut map = Self::read_map(path).unwrap_or_default();
        map.insert(SEEN_FLAG_KEY.to_string(), SEEN_FLAG_VALUE.to_string());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_vec_pretty(&map)?)?;
        Ok(())
    }
}

impl SeenFlagStore for FileSeenFlagStore {
    fn read(&self) -> bool {
        match Self::read_map(&self.path) {
            Ok(map) => map.get(SEEN_FLAG_KEY).map(String::as_str) == Some(SEEN_FLAG_VALUE),
            Err(e) => {
                debug!(?e, path = ?self.path, "seen flag unreadable, defaulting to false");
                false
            }
        }
    }

    fn commit(&self) {
        if self.read() {
            return;
        }
        if let Err(e) = Self::write_seen(&self.path) {
            debug!(?e, path = ?self.path, "seen flag commit skipped");
        }
    }
}

/// In-process seen flag for hosts without persistent storage, and for tests
#[derive(Default)]
pub struct MemorySeenFlagStore {
    seen: AtomicBool,
}

impl MemorySeenFlagStore {
    /// Create an uncommitted in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeenFlagStore for MemorySeenFlagStore {
    fn read(&self) -> bool {
        self.seen.load(Ordering::SeqCst)
    }

    fn commit(&self) {
        self.seen.store(true, Ordering::SeqCst);
    }
}
