//! Catalog service configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Result, constants::DEFAULT_DATA_FILE, storage::StorageError};

/// How the service treats an insert whose identifier is already live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIdPolicy {
    /// Refuse the insert with `CatalogError::DuplicateProductId`.
    #[default]
    Reject,
    /// Accept it. Lookups by identifier then see only the earliest record.
    Allow,
}

/// Settings for a [`CatalogService`](crate::service::CatalogService).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file read at startup and written on save.
    pub data_file: PathBuf,
    pub duplicate_ids: DuplicateIdPolicy,
    /// Maximum retained undo entries; `None` keeps everything.
    pub undo_depth: Option<usize>,
    /// Install the built-in administrator accounts.
    pub seed_builtin_users: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            duplicate_ids: DuplicateIdPolicy::default(),
            undo_depth: None,
            seed_builtin_users: true,
        }
    }
}

impl CatalogConfig {
    /// Reads a configuration from a JSON file. Missing keys take their defaults.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StorageError::FileIo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }

    pub fn with_duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }

    pub fn with_undo_depth(mut self, depth: Option<usize>) -> Self {
        self.undo_depth = depth;
        self
    }

    pub fn with_builtin_users(mut self, seed: bool) -> Self {
        self.seed_builtin_users = seed;
        self
    }
}
