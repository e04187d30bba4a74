//! Local state store location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding one JSON file per persisted key. Empty means the
    /// per-user data directory.
    #[serde(default)]
    pub dir: String,
}

impl StoreConfig {
    /// Resolved store directory.
    ///
    /// Falls back to `./.aiready/state` when the platform has no data dir.
    #[must_use]
    pub fn resolve_dir(&self) -> PathBuf {
        if !self.dir.trim().is_empty() {
            return PathBuf::from(self.dir.trim());
        }
        dirs::data_local_dir().map_or_else(
            || PathBuf::from(".aiready").join("state"),
            |dir| dir.join("aiready"),
        )
    }
}
