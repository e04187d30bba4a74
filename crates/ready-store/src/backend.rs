//! Raw key-value backends.
//!
//! A backend stores opaque strings under short keys. Each key is written on
//! its own, so a failed write can only lose that one key.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

pub trait KeyValueBackend {
    /// Read the raw value for `key`. `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the key is invalid or storage cannot be read.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the key is invalid or storage cannot be written.
    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process backend. Nothing outlives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing encoding. Handy for corrupt-data tests.
    #[must_use]
    pub fn with_raw(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
///
/// Writes go to a temp file in the same directory and are renamed into
/// place, so a reader never sees a half-written value.
#[derive(Debug, Clone)]
pub struct DirBackend {
    root: PathBuf,
}

impl DirBackend {
    /// The directory is created lazily on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    fn io_error(path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl KeyValueBackend for DirBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(Self::io_error(&path, error)),
        }
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|e| Self::io_error(&self.root, e))?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.root).map_err(|e| Self::io_error(&self.root, e))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| Self::io_error(tmp.path(), e))?;
        tmp.persist(&path)
            .map_err(|e| Self::io_error(&path, e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn dir_backend_write_read_overwrite_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut backend = DirBackend::new(tmp.path().join("nested/state"));

        assert_eq!(backend.get_raw("ai_mops_name_prod").expect("read"), None);
        backend
            .set_raw("ai_mops_name_prod", "\"Jane\"")
            .expect("write");
        assert_eq!(
            backend.get_raw("ai_mops_name_prod").expect("read").as_deref(),
            Some("\"Jane\"")
        );
        assert!(tmp.path().join("nested/state/ai_mops_name_prod.json").exists());

        backend.set_raw("ai_mops_name_prod", "\"Joe\"").expect("overwrite");
        assert_eq!(
            backend.get_raw("ai_mops_name_prod").expect("read").as_deref(),
            Some("\"Joe\"")
        );
    }

    #[test]
    fn dir_backend_leaves_no_temp_files() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut backend = DirBackend::new(tmp.path());
        backend.set_raw("a", "1").expect("write");
        backend.set_raw("b", "2").expect("write");

        let mut names: Vec<String> = fs::read_dir(tmp.path())
            .expect("list")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[rstest]
    #[case("")]
    #[case("../escape")]
    #[case("a/b")]
    #[case(".hidden")]
    #[case("white space")]
    fn dir_backend_rejects_unsafe_keys(#[case] key: &str) {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut backend = DirBackend::new(tmp.path());
        assert!(matches!(
            backend.set_raw(key, "1"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(backend.get_raw(key), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn memory_backend_roundtrip() {
        let mut backend = MemoryBackend::new().with_raw("k", "seed");
        assert_eq!(backend.get_raw("k").expect("read").as_deref(), Some("seed"));
        backend.set_raw("k", "next").expect("write");
        assert_eq!(backend.get_raw("k").expect("read").as_deref(), Some("next"));
        assert_eq!(backend.get_raw("other").expect("read"), None);
    }
}
