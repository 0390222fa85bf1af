//! On-disk JSON artifact store.
//!
//! Artifacts are addressed by a logical name and live as one pretty-printed
//! JSON document per file at `{root}/{name}.json`. The store distinguishes
//! "absent" (a normal state that triggers recording downstream) from every
//! other failure, which indicates a broken fixture environment.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StoreError;

/// Filesystem store for JSON-encoded test artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Creates a store rooted at `root`. Nothing touches the filesystem until
    /// the first read or write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory all artifacts live under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the artifact stored under `name`.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// Creates the storage root (and intermediate directories) if missing.
    pub fn ensure_root(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })
    }

    /// Serializes `value` to two-space-indented JSON and writes it under
    /// `name`, overwriting any existing artifact.
    ///
    /// The write goes to a sibling `.json.tmp` file first and is renamed into
    /// place, so an interrupted run never leaves a truncated artifact behind.
    pub fn store<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        self.ensure_root()?;
        let path = self.path_of(name);

        let mut encoded =
            serde_json::to_vec_pretty(value).map_err(|source| StoreError::Encode {
                path: path.clone(),
                source,
            })?;
        encoded.push(b'\n');

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &encoded).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })
    }

    /// Loads the artifact stored under `name` into the requested shape.
    ///
    /// Returns [`StoreError::NotFound`] when the file is absent; any other
    /// I/O or decode failure means the fixture environment is broken.
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, StoreError> {
        let path = self.path_of(name);
        let text = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                StoreError::NotFound { path: path.clone() }
            } else {
                StoreError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        serde_json::from_str(&text).map_err(|source| StoreError::Decode { path, source })
    }

    /// Deletes the artifact stored under `name`. Absence is a no-op.
    pub fn remove(&self, name: &str) -> Result<(), StoreError> {
        let path = self.path_of(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    /// True if an artifact exists under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn store_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("testdata"));

        store.store("case", &json!({"x": 1})).unwrap();
        let loaded: serde_json::Value = store.load("case").unwrap();
        assert_eq!(loaded, json!({"x": 1}));
    }

    #[test]
    fn store_writes_pretty_json_with_trailing_newline() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        store.store("case", &json!({"x": 1, "y": [2]})).unwrap();
        let text = std::fs::read_to_string(store.path_of("case")).unwrap();
        assert!(text.contains("  \"x\": 1"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn load_missing_artifact_is_not_found() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let err = store.load::<serde_json::Value>("absent").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn load_malformed_artifact_is_a_decode_failure() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        std::fs::write(store.path_of("bad"), "{ not json").unwrap();

        let err = store.load::<serde_json::Value>("bad").unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[test]
    fn remove_is_a_no_op_when_absent() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        store.remove("never-existed").unwrap();
    }

    #[test]
    fn store_overwrites_existing_artifact() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        store.store("case", &json!({"v": 1})).unwrap();
        store.store("case", &json!({"v": 2})).unwrap();
        let loaded: serde_json::Value = store.load("case").unwrap();
        assert_eq!(loaded, json!({"v": 2}));
    }
}
