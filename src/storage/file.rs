use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    common::error::StorageError,
    storage::kv::{validate_key, KeyValueStore},
};

const EXTENSION: &str = "json";

/// Key-value store keeping each key in its own `<key>.json` file under a
/// data directory. The directory is created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{EXTENSION}")))
    }
}

fn io_err(key: &str, source: std::io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_err(key, e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).map_err(|e| io_err(key, e))?;

        // write next to the target, then rename over it
        let tmp = path.with_extension(format!("{EXTENSION}.tmp"));
        fs::write(&tmp, value).map_err(|e| io_err(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| io_err(key, e))?;
        debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(key, e)),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(io_err("*", e)),
        };

        for entry in entries {
            let path = entry.map_err(|e| io_err("*", e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some(EXTENSION) {
                fs::remove_file(&path).map_err(|e| io_err("*", e))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        assert_eq!(store.get("transacoes").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));

        store.set("metas", "[]").unwrap();
        store.set("metas", "[{}]").unwrap();

        assert_eq!(store.get("metas").unwrap().as_deref(), Some("[{}]"));
        assert!(dir.path().join("data/metas.json").exists());
        assert!(!dir.path().join("data/metas.json.tmp").exists());
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("metas", "[]").unwrap();
        store.remove("metas").unwrap();
        store.remove("metas").unwrap();
        assert_eq!(store.get("metas").unwrap(), None);
    }

    #[test]
    fn clear_only_touches_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("transacoes", "[]").unwrap();
        store.set("metas", "[]").unwrap();
        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

        store.clear().unwrap();

        assert_eq!(store.get("transacoes").unwrap(), None);
        assert_eq!(store.get("metas").unwrap(), None);
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn clear_on_missing_directory_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        store.clear().unwrap();
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(
            store.set("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
