//! Storage backends.

use crate::StoreError;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// A raw key-value backend.
///
/// Keys are store names (e.g. `"cart"`), values are opaque byte blobs.
/// Implementations must tolerate reads of keys that were never written
/// and deletes of keys that are already gone.
pub trait Backend: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove the value stored under `key`, if any.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// An in-memory backend.
///
/// Holds state only for the lifetime of the process. This is the default
/// for tests and for ephemeral sessions with no durable storage attached.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// A file-backed backend.
///
/// Each key maps to one JSON file under the root directory, so persisted
/// state survives process restarts. Key characters outside
/// `[A-Za-z0-9_-]` are replaced with `-` when forming file names.
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

impl Backend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("shophub-store-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn memory_roundtrip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("cart").unwrap(), None);

        backend.set("cart", b"[1,2,3]").unwrap();
        assert_eq!(backend.get("cart").unwrap().as_deref(), Some(&b"[1,2,3]"[..]));

        backend.delete("cart").unwrap();
        assert_eq!(backend.get("cart").unwrap(), None);
    }

    #[test]
    fn memory_overwrite() {
        let backend = MemoryBackend::new();
        backend.set("wishlist", b"[1]").unwrap();
        backend.set("wishlist", b"[1,2]").unwrap();
        assert_eq!(
            backend.get("wishlist").unwrap().as_deref(),
            Some(&b"[1,2]"[..])
        );
    }

    #[test]
    fn memory_delete_missing_is_ok() {
        let backend = MemoryBackend::new();
        backend.delete("never-written").unwrap();
    }

    #[test]
    fn file_roundtrip() {
        let root = temp_root("roundtrip");
        let backend = FileBackend::new(&root).unwrap();

        assert_eq!(backend.get("cart").unwrap(), None);
        backend.set("cart", b"{\"version\":1}").unwrap();
        assert_eq!(
            backend.get("cart").unwrap().as_deref(),
            Some(&b"{\"version\":1}"[..])
        );

        backend.delete("cart").unwrap();
        assert_eq!(backend.get("cart").unwrap(), None);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn file_survives_reopen() {
        let root = temp_root("reopen");
        {
            let backend = FileBackend::new(&root).unwrap();
            backend.set("compare", b"[7,8]").unwrap();
        }
        let backend = FileBackend::new(&root).unwrap();
        assert_eq!(backend.get("compare").unwrap().as_deref(), Some(&b"[7,8]"[..]));

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn file_key_sanitization() {
        let root = temp_root("sanitize");
        let backend = FileBackend::new(&root).unwrap();

        backend.set("recently/viewed", b"[]").unwrap();
        assert!(root.join("recently-viewed.json").exists());

        let _ = fs::remove_dir_all(&root);
    }
}
