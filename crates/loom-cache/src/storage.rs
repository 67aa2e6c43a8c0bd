//! Raw string storage backends.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

use crate::CacheError;

/// A session-scoped string slot store.
///
/// Shaped after the browser `sessionStorage` API: values are opaque strings
/// and a missing key is `None`, not an error.
pub trait SessionStorage {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Overwrite the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove `key`. Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), CacheError>;

    /// List every stored key.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

impl<S: SessionStorage + ?Sized> SessionStorage for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        (**self).remove_item(key)
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        (**self).keys()
    }
}

/// In-process storage.
///
/// Cloning yields a handle to the same map; writes from any handle are seen by
/// all of them and the last write to a key wins.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> CacheError {
        CacheError::Store("memory storage lock poisoned".to_string())
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(map.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        map.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

/// Directory-backed storage, one file per key.
///
/// Keys are base64url-encoded into file names so any key is a valid path
/// segment. Encoded names longer than [`MAX_SEGMENT_LEN`] are split into
/// nested directories, keeping every path component under the file system's
/// name limit.
#[derive(Debug, Clone)]
pub struct DirStorage {
    root: PathBuf,
}

const FILE_EXTENSION: &str = "slot";

/// Longest path component written for an encoded key.
pub const MAX_SEGMENT_LEN: usize = 200;

impl DirStorage {
    /// Open (and create if needed) a storage directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, CacheError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        tracing::debug!(root = %root.display(), "opened directory storage");
        Ok(Self { root })
    }

    /// The directory holding the slot files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let encoded = encode_key(key);
        let mut path = self.root.clone();
        let mut rest = encoded.as_str();
        while rest.len() > MAX_SEGMENT_LEN {
            let (segment, tail) = rest.split_at(MAX_SEGMENT_LEN);
            path.push(segment);
            rest = tail;
        }
        path.push(format!("{}.{}", rest, FILE_EXTENSION));
        path
    }

    fn collect_keys(dir: &Path, prefix: &str, keys: &mut Vec<String>) -> Result<(), CacheError> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };

            if entry.file_type()?.is_dir() {
                Self::collect_keys(&entry.path(), &format!("{}{}", prefix, name), keys)?;
            } else if let Some(stem) = name.strip_suffix(&format!(".{}", FILE_EXTENSION)) {
                if let Some(key) = decode_key(&format!("{}{}", prefix, stem)) {
                    keys.push(key);
                }
            }
        }
        Ok(())
    }
}

impl SessionStorage for DirStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), CacheError> {
        // Each writer gets its own temp file; the rename makes the last
        // writer win and a reader never sees a half-written slot.
        let path = self.path_for(key);
        let dir = path.parent().unwrap_or(&self.root);
        fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(&path).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut keys = Vec::new();
        Self::collect_keys(&self.root, "", &mut keys)?;
        keys.sort();
        Ok(keys)
    }
}

fn encode_key(key: &str) -> String {
    URL_SAFE_NO_PAD.encode(key.as_bytes())
}

fn decode_key(encoded: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_get_missing() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("nope").unwrap(), None);
    }

    #[test]
    fn test_memory_set_and_get() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_clones_share_slot() {
        let tab_a = MemoryStorage::new();
        let tab_b = tab_a.clone();

        tab_a.set_item("cart", "first").unwrap();
        tab_b.set_item("cart", "second").unwrap();

        assert_eq!(tab_a.get_item("cart").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_memory_remove() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v").unwrap();
        storage.remove_item("k").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_memory_keys_sorted() {
        let storage = MemoryStorage::new();
        storage.set_item("b", "2").unwrap();
        storage.set_item("a", "1").unwrap();
        assert_eq!(storage.keys().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_dir_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DirStorage::open(dir.path()).unwrap();

        storage.set_item("session:abc:cart", "[]").unwrap();
        assert_eq!(
            storage.get_item("session:abc:cart").unwrap().as_deref(),
            Some("[]")
        );
        assert_eq!(storage.keys().unwrap(), vec!["session:abc:cart"]);
    }

    #[test]
    fn test_dir_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        DirStorage::open(dir.path())
            .unwrap()
            .set_item("k", "persisted")
            .unwrap();

        let reopened = DirStorage::open(dir.path()).unwrap();
        assert_eq!(
            reopened.get_item("k").unwrap().as_deref(),
            Some("persisted")
        );
    }

    #[test]
    fn test_dir_missing_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DirStorage::open(dir.path().join("nested")).unwrap();

        assert_eq!(storage.get_item("missing").unwrap(), None);
        storage.remove_item("missing").unwrap();

        storage.set_item("k", "v").unwrap();
        storage.remove_item("k").unwrap();
        assert!(storage.keys().unwrap().is_empty());
    }

    #[test]
    fn test_key_encoding() {
        let key = "session:sess_ab-C/../x";
        let encoded = encode_key(key);
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(decode_key(&encoded).as_deref(), Some(key));
        assert_eq!(decode_key("a"), None);
    }

    #[test]
    fn test_dir_long_key_is_split_into_segments() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DirStorage::open(dir.path()).unwrap();
        let key = format!("session:{}:cart", "s".repeat(600));

        storage.set_item(&key, "[]").unwrap();
        storage.set_item("short", "x").unwrap();
        assert_eq!(storage.get_item(&key).unwrap().as_deref(), Some("[]"));

        let path = storage.path_for(&key);
        assert!(path.components().count() > dir.path().components().count() + 1);
        for component in path.strip_prefix(dir.path()).unwrap().components() {
            assert!(component.as_os_str().len() <= MAX_SEGMENT_LEN + ".slot".len());
        }

        let mut expected = vec![key.clone(), "short".to_string()];
        expected.sort();
        assert_eq!(storage.keys().unwrap(), expected);

        storage.remove_item(&key).unwrap();
        assert_eq!(storage.get_item(&key).unwrap(), None);
    }

    #[test]
    fn test_dir_concurrent_writers_last_wins() {
        let dir = tempfile::tempdir().unwrap();
        let storage = DirStorage::open(dir.path()).unwrap();

        let writers: Vec<_> = (0..8)
            .map(|n| {
                let storage = storage.clone();
                std::thread::spawn(move || {
                    for round in 0..20 {
                        storage
                            .set_item("session:shared:cart", &format!("{}-{}", n, round))
                            .unwrap();
                    }
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let value = storage.get_item("session:shared:cart").unwrap().unwrap();
        assert!(value.ends_with("-19"));
        assert_eq!(storage.keys().unwrap(), vec!["session:shared:cart"]);
    }
}
