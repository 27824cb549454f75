use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// Durable key-value state store backed by one JSON file per key.
///
/// Values are pretty-printed JSON so a stuck session can be inspected or
/// deleted by hand. Writes go through a temp file and rename so a crash
/// mid-write never leaves a half-written value behind the key.
#[derive(Debug, Clone)]
pub struct StateStore {
    state_dir: PathBuf,
}

impl StateStore {
    pub fn new(state_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&state_dir)
            .with_context(|| format!("Failed to create state directory: {}", state_dir.display()))?;
        Ok(Self { state_dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.state_dir.join(format!("{}.json", key))
    }

    /// Read and deserialize the value under `key`. Missing key is `Ok(None)`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read state entry: {}", key))?;

        let value: T = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse state entry: {}", key))?;

        Ok(Some(value))
    }

    /// Serialize and write the value under `key`, replacing any prior value.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.entry_path(key);
        let contents = serde_json::to_string_pretty(value)?;

        // Write-then-rename keeps the previous value intact if the write dies.
        let tmp = self.state_dir.join(format!("{}.json.tmp", key));
        std::fs::write(&tmp, contents)
            .with_context(|| format!("Failed to write state entry: {}", key))?;
        std::fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace state entry: {}", key))?;

        debug!(key, "State entry written");
        Ok(())
    }

    /// Delete the value under `key`. Deleting an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove state entry: {}", key)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Marker {
        label: String,
        count: u32,
    }

    fn temp_store() -> (tempfile::TempDir, StateStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, store) = temp_store();
        let value = Marker {
            label: "checkpoint".to_string(),
            count: 3,
        };

        store.save("marker", &value).unwrap();
        let loaded: Option<Marker> = store.load("marker").unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn test_load_missing_key_is_none() {
        let (_dir, store) = temp_store();
        let loaded: Option<Marker> = store.load("absent").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_rejects_corrupt_entry() {
        let (dir, store) = temp_store();
        std::fs::write(dir.path().join("broken.json"), "{not json").unwrap();

        let result: Result<Option<Marker>> = store.load("broken");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let (_dir, store) = temp_store();
        store.save("slot", &"first".to_string()).unwrap();
        store.save("slot", &"second".to_string()).unwrap();

        let loaded: Option<String> = store.load("slot").unwrap();
        assert_eq!(loaded.as_deref(), Some("second"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (_dir, store) = temp_store();
        store.save("slot", &1u32).unwrap();

        store.remove("slot").unwrap();
        store.remove("slot").unwrap();

        let loaded: Option<u32> = store.load("slot").unwrap();
        assert!(loaded.is_none());
    }
}
