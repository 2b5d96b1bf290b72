//! High score persistence seam
//!
//! The session reads the stored high score once at construction and writes
//! only when a run beats it. Storage trouble is never fatal: reads fall back
//! to the default and writes degrade to a warning.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Integer key-value persistence capability
pub trait ScoreStore {
    /// Read a stored value, falling back to `default` when absent
    fn get_int(&self, key: &str, default: u32) -> u32;
    /// Store a value under `key`
    fn put_int(&mut self, key: &str, value: u32);
}

/// In-memory store for tests and throwaway runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get_int(&self, key: &str, default: u32) -> u32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn put_int(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
    }
}

/// File-backed store: a JSON map written through on every `put_int`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, u32>,
}

impl JsonFileStore {
    /// Open the store at the platform data directory
    /// (e.g. `~/.local/share/pixel-dash/scores.json` on Linux)
    pub fn open_default() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pixel-dash");
        Self::open(dir.join("scores.json"))
    }

    /// Open the store at an explicit path, loading existing values
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(values) => {
                    log::info!("loaded score store from {}", path.display());
                    values
                }
                Err(err) => {
                    log::warn!("ignoring corrupt score store {}: {err}", path.display());
                    HashMap::new()
                }
            },
            Err(_) => {
                log::info!("no score store at {}, starting fresh", path.display());
                HashMap::new()
            }
        };
        Self { path, values }
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::warn!("cannot create {}: {err}", parent.display());
                return;
            }
        }
        match serde_json::to_string_pretty(&self.values) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    log::warn!("cannot write {}: {err}", self.path.display());
                }
            }
            Err(err) => log::warn!("cannot serialize score store: {err}"),
        }
    }
}

impl ScoreStore for JsonFileStore {
    fn get_int(&self, key: &str, default: u32) -> u32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn put_int(&mut self, key: &str, value: u32) {
        self.values.insert(key.to_string(), value);
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_int("highscore", 0), 0);
        store.put_int("highscore", 350);
        assert_eq!(store.get_int("highscore", 0), 350);
    }

    #[test]
    fn test_memory_store_default_per_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get_int("missing", 42), 42);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let path = std::env::temp_dir().join(format!(
            "pixel-dash-store-test-{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let mut store = JsonFileStore::open(path.clone());
        store.put_int("highscore", 300);
        drop(store);

        let reopened = JsonFileStore::open(path.clone());
        assert_eq!(reopened.get_int("highscore", 0), 300);
        let _ = fs::remove_file(&path);
    }
}
