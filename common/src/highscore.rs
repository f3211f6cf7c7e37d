use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::log;

/// Storage for the single value that outlives a game session: the snake
/// high score. Both operations are infallible from the caller's point of
/// view; a broken backing store degrades to an in-memory default of 0.
pub trait HighScoreStore: Send + Sync + 'static {
    fn load(&self) -> u32;
    fn store(&self, value: u32);
}

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

pub struct FileHighScoreStore {
    file_path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(file_path: String) -> Self {
        Self {
            file_path: PathBuf::from(file_path),
        }
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        if !self.file_path.exists() {
            return 0;
        }
        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) => {
                log!("Failed to read high score file {}: {}", self.file_path.display(), e);
                return 0;
            }
        };
        match serde_yaml_ng::from_str::<HighScoreRecord>(&content) {
            Ok(record) => record.high_score,
            Err(e) => {
                log!("Unparseable high score file {}: {}", self.file_path.display(), e);
                0
            }
        }
    }

    fn store(&self, value: u32) {
        let record = HighScoreRecord { high_score: value };
        let content = match serde_yaml_ng::to_string(&record) {
            Ok(content) => content,
            Err(e) => {
                log!("Failed to serialize high score: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.file_path, content) {
            log!("Failed to write high score file {}: {}", self.file_path.display(), e);
        }
    }
}

/// Keeps the high score for the lifetime of the process only. Used when no
/// usable file location exists, and by tests.
pub struct InMemoryHighScoreStore {
    value: Mutex<u32>,
}

impl InMemoryHighScoreStore {
    pub fn new(initial: u32) -> Self {
        Self {
            value: Mutex::new(initial),
        }
    }
}

impl Default for InMemoryHighScoreStore {
    fn default() -> Self {
        Self::new(0)
    }
}

impl HighScoreStore for InMemoryHighScoreStore {
    fn load(&self) -> u32 {
        *self.value.lock().unwrap()
    }

    fn store(&self, value: u32) {
        *self.value.lock().unwrap() = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("toybox_test_high_score_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = FileHighScoreStore::new("this_file_does_not_exist.yaml".to_string());
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_unparseable_file_loads_zero() {
        let path = temp_file_path();
        std::fs::write(&path, "not: [valid: high: score").unwrap();

        let store = FileHighScoreStore::new(path.clone());
        assert_eq!(store.load(), 0);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_store_then_load_round_trips() {
        let path = temp_file_path();
        let store = FileHighScoreStore::new(path.clone());

        store.store(42);
        assert_eq!(store.load(), 42);

        std::fs::remove_file(&path).unwrap();
    }
}
