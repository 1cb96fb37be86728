use std::fs;
use std::path::PathBuf;

use crate::model::game_save::GameSave;

/// Durable whole-state persistence. Loaded once at startup; saved after
/// every applied transition. Writes are best-effort: a failed save costs
/// durability, never in-memory correctness.
pub trait SaveStore: Send {
    fn load(&self) -> Option<GameSave>;
    fn save(&self, save: &GameSave);
}

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Save file in the platform data directory.
    pub fn in_data_dir() -> Self {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("hashpals");
        fs::create_dir_all(&path).ok();
        path.push("save.json");
        Self { path }
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self) -> Option<GameSave> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    fn save(&self, save: &GameSave) {
        if let Ok(json) = serde_json::to_string_pretty(save) {
            let _ = fs::write(&self.path, json);
        }
    }
}

#[cfg(test)]
pub mod memory {
    use std::sync::{Arc, Mutex};

    use super::SaveStore;
    use crate::model::game_save::GameSave;

    /// Test double with a shared slot so assertions can inspect what the
    /// engine persisted.
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        slot: Arc<Mutex<Option<GameSave>>>,
    }

    impl MemoryStore {
        pub fn saved(&self) -> Option<GameSave> {
            self.slot.lock().unwrap().clone()
        }

        pub fn preload(&self, save: GameSave) {
            *self.slot.lock().unwrap() = Some(save);
        }
    }

    impl SaveStore for MemoryStore {
        fn load(&self) -> Option<GameSave> {
            self.slot.lock().unwrap().clone()
        }

        fn save(&self, save: &GameSave) {
            *self.slot.lock().unwrap() = Some(save.clone());
        }
    }
}
