use serde::{Deserialize, Serialize};

use crate::model::game_state::GameState;

pub const SAVE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSave {
    pub version: u32,
    pub state: GameState,
}

impl GameSave {
    pub fn new(state: GameState) -> Self {
        Self {
            version: SAVE_VERSION,
            state,
        }
    }
}
