use common::config::Validate;
use common::games::tictactoe::TicTacToeSessionSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub win_count: u32,
}

impl TicTacToeConfig {
    pub fn to_session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            field_width: self.field_width as usize,
            field_height: self.field_height as usize,
            win_count: self.win_count as usize,
        }
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_session_settings().validate()
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            field_width: 3,
            field_height: 3,
            win_count: 3,
        }
    }
}
