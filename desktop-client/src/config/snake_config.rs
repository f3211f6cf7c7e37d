use std::time::Duration;

use common::config::Validate;
use common::games::snake::SnakeSessionSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
}

impl SnakeConfig {
    pub fn to_session_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            field_width: self.field_width as usize,
            field_height: self.field_height as usize,
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
        }
    }
}

impl Validate for SnakeConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_session_settings().validate()
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            tick_interval_ms: 200,
        }
    }
}
