use common::config::{ConfigManager, Validate};
use serde::{Deserialize, Serialize};

use super::{SnakeConfig, TicTacToeConfig};

const CONFIG_FILE_NAME: &str = "toybox_config.yaml";
const HIGH_SCORE_FILE_NAME: &str = "toybox_high_score.yaml";

fn path_next_to_executable(file_name: &str) -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name).to_string_lossy().into_owned();
    }
    file_name.to_string()
}

pub fn get_config_manager(path_override: Option<&str>) -> ConfigManager<Config> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&path_next_to_executable(CONFIG_FILE_NAME)),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub snake: SnakeConfig,
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub high_score_file: Option<String>,
}

impl Config {
    pub fn high_score_path(&self) -> String {
        match &self.high_score_file {
            Some(path) => path.clone(),
            None => path_next_to_executable(HIGH_SCORE_FILE_NAME),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.tictactoe.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snake: SnakeConfig::default(),
            tictactoe: TicTacToeConfig::default(),
            high_score_file: None,
        }
    }
}
