mod config;
mod snake_config;
mod tictactoe_config;

pub use config::{Config, get_config_manager};
pub use snake_config::SnakeConfig;
pub use tictactoe_config::TicTacToeConfig;
