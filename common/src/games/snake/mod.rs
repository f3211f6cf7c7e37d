mod game_state;
mod session;
mod settings;
mod snake;
mod types;

pub use game_state::{SnakeGameState, TickOutcome};
pub use session::{SnakeCommand, SnakeGameOverReport, SnakeSession, SnakeSnapshot};
pub use settings::SnakeSessionSettings;
pub use snake::Snake;
pub use types::{DeathReason, Direction, FieldSize, GameStatus, Point};
