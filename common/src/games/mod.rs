mod session_rng;
mod sink;

pub mod snake;
pub mod tictactoe;

pub use session_rng::SessionRng;
pub use sink::{GameOverReport, GameSink, StateUpdate};
