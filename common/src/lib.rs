pub mod config;
pub mod games;
pub mod highscore;
pub mod logger;
pub mod version;

pub use games::{GameOverReport, GameSink, SessionRng, StateUpdate};
pub use highscore::HighScoreStore;
