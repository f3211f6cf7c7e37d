mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use game_state::TicTacToeGameState;
pub use session::{
    RoundTallies, TicTacToeCommand, TicTacToeRoundReport, TicTacToeSession, TicTacToeSnapshot,
};
pub use settings::TicTacToeSessionSettings;
pub use types::{Mark, Position, RoundStatus};
pub use win_detector::check_win_with_line;
