mod snake;
mod tictactoe;

pub use snake::SnakeView;
pub use tictactoe::TicTacToeView;
