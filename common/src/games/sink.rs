use std::future::Future;

use crate::games::snake::{SnakeGameOverReport, SnakeSnapshot};
use crate::games::tictactoe::{TicTacToeRoundReport, TicTacToeSnapshot};

#[derive(Clone, Debug)]
pub enum StateUpdate {
    Snake(SnakeSnapshot),
    TicTacToe(TicTacToeSnapshot),
}

#[derive(Clone, Debug)]
pub enum GameOverReport {
    Snake(SnakeGameOverReport),
    TicTacToe(TicTacToeRoundReport),
}

/// Presentation side of a session: receives an immutable snapshot after
/// every observable state change, and a report when a game ends. The
/// renderer draws the latest snapshot at its own frame rate; it is never
/// called back by the session.
pub trait GameSink: Send + Sync + Clone + 'static {
    fn push_state(&self, update: StateUpdate) -> impl Future<Output = ()> + Send;

    fn push_game_over(&self, report: GameOverReport) -> impl Future<Output = ()> + Send;
}
