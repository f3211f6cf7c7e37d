use common::games::tictactoe::RoundStatus;
use common::games::{GameOverReport, GameSink, StateUpdate};

use crate::state::SharedState;

/// Bridges a session to the UI: snapshots land in the shared state the
/// egui thread paints from, reports become scoreboard events.
#[derive(Clone)]
pub struct LocalSink {
    shared_state: SharedState,
}

impl LocalSink {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameSink for LocalSink {
    async fn push_state(&self, update: StateUpdate) {
        match update {
            StateUpdate::Snake(snapshot) => {
                self.shared_state.update_snake_snapshot(snapshot);
            }
            StateUpdate::TicTacToe(snapshot) => {
                self.shared_state.update_tictactoe_snapshot(snapshot);
            }
        }
    }

    async fn push_game_over(&self, report: GameOverReport) {
        match report {
            GameOverReport::Snake(report) => {
                let message = if report.is_new_high_score {
                    format!(
                        "Snake: game over with {} points - new high score!",
                        report.final_score
                    )
                } else {
                    format!(
                        "Snake: game over with {} points (best: {})",
                        report.final_score, report.high_score
                    )
                };
                self.shared_state.add_event(message);
                self.shared_state.set_snake_report(report);
            }
            GameOverReport::TicTacToe(report) => {
                let message = match report.status {
                    RoundStatus::XWon => format!("Tic-tac-toe: X wins after {} moves", report.moves),
                    RoundStatus::OWon => format!("Tic-tac-toe: O wins after {} moves", report.moves),
                    RoundStatus::Draw => "Tic-tac-toe: round drawn".to_string(),
                    RoundStatus::InProgress => return,
                };
                self.shared_state.add_event(message);
            }
        }
    }
}
