use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use crate::games::{GameOverReport, GameSink, StateUpdate};
use crate::log;

use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{Mark, Position, RoundStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicTacToeCommand {
    Place { x: usize, y: usize },
    ResetBoard,
    ResetAll,
    Leave,
}

/// Round outcomes accumulated across board resets, for the scoreboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundTallies {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

#[derive(Clone, Debug)]
pub struct TicTacToeSnapshot {
    pub board: Vec<Vec<Mark>>,
    pub width: usize,
    pub height: usize,
    pub win_count: usize,
    pub current_mark: Mark,
    pub status: RoundStatus,
    pub last_move: Option<Position>,
    pub winning_line: Option<Vec<Position>>,
    pub moves: u32,
    pub elapsed_seconds: u64,
    pub tallies: RoundTallies,
}

#[derive(Clone, Debug)]
pub struct TicTacToeRoundReport {
    pub status: RoundStatus,
    pub winning_line: Option<Vec<Position>>,
    pub moves: u32,
    pub elapsed_seconds: u64,
    pub tallies: RoundTallies,
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    pub async fn run(
        settings: &TicTacToeSessionSettings,
        mut command_rx: mpsc::UnboundedReceiver<TicTacToeCommand>,
        sink: impl GameSink,
    ) -> Result<(), String> {
        settings.validate()?;

        let mut game_state = TicTacToeGameState::new(
            settings.field_width,
            settings.field_height,
            settings.win_count,
        );
        let mut tallies = RoundTallies::default();

        let mut round_seconds = interval(Duration::from_secs(1));
        round_seconds.set_missed_tick_behavior(MissedTickBehavior::Delay);

        log!("[tictactoe] session started");
        push_snapshot(&sink, &game_state, tallies).await;

        loop {
            tokio::select! {
                _ = round_seconds.tick() => {
                    if game_state.advance_second() {
                        push_snapshot(&sink, &game_state, tallies).await;
                    }
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    match command {
                        TicTacToeCommand::Place { x, y } => {
                            let is_first_move = game_state.moves == 0;
                            match game_state.place_mark(x, y) {
                                Ok(()) => {
                                    if is_first_move {
                                        // The round clock measures from the
                                        // first mark.
                                        round_seconds.reset();
                                    }
                                    if game_state.status.is_over() {
                                        match game_state.status {
                                            RoundStatus::XWon => tallies.x_wins += 1,
                                            RoundStatus::OWon => tallies.o_wins += 1,
                                            RoundStatus::Draw => tallies.draws += 1,
                                            RoundStatus::InProgress => {}
                                        }
                                        log!(
                                            "[tictactoe] round over: {:?} after {} moves",
                                            game_state.status,
                                            game_state.moves
                                        );
                                        push_snapshot(&sink, &game_state, tallies).await;
                                        sink.push_game_over(GameOverReport::TicTacToe(
                                            TicTacToeRoundReport {
                                                status: game_state.status,
                                                winning_line: game_state.winning_line.clone(),
                                                moves: game_state.moves,
                                                elapsed_seconds: game_state.elapsed_seconds,
                                                tallies,
                                            },
                                        ))
                                        .await;
                                    } else {
                                        push_snapshot(&sink, &game_state, tallies).await;
                                    }
                                }
                                Err(e) => {
                                    log!("[tictactoe] rejected move at ({}, {}): {}", x, y, e);
                                }
                            }
                        }
                        TicTacToeCommand::ResetBoard => {
                            game_state.reset_board();
                            push_snapshot(&sink, &game_state, tallies).await;
                        }
                        TicTacToeCommand::ResetAll => {
                            game_state.reset_board();
                            tallies = RoundTallies::default();
                            push_snapshot(&sink, &game_state, tallies).await;
                        }
                        TicTacToeCommand::Leave => break,
                    }
                }
            }
        }

        log!("[tictactoe] session ended");
        Ok(())
    }
}

async fn push_snapshot(sink: &impl GameSink, state: &TicTacToeGameState, tallies: RoundTallies) {
    let snapshot = TicTacToeSnapshot {
        board: state.board.clone(),
        width: state.width,
        height: state.height,
        win_count: state.win_count,
        current_mark: state.current_mark,
        status: state.status,
        last_move: state.last_move,
        winning_line: state.winning_line.clone(),
        moves: state.moves,
        elapsed_seconds: state.elapsed_seconds,
        tallies,
    };
    sink.push_state(StateUpdate::TicTacToe(snapshot)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::sleep;

    #[derive(Clone, Default)]
    struct RecordingSink {
        snapshots: Arc<Mutex<Vec<TicTacToeSnapshot>>>,
        reports: Arc<Mutex<Vec<TicTacToeRoundReport>>>,
    }

    impl RecordingSink {
        fn latest(&self) -> TicTacToeSnapshot {
            self.snapshots
                .lock()
                .unwrap()
                .last()
                .expect("No snapshot published yet")
                .clone()
        }

        fn reports(&self) -> Vec<TicTacToeRoundReport> {
            self.reports.lock().unwrap().clone()
        }
    }

    impl GameSink for RecordingSink {
        async fn push_state(&self, update: StateUpdate) {
            if let StateUpdate::TicTacToe(snapshot) = update {
                self.snapshots.lock().unwrap().push(snapshot);
            }
        }

        async fn push_game_over(&self, report: GameOverReport) {
            if let GameOverReport::TicTacToe(report) = report {
                self.reports.lock().unwrap().push(report);
            }
        }
    }

    fn spawn_session() -> (mpsc::UnboundedSender<TicTacToeCommand>, RecordingSink) {
        let settings = TicTacToeSessionSettings::default();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let sink = RecordingSink::default();
        let sink_clone = sink.clone();
        tokio::spawn(async move {
            TicTacToeSession::run(&settings, command_rx, sink_clone)
                .await
                .unwrap();
        });
        (command_tx, sink)
    }

    fn play_x_win(command_tx: &mpsc::UnboundedSender<TicTacToeCommand>) {
        for &(x, y) in &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            command_tx.send(TicTacToeCommand::Place { x, y }).unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_clock_starts_with_first_mark() {
        let (command_tx, sink) = spawn_session();

        sleep(Duration::from_secs(5)).await;
        assert_eq!(sink.latest().elapsed_seconds, 0);

        command_tx
            .send(TicTacToeCommand::Place { x: 0, y: 0 })
            .unwrap();
        sleep(Duration::from_millis(2100)).await;

        let snapshot = sink.latest();
        assert_eq!(snapshot.elapsed_seconds, 2);
        assert_eq!(snapshot.moves, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_won_round_updates_tallies_and_reports() {
        let (command_tx, sink) = spawn_session();

        play_x_win(&command_tx);
        sleep(Duration::from_millis(10)).await;

        let reports = sink.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].status, RoundStatus::XWon);
        assert_eq!(reports[0].moves, 5);
        assert!(reports[0].winning_line.is_some());
        assert_eq!(sink.latest().tallies.x_wins, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tallies_survive_board_reset_but_not_full_reset() {
        let (command_tx, sink) = spawn_session();

        play_x_win(&command_tx);
        command_tx.send(TicTacToeCommand::ResetBoard).unwrap();
        sleep(Duration::from_millis(10)).await;

        let snapshot = sink.latest();
        assert_eq!(snapshot.tallies.x_wins, 1);
        assert_eq!(snapshot.moves, 0);
        assert_eq!(snapshot.status, RoundStatus::InProgress);
        assert_eq!(snapshot.board[0][0], Mark::Empty);

        command_tx.send(TicTacToeCommand::ResetAll).unwrap();
        sleep(Duration::from_millis(10)).await;

        assert_eq!(sink.latest().tallies, RoundTallies::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clock_stops_when_round_ends() {
        let (command_tx, sink) = spawn_session();

        play_x_win(&command_tx);
        sleep(Duration::from_millis(10)).await;
        let at_win = sink.latest().elapsed_seconds;

        sleep(Duration::from_secs(30)).await;
        assert_eq!(sink.latest().elapsed_seconds, at_win);
    }
}
