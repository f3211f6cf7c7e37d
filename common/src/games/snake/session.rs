use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use crate::games::{GameOverReport, GameSink, SessionRng, StateUpdate};
use crate::highscore::HighScoreStore;
use crate::log;

use super::game_state::SnakeGameState;
use super::settings::SnakeSessionSettings;
use super::types::{DeathReason, Direction, FieldSize, GameStatus, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    TogglePause,
    Restart,
    Leave,
}

#[derive(Clone, Debug)]
pub struct SnakeSnapshot {
    pub tick: u64,
    pub cells: Vec<Point>,
    pub food: Point,
    pub field_size: FieldSize,
    pub status: GameStatus,
    pub score: u32,
    pub high_score: u32,
    pub elapsed_seconds: u64,
    pub heading: Option<Direction>,
    pub death_reason: Option<DeathReason>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnakeGameOverReport {
    pub final_score: u32,
    pub high_score: u32,
    pub is_new_high_score: bool,
    pub death_reason: DeathReason,
    pub elapsed_seconds: u64,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Runs one snake session to completion. The loop is driven by three
    /// sources: the fixed tick interval, a one-second play-time interval,
    /// and the command channel. Every branch runs to completion before
    /// the next is polled, so ticks never overlap and pausing is
    /// race-free. Returns `Err` only on the fully-occupied-grid invariant
    /// violation.
    pub async fn run(
        settings: &SnakeSessionSettings,
        seed: u64,
        high_score_store: impl HighScoreStore,
        mut command_rx: mpsc::UnboundedReceiver<SnakeCommand>,
        sink: impl GameSink,
    ) -> Result<(), String> {
        settings.validate()?;

        let field_size = settings.field_size();
        let mut rng = SessionRng::new(seed);
        let mut game_state = SnakeGameState::new(field_size, &mut rng)?;
        let mut high_score = high_score_store.load();
        let mut tick_count: u64 = 0;

        let mut ticker = interval(settings.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut play_seconds = interval(Duration::from_secs(1));
        play_seconds.set_missed_tick_behavior(MissedTickBehavior::Delay);

        log!("[snake] session started (seed {})", rng.seed());
        push_snapshot(&sink, &game_state, tick_count, high_score).await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if game_state.status != GameStatus::Running {
                        continue;
                    }
                    let outcome = game_state.tick(&mut rng)?;
                    if !outcome.moved && outcome.death.is_none() {
                        continue;
                    }
                    tick_count += 1;

                    if let Some(reason) = outcome.death {
                        let is_new_high_score = game_state.score > high_score;
                        if is_new_high_score {
                            high_score = game_state.score;
                            high_score_store.store(high_score);
                            log!("[snake] new high score: {}", high_score);
                        }
                        push_snapshot(&sink, &game_state, tick_count, high_score).await;
                        sink.push_game_over(GameOverReport::Snake(SnakeGameOverReport {
                            final_score: game_state.score,
                            high_score,
                            is_new_high_score,
                            death_reason: reason,
                            elapsed_seconds: game_state.elapsed_seconds,
                        }))
                        .await;
                    } else {
                        push_snapshot(&sink, &game_state, tick_count, high_score).await;
                    }
                }
                _ = play_seconds.tick() => {
                    if game_state.advance_second() {
                        push_snapshot(&sink, &game_state, tick_count, high_score).await;
                    }
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    match command {
                        SnakeCommand::Turn(direction) => {
                            let was_waiting = game_state.status == GameStatus::NotStarted;
                            game_state.request_direction(direction);
                            if was_waiting && game_state.status == GameStatus::Running {
                                // First input of the session: movement and
                                // play time both measure from this moment.
                                ticker.reset();
                                play_seconds.reset();
                                push_snapshot(&sink, &game_state, tick_count, high_score).await;
                            }
                        }
                        SnakeCommand::TogglePause => match game_state.status {
                            GameStatus::Running => {
                                game_state.pause();
                                push_snapshot(&sink, &game_state, tick_count, high_score).await;
                            }
                            GameStatus::Paused => {
                                game_state.resume();
                                // Fresh timing reference: time spent paused
                                // is never replayed as missed ticks.
                                ticker.reset();
                                play_seconds.reset();
                                push_snapshot(&sink, &game_state, tick_count, high_score).await;
                            }
                            _ => {}
                        },
                        SnakeCommand::Restart => {
                            if game_state.status != GameStatus::Over {
                                continue;
                            }
                            game_state = SnakeGameState::new(field_size, &mut rng)?;
                            tick_count = 0;
                            ticker.reset();
                            play_seconds.reset();
                            log!("[snake] restarted");
                            push_snapshot(&sink, &game_state, tick_count, high_score).await;
                        }
                        SnakeCommand::Leave => break,
                    }
                }
            }
        }

        log!("[snake] session ended, final score {}", game_state.score);
        Ok(())
    }
}

async fn push_snapshot(
    sink: &impl GameSink,
    state: &SnakeGameState,
    tick: u64,
    high_score: u32,
) {
    let snapshot = SnakeSnapshot {
        tick,
        cells: state.snake.body.iter().copied().collect(),
        food: state.food,
        field_size: state.field_size,
        status: state.status,
        score: state.score,
        high_score,
        elapsed_seconds: state.elapsed_seconds,
        heading: state.snake.heading,
        death_reason: state.death_reason,
    };
    sink.push_state(StateUpdate::Snake(snapshot)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::sleep;

    use crate::highscore::InMemoryHighScoreStore;

    #[derive(Clone, Default)]
    struct RecordingSink {
        snapshots: Arc<Mutex<Vec<SnakeSnapshot>>>,
        reports: Arc<Mutex<Vec<SnakeGameOverReport>>>,
    }

    impl RecordingSink {
        fn latest(&self) -> SnakeSnapshot {
            self.snapshots
                .lock()
                .unwrap()
                .last()
                .expect("No snapshot published yet")
                .clone()
        }

        fn reports(&self) -> Vec<SnakeGameOverReport> {
            self.reports.lock().unwrap().clone()
        }
    }

    impl GameSink for RecordingSink {
        async fn push_state(&self, update: StateUpdate) {
            if let StateUpdate::Snake(snapshot) = update {
                self.snapshots.lock().unwrap().push(snapshot);
            }
        }

        async fn push_game_over(&self, report: GameOverReport) {
            if let GameOverReport::Snake(report) = report {
                self.reports.lock().unwrap().push(report);
            }
        }
    }

    #[derive(Clone)]
    struct TestHighScoreStore {
        initial: u32,
        stored: Arc<Mutex<Option<u32>>>,
    }

    impl TestHighScoreStore {
        fn new(initial: u32) -> Self {
            Self {
                initial,
                stored: Arc::new(Mutex::new(None)),
            }
        }

        fn stored(&self) -> Option<u32> {
            *self.stored.lock().unwrap()
        }
    }

    impl HighScoreStore for TestHighScoreStore {
        fn load(&self) -> u32 {
            self.stored.lock().unwrap().unwrap_or(self.initial)
        }

        fn store(&self, value: u32) {
            *self.stored.lock().unwrap() = Some(value);
        }
    }

    fn spawn_session(
        store: impl HighScoreStore,
    ) -> (mpsc::UnboundedSender<SnakeCommand>, RecordingSink) {
        let settings = SnakeSessionSettings::default();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let sink = RecordingSink::default();
        let sink_clone = sink.clone();
        tokio::spawn(async move {
            SnakeSession::run(&settings, 7, store, command_rx, sink_clone)
                .await
                .unwrap();
        });
        (command_tx, sink)
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_advances_before_first_input() {
        let (_command_tx, sink) = spawn_session(InMemoryHighScoreStore::default());

        sleep(Duration::from_secs(3)).await;

        let snapshot = sink.latest();
        assert_eq!(snapshot.status, GameStatus::NotStarted);
        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.elapsed_seconds, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_input_starts_game_and_timer() {
        let (command_tx, sink) = spawn_session(InMemoryHighScoreStore::default());

        command_tx.send(SnakeCommand::Turn(Direction::Up)).unwrap();
        sleep(Duration::from_millis(1050)).await;

        let snapshot = sink.latest();
        assert_eq!(snapshot.status, GameStatus::Running);
        assert_eq!(snapshot.heading, Some(Direction::Up));
        assert_eq!(snapshot.elapsed_seconds, 1);
        assert_eq!(snapshot.tick, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_freezes_and_resume_does_not_replay_ticks() {
        let (command_tx, sink) = spawn_session(InMemoryHighScoreStore::default());

        command_tx
            .send(SnakeCommand::Turn(Direction::Right))
            .unwrap();
        sleep(Duration::from_millis(650)).await;

        let before_pause = sink.latest();
        assert_eq!(before_pause.tick, 3);

        command_tx.send(SnakeCommand::TogglePause).unwrap();
        sleep(Duration::from_secs(10)).await;

        let while_paused = sink.latest();
        assert_eq!(while_paused.status, GameStatus::Paused);
        assert_eq!(while_paused.tick, 3);
        assert_eq!(while_paused.elapsed_seconds, before_pause.elapsed_seconds);
        assert_eq!(while_paused.cells, before_pause.cells);

        command_tx.send(SnakeCommand::TogglePause).unwrap();
        sleep(Duration::from_millis(210)).await;

        // Exactly one fresh tick, not a burst of ten seconds' worth.
        let after_resume = sink.latest();
        assert_eq!(after_resume.status, GameStatus::Running);
        assert_eq!(after_resume.tick, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_direction_buffered_while_paused_applies_after_resume() {
        let (command_tx, sink) = spawn_session(InMemoryHighScoreStore::default());

        command_tx
            .send(SnakeCommand::Turn(Direction::Right))
            .unwrap();
        sleep(Duration::from_millis(250)).await;
        assert_eq!(sink.latest().cells[0], Point::new(11, 10));

        command_tx.send(SnakeCommand::TogglePause).unwrap();
        command_tx.send(SnakeCommand::Turn(Direction::Down)).unwrap();
        sleep(Duration::from_secs(5)).await;
        assert_eq!(sink.latest().cells[0], Point::new(11, 10));

        command_tx.send(SnakeCommand::TogglePause).unwrap();
        sleep(Duration::from_millis(210)).await;

        let snapshot = sink.latest();
        assert_eq!(snapshot.heading, Some(Direction::Down));
        assert_eq!(snapshot.cells[0], Point::new(11, 11));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wall_collision_reports_game_over_and_high_score() {
        let store = TestHighScoreStore::new(5);
        let (command_tx, sink) = spawn_session(store.clone());

        command_tx.send(SnakeCommand::Turn(Direction::Left)).unwrap();
        // Head starts at x = 10; the wall stops the run after at most
        // eleven ticks.
        sleep(Duration::from_millis(2300)).await;

        let reports = sink.reports();
        assert_eq!(reports.len(), 1);
        let report = reports[0];
        assert_eq!(report.death_reason, DeathReason::WallCollision);
        assert_eq!(sink.latest().status, GameStatus::Over);

        // The stored high score moves only when beaten.
        assert_eq!(report.is_new_high_score, report.final_score > 5);
        if report.is_new_high_score {
            assert_eq!(store.stored(), Some(report.final_score));
            assert_eq!(report.high_score, report.final_score);
        } else {
            assert_eq!(store.stored(), None);
            assert_eq!(report.high_score, 5);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_resets_session_after_game_over() {
        let (command_tx, sink) = spawn_session(InMemoryHighScoreStore::default());

        command_tx.send(SnakeCommand::Turn(Direction::Left)).unwrap();
        sleep(Duration::from_millis(2300)).await;
        assert_eq!(sink.latest().status, GameStatus::Over);

        command_tx.send(SnakeCommand::Restart).unwrap();
        sleep(Duration::from_millis(50)).await;

        let snapshot = sink.latest();
        assert_eq!(snapshot.status, GameStatus::NotStarted);
        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.elapsed_seconds, 0);
        assert_eq!(snapshot.cells, vec![Point::new(10, 10)]);
        assert_eq!(snapshot.heading, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_is_ignored_while_running() {
        let (command_tx, sink) = spawn_session(InMemoryHighScoreStore::default());

        command_tx
            .send(SnakeCommand::Turn(Direction::Right))
            .unwrap();
        sleep(Duration::from_millis(450)).await;

        command_tx.send(SnakeCommand::Restart).unwrap();
        sleep(Duration::from_millis(50)).await;

        let snapshot = sink.latest();
        assert_eq!(snapshot.status, GameStatus::Running);
        assert_eq!(snapshot.tick, 2);
    }
}
