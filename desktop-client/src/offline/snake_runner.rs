use common::games::snake::{SnakeCommand, SnakeSession};
use common::highscore::FileHighScoreStore;
use common::log;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::state::{AppState, ClientCommand, MenuCommand, SharedState};

use super::LocalSink;

pub async fn run_snake_game(
    config: &Config,
    shared_state: &SharedState,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
) {
    let settings = config.snake.to_session_settings();
    let high_score_store = FileHighScoreStore::new(config.high_score_path());
    let sink = LocalSink::new(shared_state.clone());
    let seed: u64 = rand::random();

    shared_state.set_state(AppState::InSnakeGame {
        snapshot: None,
        last_report: None,
    });

    let (session_tx, session_rx) = mpsc::unbounded_channel();
    let mut game_handle = tokio::spawn(async move {
        SnakeSession::run(&settings, seed, high_score_store, session_rx, sink).await
    });

    loop {
        tokio::select! {
            result = &mut game_handle => {
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        log!("[client] snake session failed: {}", e);
                        shared_state.set_error(e);
                    }
                    Err(e) => {
                        log!("[client] snake session task died: {}", e);
                    }
                }
                break;
            }
            command = command_rx.recv() => {
                match command {
                    Some(ClientCommand::Snake(snake_command)) => {
                        let _ = session_tx.send(snake_command);
                    }
                    Some(ClientCommand::Menu(MenuCommand::LeaveGame)) => {
                        let _ = session_tx.send(SnakeCommand::Leave);
                    }
                    Some(_) => {}
                    None => {
                        // UI is gone; wind the session down and bail out.
                        let _ = session_tx.send(SnakeCommand::Leave);
                        let _ = (&mut game_handle).await;
                        break;
                    }
                }
            }
        }
    }
}
