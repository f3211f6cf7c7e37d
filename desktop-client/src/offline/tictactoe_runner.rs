use common::games::tictactoe::{TicTacToeCommand, TicTacToeSession};
use common::log;
use tokio::sync::mpsc;

use crate::config::Config;
use crate::state::{AppState, ClientCommand, MenuCommand, SharedState};

use super::LocalSink;

pub async fn run_tictactoe_game(
    config: &Config,
    shared_state: &SharedState,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
) {
    let settings = config.tictactoe.to_session_settings();
    let sink = LocalSink::new(shared_state.clone());

    shared_state.set_state(AppState::InTicTacToe { snapshot: None });

    let (session_tx, session_rx) = mpsc::unbounded_channel();
    let mut game_handle =
        tokio::spawn(async move { TicTacToeSession::run(&settings, session_rx, sink).await });

    loop {
        tokio::select! {
            result = &mut game_handle => {
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        log!("[client] tic-tac-toe session failed: {}", e);
                        shared_state.set_error(e);
                    }
                    Err(e) => {
                        log!("[client] tic-tac-toe session task died: {}", e);
                    }
                }
                break;
            }
            command = command_rx.recv() => {
                match command {
                    Some(ClientCommand::TicTacToe(game_command)) => {
                        let _ = session_tx.send(game_command);
                    }
                    Some(ClientCommand::Menu(MenuCommand::LeaveGame)) => {
                        let _ = session_tx.send(TicTacToeCommand::Leave);
                    }
                    Some(_) => {}
                    None => {
                        let _ = session_tx.send(TicTacToeCommand::Leave);
                        let _ = (&mut game_handle).await;
                        break;
                    }
                }
            }
        }
    }
}
