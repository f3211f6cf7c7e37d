use tokio::sync::mpsc;

use crate::config::Config;
use crate::state::{AppState, ClientCommand, MenuCommand, SharedState};

use super::snake_runner::run_snake_game;
use super::tictactoe_runner::run_tictactoe_game;

/// Task on the game runtime thread: waits in the menu for a game choice,
/// hands the command stream to that game's runner until the player
/// leaves, then returns to the menu.
pub async fn local_game_task(
    config: Config,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    loop {
        let Some(command) = command_rx.recv().await else {
            break;
        };

        match command {
            ClientCommand::Menu(MenuCommand::PlaySnake) => {
                run_snake_game(&config, &shared_state, &mut command_rx).await;
                shared_state.set_state(AppState::Menu);
            }
            ClientCommand::Menu(MenuCommand::PlayTicTacToe) => {
                run_tictactoe_game(&config, &shared_state, &mut command_rx).await;
                shared_state.set_state(AppState::Menu);
            }
            _ => {}
        }
    }
}
