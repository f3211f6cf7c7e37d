use std::sync::{Arc, Mutex};

use ringbuffer::{AllocRingBuffer, RingBuffer};

use common::games::snake::{SnakeCommand, SnakeGameOverReport, SnakeSnapshot};
use common::games::tictactoe::{TicTacToeCommand, TicTacToeSnapshot};

use crate::constants::EVENT_LOG_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    PlaySnake,
    PlayTicTacToe,
    LeaveGame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientCommand {
    Menu(MenuCommand),
    Snake(SnakeCommand),
    TicTacToe(TicTacToeCommand),
}

#[derive(Clone)]
pub enum AppState {
    Menu,
    InSnakeGame {
        snapshot: Option<SnakeSnapshot>,
        last_report: Option<SnakeGameOverReport>,
    },
    InTicTacToe {
        snapshot: Option<TicTacToeSnapshot>,
    },
}

/// State shared between the game task (writer) and the egui thread
/// (reader). The UI repaints from the latest snapshot every display
/// frame, whatever the simulation is doing.
pub struct SharedState {
    state: Arc<Mutex<AppState>>,
    event_log: Arc<Mutex<AllocRingBuffer<String>>>,
    error: Arc<Mutex<Option<String>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(AppState::Menu)),
            event_log: Arc::new(Mutex::new(AllocRingBuffer::new(EVENT_LOG_SIZE))),
            error: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_state(&self, state: AppState) {
        *self.state.lock().unwrap() = state;
    }

    pub fn get_state(&self) -> AppState {
        self.state.lock().unwrap().clone()
    }

    pub fn update_snake_snapshot(&self, new_snapshot: SnakeSnapshot) {
        let mut state = self.state.lock().unwrap();
        if let AppState::InSnakeGame { snapshot, .. } = &mut *state {
            *snapshot = Some(new_snapshot);
        }
    }

    pub fn set_snake_report(&self, report: SnakeGameOverReport) {
        let mut state = self.state.lock().unwrap();
        if let AppState::InSnakeGame { last_report, .. } = &mut *state {
            *last_report = Some(report);
        }
    }

    pub fn update_tictactoe_snapshot(&self, new_snapshot: TicTacToeSnapshot) {
        let mut state = self.state.lock().unwrap();
        if let AppState::InTicTacToe { snapshot } = &mut *state {
            *snapshot = Some(new_snapshot);
        }
    }

    pub fn add_event(&self, event: String) {
        self.event_log.lock().unwrap().enqueue(event);
    }

    pub fn events(&self) -> Vec<String> {
        self.event_log.lock().unwrap().iter().cloned().collect()
    }

    pub fn set_error(&self, error: String) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.lock().unwrap().clone()
    }

    pub fn clear_error(&self) {
        *self.error.lock().unwrap() = None;
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            event_log: Arc::clone(&self.event_log),
            error: Arc::clone(&self.error),
        }
    }
}
