pub mod game;
mod menu;

use eframe::egui;
use tokio::sync::mpsc;

use crate::state::{AppState, ClientCommand, SharedState};
use game::{SnakeView, TicTacToeView};

/// Scoreboard clock, "mm : ss".
pub fn format_time(total_seconds: u64) -> String {
    format!("{:02} : {:02}", total_seconds / 60, total_seconds % 60)
}

pub struct ToyboxApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    snake_view: SnakeView,
    tictactoe_view: TicTacToeView,
}

impl ToyboxApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            snake_view: SnakeView::default(),
            tictactoe_view: TicTacToeView::default(),
        }
    }
}

impl eframe::App for ToyboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(error) = self.shared_state.get_error() {
            egui::Window::new("Error")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.shared_state.clear_error();
                    }
                });
        }

        let current_state = self.shared_state.get_state();

        egui::CentralPanel::default().show(ctx, |ui| match current_state {
            AppState::Menu => {
                menu::render_menu(ui, &self.command_tx);
            }
            AppState::InSnakeGame {
                snapshot,
                last_report,
            } => {
                self.snake_view.render(
                    ui,
                    ctx,
                    snapshot.as_ref(),
                    last_report.as_ref(),
                    &self.command_tx,
                    &self.shared_state,
                );
            }
            AppState::InTicTacToe { snapshot } => {
                self.tictactoe_view.render(
                    ui,
                    snapshot.as_ref(),
                    &self.command_tx,
                    &self.shared_state,
                );
            }
        });

        // Redraw every display frame regardless of simulation activity, so
        // the last known state stays on screen even while paused.
        ctx.request_repaint();
    }
}
