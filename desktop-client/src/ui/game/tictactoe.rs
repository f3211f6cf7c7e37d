use eframe::egui;
use tokio::sync::mpsc;

use common::games::tictactoe::{Mark, Position, RoundStatus, TicTacToeCommand, TicTacToeSnapshot};

use crate::state::{ClientCommand, MenuCommand, SharedState};
use crate::ui::format_time;

const CELL_SIZE: f32 = 64.0;

const X_COLOR: egui::Color32 = egui::Color32::from_rgb(0x64, 0xb5, 0xf6);
const O_COLOR: egui::Color32 = egui::Color32::from_rgb(0xff, 0xb7, 0x4d);
const WIN_COLOR: egui::Color32 = egui::Color32::from_rgb(0x81, 0xc7, 0x84);

#[derive(Default)]
pub struct TicTacToeView;

impl TicTacToeView {
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        snapshot: Option<&TicTacToeSnapshot>,
        command_tx: &mpsc::UnboundedSender<ClientCommand>,
        shared_state: &SharedState,
    ) {
        let Some(snapshot) = snapshot else {
            ui.heading("Starting tic-tac-toe...");
            ui.spinner();
            return;
        };

        ui.heading("Tic-Tac-Toe");
        ui.label(format!(
            "X wins: {}   O wins: {}   Draws: {}",
            snapshot.tallies.x_wins, snapshot.tallies.o_wins, snapshot.tallies.draws
        ));
        ui.label(format!(
            "Moves: {}   Time: {}",
            snapshot.moves,
            format_time(snapshot.elapsed_seconds)
        ));
        ui.label(status_line(snapshot));
        ui.separator();

        egui::Grid::new("tictactoe_board")
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for y in 0..snapshot.height {
                    for x in 0..snapshot.width {
                        self.render_cell(ui, snapshot, x, y, command_tx);
                    }
                    ui.end_row();
                }
            });

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("↻ Reset Board").clicked() {
                let _ = command_tx.send(ClientCommand::TicTacToe(TicTacToeCommand::ResetBoard));
            }
            if ui.button("🗑 Reset Scores").clicked() {
                let _ = command_tx.send(ClientCommand::TicTacToe(TicTacToeCommand::ResetAll));
            }
            if ui.button("🚪 Back to Menu").clicked() {
                let _ = command_tx.send(ClientCommand::Menu(MenuCommand::LeaveGame));
            }
        });

        ui.separator();
        ui.heading("Events:");
        egui::ScrollArea::vertical()
            .id_salt("tictactoe_events_scroll")
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for event in shared_state.events() {
                    ui.label(event);
                }
            });
    }

    fn render_cell(
        &self,
        ui: &mut egui::Ui,
        snapshot: &TicTacToeSnapshot,
        x: usize,
        y: usize,
        command_tx: &mpsc::UnboundedSender<ClientCommand>,
    ) {
        let mark = snapshot.board[y][x];
        let on_winning_line = snapshot
            .winning_line
            .as_ref()
            .is_some_and(|line| line.contains(&Position::new(x, y)));

        let (text, color) = match mark {
            Mark::X => ("X", if on_winning_line { WIN_COLOR } else { X_COLOR }),
            Mark::O => ("O", if on_winning_line { WIN_COLOR } else { O_COLOR }),
            Mark::Empty => (" ", egui::Color32::GRAY),
        };

        let button = egui::Button::new(egui::RichText::new(text).size(28.0).color(color))
            .min_size(egui::vec2(CELL_SIZE, CELL_SIZE));

        let enabled = mark == Mark::Empty && !snapshot.status.is_over();
        if ui.add_enabled(enabled, button).clicked() {
            let _ = command_tx.send(ClientCommand::TicTacToe(TicTacToeCommand::Place { x, y }));
        }
    }
}

fn status_line(snapshot: &TicTacToeSnapshot) -> String {
    match snapshot.status {
        RoundStatus::InProgress => {
            let mark = match snapshot.current_mark {
                Mark::X => "X",
                Mark::O => "O",
                Mark::Empty => "?",
            };
            format!("Player {} to move", mark)
        }
        RoundStatus::XWon => "Player X wins!".to_string(),
        RoundStatus::OWon => "Player O wins!".to_string(),
        RoundStatus::Draw => "It's a draw!".to_string(),
    }
}
