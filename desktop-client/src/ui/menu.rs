use eframe::egui;
use tokio::sync::mpsc;

use crate::state::{ClientCommand, MenuCommand};

pub fn render_menu(ui: &mut egui::Ui, command_tx: &mpsc::UnboundedSender<ClientCommand>) {
    ui.heading("Toybox");
    ui.label("A small arcade of single-screen toys. Pick one:");
    ui.separator();

    if ui.button("🐍 Snake").clicked() {
        let _ = command_tx.send(ClientCommand::Menu(MenuCommand::PlaySnake));
    }

    if ui.button("✖ Tic-Tac-Toe").clicked() {
        let _ = command_tx.send(ClientCommand::Menu(MenuCommand::PlayTicTacToe));
    }
}
