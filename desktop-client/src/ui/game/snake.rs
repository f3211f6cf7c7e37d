use eframe::egui;
use tokio::sync::mpsc;

use common::games::snake::{
    DeathReason, Direction, GameStatus, SnakeCommand, SnakeGameOverReport, SnakeSnapshot,
};

use crate::state::{ClientCommand, MenuCommand, SharedState};
use crate::ui::format_time;

const PIXELS_PER_CELL: f32 = 24.0;

const BOARD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1b, 0x1f, 0x23);
const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4c, 0xaf, 0x50);
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xa5, 0xd6, 0xa7);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xe5, 0x39, 0x35);

#[derive(Default)]
pub struct SnakeView;

impl SnakeView {
    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        snapshot: Option<&SnakeSnapshot>,
        last_report: Option<&SnakeGameOverReport>,
        command_tx: &mpsc::UnboundedSender<ClientCommand>,
        shared_state: &SharedState,
    ) {
        self.handle_input(ctx, command_tx);

        let Some(snapshot) = snapshot else {
            ui.heading("Starting snake...");
            ui.spinner();
            return;
        };

        ui.heading("Snake");
        ui.label(format!(
            "Score: {}   Best: {}   Time: {}",
            snapshot.score,
            snapshot.high_score,
            format_time(snapshot.elapsed_seconds)
        ));
        ui.label(status_line(snapshot, last_report));
        ui.separator();

        self.paint_board(ui, snapshot);

        ui.separator();
        ui.horizontal(|ui| {
            match snapshot.status {
                GameStatus::Running => {
                    if ui.button("⏸ Pause").clicked() {
                        let _ = command_tx.send(ClientCommand::Snake(SnakeCommand::TogglePause));
                    }
                }
                GameStatus::Paused => {
                    if ui.button("▶ Resume").clicked() {
                        let _ = command_tx.send(ClientCommand::Snake(SnakeCommand::TogglePause));
                    }
                }
                GameStatus::Over => {
                    if ui.button("↻ Play Again").clicked() {
                        let _ = command_tx.send(ClientCommand::Snake(SnakeCommand::Restart));
                    }
                }
                GameStatus::NotStarted => {}
            }

            if ui.button("🚪 Back to Menu").clicked() {
                let _ = command_tx.send(ClientCommand::Menu(MenuCommand::LeaveGame));
            }
        });

        ui.separator();
        ui.heading("Events:");
        egui::ScrollArea::vertical()
            .id_salt("snake_events_scroll")
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for event in shared_state.events() {
                    ui.label(event);
                }
            });
    }

    fn paint_board(&self, ui: &mut egui::Ui, snapshot: &SnakeSnapshot) {
        let canvas_width = snapshot.field_size.width as f32 * PIXELS_PER_CELL;
        let canvas_height = snapshot.field_size.height as f32 * PIXELS_PER_CELL;

        let (response, painter) = ui.allocate_painter(
            egui::Vec2::new(canvas_width, canvas_height),
            egui::Sense::hover(),
        );
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, BOARD_COLOR);

        painter.rect_filled(
            cell_rect(rect.min, snapshot.food.x, snapshot.food.y),
            4.0,
            FOOD_COLOR,
        );

        for (i, cell) in snapshot.cells.iter().enumerate() {
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            painter.rect_filled(cell_rect(rect.min, cell.x, cell.y), 2.0, color);
        }

        let overlay = match snapshot.status {
            GameStatus::NotStarted => Some("Press an arrow key to start"),
            GameStatus::Paused => Some("Paused"),
            GameStatus::Over => Some("Game over"),
            GameStatus::Running => None,
        };
        if let Some(overlay) = overlay {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                overlay,
                egui::FontId::proportional(22.0),
                egui::Color32::WHITE,
            );
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context, command_tx: &mpsc::UnboundedSender<ClientCommand>) {
        ctx.input(|i| {
            let mut direction = None;
            if i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::W) {
                direction = Some(Direction::Up);
            } else if i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::S) {
                direction = Some(Direction::Down);
            } else if i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::A) {
                direction = Some(Direction::Left);
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::D) {
                direction = Some(Direction::Right);
            }

            if let Some(direction) = direction {
                let _ = command_tx.send(ClientCommand::Snake(SnakeCommand::Turn(direction)));
            }
            if i.key_pressed(egui::Key::Space) {
                let _ = command_tx.send(ClientCommand::Snake(SnakeCommand::TogglePause));
            }
            if i.key_pressed(egui::Key::Enter) {
                let _ = command_tx.send(ClientCommand::Snake(SnakeCommand::Restart));
            }
            if i.key_pressed(egui::Key::Escape) {
                let _ = command_tx.send(ClientCommand::Menu(MenuCommand::LeaveGame));
            }
        });
    }
}

fn cell_rect(canvas_min: egui::Pos2, grid_x: usize, grid_y: usize) -> egui::Rect {
    let pos = egui::pos2(
        canvas_min.x + grid_x as f32 * PIXELS_PER_CELL + 1.0,
        canvas_min.y + grid_y as f32 * PIXELS_PER_CELL + 1.0,
    );
    egui::Rect::from_min_size(
        pos,
        egui::vec2(PIXELS_PER_CELL - 2.0, PIXELS_PER_CELL - 2.0),
    )
}

fn status_line(snapshot: &SnakeSnapshot, last_report: Option<&SnakeGameOverReport>) -> String {
    match snapshot.status {
        GameStatus::NotStarted => "Ready - arrows move, Space pauses, Enter restarts".to_string(),
        GameStatus::Running => "Good luck!".to_string(),
        GameStatus::Paused => "Paused - Space resumes".to_string(),
        GameStatus::Over => {
            let reason = match snapshot.death_reason {
                Some(DeathReason::WallCollision) => "hit the wall",
                Some(DeathReason::SelfCollision) => "bit itself",
                None => "over",
            };
            match last_report {
                Some(report) if report.is_new_high_score => {
                    format!("The snake {} - new high score {}!", reason, report.high_score)
                }
                _ => format!("The snake {} - Enter to play again", reason),
            }
        }
    }
}
