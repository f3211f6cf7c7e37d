mod config;
mod constants;
mod offline;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use common::logger::init_logger;

use config::get_config_manager;
use state::SharedState;
use ui::ToyboxApp;

#[derive(Parser, Debug)]
#[command(name = "toybox", version, about = "A small desktop arcade of single-screen toys")]
struct Args {
    /// Path to the YAML config file; defaults to toybox_config.yaml next
    /// to the executable.
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(None);
    common::log!("Toybox {} starting", common::version::VERSION);

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let config_clone = config.clone();
    let shared_state_clone = shared_state.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
        rt.block_on(offline::local_game_task(
            config_clone,
            shared_state_clone,
            command_rx,
        ));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 820.0])
            .with_title("Toybox"),
        ..Default::default()
    };

    eframe::run_native(
        "Toybox",
        options,
        Box::new(|_cc| Ok(Box::new(ToyboxApp::new(shared_state, command_tx)))),
    )?;

    Ok(())
}
