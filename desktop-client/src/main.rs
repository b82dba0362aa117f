mod colors;
mod config;
mod restart_timer;
mod state;
mod ui;

use clap::Parser;
use common::{log, logger};
use std::path::PathBuf;

use config::{Config, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Two-player tic-tac-toe on one machine")]
struct Args {
    /// Seed for choosing the starting player of each round
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.as_deref());
    // A file that failed to load is left untouched.
    let (config, save_choices) = match config_manager.get_config() {
        Ok(config) => (config, true),
        Err(e) => {
            log!("Failed to load config, using defaults and not saving: {}", e);
            (Config::default(), false)
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_resizable(false)
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    log!("Starting Tic Tac Toe");

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(TicTacToeApp::new(
                config_manager,
                config,
                save_choices,
                args.seed,
            )))
        }),
    )?;

    Ok(())
}
