//! qwertype GUI - Desktop application entry point.

use eframe::egui;
use tracing::{info, warn};

#[path = "../cli.rs"]
#[allow(dead_code)]
mod cli;

#[path = "../config.rs"]
#[allow(dead_code)]
mod config;

#[path = "../error.rs"]
mod error;

#[path = "../logging.rs"]
mod logging;

#[path = "../gui/mod.rs"]
mod gui;

fn main() -> eframe::Result<()> {
    let args = match cli::parse_args(std::env::args().skip(1), false) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            cli::print_usage("qwertype-gui", false);
            std::process::exit(1);
        }
    };
    if args.help {
        cli::print_usage("qwertype-gui", false);
        return Ok(());
    }

    let (config, warnings) = config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    if let Err(e) = logging::init(&config.log, true) {
        eprintln!("Warning: {}", e);
    }
    for warning in warnings {
        warn!("{}", warning);
    }

    let mut options = eframe::NativeOptions::default();
    options.viewport = egui::ViewportBuilder::default()
        .with_title("qwertype")
        .with_inner_size([config.window.width, config.window.height]);

    info!(width = config.window.width, height = config.window.height, "starting desktop host");
    eframe::run_native(
        "qwertype",
        options,
        Box::new(|_cc| Ok(Box::new(gui::QwertypeGuiApp::new()))),
    )
}
