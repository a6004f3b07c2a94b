//! qwertype - type QWERTY text on an AZERTY keyboard, in the terminal.

mod cli;
mod config;
mod error;
mod host;
mod logging;
mod tui;

use qwertype_core::{KeyListener, TextBuffer, Translator, resolved_events};
use std::env;
use tracing::{info, warn};

/// Translate text as an AZERTY host would have produced it.
fn translate_text(text: &str) -> String {
    let mut translator = Translator::for_resolved_host(TextBuffer::new());
    for c in text.chars() {
        for event in resolved_events(c) {
            translator.dispatch(event);
        }
    }
    translator.into_sink().into_text()
}

fn main() {
    let args = match cli::parse_args(env::args().skip(1), true) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            cli::print_usage("qwertype", true);
            std::process::exit(1);
        }
    };
    if args.help {
        cli::print_usage("qwertype", true);
        return;
    }

    let (config, warnings) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // The interactive screen owns the terminal, so stderr logging is only
    // used for the one-shot mode.
    let interactive = args.translate.is_none();
    if let Err(e) = logging::init(&config.log, !interactive) {
        eprintln!("Warning: {}", e);
    }
    for warning in warnings {
        warn!("{}", warning);
        eprintln!("Warning: {}", warning);
    }

    if let Some(text) = args.translate {
        println!("{}", translate_text(&text));
        return;
    }

    let caps_source = args.caps_lock.unwrap_or(config.input.caps_lock);
    info!(?caps_source, keyboard_enhancement = config.input.keyboard_enhancement, "starting terminal host");
    let result = tui::run(config.input.keyboard_enhancement, || {
        host::initial_caps_lock(caps_source, host::caps_lock_state)
    });
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
