//! Terminal host: a full-screen text area fed through the translator.
//!
//! - app.rs: application state
//! - input.rs: crossterm event translation and the event loop
//! - ui.rs: ratatui rendering

mod app;
mod input;
mod ui;

use app::{App, KeyStream};

use anyhow::Context;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use ratatui::prelude::*;
use std::io;
use tracing::info;

fn enhancement_flags() -> KeyboardEnhancementFlags {
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
}

/// Run the interactive terminal host until the user quits.
///
/// `caps_lock` resolves the initial caps-lock flag; it is only consulted for
/// terminals that report raw key events.
pub fn run(keyboard_enhancement: bool, caps_lock: impl FnOnce() -> bool) -> anyhow::Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let stream = match setup(keyboard_enhancement) {
        Ok(stream) => stream,
        Err(e) => {
            restore(KeyStream::Resolved);
            return Err(e).context("failed to set up terminal");
        }
    };
    info!(?stream, "terminal key stream");

    let mut app = match stream {
        KeyStream::Raw => App::new(stream, caps_lock()),
        KeyStream::Resolved => App::new(stream, false),
    };

    let backend = CrosstermBackend::new(io::stdout());
    let result = Terminal::new(backend)
        .and_then(|mut terminal| {
            let res = input::run_app(&mut terminal, &mut app);
            let _ = terminal.show_cursor();
            res
        })
        .context("terminal error");

    restore(stream);
    result
}

fn setup(keyboard_enhancement: bool) -> io::Result<KeyStream> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    if keyboard_enhancement && supports_keyboard_enhancement().unwrap_or(false) {
        execute!(stdout, PushKeyboardEnhancementFlags(enhancement_flags()))?;
        Ok(KeyStream::Raw)
    } else {
        Ok(KeyStream::Resolved)
    }
}

fn restore(stream: KeyStream) {
    let mut stdout = io::stdout();
    if stream == KeyStream::Raw {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
    let _ = disable_raw_mode();
}
