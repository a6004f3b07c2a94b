use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode, MouseButton,
    MouseEvent, MouseEventKind,
};
use qwertype_core::{KeyId, KeyListener, Outcome, decode, resolved_events};
use ratatui::prelude::*;
use std::io;

use super::app::{App, KeyStream};
use super::ui;

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('q') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn is_shift(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift)
    )
}

/// Deliver a key from a terminal that reports modifier and lock keys.
fn forward_raw(app: &mut App, key: KeyEvent) -> Outcome {
    let translator = &mut app.translator;
    match (key.code, key.kind) {
        (KeyCode::CapsLock, KeyEventKind::Press) => translator.key_pressed(KeyId::CAPS_LOCK),
        (KeyCode::CapsLock, _) => translator.key_released(KeyId::CAPS_LOCK),
        (code, KeyEventKind::Release) if is_shift(code) => translator.key_released(KeyId::SHIFT),
        (code, _) if is_shift(code) => translator.key_pressed(KeyId::SHIFT),
        (KeyCode::Char(c), KeyEventKind::Release) => match decode(c) {
            Some((id, _)) => translator.key_released(id),
            None => Outcome::Suppressed,
        },
        (KeyCode::Char(c), _) => {
            let pressed = decode(c).map(|(id, _)| translator.key_pressed(id));
            let typed = translator.key_typed(c);
            match pressed {
                Some(outcome @ Outcome::Translated(_)) => outcome,
                _ => typed,
            }
        }
        _ => Outcome::Unhandled,
    }
}

/// Deliver a character from a terminal that only reports resolved text.
fn forward_resolved(app: &mut App, key: KeyEvent) -> Outcome {
    match (key.code, key.kind) {
        (KeyCode::Char(_), KeyEventKind::Release) => Outcome::Suppressed,
        (KeyCode::Char(c), _) => {
            let mut result = Outcome::Suppressed;
            for event in resolved_events(c) {
                if let outcome @ Outcome::Translated(_) = app.translator.dispatch(event) {
                    result = outcome;
                }
            }
            result
        }
        _ => Outcome::Unhandled,
    }
}

/// Default text-area behaviour for keys the translator leaves alone.
fn apply_native(app: &mut App, code: KeyCode) {
    let buffer = app.buffer_mut();
    match code {
        KeyCode::Enter => buffer.newline(),
        KeyCode::Backspace => buffer.backspace(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Up => buffer.move_up(),
        KeyCode::Down => buffer.move_down(),
        KeyCode::Home => buffer.move_line_start(),
        KeyCode::End => buffer.move_line_end(),
        _ => {}
    }
}

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    if is_quit(&key) {
        app.should_quit = true;
        return;
    }
    // Control and Alt chords are host shortcuts, never text.
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }

    let outcome = match app.stream {
        KeyStream::Raw => forward_raw(app, key),
        KeyStream::Resolved => forward_resolved(app, key),
    };
    if outcome == Outcome::Unhandled && key.kind != KeyEventKind::Release {
        apply_native(app, key.code);
    }
}

fn handle_mouse_event(app: &mut App, terminal_area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let [text_area, _status_area] = ui::split_main_chunks(terminal_area);
    if let Some((line, col)) = ui::text_position_at(app, text_area, mouse.column, mouse.row) {
        app.buffer_mut().set_caret_line_col(line, col);
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => handle_key(app, key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let terminal_area = Rect::new(0, 0, size.width, size.height);
                handle_mouse_event(app, terminal_area, mouse);
            }
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::empty(), kind)
    }

    fn tap(app: &mut App, code: KeyCode) {
        handle_key(app, key(code, KeyEventKind::Press));
        handle_key(app, key(code, KeyEventKind::Release));
    }

    fn shift(kind: KeyEventKind) -> KeyEvent {
        key(KeyCode::Modifier(ModifierKeyCode::LeftShift), kind)
    }

    fn text(app: &App) -> &str {
        app.buffer().text()
    }

    #[test]
    fn raw_stream_translates_letters() {
        let mut app = App::new(KeyStream::Raw, false);
        for c in "azerty".chars() {
            tap(&mut app, KeyCode::Char(c));
        }
        assert_eq!(text(&app), "qwerty");
    }

    #[test]
    fn raw_stream_tracks_shift_events() {
        let mut app = App::new(KeyStream::Raw, false);
        handle_key(&mut app, shift(KeyEventKind::Press));
        tap(&mut app, KeyCode::Char('&'));
        handle_key(&mut app, shift(KeyEventKind::Release));
        tap(&mut app, KeyCode::Char('&'));
        assert_eq!(text(&app), "!1");
    }

    #[test]
    fn raw_stream_uses_key_identity_not_reported_level() {
        // Some terminals report the shifted glyph; the translator's own
        // shift flag decides the case.
        let mut app = App::new(KeyStream::Raw, false);
        tap(&mut app, KeyCode::Char('A'));
        assert_eq!(text(&app), "q");
    }

    #[test]
    fn raw_stream_caps_lock_toggles() {
        let mut app = App::new(KeyStream::Raw, false);
        tap(&mut app, KeyCode::CapsLock);
        tap(&mut app, KeyCode::Char('a'));
        tap(&mut app, KeyCode::CapsLock);
        tap(&mut app, KeyCode::Char('a'));
        assert_eq!(text(&app), "Qq");
    }

    #[test]
    fn raw_stream_repeat_inserts_again() {
        let mut app = App::new(KeyStream::Raw, false);
        handle_key(&mut app, key(KeyCode::Char('z'), KeyEventKind::Press));
        handle_key(&mut app, key(KeyCode::Char('z'), KeyEventKind::Repeat));
        assert_eq!(text(&app), "ww");
    }

    #[test]
    fn raw_stream_drops_unmapped_characters() {
        let mut app = App::new(KeyStream::Raw, false);
        tap(&mut app, KeyCode::Char('@'));
        assert_eq!(text(&app), "");
    }

    #[test]
    fn resolved_stream_uses_reported_level() {
        let mut app = App::new(KeyStream::Resolved, false);
        for c in "Az1é".chars() {
            handle_key(&mut app, key(KeyCode::Char(c), KeyEventKind::Press));
        }
        assert_eq!(text(&app), "Qw!2");
        assert!(!app.input_state().shift_on());
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut app = App::new(KeyStream::Raw, false);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL),
        );
        assert_eq!(text(&app), "");
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys() {
        for event in [
            KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        ] {
            let mut app = App::new(KeyStream::Resolved, false);
            handle_key(&mut app, event);
            assert!(app.should_quit);
        }
    }

    #[test]
    fn native_keys_edit_and_move_caret() {
        let mut app = App::new(KeyStream::Raw, false);
        tap(&mut app, KeyCode::Char('a'));
        tap(&mut app, KeyCode::Enter);
        tap(&mut app, KeyCode::Char('z'));
        assert_eq!(text(&app), "q\nw");

        tap(&mut app, KeyCode::Up);
        tap(&mut app, KeyCode::Home);
        tap(&mut app, KeyCode::Char('e'));
        assert_eq!(text(&app), "eq\nw");

        tap(&mut app, KeyCode::End);
        tap(&mut app, KeyCode::Backspace);
        assert_eq!(text(&app), "e\nw");
    }

    #[test]
    fn mouse_click_moves_caret() {
        let mut app = App::new(KeyStream::Resolved, false);
        for c in "aaa".chars() {
            handle_key(&mut app, key(KeyCode::Char(c), KeyEventKind::Press));
        }
        let terminal_area = Rect::new(0, 0, 80, 24);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 1,
            modifiers: KeyModifiers::empty(),
        };
        handle_mouse_event(&mut app, terminal_area, click);
        assert_eq!(app.buffer().caret(), 1);

        handle_key(&mut app, key(KeyCode::Char('z'), KeyEventKind::Press));
        assert_eq!(text(&app), "qwqq");
    }
}
