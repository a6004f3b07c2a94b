//! Key event handling.
//!
//! The [`Translator`] is the listener a host attaches to its text surface.
//! It owns the shift/caps-lock state and the sink, and writes translated
//! characters itself; every key-typed notification is swallowed so the host
//! never inserts the untranslated character.

use tracing::trace;

use crate::key::{KeyEvent, KeyId};
use crate::sink::TextSink;
use crate::state::InputState;
use crate::table::TranslationTable;

/// What a listener did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The translated character was inserted into the sink.
    Translated(char),
    /// A shift or caps-lock transition was recorded.
    StateChanged,
    /// A key-typed notification was consumed.
    Suppressed,
    /// Nothing to do. The host may apply its own default for the key.
    Unhandled,
}

impl Outcome {
    /// True when the host must not apply its default handling.
    pub fn is_consumed(self) -> bool {
        !matches!(self, Outcome::Unhandled)
    }
}

/// The three notifications a host delivers for key activity.
pub trait KeyListener {
    fn key_pressed(&mut self, key: KeyId) -> Outcome;
    fn key_released(&mut self, key: KeyId) -> Outcome;
    fn key_typed(&mut self, ch: char) -> Outcome;

    fn dispatch(&mut self, event: KeyEvent) -> Outcome {
        match event {
            KeyEvent::Pressed(key) => self.key_pressed(key),
            KeyEvent::Released(key) => self.key_released(key),
            KeyEvent::Typed(ch) => self.key_typed(ch),
        }
    }
}

pub struct Translator<S> {
    table: &'static TranslationTable,
    state: InputState,
    sink: S,
}

impl<S: TextSink> Translator<S> {
    /// Translate into `sink`, starting from the host's caps-lock state.
    pub fn new(sink: S, caps_lock_on: bool) -> Self {
        Self::with_table(sink, &TranslationTable::AZERTY_TO_QWERTY, caps_lock_on)
    }

    /// Translator for hosts that only report resolved characters; their
    /// characters already carry the lock state, so caps-lock starts off.
    pub fn for_resolved_host(sink: S) -> Self {
        Self::new(sink, false)
    }

    pub fn with_table(sink: S, table: &'static TranslationTable, caps_lock_on: bool) -> Self {
        Self {
            table,
            state: InputState::new(caps_lock_on),
            sink,
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    // The caret is read on every insertion since the host may have moved it.
    fn write(&mut self, ch: char) {
        let at = self.sink.caret_position();
        self.sink.insert(ch, at);
    }
}

impl<S: TextSink> KeyListener for Translator<S> {
    fn key_pressed(&mut self, key: KeyId) -> Outcome {
        match key {
            KeyId::CAPS_LOCK => {
                self.state.toggle_caps_lock();
                Outcome::StateChanged
            }
            KeyId::SHIFT => {
                self.state.set_shift(true);
                Outcome::StateChanged
            }
            _ => match self.table.translate(key, self.state.case_state()) {
                Some(ch) => {
                    trace!(%key, %ch, "translated");
                    self.write(ch);
                    Outcome::Translated(ch)
                }
                None => {
                    trace!(%key, "no mapping");
                    Outcome::Unhandled
                }
            },
        }
    }

    fn key_released(&mut self, key: KeyId) -> Outcome {
        if key == KeyId::SHIFT {
            self.state.set_shift(false);
            Outcome::StateChanged
        } else {
            Outcome::Unhandled
        }
    }

    fn key_typed(&mut self, _ch: char) -> Outcome {
        Outcome::Suppressed
    }
}
