//! qwertype-core - UI-agnostic AZERTY to QWERTY key translation.
//!
//! Hosts feed key events into a [`Translator`], which tracks shift and
//! caps-lock and writes the QWERTY character for each key into a
//! [`TextSink`].

pub mod azerty;
pub mod buffer;
pub mod handler;
pub mod key;
pub mod sink;
pub mod state;
pub mod table;

pub use azerty::{Level, decode, resolved_events};
pub use buffer::TextBuffer;
pub use handler::{KeyListener, Outcome, Translator};
pub use key::{KeyEvent, KeyId};
pub use sink::TextSink;
pub use state::{CaseState, InputState};
pub use table::TranslationTable;
