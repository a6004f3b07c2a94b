//! Physical key identifiers and the events hosts deliver for them.

use std::fmt;

/// Opaque code for a physical key.
///
/// ASCII keys carry the code of the glyph they produce on the base level of
/// the AZERTY layout, with letters folded to upper case. Keys whose base glyph
/// is outside ASCII use an extended code, `EXTENDED_BASE + codepoint`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(u32);

impl KeyId {
    pub const EXTENDED_BASE: u32 = 0x0100_0000;

    pub const SHIFT: KeyId = KeyId(0x10);
    pub const CAPS_LOCK: KeyId = KeyId(0x14);
    pub const SPACE: KeyId = KeyId(0x20);

    // Number row
    pub const SUPERSCRIPT_TWO: KeyId = KeyId::for_char('²');
    pub const AMPERSAND: KeyId = KeyId::for_char('&');
    pub const E_ACUTE: KeyId = KeyId::for_char('é');
    pub const QUOTE_DBL: KeyId = KeyId::for_char('"');
    pub const QUOTE: KeyId = KeyId::for_char('\'');
    pub const LEFT_PAREN: KeyId = KeyId::for_char('(');
    pub const MINUS: KeyId = KeyId::for_char('-');
    pub const E_GRAVE: KeyId = KeyId::for_char('è');
    pub const UNDERSCORE: KeyId = KeyId::for_char('_');
    pub const C_CEDILLA: KeyId = KeyId::for_char('ç');
    pub const A_GRAVE: KeyId = KeyId::for_char('à');
    pub const RIGHT_PAREN: KeyId = KeyId::for_char(')');
    pub const EQUALS: KeyId = KeyId::for_char('=');

    // Punctuation on the letter rows
    pub const DEAD_CIRCUMFLEX: KeyId = KeyId::for_char('^');
    pub const DOLLAR: KeyId = KeyId::for_char('$');
    pub const U_GRAVE: KeyId = KeyId::for_char('ù');
    pub const ASTERISK: KeyId = KeyId::for_char('*');
    pub const COMMA: KeyId = KeyId::for_char(',');
    pub const SEMICOLON: KeyId = KeyId::for_char(';');
    pub const COLON: KeyId = KeyId::for_char(':');
    pub const EXCLAMATION_MARK: KeyId = KeyId::for_char('!');

    pub const fn from_code(code: u32) -> Self {
        KeyId(code)
    }

    pub const fn code(self) -> u32 {
        self.0
    }

    /// Identifier of the key whose base-level glyph is `c`.
    pub const fn for_char(c: char) -> Self {
        if c.is_ascii() {
            KeyId(c.to_ascii_uppercase() as u32)
        } else {
            KeyId(Self::EXTENDED_BASE + c as u32)
        }
    }

    /// Identifier of a letter key. Case is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `c` is not an ASCII letter. In const context this is a
    /// compile error.
    pub const fn letter(c: char) -> Self {
        assert!(c.is_ascii_alphabetic(), "not an ASCII letter");
        Self::for_char(c)
    }

    pub const fn is_extended(self) -> bool {
        self.0 >= Self::EXTENDED_BASE
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            KeyId::SHIFT => write!(f, "Shift"),
            KeyId::CAPS_LOCK => write!(f, "CapsLock"),
            KeyId::SPACE => write!(f, "Space"),
            key if key.is_extended() => match char::from_u32(key.0 - Self::EXTENDED_BASE) {
                Some(c) => write!(f, "{c} (0x{:x})", key.0),
                None => write!(f, "0x{:x}", key.0),
            },
            key => match char::from_u32(key.0).filter(|c| c.is_ascii_graphic()) {
                Some(c) => write!(f, "{c}"),
                None => write!(f, "0x{:x}", key.0),
            },
        }
    }
}

/// A notification delivered by the host, in the order
/// pressed, typed, released for each physical press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(KeyId),
    Released(KeyId),
    Typed(char),
}
