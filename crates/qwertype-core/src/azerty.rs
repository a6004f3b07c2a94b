//! Decoding characters produced by a French AZERTY host layout.
//!
//! Hosts that only report resolved characters (shift and caps-lock already
//! applied) use [`decode`] to recover the physical key, and
//! [`resolved_events`] to replay the press as the raw event sequence the
//! [`Translator`](crate::Translator) expects.

use crate::key::{KeyEvent, KeyId};

/// Keyboard level a character was produced on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Base,
    Shifted,
}

/// (key, base glyph, shifted glyph, caps-lock glyph) for the non-letter keys.
///
/// Keys whose base glyph is an accented letter produce its capital form
/// under caps lock, which selects the shifted table just like shift.
const GLYPHS: [(KeyId, char, Option<char>, Option<char>); 22] = [
    (KeyId::SUPERSCRIPT_TWO, '²', None, None),
    (KeyId::AMPERSAND, '&', Some('1'), None),
    (KeyId::E_ACUTE, 'é', Some('2'), Some('É')),
    (KeyId::QUOTE_DBL, '"', Some('3'), None),
    (KeyId::QUOTE, '\'', Some('4'), None),
    (KeyId::LEFT_PAREN, '(', Some('5'), None),
    (KeyId::MINUS, '-', Some('6'), None),
    (KeyId::E_GRAVE, 'è', Some('7'), Some('È')),
    (KeyId::UNDERSCORE, '_', Some('8'), None),
    (KeyId::C_CEDILLA, 'ç', Some('9'), Some('Ç')),
    (KeyId::A_GRAVE, 'à', Some('0'), Some('À')),
    (KeyId::RIGHT_PAREN, ')', Some('°'), None),
    (KeyId::EQUALS, '=', Some('+'), None),
    (KeyId::DEAD_CIRCUMFLEX, '^', Some('¨'), None),
    (KeyId::DOLLAR, '$', Some('£'), None),
    (KeyId::U_GRAVE, 'ù', Some('%'), Some('Ù')),
    (KeyId::ASTERISK, '*', Some('µ'), None),
    (KeyId::COMMA, ',', Some('?'), None),
    (KeyId::SEMICOLON, ';', Some('.'), None),
    (KeyId::COLON, ':', Some('/'), None),
    (KeyId::EXCLAMATION_MARK, '!', Some('§'), None),
    (KeyId::SPACE, ' ', None, None),
];

/// Physical key and level that produce `c` on an AZERTY layout.
pub fn decode(c: char) -> Option<(KeyId, Level)> {
    if c.is_ascii_lowercase() {
        return Some((KeyId::letter(c), Level::Base));
    }
    if c.is_ascii_uppercase() {
        return Some((KeyId::letter(c), Level::Shifted));
    }
    GLYPHS.iter().find_map(|&(key, base, shifted, caps)| {
        if base == c {
            Some((key, Level::Base))
        } else if shifted == Some(c) || caps == Some(c) {
            Some((key, Level::Shifted))
        } else {
            None
        }
    })
}

/// Raw events for one resolved character: `[Shift down]`, key down,
/// key typed, key up, `[Shift up]`. Empty when `c` is not on the layout.
pub fn resolved_events(c: char) -> impl Iterator<Item = KeyEvent> {
    let (key, level) = match decode(c) {
        Some(decoded) => decoded,
        None => return [None::<KeyEvent>; 5].into_iter().flatten(),
    };
    let shifted = level == Level::Shifted;
    [
        shifted.then_some(KeyEvent::Pressed(KeyId::SHIFT)),
        Some(KeyEvent::Pressed(key)),
        Some(KeyEvent::Typed(c)),
        Some(KeyEvent::Released(key)),
        shifted.then_some(KeyEvent::Released(KeyId::SHIFT)),
    ]
    .into_iter()
    .flatten()
}
