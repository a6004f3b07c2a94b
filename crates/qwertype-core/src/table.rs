//! AZERTY key to QWERTY character tables.
//!
//! Rows follow the keyboard top to bottom: number row, the three letter rows,
//! then the space bar.

use crate::key::KeyId;
use crate::state::CaseState;

const fn l(c: char) -> KeyId {
    KeyId::letter(c)
}

const UNSHIFTED: [(KeyId, char); 48] = [
    // Number row
    (KeyId::SUPERSCRIPT_TWO, '`'),
    (KeyId::AMPERSAND, '1'),
    (KeyId::E_ACUTE, '2'),
    (KeyId::QUOTE_DBL, '3'),
    (KeyId::QUOTE, '4'),
    (KeyId::LEFT_PAREN, '5'),
    (KeyId::MINUS, '6'),
    (KeyId::E_GRAVE, '7'),
    (KeyId::UNDERSCORE, '8'),
    (KeyId::C_CEDILLA, '9'),
    (KeyId::A_GRAVE, '0'),
    (KeyId::RIGHT_PAREN, '-'),
    (KeyId::EQUALS, '='),
    // Top letter row
    (l('a'), 'q'),
    (l('z'), 'w'),
    (l('e'), 'e'),
    (l('r'), 'r'),
    (l('t'), 't'),
    (l('y'), 'y'),
    (l('u'), 'u'),
    (l('i'), 'i'),
    (l('o'), 'o'),
    (l('p'), 'p'),
    (KeyId::DEAD_CIRCUMFLEX, '['),
    (KeyId::DOLLAR, ']'),
    // Home row
    (l('q'), 'a'),
    (l('s'), 's'),
    (l('d'), 'd'),
    (l('f'), 'f'),
    (l('g'), 'g'),
    (l('h'), 'h'),
    (l('j'), 'j'),
    (l('k'), 'k'),
    (l('l'), 'l'),
    (l('m'), ';'),
    (KeyId::U_GRAVE, '\''),
    (KeyId::ASTERISK, '\\'),
    // Bottom letter row
    (l('w'), 'z'),
    (l('x'), 'x'),
    (l('c'), 'c'),
    (l('v'), 'v'),
    (l('b'), 'b'),
    (l('n'), 'n'),
    (KeyId::COMMA, 'm'),
    (KeyId::SEMICOLON, ','),
    (KeyId::COLON, '.'),
    (KeyId::EXCLAMATION_MARK, '/'),
    (KeyId::SPACE, ' '),
];

const SHIFTED: [(KeyId, char); 48] = [
    (KeyId::SUPERSCRIPT_TWO, '~'),
    (KeyId::AMPERSAND, '!'),
    (KeyId::E_ACUTE, '@'),
    (KeyId::QUOTE_DBL, '#'),
    (KeyId::QUOTE, '$'),
    (KeyId::LEFT_PAREN, '%'),
    (KeyId::MINUS, '^'),
    (KeyId::E_GRAVE, '&'),
    (KeyId::UNDERSCORE, '*'),
    (KeyId::C_CEDILLA, '('),
    (KeyId::A_GRAVE, ')'),
    (KeyId::RIGHT_PAREN, '_'),
    (KeyId::EQUALS, '+'),
    (l('a'), 'Q'),
    (l('z'), 'W'),
    (l('e'), 'E'),
    (l('r'), 'R'),
    (l('t'), 'T'),
    (l('y'), 'Y'),
    (l('u'), 'U'),
    (l('i'), 'I'),
    (l('o'), 'O'),
    (l('p'), 'P'),
    (KeyId::DEAD_CIRCUMFLEX, '{'),
    (KeyId::DOLLAR, '}'),
    (l('q'), 'A'),
    (l('s'), 'S'),
    (l('d'), 'D'),
    (l('f'), 'F'),
    (l('g'), 'G'),
    (l('h'), 'H'),
    (l('j'), 'J'),
    (l('k'), 'K'),
    (l('l'), 'L'),
    (l('m'), ':'),
    (KeyId::U_GRAVE, '"'),
    (KeyId::ASTERISK, '|'),
    (l('w'), 'Z'),
    (l('x'), 'X'),
    (l('c'), 'C'),
    (l('v'), 'V'),
    (l('b'), 'B'),
    (l('n'), 'N'),
    (KeyId::COMMA, 'M'),
    (KeyId::SEMICOLON, '<'),
    (KeyId::COLON, '>'),
    (KeyId::EXCLAMATION_MARK, '?'),
    (KeyId::SPACE, ' '),
];

/// Immutable pair of lookup tables, one per case state.
#[derive(Debug)]
pub struct TranslationTable {
    unshifted: &'static [(KeyId, char)],
    shifted: &'static [(KeyId, char)],
}

impl TranslationTable {
    /// The French AZERTY to US QWERTY mapping.
    pub const AZERTY_TO_QWERTY: TranslationTable = TranslationTable {
        unshifted: &UNSHIFTED,
        shifted: &SHIFTED,
    };

    /// Character the key produces in the given case state, or `None` for
    /// keys without a translation.
    pub fn translate(&self, key: KeyId, case: CaseState) -> Option<char> {
        self.entries(case)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, c)| c)
    }

    pub fn entries(&self, case: CaseState) -> &'static [(KeyId, char)] {
        match case {
            CaseState::Lower => self.unshifted,
            CaseState::Upper => self.shifted,
        }
    }
}
