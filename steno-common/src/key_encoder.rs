//! Converts text into the key actions that type it on a US QWERTY host layout.
//!
//! Every character becomes its own segment ended by [Action::Reset] so two consecutive
//! characters never merge into one longer key-down when the host samples between reports.

use crate::{keycodes::*, ring_buffer::RingBuffer};

/// A queued key action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Press the key (or modifier) in addition to whatever is already down.
    Key(u8),
    /// Release every key and modifier.
    Reset,
}

/// How a single character is typed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stroke {
    None,
    Plain(u8),
    Shifted(u8),
}

impl Stroke {
    /// `[code, Reset]` for plain, `[SHIFT, code, Reset]` for shifted and nothing for none.
    ///
    /// No separate shift release is emitted; the trailing reset clears modifiers too.
    pub fn actions(self) -> impl Iterator<Item = Action> {
        let (shift, code) = match self {
            Stroke::None => (false, None),
            Stroke::Plain(code) => (false, Some(code)),
            Stroke::Shifted(code) => (true, Some(code)),
        };
        shift
            .then_some(Action::Key(KEY_SHIFT))
            .into_iter()
            .chain(code.map(Action::Key))
            .chain(code.map(|_| Action::Reset))
    }
}

const PUNCTUATION: &[(u8, Stroke)] = &[
    (b' ', Stroke::Plain(KEY_SPACE)),
    (b'!', Stroke::Shifted(KEY_1)),
    (b'"', Stroke::Shifted(KEY_QUOTE)),
    (b'#', Stroke::Shifted(KEY_3)),
    (b'$', Stroke::Shifted(KEY_4)),
    (b'%', Stroke::Shifted(KEY_5)),
    (b'&', Stroke::Shifted(KEY_7)),
    (b'\'', Stroke::Plain(KEY_QUOTE)),
    (b'(', Stroke::Shifted(KEY_9)),
    (b')', Stroke::Shifted(KEY_0)),
    (b'*', Stroke::Shifted(KEY_8)),
    (b'+', Stroke::Shifted(KEY_EQUALS)),
    (b',', Stroke::Plain(KEY_COMMA)),
    (b'-', Stroke::Plain(KEY_MINUS)),
    (b'.', Stroke::Plain(KEY_PERIOD)),
    (b'/', Stroke::Plain(KEY_SLASH)),
    (b'0', Stroke::Plain(KEY_0)),
    (b':', Stroke::Shifted(KEY_SEMICOLON)),
    (b';', Stroke::Plain(KEY_SEMICOLON)),
    (b'<', Stroke::Shifted(KEY_COMMA)),
    (b'=', Stroke::Plain(KEY_EQUALS)),
    (b'>', Stroke::Shifted(KEY_PERIOD)),
    (b'?', Stroke::Shifted(KEY_SLASH)),
    (b'@', Stroke::Shifted(KEY_2)),
    (b'[', Stroke::Plain(KEY_LEFT_BRACE)),
    (b'\\', Stroke::Plain(KEY_BACKSLASH)),
    (b']', Stroke::Plain(KEY_RIGHT_BRACE)),
    (b'^', Stroke::Shifted(KEY_6)),
    (b'_', Stroke::Shifted(KEY_MINUS)),
    (b'`', Stroke::Plain(KEY_GRAVE)),
    (b'{', Stroke::Shifted(KEY_LEFT_BRACE)),
    (b'|', Stroke::Shifted(KEY_BACKSLASH)),
    (b'}', Stroke::Shifted(KEY_RIGHT_BRACE)),
    (b'~', Stroke::Shifted(KEY_GRAVE)),
];

const fn build_char_table() -> [Stroke; 128] {
    let mut table = [Stroke::None; 128];

    let mut i = 0;
    while i < 26 {
        table[b'a' as usize + i] = Stroke::Plain(KEY_A + i as u8);
        table[b'A' as usize + i] = Stroke::Shifted(KEY_A + i as u8);
        i += 1;
    }

    let mut i = 0;
    while i < 9 {
        table[b'1' as usize + i] = Stroke::Plain(KEY_1 + i as u8);
        i += 1;
    }

    let mut i = 0;
    while i < PUNCTUATION.len() {
        let (c, stroke) = PUNCTUATION[i];
        table[c as usize] = stroke;
        i += 1;
    }

    table
}

/// Stroke for every 7-bit ASCII character, indexed by code point.
pub static CHAR_TABLE: [Stroke; 128] = build_char_table();

pub fn encode_char(c: char) -> Stroke {
    if c.is_ascii() {
        CHAR_TABLE[c as usize]
    } else {
        Stroke::None
    }
}

/// The actions that type `text`, in emission order. Unmapped characters are skipped.
pub fn text_actions(text: &str) -> impl Iterator<Item = Action> + '_ {
    text.chars().flat_map(|c| {
        let stroke = encode_char(c);
        if stroke == Stroke::None {
            crate::debug!("ignoring unmapped char {:?}", c);
        }
        stroke.actions()
    })
}

/// Push the actions for `text` onto `queue`. Returns how many older actions were evicted to
/// make room.
pub fn encode_text<const N: usize>(text: &str, queue: &mut RingBuffer<Action, N>) -> usize {
    text_actions(text)
        .filter_map(|action| queue.push(action))
        .count()
}

#[cfg(test)]
#[path = "key_encoder_test.rs"]
mod test;
