use std::fmt;

use steno_common::key_encoder::{encode_char, Stroke};

use crate::keycodes::action_name;

/// One input character and the actions that type it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedChar {
    pub c: char,
    pub actions: Vec<String>,
}

impl fmt::Display for EncodedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.actions.is_empty() {
            write!(f, "{:?}: (unmapped)", self.c)
        } else {
            write!(f, "{:?}: {}", self.c, self.actions.join(" "))
        }
    }
}

pub fn encode(text: &str) -> Vec<EncodedChar> {
    text.chars()
        .map(|c| EncodedChar {
            c,
            actions: encode_char(c).actions().map(action_name).collect(),
        })
        .collect()
}

/// Number of queue slots typing `text` takes.
pub fn queue_len(text: &str) -> usize {
    text.chars()
        .map(|c| match encode_char(c) {
            Stroke::None => 0,
            Stroke::Plain(_) => 2,
            Stroke::Shifted(_) => 3,
        })
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encodes_each_char() {
        let lines: Vec<String> = encode("Hi!\u{e9}").iter().map(|e| e.to_string()).collect();
        assert_eq!(
            lines,
            [
                "'H': LeftShift H Reset",
                "'i': I Reset",
                "'!': LeftShift 1 Reset",
                "'é': (unmapped)",
            ]
        );
    }

    #[test]
    fn queue_len_counts_actions() {
        assert_eq!(queue_len("Hi!"), 8);
        assert_eq!(queue_len("a\tb"), 4);
        assert_eq!(queue_len(""), 0);
    }
}
