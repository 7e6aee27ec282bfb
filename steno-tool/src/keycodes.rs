use std::collections::HashMap;

use lazy_static::lazy_static;
use steno_common::{
    key_encoder::{encode_char, Action, Stroke},
    keycodes::key_range,
};

const DASH_USCORE: [char; 2] = ['_', '-'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeycodeDesc {
    pub name: &'static str,
    pub code: u8,
}

lazy_static! {
    static ref KEYCODES: Vec<KeycodeDesc> = {
        let mut v = Vec::new();
        let mut ins = |names: &'static str, code: u8| {
            for name in names.split('/') {
                v.push(KeycodeDesc { name, code });
            }
        };
        for (i, names) in r#"
A B C D E F G H I J K L M N O P Q R S T U V W X Y Z
1 2 3 4 5 6 7 8 9 0
Enter/Return/ent
Escape/esc
Backspace/bksp
Tab
Space/Spacebar/spc
Minus/-/dash
Equals/=/equal
LeftBrace/[
RightBrace/]
Backslash/\
NonUsHash
Semicolon/;
Quote/'/apostrophe
Grave/`
Comma/,
Period/./dot
"#
        .split_whitespace()
        .enumerate()
        {
            ins(names, i as u8 + key_range::BASIC_MIN);
        }
        ins("Slash", 0x38);

        for (i, names) in r#"
LeftCtrl/lctrl/lc
LeftShift/lshift/ls/shift
LeftAlt/lalt/la
LeftGui/lgui/lg
RightCtrl/rctrl/rc
RightShift/rshift/rs
RightAlt/ralt/ra
RightGui/rgui/rg
"#
        .split_whitespace()
        .enumerate()
        {
            ins(names, i as u8 + key_range::MODIFIER_MIN);
        }
        // '/' is the alias separator above
        v.push(KeycodeDesc { name: "/", code: 0x38 });
        v
    };
    static ref KEY_NAMES: HashMap<String, u8> = {
        let mut m = HashMap::new();
        for d in KEYCODES.iter() {
            let k = normalize(d.name);
            if m.contains_key(k.as_str()) {
                panic!("key already added {}", d.name);
            }
            m.insert(k, d.code);
        }
        m
    };
    static ref CODE_NAMES: HashMap<u8, &'static str> = {
        let mut m = HashMap::new();
        for d in KEYCODES.iter() {
            m.entry(d.code).or_insert(d.name);
        }
        m
    };
}

fn normalize(name: &str) -> String {
    if name.chars().count() > 1 {
        name.replace(DASH_USCORE, "").to_lowercase()
    } else {
        name.to_lowercase()
    }
}

/// Every name and alias known to the tool.
pub fn keycodes_iter() -> impl Iterator<Item = KeycodeDesc> {
    KEYCODES.iter().copied()
}

/// Look up a key by name. Case, dashes and underscores are ignored; a leading `\` escapes a
/// single punctuation name.
pub fn key_code(name: &str) -> Option<u8> {
    let name = if name.len() > 1 && name.starts_with('\\') {
        &name[1..]
    } else {
        name
    };
    KEY_NAMES.get(normalize(name).as_str()).copied()
}

/// The main name of `code`.
pub fn key_name(code: u8) -> Option<&'static str> {
    CODE_NAMES.get(&code).copied()
}

pub fn action_name(action: Action) -> String {
    match action {
        Action::Reset => "Reset".into(),
        Action::Key(code) => match key_name(code) {
            Some(name) => name.into(),
            None => format!("0x{code:02x}"),
        },
    }
}

/// True if typing some ASCII character presses `code`.
pub fn used_by_encoder(code: u8) -> bool {
    (0..128u8).any(|c| match encode_char(c as char) {
        Stroke::Plain(k) => k == code,
        Stroke::Shifted(k) => k == code || code == steno_common::keycodes::KEY_SHIFT,
        Stroke::None => false,
    })
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
