//! HID Keyboard/Keypad page usages used by the encoder.

pub mod key_range {
    pub const BASIC_MIN: u8 = 0x4;
    pub const BASIC_A: u8 = 0x4;
    pub const BASIC_1: u8 = 0x1e;
    pub const BASIC_0: u8 = 0x27;
    pub const MODIFIER_MIN: u8 = 0xe0;
    pub const MODIFIER_MAX: u8 = 0xe7;

    pub fn is_modifier(code: u8) -> bool {
        (MODIFIER_MIN..=MODIFIER_MAX).contains(&code)
    }

    /// Bit of `code` within the report's modifier byte. Only meaningful for modifier codes.
    pub fn modifier_bit(code: u8) -> u8 {
        1 << (code - MODIFIER_MIN)
    }
}

pub const KEY_A: u8 = key_range::BASIC_A;
pub const KEY_1: u8 = key_range::BASIC_1;
pub const KEY_2: u8 = KEY_1 + 1;
pub const KEY_3: u8 = KEY_1 + 2;
pub const KEY_4: u8 = KEY_1 + 3;
pub const KEY_5: u8 = KEY_1 + 4;
pub const KEY_6: u8 = KEY_1 + 5;
pub const KEY_7: u8 = KEY_1 + 6;
pub const KEY_8: u8 = KEY_1 + 7;
pub const KEY_9: u8 = KEY_1 + 8;
pub const KEY_0: u8 = key_range::BASIC_0;

pub const KEY_ENTER: u8 = 0x28;
pub const KEY_SPACE: u8 = 0x2c;
pub const KEY_MINUS: u8 = 0x2d;
pub const KEY_EQUALS: u8 = 0x2e;
pub const KEY_LEFT_BRACE: u8 = 0x2f;
pub const KEY_RIGHT_BRACE: u8 = 0x30;
pub const KEY_BACKSLASH: u8 = 0x31;
pub const KEY_SEMICOLON: u8 = 0x33;
pub const KEY_QUOTE: u8 = 0x34;
pub const KEY_GRAVE: u8 = 0x35;
pub const KEY_COMMA: u8 = 0x36;
pub const KEY_PERIOD: u8 = 0x37;
pub const KEY_SLASH: u8 = 0x38;

pub const KEY_LEFT_CTRL: u8 = 0xe0;
pub const KEY_LEFT_SHIFT: u8 = 0xe1;
pub const KEY_LEFT_ALT: u8 = 0xe2;
pub const KEY_LEFT_GUI: u8 = 0xe3;
pub const KEY_RIGHT_CTRL: u8 = 0xe4;
pub const KEY_RIGHT_SHIFT: u8 = 0xe5;
pub const KEY_RIGHT_ALT: u8 = 0xe6;
pub const KEY_RIGHT_GUI: u8 = 0xe7;

/// The modifier the encoder holds for shifted characters.
pub const KEY_SHIFT: u8 = KEY_LEFT_SHIFT;
