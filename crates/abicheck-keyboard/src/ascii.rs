//! Conversion between characters typed on an ASCII virtual keyboard in US layout and
//! `(Scancode, Keymod)` pairs.
//!
//! For example `ASCII_KEY_INFO_TABLE[usize::from(b'a')]` gives the scancode and modifiers
//! for lower case a.

use crate::{Keymod, Scancode};

/// Physical key and modifiers producing one ASCII character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AsciiKeyInfo {
    pub code: Scancode,
    pub modifiers: Keymod,
}

impl AsciiKeyInfo {
    pub const UNKNOWN: Self = Self::new(Scancode::UNKNOWN, Keymod::NONE);

    pub const fn new(code: Scancode, modifiers: Keymod) -> Self {
        Self { code, modifiers }
    }

    /// Checked lookup by ASCII code, `None` above 127.
    pub fn for_ascii(ascii: u8) -> Option<Self> {
        ASCII_KEY_INFO_TABLE.get(usize::from(ascii)).copied()
    }

    /// Checked lookup by character, `None` for anything outside the ASCII range.
    pub fn for_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::for_ascii)
    }

    pub const fn needs_shift(self) -> bool {
        self.modifiers.has_shift()
    }
}

/// Reverse lookup: the first ASCII code whose entry is exactly `(code, modifiers)`.
///
/// Codes sharing a key and modifiers (10 and 13 both use return, 96 and 126 both use
/// shifted grave) resolve to the lowest one.
pub fn ascii_for_key(code: Scancode, modifiers: Keymod) -> Option<u8> {
    if code.is_unknown() {
        return None;
    }

    let wanted = AsciiKeyInfo::new(code, modifiers);

    ASCII_KEY_INFO_TABLE
        .iter()
        .position(|info| *info == wanted)
        .and_then(|idx| u8::try_from(idx).ok())
}

const fn plain(code: Scancode) -> AsciiKeyInfo {
    AsciiKeyInfo::new(code, Keymod::NONE)
}

const fn shifted(code: Scancode) -> AsciiKeyInfo {
    AsciiKeyInfo::new(code, Keymod::SHIFT)
}

const UNKNOWN: AsciiKeyInfo = AsciiKeyInfo::UNKNOWN;

/// Key info for every ASCII code, indexed by the raw byte value.
///
/// Control codes other than backspace and the line terminators have no key.
pub static ASCII_KEY_INFO_TABLE: [AsciiKeyInfo; 128] = [
    /*   0 */ UNKNOWN,
    /*   1 */ UNKNOWN,
    /*   2 */ UNKNOWN,
    /*   3 */ UNKNOWN,
    /*   4 */ UNKNOWN,
    /*   5 */ UNKNOWN,
    /*   6 */ UNKNOWN,
    /*   7 */ UNKNOWN,
    /*   8 */ plain(Scancode::BACKSPACE),
    /*   9 */ UNKNOWN,
    /*  10 */ plain(Scancode::RETURN),
    /*  11 */ UNKNOWN,
    /*  12 */ UNKNOWN,
    /*  13 */ plain(Scancode::RETURN),
    /*  14 */ UNKNOWN,
    /*  15 */ UNKNOWN,
    /*  16 */ UNKNOWN,
    /*  17 */ UNKNOWN,
    /*  18 */ UNKNOWN,
    /*  19 */ UNKNOWN,
    /*  20 */ UNKNOWN,
    /*  21 */ UNKNOWN,
    /*  22 */ UNKNOWN,
    /*  23 */ UNKNOWN,
    /*  24 */ UNKNOWN,
    /*  25 */ UNKNOWN,
    /*  26 */ UNKNOWN,
    /*  27 */ UNKNOWN,
    /*  28 */ UNKNOWN,
    /*  29 */ UNKNOWN,
    /*  30 */ UNKNOWN,
    /*  31 */ UNKNOWN,
    /*  32 */ plain(Scancode::SPACE),
    /*  33 */ shifted(Scancode::DIGIT_1), // '!'
    /*  34 */ shifted(Scancode::APOSTROPHE), // '"'
    /*  35 */ shifted(Scancode::DIGIT_3), // '#'
    /*  36 */ shifted(Scancode::DIGIT_4), // '$'
    /*  37 */ shifted(Scancode::DIGIT_5), // '%'
    /*  38 */ shifted(Scancode::DIGIT_7), // '&'
    /*  39 */ plain(Scancode::APOSTROPHE), // '''
    /*  40 */ shifted(Scancode::DIGIT_9), // '('
    /*  41 */ shifted(Scancode::DIGIT_0), // ')'
    /*  42 */ shifted(Scancode::DIGIT_8), // '*'
    /*  43 */ shifted(Scancode::EQUALS), // '+'
    /*  44 */ plain(Scancode::COMMA), // ','
    /*  45 */ plain(Scancode::MINUS), // '-'
    /*  46 */ plain(Scancode::PERIOD), // '.'
    /*  47 */ plain(Scancode::SLASH), // '/'
    /*  48 */ plain(Scancode::DIGIT_0),
    /*  49 */ plain(Scancode::DIGIT_1),
    /*  50 */ plain(Scancode::DIGIT_2),
    /*  51 */ plain(Scancode::DIGIT_3),
    /*  52 */ plain(Scancode::DIGIT_4),
    /*  53 */ plain(Scancode::DIGIT_5),
    /*  54 */ plain(Scancode::DIGIT_6),
    /*  55 */ plain(Scancode::DIGIT_7),
    /*  56 */ plain(Scancode::DIGIT_8),
    /*  57 */ plain(Scancode::DIGIT_9),
    /*  58 */ shifted(Scancode::SEMICOLON), // ':'
    /*  59 */ plain(Scancode::SEMICOLON), // ';'
    /*  60 */ shifted(Scancode::COMMA), // '<'
    /*  61 */ plain(Scancode::EQUALS), // '='
    /*  62 */ shifted(Scancode::PERIOD), // '>'
    /*  63 */ shifted(Scancode::SLASH), // '?'
    /*  64 */ shifted(Scancode::DIGIT_2), // '@'
    /*  65 */ shifted(Scancode::A),
    /*  66 */ shifted(Scancode::B),
    /*  67 */ shifted(Scancode::C),
    /*  68 */ shifted(Scancode::D),
    /*  69 */ shifted(Scancode::E),
    /*  70 */ shifted(Scancode::F),
    /*  71 */ shifted(Scancode::G),
    /*  72 */ shifted(Scancode::H),
    /*  73 */ shifted(Scancode::I),
    /*  74 */ shifted(Scancode::J),
    /*  75 */ shifted(Scancode::K),
    /*  76 */ shifted(Scancode::L),
    /*  77 */ shifted(Scancode::M),
    /*  78 */ shifted(Scancode::N),
    /*  79 */ shifted(Scancode::O),
    /*  80 */ shifted(Scancode::P),
    /*  81 */ shifted(Scancode::Q),
    /*  82 */ shifted(Scancode::R),
    /*  83 */ shifted(Scancode::S),
    /*  84 */ shifted(Scancode::T),
    /*  85 */ shifted(Scancode::U),
    /*  86 */ shifted(Scancode::V),
    /*  87 */ shifted(Scancode::W),
    /*  88 */ shifted(Scancode::X),
    /*  89 */ shifted(Scancode::Y),
    /*  90 */ shifted(Scancode::Z),
    /*  91 */ plain(Scancode::LEFT_BRACKET), // '['
    /*  92 */ plain(Scancode::BACKSLASH), // '\'
    /*  93 */ plain(Scancode::RIGHT_BRACKET), // ']'
    /*  94 */ shifted(Scancode::DIGIT_6), // '^'
    /*  95 */ shifted(Scancode::MINUS), // '_'
    /*  96 */ shifted(Scancode::GRAVE), // '`'
    /*  97 */ plain(Scancode::A),
    /*  98 */ plain(Scancode::B),
    /*  99 */ plain(Scancode::C),
    /* 100 */ plain(Scancode::D),
    /* 101 */ plain(Scancode::E),
    /* 102 */ plain(Scancode::F),
    /* 103 */ plain(Scancode::G),
    /* 104 */ plain(Scancode::H),
    /* 105 */ plain(Scancode::I),
    /* 106 */ plain(Scancode::J),
    /* 107 */ plain(Scancode::K),
    /* 108 */ plain(Scancode::L),
    /* 109 */ plain(Scancode::M),
    /* 110 */ plain(Scancode::N),
    /* 111 */ plain(Scancode::O),
    /* 112 */ plain(Scancode::P),
    /* 113 */ plain(Scancode::Q),
    /* 114 */ plain(Scancode::R),
    /* 115 */ plain(Scancode::S),
    /* 116 */ plain(Scancode::T),
    /* 117 */ plain(Scancode::U),
    /* 118 */ plain(Scancode::V),
    /* 119 */ plain(Scancode::W),
    /* 120 */ plain(Scancode::X),
    /* 121 */ plain(Scancode::Y),
    /* 122 */ plain(Scancode::Z),
    /* 123 */ shifted(Scancode::LEFT_BRACKET), // '{'
    /* 124 */ shifted(Scancode::BACKSLASH), // '|'
    /* 125 */ shifted(Scancode::RIGHT_BRACKET), // '}'
    /* 126 */ shifted(Scancode::GRAVE), // '~'
    /* 127 */ shifted(Scancode::BACKSPACE),
];
