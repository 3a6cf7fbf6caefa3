use core::fmt;

/// Platform-independent identifier of a physical key.
///
/// Values are the USB HID keyboard usage IDs, so the code of a key does not depend
/// on the character it currently produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Scancode(u32);

impl Scancode {
    pub const fn from_u32(code: u32) -> Self {
        Self(code)
    }

    pub const fn as_u32(self) -> u32 {
        self.0
    }

    pub const fn is_unknown(self) -> bool {
        self.0 == Self::UNKNOWN.0
    }

    /// Returns true for the eight modifier keys (ctrl, shift, alt, gui on both sides).
    pub const fn is_modifier(self) -> bool {
        matches!(self.0, 224..=231)
    }

    /// Human-readable name of the key, as shown in key binding dialogs.
    pub fn name(self) -> Option<&'static str> {
        static LETTERS: [&str; 26] = [
            "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T", "U",
            "V", "W", "X", "Y", "Z",
        ];
        static DIGITS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];
        static MAIN_BLOCK: [&str; 17] = [
            "Return",
            "Escape",
            "Backspace",
            "Tab",
            "Space",
            "-",
            "=",
            "[",
            "]",
            "\\",
            "#",
            ";",
            "'",
            "`",
            ",",
            ".",
            "/",
        ];
        static FUNCTION_KEYS: [&str; 12] = [
            "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
        ];
        static NAVIGATION: [&str; 13] = [
            "PrintScreen",
            "ScrollLock",
            "Pause",
            "Insert",
            "Home",
            "PageUp",
            "Delete",
            "End",
            "PageDown",
            "Right",
            "Left",
            "Down",
            "Up",
        ];
        static MODIFIERS: [&str; 8] = [
            "Left Ctrl",
            "Left Shift",
            "Left Alt",
            "Left GUI",
            "Right Ctrl",
            "Right Shift",
            "Right Alt",
            "Right GUI",
        ];

        let (names, first): (&[&'static str], u32) = match self.0 {
            4..=29 => (LETTERS.as_slice(), 4),
            30..=39 => (DIGITS.as_slice(), 30),
            40..=56 => (MAIN_BLOCK.as_slice(), 40),
            57 => return Some("CapsLock"),
            58..=69 => (FUNCTION_KEYS.as_slice(), 58),
            70..=82 => (NAVIGATION.as_slice(), 70),
            224..=231 => (MODIFIERS.as_slice(), 224),
            _ => return None,
        };

        let idx = usize::try_from(self.0.checked_sub(first)?).ok()?;

        names.get(idx).copied()
    }
}

impl fmt::Display for Scancode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{:#04x}", self.0),
        }
    }
}

impl From<u32> for Scancode {
    fn from(code: u32) -> Self {
        Self::from_u32(code)
    }
}

impl From<Scancode> for u32 {
    fn from(scancode: Scancode) -> Self {
        scancode.as_u32()
    }
}

// Based on the USB HID Usage Tables, keyboard/keypad page (0x07)

impl Scancode {
    pub const UNKNOWN: Self = Self(0);

    pub const A: Self = Self(4);
    pub const B: Self = Self(5);
    pub const C: Self = Self(6);
    pub const D: Self = Self(7);
    pub const E: Self = Self(8);
    pub const F: Self = Self(9);
    pub const G: Self = Self(10);
    pub const H: Self = Self(11);
    pub const I: Self = Self(12);
    pub const J: Self = Self(13);
    pub const K: Self = Self(14);
    pub const L: Self = Self(15);
    pub const M: Self = Self(16);
    pub const N: Self = Self(17);
    pub const O: Self = Self(18);
    pub const P: Self = Self(19);
    pub const Q: Self = Self(20);
    pub const R: Self = Self(21);
    pub const S: Self = Self(22);
    pub const T: Self = Self(23);
    pub const U: Self = Self(24);
    pub const V: Self = Self(25);
    pub const W: Self = Self(26);
    pub const X: Self = Self(27);
    pub const Y: Self = Self(28);
    pub const Z: Self = Self(29);

    pub const DIGIT_1: Self = Self(30);
    pub const DIGIT_2: Self = Self(31);
    pub const DIGIT_3: Self = Self(32);
    pub const DIGIT_4: Self = Self(33);
    pub const DIGIT_5: Self = Self(34);
    pub const DIGIT_6: Self = Self(35);
    pub const DIGIT_7: Self = Self(36);
    pub const DIGIT_8: Self = Self(37);
    pub const DIGIT_9: Self = Self(38);
    pub const DIGIT_0: Self = Self(39);

    pub const RETURN: Self = Self(40);
    pub const ESCAPE: Self = Self(41);
    pub const BACKSPACE: Self = Self(42);
    pub const TAB: Self = Self(43);
    pub const SPACE: Self = Self(44);

    pub const MINUS: Self = Self(45);
    pub const EQUALS: Self = Self(46);
    pub const LEFT_BRACKET: Self = Self(47);
    pub const RIGHT_BRACKET: Self = Self(48);
    /// Located at the lower left of the return key on ISO keyboards and at the right end
    /// of the QWERTY row on ANSI keyboards.
    pub const BACKSLASH: Self = Self(49);
    /// ISO USB keyboards actually use this code instead of 49 for the same key.
    pub const NON_US_HASH: Self = Self(50);
    pub const SEMICOLON: Self = Self(51);
    pub const APOSTROPHE: Self = Self(52);
    /// Located in the top left corner, on both ANSI and ISO keyboards.
    pub const GRAVE: Self = Self(53);
    pub const COMMA: Self = Self(54);
    pub const PERIOD: Self = Self(55);
    pub const SLASH: Self = Self(56);

    pub const CAPS_LOCK: Self = Self(57);

    pub const F1: Self = Self(58);
    pub const F2: Self = Self(59);
    pub const F3: Self = Self(60);
    pub const F4: Self = Self(61);
    pub const F5: Self = Self(62);
    pub const F6: Self = Self(63);
    pub const F7: Self = Self(64);
    pub const F8: Self = Self(65);
    pub const F9: Self = Self(66);
    pub const F10: Self = Self(67);
    pub const F11: Self = Self(68);
    pub const F12: Self = Self(69);

    pub const PRINT_SCREEN: Self = Self(70);
    pub const SCROLL_LOCK: Self = Self(71);
    pub const PAUSE: Self = Self(72);
    pub const INSERT: Self = Self(73);
    pub const HOME: Self = Self(74);
    pub const PAGE_UP: Self = Self(75);
    pub const DELETE: Self = Self(76);
    pub const END: Self = Self(77);
    pub const PAGE_DOWN: Self = Self(78);
    pub const RIGHT: Self = Self(79);
    pub const LEFT: Self = Self(80);
    pub const DOWN: Self = Self(81);
    pub const UP: Self = Self(82);

    pub const LCTRL: Self = Self(224);
    pub const LSHIFT: Self = Self(225);
    /// Alt, option
    pub const LALT: Self = Self(226);
    /// Windows, command (apple), meta
    pub const LGUI: Self = Self(227);
    pub const RCTRL: Self = Self(228);
    pub const RSHIFT: Self = Self(229);
    /// Alt gr, option
    pub const RALT: Self = Self(230);
    pub const RGUI: Self = Self(231);
}
