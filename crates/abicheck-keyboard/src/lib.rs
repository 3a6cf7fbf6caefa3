#![no_std]
#![doc = include_str!("../README.md")]

mod ascii;
mod keymod;
mod scancode;

use smallvec::SmallVec;

pub use self::ascii::{ascii_for_key, AsciiKeyInfo, ASCII_KEY_INFO_TABLE};
pub use self::keymod::Keymod;
pub use self::scancode::Scancode;

/// Key event emitted by the virtual keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    KeyPressed(Scancode),
    KeyReleased(Scancode),
}

impl Operation {
    pub fn scancode(self) -> Scancode {
        match self {
            Self::KeyPressed(scancode) | Self::KeyReleased(scancode) => scancode,
        }
    }

    pub fn is_press(self) -> bool {
        matches!(self, Self::KeyPressed(_))
    }
}

/// Keystrokes produced when a virtual keyboard types one code point.
///
/// The key is pressed then released. When the character needs shift, the left shift key
/// wraps the keystroke. Code points outside the ASCII range produce a press/release of
/// [`Scancode::UNKNOWN`], leaving it to the receiver to deliver the text by other means.
pub fn keystrokes_for_char(ch: u32) -> SmallVec<[Operation; 4]> {
    let info = u8::try_from(ch)
        .ok()
        .and_then(AsciiKeyInfo::for_ascii)
        .unwrap_or(AsciiKeyInfo::UNKNOWN);

    let mut operations = SmallVec::new();

    if info.needs_shift() {
        operations.push(Operation::KeyPressed(Scancode::LSHIFT));
    }

    operations.push(Operation::KeyPressed(info.code));
    operations.push(Operation::KeyReleased(info.code));

    if info.needs_shift() {
        operations.push(Operation::KeyReleased(Scancode::LSHIFT));
    }

    operations
}

/// Keystrokes for a whole string, in order.
pub fn keystrokes_for_text(text: &str) -> impl Iterator<Item = Operation> + '_ {
    text.chars().flat_map(|ch| keystrokes_for_char(u32::from(ch)))
}
