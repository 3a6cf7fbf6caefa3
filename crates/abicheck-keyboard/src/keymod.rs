use core::fmt;

use bitflags::bitflags;

bitflags! {
    /// Mask of the modifier keys held while a key event is produced.
    ///
    /// Stored as a 16-bit value in keyboard event records.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[repr(transparent)]
    pub struct Keymod: u16 {
        const LSHIFT = 0x0001;
        const RSHIFT = 0x0002;
        const LCTRL = 0x0040;
        const RCTRL = 0x0080;
        const LALT = 0x0100;
        const RALT = 0x0200;
        const LGUI = 0x0400;
        const RGUI = 0x0800;
        const NUM = 0x1000;
        const CAPS = 0x2000;
        const MODE = 0x4000;
        const SCROLL = 0x8000;

        const CTRL = Self::LCTRL.bits() | Self::RCTRL.bits();
        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        const ALT = Self::LALT.bits() | Self::RALT.bits();
        const GUI = Self::LGUI.bits() | Self::RGUI.bits();
    }
}

impl Keymod {
    /// No modifier held.
    pub const NONE: Self = Self::empty();

    /// True when either shift key is part of the mask.
    pub const fn has_shift(self) -> bool {
        self.intersects(Self::SHIFT)
    }
}

impl fmt::Display for Keymod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }

        bitflags::parser::to_writer(self, f)
    }
}
