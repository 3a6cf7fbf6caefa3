use core::fmt;

/// Structure packing a layout variant is compiled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Packing {
    /// Natural alignment of every member, `#[repr(C)]`.
    Default,
    /// Members aligned to at most 8 bytes, `#[repr(C, packed(8))]`.
    Pack8,
    /// Members aligned to at most 4 bytes, `#[repr(C, packed(4))]`.
    Pack4,
}

impl Packing {
    /// Packings compared against [`Packing::Default`], in checking order.
    pub const FORCED: [Self; 2] = [Self::Pack8, Self::Pack4];

    pub const ALL: [Self; 3] = [Self::Default, Self::Pack8, Self::Pack4];

    /// Maximum member alignment, `None` when unconstrained.
    pub const fn alignment(self) -> Option<usize> {
        match self {
            Self::Default => None,
            Self::Pack8 => Some(8),
            Self::Pack4 => Some(4),
        }
    }

    pub const fn is_forced(self) -> bool {
        self.alignment().is_some()
    }
}

impl fmt::Display for Packing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alignment() {
            Some(alignment) => write!(f, "{alignment}-byte alignment"),
            None => write!(f, "default alignment"),
        }
    }
}
