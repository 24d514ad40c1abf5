use core::{
    fmt::Display,
    ops::{BitAnd, BitOr, BitOrAssign},
};

use serde::{Deserialize, Serialize};

/// Capability and shape flags of a display. Bits without a name are kept as reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayFlags(i32);

impl DisplayFlags {
    /// The display has a round shape.
    pub const ROUND: Self = Self(1 << 4);

    /// No flags set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wrap the raw flag bits reported by the platform.
    pub const fn from_bits(bits: i32) -> Self {
        Self(bits)
    }

    /// The raw flag bits.
    pub const fn bits(self) -> i32 {
        self.0
    }

    /// Returns whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns whether no bits are set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for DisplayFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DisplayFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DisplayFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl Display for DisplayFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
