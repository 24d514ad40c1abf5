use core::fmt::Display;

use serde::{Deserialize, Serialize};

/// A width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    /// The width in pixels.
    pub width: i32,

    /// The height in pixels.
    pub height: i32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the size rotated by `rotation` quarter-turns. Negative rotations turn the other
    /// way, only odd quarter-turns swap the dimensions.
    pub const fn rotated(self, rotation: i32) -> Self {
        if rotation.rem_euclid(2) == 1 {
            Self {
                width: self.height,
                height: self.width,
            }
        } else {
            self
        }
    }

    /// The number of pixels covered by this size.
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Returns whether the size is wider than it is tall.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Returns whether the size is taller than it is wide.
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
