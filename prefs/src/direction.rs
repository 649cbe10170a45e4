//! Swipe directions and their 2-bit wire codes.

/// Number of items in a quiz.
pub const ITEM_COUNT: usize = 81;

/// Length in bytes of a packed preference buffer.
///
/// 81 items at 2 bits each is 162 bits; the last byte carries only item 80
/// in its top 2 bits, with the remaining 6 bits zero.
pub const PACKED_LEN: usize = 21;

/// One of the four swipe outcomes for a quiz item.
///
/// The discriminants are the 2-bit wire codes and must never change:
/// `Left = 0`, `Right = 1`, `Down = 2`, `Up = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Direction {
    /// Indifferent / skip. Also the default for unanswered items.
    #[default]
    Left = 0,
    /// Liked.
    Right = 1,
    /// Strongly disliked.
    Down = 2,
    /// Strongly liked.
    Up = 3,
}

impl Direction {
    /// Returns the 2-bit wire code for this direction.
    #[must_use]
    pub const fn to_bits(self) -> u8 {
        self as u8
    }

    /// Parses a direction from a 2-bit wire code.
    ///
    /// Returns `None` for values above 3. Callers extracting codes with a
    /// `& 0b11` mask can rely on this never returning `None`.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            2 => Some(Self::Down),
            3 => Some(Self::Up),
            _ => None,
        }
    }
}
