//! The wrapping color level.
//!
//! Levels live in `1..=PALETTE_SIZE`. Stepping past either end wraps to the
//! other, so a running level can absorb any number of increments and
//! decrements without ever leaving the palette.

use std::fmt;

/// Number of distinct bracket colors.
pub const PALETTE_SIZE: u8 = 3;

/// Style keys, one per level, in level order.
const STYLE_KEYS: [&str; PALETTE_SIZE as usize] =
    ["BRACKET_LEVEL_1", "BRACKET_LEVEL_2", "BRACKET_LEVEL_3"];

/// A bracket color level in `1..=PALETTE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// The lowest level.
    pub const MIN: Level = Level(1);

    /// The highest level.
    pub const MAX: Level = Level(PALETTE_SIZE);

    /// Create a level, returning `None` when `value` is outside the palette.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= PALETTE_SIZE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The raw level value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// One level deeper, wrapping `MAX` to `MIN`.
    #[must_use]
    pub const fn increment(self) -> Self {
        if self.0 >= PALETTE_SIZE {
            Self::MIN
        } else {
            Self(self.0 + 1)
        }
    }

    /// One level shallower, wrapping `MIN` to `MAX`.
    #[must_use]
    pub const fn decrement(self) -> Self {
        if self.0 <= 1 { Self::MAX } else { Self(self.0 - 1) }
    }

    /// Style key the renderer uses for this level, e.g. `BRACKET_LEVEL_2`.
    #[must_use]
    pub const fn style_key(self) -> &'static str {
        STYLE_KEYS[(self.0 - 1) as usize]
    }

    /// Every level in ascending order.
    pub fn all() -> impl Iterator<Item = Level> {
        (1..=PALETTE_SIZE).map(Level)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}
