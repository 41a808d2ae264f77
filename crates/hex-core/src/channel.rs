//! Channel selector for per-channel code access.
//!
//! Alpha is not a [`Channel`]: it lives in the optional leading byte of an
//! 8-digit code and has its own accessors.

use std::fmt;
use std::str::FromStr;

use crate::error::HexError;

/// One of the three color channels of a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Red.
    R,
    /// Green.
    G,
    /// Blue.
    B,
}

impl Channel {
    /// All channels in code order.
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];

    /// Offset of the channel's two digits counted from the end of a long code.
    ///
    /// Counting from the end keeps the offset valid for both `RRGGBB` and
    /// `AARRGGBB` codes.
    #[inline]
    pub const fn offset_from_end(self) -> usize {
        match self {
            Channel::R => 6,
            Channel::G => 4,
            Channel::B => 2,
        }
    }

    /// Single-letter name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::R => "R",
            Channel::G => "G",
            Channel::B => "B",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = HexError;

    /// Parses `R`, `G` or `B` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "R" | "r" => Ok(Channel::R),
            "G" | "g" => Ok(Channel::G),
            "B" | "b" => Ok(Channel::B),
            other => Err(HexError::argument(format!(
                "invalid target color '{other}', use 'R', 'G', or 'B'"
            ))),
        }
    }
}
