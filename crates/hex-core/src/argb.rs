//! Byte colors and the host conversion boundary.
//!
//! [`Argb`] is the resolved form of every hex code: four 8-bit channels with
//! alpha first. [`PlatformColor`] is implemented by whatever color type the
//! host environment uses (a UI toolkit color, a pixel type, ...) so that hex
//! colors can cross into it and back.

use std::fmt;

use crate::channel::Channel;

/// A 4-channel byte color in A, R, G, B order.
///
/// # Example
///
/// ```
/// use hex_core::Argb;
///
/// let c = Argb::from_packed(0x80FF00DD);
/// assert_eq!(c, Argb::new(0x80, 0xFF, 0x00, 0xDD));
/// assert_eq!(c.to_packed(), 0x80FF00DD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb {
    /// Alpha (255 = opaque)
    pub a: u8,
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Argb {
    /// Fully transparent black.
    pub const TRANSPARENT: Argb = Argb::new(0, 0, 0, 0);

    /// Creates a color from explicit channels.
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(255, r, g, b)
    }

    /// Unpacks `A << 24 | R << 16 | G << 8 | B`.
    #[inline]
    pub const fn from_packed(argb: u32) -> Self {
        Self::new(
            ((argb >> 24) & 0xFF) as u8,
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
        )
    }

    /// Packs into `A << 24 | R << 16 | G << 8 | B`.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Channels as `[A, R, G, B]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.a, self.r, self.g, self.b]
    }

    /// Reads one color channel.
    #[inline]
    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::R => self.r,
            Channel::G => self.g,
            Channel::B => self.b,
        }
    }

    /// Returns a copy with one color channel replaced.
    #[inline]
    pub const fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::R => self.r = value,
            Channel::G => self.g = value,
            Channel::B => self.b = value,
        }
        self
    }
}

impl From<[u8; 4]> for Argb {
    fn from(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Argb> for [u8; 4] {
    fn from(c: Argb) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARGB({}, {}, {}, {})", self.a, self.r, self.g, self.b)
    }
}

/// Conversion hook between hex colors and a host color type.
///
/// Implementors supply the byte conversion in both directions. Closeness
/// defaults to exact byte equality; hosts with a tolerance-based comparison
/// override [`is_close`](PlatformColor::is_close).
pub trait PlatformColor: Sized {
    /// Builds a host color from byte channels.
    fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self;

    /// Reads the byte channels of a host color.
    fn to_argb(&self) -> Argb;

    /// Host-defined "close enough" predicate.
    fn is_close(&self, other: &Self) -> bool {
        self.to_argb() == other.to_argb()
    }
}

impl PlatformColor for Argb {
    #[inline]
    fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb::new(a, r, g, b)
    }

    #[inline]
    fn to_argb(&self) -> Argb {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_byte_order() {
        let c = Argb::from_packed(0x11223344);
        assert_eq!(c.a, 0x11);
        assert_eq!(c.r, 0x22);
        assert_eq!(c.g, 0x33);
        assert_eq!(c.b, 0x44);
        assert_eq!(c.to_packed(), 0x11223344);
    }

    #[test]
    fn test_with_channel() {
        let c = Argb::opaque(1, 2, 3).with_channel(Channel::G, 200);
        assert_eq!(c, Argb::new(255, 1, 200, 3));
        assert_eq!(c.channel(Channel::G), 200);
    }

    #[test]
    fn test_default_closeness_is_equality() {
        let a = Argb::opaque(10, 20, 30);
        assert!(a.is_close(&Argb::opaque(10, 20, 30)));
        assert!(!a.is_close(&Argb::opaque(10, 20, 31)));
    }
}
