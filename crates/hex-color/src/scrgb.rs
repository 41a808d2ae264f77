//! Reference platform color with linear float channels.
//!
//! [`ScRgb`] models the host color types hex codes usually cross into: it
//! keeps linear scRGB floats next to the sRGB bytes, does arithmetic on the
//! floats and derives the bytes from them. `HexColor` arithmetic and
//! closeness go through this type.
//!
//! # Channel Mapping
//!
//! - Color channels: bytes <-> floats through the sRGB transfer pair
//! - Alpha: linear, `a / 255` one way and `round(clamp(a) * 255)` the other

use std::ops::{Add, Mul, Sub};

use hex_core::{Argb, PlatformColor};
use hex_transfer::srgb;

/// Color held as scRGB floats plus the sRGB bytes derived from them.
///
/// Float channels are not clamped, so sums and products can leave [0, 1];
/// only the byte view is clamped.
///
/// # Example
///
/// ```
/// use hex_color::{PlatformColor, ScRgb};
///
/// let white = ScRgb::from_argb(255, 255, 255, 255);
/// let half = white * 0.5;
/// assert_eq!(half.to_argb().a, 128);
/// assert_eq!(half.to_argb().r, 188);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScRgb {
    sc: [f32; 4],
    bytes: Argb,
}

impl ScRgb {
    /// Builds a color from scRGB `A, R, G, B` floats.
    pub fn from_scrgb(a: f32, r: f32, g: f32, b: f32) -> Self {
        Self {
            sc: [a, r, g, b],
            bytes: Argb::new(alpha_byte(a), srgb::oetf(r), srgb::oetf(g), srgb::oetf(b)),
        }
    }

    /// The float channels as `[A, R, G, B]`.
    #[inline]
    pub fn values(&self) -> [f32; 4] {
        self.sc
    }

    fn zip_with(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        let sc: [f32; 4] = std::array::from_fn(|i| f(self.sc[i], rhs.sc[i]));
        let [a, r, g, b] = sc;
        Self::from_scrgb(a, r, g, b)
    }
}

fn alpha_byte(a: f32) -> u8 {
    // NaN survives clamp and casts to 0
    (a.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

/// Float closeness with a tolerance scaled to the operands.
fn floats_close(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    let eps = (a.abs() + b.abs() + 10.0) * f32::EPSILON;
    let delta = a - b;
    -eps < delta && eps > delta
}

impl PlatformColor for ScRgb {
    fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self {
            sc: [a as f32 / 255.0, srgb::eotf(r), srgb::eotf(g), srgb::eotf(b)],
            bytes: Argb::new(a, r, g, b),
        }
    }

    #[inline]
    fn to_argb(&self) -> Argb {
        self.bytes
    }

    fn is_close(&self, other: &Self) -> bool {
        self.sc.iter().zip(other.sc.iter()).all(|(&a, &b)| floats_close(a, b))
    }
}

impl PartialEq for ScRgb {
    /// Exact comparison of the float channels.
    fn eq(&self, other: &Self) -> bool {
        self.sc == other.sc
    }
}

impl Add for ScRgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |x, y| x + y)
    }
}

impl Sub for ScRgb {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |x, y| x - y)
    }
}

impl Mul<f32> for ScRgb {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        let [a, r, g, b] = self.sc.map(|v| v * rhs);
        Self::from_scrgb(a, r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argb_linear_alpha() {
        let c = ScRgb::from_argb(51, 0, 255, 0);
        assert_eq!(c.values(), [0.2, 0.0, 1.0, 0.0]);
        assert_eq!(c.to_argb(), Argb::new(51, 0, 255, 0));
    }

    #[test]
    fn test_add_saturates_bytes_not_floats() {
        let white = ScRgb::from_argb(255, 255, 255, 255);
        let sum = white + white;
        assert_eq!(sum.values(), [2.0; 4]);
        assert_eq!(sum.to_argb(), Argb::new(255, 255, 255, 255));
    }

    #[test]
    fn test_sub_floors_at_zero() {
        let red = ScRgb::from_argb(255, 255, 0, 0);
        let white = ScRgb::from_argb(255, 255, 255, 255);
        assert_eq!((red - white).to_argb(), Argb::TRANSPARENT);
    }

    #[test]
    fn test_scale() {
        let white = ScRgb::from_argb(255, 255, 255, 255);
        assert_eq!((white * 0.5).to_argb(), Argb::new(128, 188, 188, 188));
        assert_eq!((white * 0.0).to_argb(), Argb::TRANSPARENT);
    }

    #[test]
    fn test_closeness() {
        let a = ScRgb::from_scrgb(1.0, 0.5, 0.25, 0.0);
        let b = ScRgb::from_scrgb(1.0, 0.5 + f32::EPSILON, 0.25, 0.0);
        assert!(a.is_close(&b));
        assert_ne!(a, b);
        assert!(!a.is_close(&ScRgb::from_scrgb(1.0, 0.51, 0.25, 0.0)));
    }

    #[test]
    fn test_nan_alpha() {
        assert_eq!(alpha_byte(f32::NAN), 0);
        assert_eq!(alpha_byte(0.5), 128);
    }
}
