//! Equality, hashing and arithmetic for [`HexColor`].
//!
//! Arithmetic runs through [`ScRgb`]: both operands are converted to linear
//! floats, combined, and re-encoded as an 8-digit code. Results are therefore
//! always `#AARRGGBB`.
//!
//! # Operators
//!
//! | Expression | Result |
//! |------------|--------|
//! | `a + b` | `HexColor` |
//! | `a - b` | `HexColor` |
//! | `a * k` | `HexColor` |
//! | `a / k` | `HexResult<HexColor>` (fails for zero or non-finite `k`) |
//! | `a == "#F0D"` | `bool` (text parsed first) |
//! | `a == 0xFFFF00DD` | `bool` (packed ARGB) |

use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};

use hex_core::{HexError, HexResult, PlatformColor};
use tracing::trace;

use crate::color::HexColor;
use crate::scrgb::ScRgb;

impl HexColor {
    /// Multiplies every channel (alpha included) in scRGB space.
    pub fn scale(&self, coefficient: f32) -> HexColor {
        *self * coefficient
    }

    /// Divides every channel (alpha included) in scRGB space.
    ///
    /// # Errors
    ///
    /// [`HexError::Argument`] if `coefficient` is zero, NaN or infinite;
    /// `self` is untouched.
    pub fn divide(&self, coefficient: f32) -> HexResult<HexColor> {
        if coefficient == 0.0 {
            return Err(HexError::argument("division by zero is not allowed"));
        }
        if !coefficient.is_finite() {
            return Err(HexError::argument(format!(
                "division coefficient must be finite, got {coefficient}"
            )));
        }
        Ok(*self * coefficient.recip())
    }

    /// Equality as judged by a host color type.
    ///
    /// Both sides are converted to `P` and compared with `P`'s own equality,
    /// so any host-side comparison rules apply.
    pub fn eq_via<P>(&self, other: &HexColor) -> bool
    where
        P: PlatformColor + PartialEq,
    {
        self.to_platform::<P>() == other.to_platform::<P>()
    }

    /// Host-defined closeness, using `P::is_close`.
    pub fn is_close_via<P: PlatformColor>(&self, other: &HexColor) -> bool {
        self.to_platform::<P>().is_close(&other.to_platform::<P>())
    }

    /// Closeness of the scRGB float channels.
    pub fn is_close(&self, other: &HexColor) -> bool {
        self.is_close_via::<ScRgb>(other)
    }

    /// Symmetric form of [`is_close`](Self::is_close).
    pub fn are_close(a: &HexColor, b: &HexColor) -> bool {
        a.is_close(b)
    }

    fn combine(self, rhs: HexColor, op: &'static str, f: impl FnOnce(ScRgb, ScRgb) -> ScRgb) -> HexColor {
        let out = HexColor::from_platform(&f(self.to_platform(), rhs.to_platform()));
        trace!(lhs = %self, rhs = %rhs, op, result = %out, "HexColor arithmetic");
        out
    }
}

impl PartialEq for HexColor {
    /// Compares resolved `A, R, G, B` bytes, not the code text.
    fn eq(&self, other: &Self) -> bool {
        self.argb() == other.argb()
    }
}

impl Eq for HexColor {}

impl PartialEq<str> for HexColor {
    /// Parses `other` and compares bytes; an invalid code is never equal.
    fn eq(&self, other: &str) -> bool {
        HexColor::parse(other).is_ok_and(|c| *self == c)
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<u32> for HexColor {
    /// Compares against a packed `A << 24 | R << 16 | G << 8 | B` value.
    fn eq(&self, other: &u32) -> bool {
        self.to_packed_argb() == *other
    }
}

impl Hash for HexColor {
    /// Hashes the fill text and the alpha byte.
    ///
    /// Equal colors written in different forms (`#FFF` vs `#FFFFFF`) hash
    /// differently.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fill().as_str().hash(state);
        self.a().hash(state);
    }
}

impl Add for HexColor {
    type Output = HexColor;

    fn add(self, rhs: HexColor) -> Self::Output {
        self.combine(rhs, "add", |a, b| a + b)
    }
}

impl Sub for HexColor {
    type Output = HexColor;

    fn sub(self, rhs: HexColor) -> Self::Output {
        self.combine(rhs, "sub", |a, b| a - b)
    }
}

impl Mul<f32> for HexColor {
    type Output = HexColor;

    fn mul(self, coefficient: f32) -> Self::Output {
        let out = HexColor::from_platform(&(self.to_platform::<ScRgb>() * coefficient));
        trace!(lhs = %self, coefficient, result = %out, "HexColor scale");
        out
    }
}

impl Div<f32> for HexColor {
    type Output = HexResult<HexColor>;

    fn div(self, coefficient: f32) -> Self::Output {
        self.divide(coefficient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_core::Argb;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(c: &HexColor) -> u64 {
        let mut h = DefaultHasher::new();
        c.hash(&mut h);
        h.finish()
    }

    fn hex(code: &str) -> HexColor {
        HexColor::parse(code).unwrap()
    }

    #[test]
    fn test_equality_ignores_form_and_case() {
        assert_eq!(hex("#FFF"), hex("#ffffff"));
        assert_eq!(hex("#FFF"), hex("#FFFFFFFF"));
        assert_ne!(hex("#FFF"), hex("#FEFFFFFF"));
    }

    #[test]
    fn test_hash_same_form() {
        assert_eq!(hash_of(&hex("#80112233")), hash_of(&hex("80112233")));
        assert_eq!(hash_of(&hex("#112233")), hash_of(&hex("#FF112233")));
    }

    #[test]
    fn test_add() {
        let red = hex("#F00");
        let blue = hex("#00F");
        assert_eq!((red + blue).as_str(), "#FFFF00FF");
    }

    #[test]
    fn test_sub() {
        let white = hex("#FFF");
        assert_eq!((white - white).as_str(), "#00000000");
    }

    #[test]
    fn test_scale() {
        let white = hex("#FFF");
        assert_eq!((white * 0.5).as_str(), "#80BCBCBC");
        assert_eq!(white.scale(1.0), white);
    }

    #[test]
    fn test_divide() {
        let white = hex("#FFF");
        assert_eq!((white / 2.0).unwrap(), white * 0.5);
        assert_eq!(white.divide(1.0).unwrap(), white);
    }

    #[test]
    fn test_divide_by_zero() {
        let c = hex("#123456");
        let err = (c / 0.0).unwrap_err();
        assert!(err.is_argument_error());
        assert_eq!(c.as_str(), "#123456");
        assert!(c.divide(-0.0).is_err());
    }

    #[test]
    fn test_divide_rejects_non_finite() {
        let c = hex("#80112233");
        assert!(c.divide(f32::NAN).unwrap_err().is_argument_error());
        assert!((c / f32::INFINITY).unwrap_err().is_argument_error());
        assert!(c.divide(f32::NEG_INFINITY).is_err());
        assert_eq!(c.as_str(), "#80112233");
    }

    #[test]
    fn test_eq_code_text_and_packed() {
        let c = hex("#FF00DD");
        assert_eq!(c, "#f0d");
        assert!(c.eq("FFFF00DD"));
        assert_ne!(c, "#FF00DE");
        assert_ne!(c, "not a code");
        assert_ne!(c, "");
        assert_eq!(c, 0xFFFF00DDu32);
        assert_ne!(c, 0x00FF00DDu32);
    }

    #[test]
    fn test_eq_via_platform() {
        assert!(hex("#F0D").eq_via::<Argb>(&hex("#FFFF00DD")));
        assert!(hex("#F0D").eq_via::<ScRgb>(&hex("#FF00DD")));
        assert!(!hex("#F0D").eq_via::<ScRgb>(&hex("#FF00DE")));
    }

    #[test]
    fn test_close() {
        assert!(hex("#102030").is_close(&hex("#FF102030")));
        assert!(HexColor::are_close(&hex("#FFF"), &hex("#FFFFFF")));
        assert!(!hex("#102030").is_close(&hex("#102031")));
        assert!(hex("#102030").is_close_via::<Argb>(&hex("#102030")));
    }
}
