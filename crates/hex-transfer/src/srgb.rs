//! sRGB <-> scRGB transfer pair.
//!
//! The two directions are written with the constants host color types have
//! always used for byte/float conversion. They are kept as-is for bit
//! compatibility: the decode breakpoint is 0.04045 with exponent 2.4, the
//! encode breakpoint is 0.0031308 with exponent 5/12, and encoding rounds by
//! adding 0.5 before truncating to a byte.
//!
//! # Range
//!
//! - Byte side: [0, 255]
//! - Float side: [0, 1], values outside clamp to the nearest end

use hex_core::Argb;

/// Decode breakpoint on the normalized sRGB side.
pub const DECODE_BREAK: f64 = 0.04045;

/// Encode breakpoint on the linear side.
pub const ENCODE_BREAK: f64 = 0.0031308;

/// sRGB EOTF: decodes a byte channel to a linear float.
///
/// # Formula
///
/// ```text
/// n = b / 255
/// n <= 0        -> 0
/// n <= 0.04045  -> n / 12.92
/// n <  1        -> ((n + 0.055) / 1.055)^2.4
/// otherwise     -> 1
/// ```
///
/// # Example
///
/// ```rust
/// use hex_transfer::srgb::eotf;
///
/// assert_eq!(eotf(0), 0.0);
/// assert_eq!(eotf(255), 1.0);
/// ```
#[inline]
pub fn eotf(b: u8) -> f32 {
    let n = b as f32 / 255.0;
    if !(n as f64 > 0.0) {
        0.0
    } else if n as f64 <= DECODE_BREAK {
        n / 12.92
    } else if n < 1.0 {
        ((n as f64 + 0.055) / 1.055).powf(2.4) as f32
    } else {
        1.0
    }
}

/// sRGB OETF: encodes a linear float to a byte channel.
///
/// NaN and anything at or below zero map to 0; anything at or above one maps
/// to 255.
///
/// # Formula
///
/// ```text
/// v <= 0          -> 0
/// v <= 0.0031308  -> trunc(255 * v * 12.92 + 0.5)
/// v <  1          -> trunc(255 * (1.055 * v^(5/12) - 0.055) + 0.5)
/// otherwise       -> 255
/// ```
///
/// # Example
///
/// ```rust
/// use hex_transfer::srgb::oetf;
///
/// assert_eq!(oetf(-0.5), 0);
/// assert_eq!(oetf(0.5), 188);
/// assert_eq!(oetf(7.0), 255);
/// ```
#[inline]
pub fn oetf(v: f32) -> u8 {
    if !(v as f64 > 0.0) {
        0
    } else if v as f64 <= ENCODE_BREAK {
        (255.0f32 * v * 12.92f32 + 0.5f32) as u8
    } else if (v as f64) < 1.0 {
        let encoded = 1.055f32 * (v as f64).powf(5.0 / 12.0) as f32 - 0.055f32;
        (255.0f32 * encoded + 0.5f32) as u8
    } else {
        u8::MAX
    }
}

/// Applies [`eotf`] to every channel, alpha included.
///
/// Returns `[A, R, G, B]`.
#[inline]
pub fn eotf_argb(c: Argb) -> [f32; 4] {
    [eotf(c.a), eotf(c.r), eotf(c.g), eotf(c.b)]
}

/// Applies [`oetf`] to `[A, R, G, B]`.
#[inline]
pub fn oetf_argb(v: [f32; 4]) -> Argb {
    Argb::new(oetf(v[0]), oetf(v[1]), oetf(v[2]), oetf(v[3]))
}
