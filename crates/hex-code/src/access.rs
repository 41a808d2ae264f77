//! Per-channel reads and writes via string surgery.
//!
//! All channel math goes through the long form first, so a short code never
//! leaks a single-digit channel into byte-level logic.

use hex_core::{Argb, Channel, HexError, HexResult};

use crate::form::{to_long, to_short};
use crate::validate::{has_alpha, is_color_with_alpha, trim_prefix};

/// Alpha byte of a code; 255 when the code has no alpha segment.
///
/// Codes without alpha are opaque by definition. Malformed or empty codes
/// also read as 255.
///
/// ```
/// assert_eq!(hex_code::alpha("#80112233"), 0x80);
/// assert_eq!(hex_code::alpha("#112233"), 255);
/// ```
pub fn alpha(code: &str) -> u8 {
    match is_color_with_alpha(code) {
        Ok(true) => byte_at(trim_prefix(code), 0).unwrap_or(u8::MAX),
        _ => u8::MAX,
    }
}

/// Reads one color channel.
///
/// The channel is located from the end of the long form, so codes with or
/// without an alpha segment resolve the same way.
///
/// # Errors
///
/// [`HexError::InvalidFormat`] if the code is malformed.
pub fn channel(code: &str, which: Channel) -> HexResult<u8> {
    let long = to_long(code)?;
    let digits = trim_prefix(&long);
    byte_at(digits, digits.len() - which.offset_from_end())
}

/// Decodes a code into its four byte channels.
///
/// # Errors
///
/// [`HexError::InvalidFormat`] if the code is malformed.
pub fn to_argb(code: &str) -> HexResult<Argb> {
    let long = to_long(code)?;
    let digits = trim_prefix(&long);
    let end = digits.len();
    let a = if end == 8 { byte_at(digits, 0)? } else { u8::MAX };

    Ok(Argb::new(
        a,
        byte_at(digits, end - 6)?,
        byte_at(digits, end - 4)?,
        byte_at(digits, end - 2)?,
    ))
}

/// Encodes `#AARRGGBB` (uppercase).
pub fn from_argb(c: Argb) -> String {
    format!("#{:02X}{:02X}{:02X}{:02X}", c.a, c.r, c.g, c.b)
}

/// Encodes `#RRGGBB` (uppercase).
pub fn from_rgb(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Replaces the alpha byte, always yielding the 8-digit form.
///
/// A short code is expanded first.
///
/// ```
/// assert_eq!(hex_code::set_alpha(0x80, "#112233").unwrap(), "#80112233");
/// assert_eq!(hex_code::set_alpha(0x00, "#F0D").unwrap(), "#00FF00DD");
/// ```
///
/// # Errors
///
/// [`HexError::InvalidFormat`] if the code is malformed.
pub fn set_alpha(alpha: u8, code: &str) -> HexResult<String> {
    let long = to_long(code)?;
    let digits = trim_prefix(&long);
    Ok(format!("#{alpha:02X}{}", &digits[digits.len() - 6..]))
}

/// Replaces one color channel.
///
/// The code is decoded, the channel swapped and the result re-encoded with
/// the original alpha. Codes without alpha are then passed through
/// [`to_short`], so the result may come back in short form.
///
/// Codes with alpha are the exception to that re-shortening: they are never
/// passed through [`to_short`] and always come back as `#AARRGGBB`, even when
/// the color pairs collapse, because [`to_short`] would drop the alpha byte.
///
/// # Errors
///
/// [`HexError::InvalidFormat`] if the code is malformed.
pub fn set_channel(code: &str, which: Channel, value: u8) -> HexResult<String> {
    let argb = to_argb(code)?.with_channel(which, value);
    if has_alpha(code) {
        Ok(from_argb(argb))
    } else {
        to_short(&from_rgb(argb.r, argb.g, argb.b))
    }
}

/// Parses the two hex digits starting at `start`.
fn byte_at(digits: &str, start: usize) -> HexResult<u8> {
    digits
        .get(start..start + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .ok_or_else(|| HexError::invalid_format(digits))
}
