//! Short/long form conversion and fill extraction.

use hex_core::{HexError, HexResult};

use crate::prefixed;
use crate::validate::{is_color_with_alpha, trim_prefix, validated};

/// Expands a short code to long form (`#F0D` -> `#FF00DD`).
///
/// Long codes pass through with a `#` prefix ensured.
///
/// # Errors
///
/// [`HexError::InvalidFormat`] if the code is malformed.
pub fn to_long(code: &str) -> HexResult<String> {
    let digits = validated(code)?;
    if digits.len() != 3 {
        return Ok(prefixed(digits));
    }

    let mut out = String::with_capacity(7);
    out.push(crate::HASH);
    for c in digits.chars() {
        out.push(c);
        out.push(c);
    }
    Ok(out)
}

/// Collapses a long code to short form when every channel pair is a
/// repeated digit (`#FF00DD` -> `#F0D`).
///
/// Any alpha byte is dropped when the code collapses. If even one pair
/// differs the code is returned unchanged (with a `#` prefix); there is no
/// partial shortening. Pairs compare by exact character, so `Ff` does not
/// collapse.
///
/// # Errors
///
/// [`HexError::InvalidFormat`] if the code is malformed.
pub fn to_short(code: &str) -> HexResult<String> {
    let digits = validated(code)?;
    if digits.len() == 3 {
        return Ok(prefixed(digits));
    }

    let fill = digits[digits.len() - 6..].as_bytes();
    let collapses = fill.chunks_exact(2).all(|pair| pair[0] == pair[1]);
    if !collapses {
        return Ok(prefixed(digits));
    }

    let short: String = fill.chunks_exact(2).map(|pair| pair[0] as char).collect();
    Ok(prefixed(&short))
}

/// The code without its alpha byte, form otherwise untouched.
///
/// `#80FF00DD` -> `#FF00DD`, `#F0D` -> `#F0D`.
///
/// # Errors
///
/// [`HexError::InvalidFormat`] if the code is malformed.
pub fn fill(code: &str) -> HexResult<String> {
    let digits = validated(code)?;
    Ok(prefixed(alpha_stripped(digits)))
}

/// Drops the alpha byte of a valid ARGB code; any other input only gains a
/// `#` prefix.
///
/// Unlike [`fill`] this does not reject malformed codes.
///
/// # Errors
///
/// [`HexError::NullOrEmpty`] if `code` is empty.
pub fn set_fill(code: &str) -> HexResult<String> {
    let digits = trim_prefix(code);
    if is_color_with_alpha(code)? {
        Ok(prefixed(alpha_stripped(digits)))
    } else if digits.is_empty() {
        Err(HexError::invalid_format(code))
    } else {
        Ok(prefixed(digits))
    }
}

#[inline]
fn alpha_stripped(digits: &str) -> &str {
    if digits.len() == 8 { &digits[2..] } else { digits }
}
