//! Code validation and shape queries.

use hex_core::{HexError, HexResult};

use crate::HASH;

/// Removes a single leading `#`, if any.
///
/// Never fails; empty input comes back empty.
///
/// ```
/// assert_eq!(hex_code::trim_prefix("#FFF"), "FFF");
/// assert_eq!(hex_code::trim_prefix("FFF"), "FFF");
/// assert_eq!(hex_code::trim_prefix(""), "");
/// ```
#[inline]
pub fn trim_prefix(code: &str) -> &str {
    code.strip_prefix(HASH).unwrap_or(code)
}

/// Checks that `code` is 3, 6 or 8 hex digits with an optional `#` prefix.
///
/// This is the one query that fails on empty input instead of answering
/// `false`; guard with `is_empty()` first when a plain boolean is wanted.
///
/// # Errors
///
/// [`HexError::NullOrEmpty`] if `code` is empty.
pub fn is_valid_code(code: &str) -> HexResult<bool> {
    if code.is_empty() {
        return Err(HexError::null_or_empty("code"));
    }

    let digits = trim_prefix(code);
    Ok(matches!(digits.len(), 3 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Returns `true` if the code carries an alpha byte (8 digits).
///
/// Looks at the length only; the digits are not validated.
#[inline]
pub fn has_alpha(code: &str) -> bool {
    trim_prefix(code).len() == 8
}

/// Returns `true` if `code` is valid and carries an alpha byte.
pub fn is_color_with_alpha(code: &str) -> HexResult<bool> {
    Ok(is_valid_code(code)? && has_alpha(code))
}

/// Returns `true` if `code` is valid and in 3-digit short form.
pub fn is_short(code: &str) -> HexResult<bool> {
    Ok(is_valid_code(code)? && trim_prefix(code).len() == 3)
}

/// Digit count of a valid code, `None` for anything else (including empty).
pub fn hex_len(code: &str) -> Option<usize> {
    match is_valid_code(code) {
        Ok(true) => Some(trim_prefix(code).len()),
        _ => None,
    }
}

/// Digits of a code that passed validation.
pub(crate) fn validated(code: &str) -> HexResult<&str> {
    if is_valid_code(code)? {
        Ok(trim_prefix(code))
    } else {
        Err(HexError::invalid_format(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_single_prefix() {
        assert_eq!(trim_prefix("##ABC"), "#ABC");
    }

    #[test]
    fn test_valid_lengths() {
        for code in ["#FFF", "fff", "#a1b2c3", "A1B2C3", "#80a1b2c3", "80A1B2C3"] {
            assert!(is_valid_code(code).unwrap(), "{code} should be valid");
        }
    }

    #[test]
    fn test_invalid_codes() {
        for code in ["#", "#FF", "#FFFF", "#FFFFF", "#FFFFFFF", "#FFFFFFFFF", "#GGG", "#12 456", "##FFF"] {
            assert!(!is_valid_code(code).unwrap(), "{code} should be invalid");
        }
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!is_valid_code("#ÄBC").unwrap());
    }

    #[test]
    fn test_empty_is_error() {
        let err = is_valid_code("").unwrap_err();
        assert!(err.is_null_or_empty());
        assert!(is_short("").is_err());
        assert!(is_color_with_alpha("").is_err());
    }

    #[test]
    fn test_shape_queries() {
        assert!(has_alpha("#80112233"));
        assert!(!has_alpha("#112233"));
        // length only, digits unchecked
        assert!(has_alpha("ZZZZZZZZ"));
        assert!(!is_color_with_alpha("ZZZZZZZZ").unwrap());
        assert!(is_short("#F0D").unwrap());
        assert!(!is_short("#FF00DD").unwrap());
        assert!(!is_short("#XYZ").unwrap());
    }

    #[test]
    fn test_hex_len() {
        assert_eq!(hex_len("#F0D"), Some(3));
        assert_eq!(hex_len("FF00DD"), Some(6));
        assert_eq!(hex_len("#80FF00DD"), Some(8));
        assert_eq!(hex_len("#F0"), None);
        assert_eq!(hex_len(""), None);
    }
}
