//! # hex-code
//!
//! Stateless, text-level operations over hex color codes.
//!
//! # Code Forms
//!
//! | Form | Digits | Example | Meaning |
//! |------|--------|---------|---------|
//! | Short | 3 | `#F0D` | each digit doubled: `#FF00DD` |
//! | Long RGB | 6 | `#FF00DD` | opaque, alpha = 255 |
//! | Long ARGB | 8 | `#80FF00DD` | leading byte is alpha |
//!
//! The `#` prefix is optional on input and always present on output. Digits
//! are case-insensitive on input; these functions keep the case they are given
//! (the `HexColor` value type uppercases on entry).
//!
//! # Usage
//!
//! ```rust
//! use hex_code::{to_long, to_short, set_alpha};
//!
//! assert_eq!(to_short("#FF00DD").unwrap(), "#F0D");
//! assert_eq!(to_long("#F0D").unwrap(), "#FF00DD");
//! assert_eq!(set_alpha(0x80, "#112233").unwrap(), "#80112233");
//! ```
//!
//! # Errors
//!
//! Operations that need a well-formed code fail with
//! [`HexError::InvalidFormat`](hex_core::HexError::InvalidFormat). An empty code
//! fails earlier, in [`is_valid_code`], with
//! [`HexError::NullOrEmpty`](hex_core::HexError::NullOrEmpty).
//!
//! # Used By
//!
//! - `hex-color` - every channel read and write of `HexColor`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod access;
pub mod form;
pub mod search;
pub mod validate;

pub use access::{alpha, channel, from_argb, from_rgb, set_alpha, set_channel, to_argb};
pub use form::{fill, set_fill, to_long, to_short};
pub use search::{SEARCH_DELIMITERS, codes, tokens};
pub use validate::{has_alpha, hex_len, is_color_with_alpha, is_short, is_valid_code, trim_prefix};

/// Prefix character of a hex color code.
pub const HASH: char = '#';

/// Prepends [`HASH`] to bare digits.
#[inline]
pub(crate) fn prefixed(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + 1);
    out.push(HASH);
    out.push_str(digits);
    out
}
