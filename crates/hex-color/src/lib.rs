//! # hex-color
//!
//! A validated, copyable color value backed by its hex code.
//!
//! [`HexColor`] wraps a normalized `#RGB`, `#RRGGBB` or `#AARRGGBB` code and
//! offers typed channel access, conversions to and from bytes, packed
//! integers, scRGB floats and host color types, plus arithmetic in linear
//! space.
//!
//! # Usage
//!
//! ```rust
//! use hex_color::{Channel, HexColor};
//!
//! let c = HexColor::from_argb(255, 255, 0, 221);
//! assert_eq!(c.to_string(), "#FFFF00DD");
//! assert_eq!(c.fill().to_short_code().as_str(), "#F0D");
//!
//! let half = c.divide(2.0).unwrap();
//! assert_eq!(half.a(), 128);
//!
//! let found = HexColor::find("background: #1A2B3C;").unwrap();
//! assert_eq!(found.channel(Channel::G), 0x2B);
//! ```
//!
//! # Modules
//!
//! - [`color`] - the value type and its conversions
//! - [`ops`] - equality, hashing, arithmetic
//! - [`scrgb`] - reference host color with linear float channels
//! - [`named`] - named color table
//!
//! # Feature Flags
//!
//! - `serde` - serialize `HexColor` as its code string
//!
//! # Dependencies
//!
//! - `hex-code` - all text-level work
//! - `hex-transfer` - the sRGB/scRGB gamma pair
//! - `tracing` - trace/debug events for arithmetic and search

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod format;
pub mod named;
pub mod ops;
pub mod scrgb;
mod search;

pub use color::{HexColor, native_color_values};
pub use format::CodeStyle;
pub use scrgb::ScRgb;

pub use hex_core::{Argb, Channel, HexError, HexResult, PlatformColor};

/// Prelude module for convenient imports.
///
/// ```
/// use hex_color::prelude::*;
///
/// let c: HexColor = "#abc".parse().unwrap();
/// assert_eq!(c.channel(Channel::B), 0xCC);
/// ```
pub mod prelude {
    pub use crate::color::HexColor;
    pub use crate::format::CodeStyle;
    pub use crate::scrgb::ScRgb;
    pub use hex_core::prelude::*;
}
