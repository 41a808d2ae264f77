//! # hex-transfer
//!
//! Gamma transfer functions between 8-bit sRGB channels and normalized
//! scRGB floats.
//!
//! # Terminology
//!
//! - **sRGB**: gamma-encoded byte channel, range [0, 255]
//! - **scRGB**: linear, gamma-decoded float channel, range [0, 1]
//! - **EOTF**: sRGB byte -> scRGB float ([`srgb::eotf`])
//! - **OETF**: scRGB float -> sRGB byte ([`srgb::oetf`])
//!
//! Both functions clamp at their boundaries, so out-of-range floats handed to
//! the OETF land on 0 or 255 without a separate clamp step.
//!
//! # Usage
//!
//! ```rust
//! use hex_transfer::srgb;
//!
//! let linear = srgb::eotf(128);
//! assert!((linear - 0.2158).abs() < 1e-3);
//! assert_eq!(srgb::oetf(linear), 128);
//! ```
//!
//! # Used By
//!
//! - `hex-color` - float constructors, float accessors and the scRGB platform color

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
