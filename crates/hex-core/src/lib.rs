//! # hex-core
//!
//! Core types shared by the hex color crates.
//!
//! - [`HexError`] / [`HexResult`] - Error taxonomy for code parsing and color math
//! - [`Channel`] - Selector for the R, G and B channels of a code
//! - [`Argb`] - Plain 4-channel byte color
//! - [`PlatformColor`] - Conversion hook for a host color type
//!
//! ## Crate Structure
//!
//! ```text
//! hex-core (this crate)
//!    ^
//!    |
//!    +-- hex-transfer (gamma transfer functions)
//!    +-- hex-code (text-level code operations)
//!    +-- hex-color (HexColor value type)
//!    +-- hex-cli (command line front end)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod argb;
pub mod channel;
pub mod error;

pub use argb::{Argb, PlatformColor};
pub use channel::Channel;
pub use error::{HexError, HexResult};

/// Prelude module for convenient imports.
///
/// ```
/// use hex_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::argb::{Argb, PlatformColor};
    pub use crate::channel::Channel;
    pub use crate::error::{HexError, HexResult};
}
