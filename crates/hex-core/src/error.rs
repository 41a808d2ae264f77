//! Error types for hex color operations.
//!
//! Every failure in the codec falls into one of three categories:
//!
//! - [`HexError::NullOrEmpty`] - a required code or search string was empty
//! - [`HexError::InvalidFormat`] - a code has the wrong length or non-hex digits
//! - [`HexError::Argument`] - a bad discriminator or numeric argument
//!
//! Errors are raised at the call that detects them. Callers that want to avoid
//! the error path check codes first with `hex_code::is_valid_code`.
//!
//! # Usage
//!
//! ```rust
//! use hex_core::{HexError, HexResult};
//!
//! fn require_code(code: &str) -> HexResult<&str> {
//!     if code.is_empty() {
//!         return Err(HexError::null_or_empty("code"));
//!     }
//!     Ok(code)
//! }
//!
//! assert!(require_code("").is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`HexError`] as the error type.
pub type HexResult<T> = std::result::Result<T, HexError>;

/// Errors produced while parsing, validating or combining hex colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// A code or input string was empty where a value is required.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hex_core::HexError;
    ///
    /// let err = HexError::null_or_empty("code");
    /// assert!(err.to_string().contains("code"));
    /// ```
    #[error("hex color code cannot be null or empty (parameter '{param}')")]
    NullOrEmpty {
        /// Name of the offending parameter
        param: &'static str,
    },

    /// A code failed format validation.
    ///
    /// Valid codes are 3, 6 or 8 hex digits with an optional `#` prefix.
    #[error(
        "invalid hex color format '{code}': it should be 6 or 8-digit hexadecimal number or its 3-digit shortened form"
    )]
    InvalidFormat {
        /// The rejected code, as given
        code: String,
    },

    /// An argument other than the code itself was rejected.
    ///
    /// Covers unknown channel selectors and division by zero.
    #[error("invalid argument: {0}")]
    Argument(String),
}

impl HexError {
    /// Creates a [`HexError::NullOrEmpty`] error.
    #[inline]
    pub fn null_or_empty(param: &'static str) -> Self {
        Self::NullOrEmpty { param }
    }

    /// Creates a [`HexError::InvalidFormat`] error.
    #[inline]
    pub fn invalid_format(code: impl Into<String>) -> Self {
        Self::InvalidFormat { code: code.into() }
    }

    /// Creates a [`HexError::Argument`] error.
    #[inline]
    pub fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }

    /// Returns `true` if this is an empty-input error.
    #[inline]
    pub fn is_null_or_empty(&self) -> bool {
        matches!(self, Self::NullOrEmpty { .. })
    }

    /// Returns `true` if this is a format error.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// Returns `true` if this is an argument error.
    #[inline]
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::Argument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_or_empty() {
        let err = HexError::null_or_empty("input");
        assert!(err.to_string().contains("input"));
        assert!(err.is_null_or_empty());
        assert!(!err.is_format_error());
    }

    #[test]
    fn test_invalid_format_mentions_code() {
        let err = HexError::invalid_format("#12345");
        let msg = err.to_string();
        assert!(msg.contains("#12345"));
        assert!(msg.contains("3-digit"));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_argument() {
        let err = HexError::argument("division by zero is not allowed");
        assert!(err.to_string().contains("division by zero"));
        assert!(err.is_argument_error());
    }
}
