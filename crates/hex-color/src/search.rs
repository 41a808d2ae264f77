//! Finding color codes embedded in free text.

use hex_core::{HexError, HexResult};
use tracing::debug;

use crate::color::HexColor;

impl HexColor {
    /// First code found in `text`, or [`HexColor::EMPTY`] if there is none.
    ///
    /// The text is split on `hex_code::SEARCH_DELIMITERS` and the first word
    /// that is a valid code wins.
    ///
    /// ```
    /// use hex_color::HexColor;
    ///
    /// let c = HexColor::find("background: #1A2B3C;").unwrap();
    /// assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x1A, 0x2B, 0x3C, 255));
    /// ```
    ///
    /// # Errors
    ///
    /// [`HexError::NullOrEmpty`] if `text` is empty.
    pub fn find(text: &str) -> HexResult<HexColor> {
        require_text(text)?;
        let found = hex_code::codes(text).find_map(|code| HexColor::parse(code).ok());
        debug!(found = found.is_some(), "HexColor::find");
        Ok(found.unwrap_or(HexColor::EMPTY))
    }

    /// Every code found in `text`, in order of appearance.
    ///
    /// # Errors
    ///
    /// [`HexError::NullOrEmpty`] if `text` is empty.
    pub fn find_all(text: &str) -> HexResult<Vec<HexColor>> {
        require_text(text)?;
        let found: Vec<HexColor> = hex_code::codes(text)
            .filter_map(|code| HexColor::parse(code).ok())
            .collect();
        debug!(count = found.len(), "HexColor::find_all");
        Ok(found)
    }
}

fn require_text(text: &str) -> HexResult<()> {
    if text.is_empty() {
        return Err(HexError::null_or_empty("input"));
    }
    Ok(())
}
