//! Textual output styles.

use std::fmt;

use crate::color::HexColor;

/// How [`HexColor::to_code_string`] renders a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeStyle {
    /// The stored code, as is.
    #[default]
    Code,
    /// Always `#AARRGGBB`.
    Argb,
    /// The fill (alpha removed), form kept.
    Rgb,
    /// The fill in short form when it collapses.
    ShortHex,
}

impl CodeStyle {
    /// Parses the style names `ARGB`, `RGB` and `SHEX` (case-insensitive).
    /// An empty name selects [`CodeStyle::Code`]; unknown names fall back to
    /// [`CodeStyle::Rgb`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "" => CodeStyle::Code,
            "ARGB" => CodeStyle::Argb,
            "SHEX" => CodeStyle::ShortHex,
            _ => CodeStyle::Rgb,
        }
    }
}

impl HexColor {
    /// Renders the color in the requested style.
    ///
    /// ```
    /// use hex_color::{CodeStyle, HexColor};
    ///
    /// let c = HexColor::parse("#80FF00DD").unwrap();
    /// assert_eq!(c.to_code_string(CodeStyle::Rgb), "#FF00DD");
    /// assert_eq!(c.to_code_string(CodeStyle::ShortHex), "#F0D");
    /// ```
    pub fn to_code_string(&self, style: CodeStyle) -> String {
        match style {
            CodeStyle::Code => self.as_str().to_owned(),
            CodeStyle::Argb => hex_code::from_argb(self.argb()),
            CodeStyle::Rgb => self.fill().as_str().to_owned(),
            CodeStyle::ShortHex => self.fill().to_short_code().as_str().to_owned(),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
