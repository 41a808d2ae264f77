//! The [`HexColor`] value type.
//!
//! A `HexColor` is stored as its normalized code text: `#`-prefixed,
//! uppercase, 6 or 8 digits. Reads resolve channels from that text through
//! `hex-code`; writes build a new code. The 3-digit form only appears as the
//! result of [`HexColor::to_short_code`].
//!
//! # Construction
//!
//! | Source | Constructor | Resulting form |
//! |--------|-------------|----------------|
//! | code text | [`HexColor::parse`], `FromStr`, `TryFrom<&str>` | 6 / 8 digits |
//! | bytes | [`HexColor::from_argb`], [`HexColor::from_rgb`], [`HexColor::from_bytes`] | 8 / 6 digits |
//! | packed `u32` | [`HexColor::from_packed_argb`], `From<u32>` | 8 digits |
//! | scRGB floats | [`HexColor::from_scrgb`], [`HexColor::from_scrgb_rgb`], [`HexColor::from_values`] | 8 digits |
//! | host color | [`HexColor::from_platform`] | 8 digits |
//!
//! # Example
//!
//! ```
//! use hex_color::{Channel, HexColor};
//!
//! let c: HexColor = "#f0d".parse().unwrap();
//! assert_eq!(c.as_str(), "#FF00DD");
//! assert_eq!(c.r(), 0xFF);
//!
//! let c = c.with_channel(Channel::G, 0x12);
//! assert_eq!(c.as_str(), "#FF12DD");
//! ```

use std::fmt;
use std::str::FromStr;

use hex_core::{Argb, Channel, HexError, HexResult, PlatformColor};
use hex_transfer::srgb;
use tracing::trace;

const CODE_CAP: usize = 9;

/// Inline storage for a normalized code (`#` plus up to 8 digits).
#[derive(Clone, Copy)]
struct CodeBuf {
    bytes: [u8; CODE_CAP],
    len: u8,
}

impl CodeBuf {
    const fn from_static(code: &'static str) -> Self {
        let src = code.as_bytes();
        let mut bytes = [0u8; CODE_CAP];
        let mut i = 0;
        while i < src.len() && i < CODE_CAP {
            bytes[i] = src[i];
            i += 1;
        }
        Self { bytes, len: i as u8 }
    }

    /// `digits` must already be validated hex digits.
    fn from_digits(digits: &str) -> Self {
        let mut bytes = [0u8; CODE_CAP];
        bytes[0] = b'#';
        let mut len = 1u8;
        for (slot, b) in bytes[1..].iter_mut().zip(digits.bytes()) {
            *slot = b.to_ascii_uppercase();
            len += 1;
        }
        Self { bytes, len }
    }

    #[inline]
    fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }
}

/// A validated ARGB color held as normalized hex code text.
///
/// Equality compares resolved channels, so `#FFF == #FFFFFF == #FFFFFFFF`.
/// Hashing uses the fill text plus the alpha byte. Every constructor stores
/// the long form, so hashes agree with equality; only a 3-digit value from
/// [`HexColor::to_short_code`] hashes apart from its long twin.
///
/// Absence of a color is `Option<HexColor>::None`; [`HexColor::EMPTY`] is the
/// "not found" value returned by [`HexColor::find`].
#[derive(Clone, Copy)]
pub struct HexColor {
    code: CodeBuf,
}

impl HexColor {
    /// Transparent black, the default and "not found" value.
    pub const EMPTY: HexColor = HexColor {
        code: CodeBuf::from_static("#00000000"),
    };

    /// Wraps a code already known to be valid.
    fn from_valid(code: &str) -> Self {
        Self {
            code: CodeBuf::from_digits(hex_code::trim_prefix(code)),
        }
    }

    /// Parses and normalizes a code (`#` added, digits uppercased, short
    /// form expanded), so `"f0d"` becomes `#FF00DD`.
    ///
    /// # Errors
    ///
    /// - [`HexError::NullOrEmpty`] for an empty string
    /// - [`HexError::InvalidFormat`] for a wrong length or non-hex digits
    pub fn parse(code: &str) -> HexResult<Self> {
        hex_code::to_long(code).map(|long| Self::from_valid(&long))
    }

    /// Builds `#AARRGGBB` from byte channels.
    pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self::from_valid(&hex_code::from_argb(Argb::new(a, r, g, b)))
    }

    /// Builds `#RRGGBB` from byte channels (opaque).
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_valid(&hex_code::from_rgb(r, g, b))
    }

    /// Unpacks `A << 24 | R << 16 | G << 8 | B`.
    pub fn from_packed_argb(argb: u32) -> Self {
        Argb::from_packed(argb).into()
    }

    /// Builds a color from linear scRGB floats.
    ///
    /// Every channel, alpha included, goes through the sRGB OETF, whose
    /// boundary rules clamp out-of-range input to 0 or 255. There is no
    /// separate clamp step.
    pub fn from_scrgb(a: f32, r: f32, g: f32, b: f32) -> Self {
        Self::from_argb(srgb::oetf(a), srgb::oetf(r), srgb::oetf(g), srgb::oetf(b))
    }

    /// [`from_scrgb`](Self::from_scrgb) with alpha 1.0.
    pub fn from_scrgb_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_scrgb(1.0, r, g, b)
    }

    /// Builds a color from sRGB bytes by way of the scRGB path.
    ///
    /// Equivalent to decoding each byte with the EOTF and feeding the result
    /// to [`from_scrgb`](Self::from_scrgb).
    pub fn from_srgb(a: u8, r: u8, g: u8, b: u8) -> Self {
        let [a, r, g, b] = srgb::eotf_argb(Argb::new(a, r, g, b));
        Self::from_scrgb(a, r, g, b)
    }

    /// Builds a color from 3 (`R, G, B`) or 4 (`A, R, G, B`) scRGB floats.
    ///
    /// # Errors
    ///
    /// [`HexError::Argument`] for any other length.
    pub fn from_values(values: &[f32]) -> HexResult<Self> {
        match *values {
            [r, g, b] => Ok(Self::from_scrgb_rgb(r, g, b)),
            [a, r, g, b] => Ok(Self::from_scrgb(a, r, g, b)),
            _ => Err(HexError::argument(format!(
                "expected 3 or 4 color values, got {}",
                values.len()
            ))),
        }
    }

    /// Builds a color from 3 (`R, G, B`) or 4 (`A, R, G, B`) raw bytes.
    ///
    /// # Errors
    ///
    /// [`HexError::Argument`] for any other length.
    pub fn from_bytes(bytes: &[u8]) -> HexResult<Self> {
        match *bytes {
            [r, g, b] => Ok(Self::from_rgb(r, g, b)),
            [a, r, g, b] => Ok(Self::from_argb(a, r, g, b)),
            _ => Err(HexError::argument(format!(
                "expected 3 or 4 color bytes, got {}",
                bytes.len()
            ))),
        }
    }

    /// Converts from a host color.
    pub fn from_platform<P: PlatformColor>(color: &P) -> Self {
        let c = color.to_argb();
        trace!(%c, "HexColor::from_platform");
        c.into()
    }

    /// Converts to a host color.
    pub fn to_platform<P: PlatformColor>(&self) -> P {
        let c = self.argb();
        P::from_argb(c.a, c.r, c.g, c.b)
    }

    /// Converts a batch of host colors.
    pub fn from_platform_colors<P: PlatformColor>(colors: &[P]) -> Vec<Self> {
        colors.iter().map(Self::from_platform).collect()
    }

    /// Converts a batch of colors to host colors.
    pub fn to_platform_colors<P: PlatformColor>(colors: &[HexColor]) -> Vec<P> {
        colors.iter().map(HexColor::to_platform).collect()
    }

    /// The normalized code text.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.code.as_str()
    }

    /// Resolved byte channels.
    pub fn argb(&self) -> Argb {
        // the stored code was validated on construction
        hex_code::to_argb(self.as_str()).unwrap_or_default()
    }

    /// Alpha byte; 255 for codes without an alpha segment.
    #[inline]
    pub fn a(&self) -> u8 {
        hex_code::alpha(self.as_str())
    }

    /// Red byte.
    #[inline]
    pub fn r(&self) -> u8 {
        self.channel(Channel::R)
    }

    /// Green byte.
    #[inline]
    pub fn g(&self) -> u8 {
        self.channel(Channel::G)
    }

    /// Blue byte.
    #[inline]
    pub fn b(&self) -> u8 {
        self.channel(Channel::B)
    }

    /// Reads one color channel.
    pub fn channel(&self, which: Channel) -> u8 {
        hex_code::channel(self.as_str(), which).unwrap_or_default()
    }

    /// Returns `true` if the code carries an alpha byte.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        hex_code::has_alpha(self.as_str())
    }

    /// Returns `true` if the code is in 3-digit form.
    #[inline]
    pub fn is_short(&self) -> bool {
        self.as_str().len() == 4
    }

    /// Returns `true` if this is [`HexColor::EMPTY`] (or any transparent black).
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Fill: the color with any alpha byte removed, form otherwise kept.
    pub fn fill(&self) -> HexColor {
        self.reshaped(hex_code::fill)
    }

    /// Fill setter.
    ///
    /// The argument is ignored: the current code only loses its alpha
    /// segment. See `tests/quirks.rs`.
    pub fn set_fill(&mut self, _fill: HexColor) {
        *self = self.reshaped(hex_code::set_fill);
    }

    /// Returns a copy with a new alpha byte (always 8 digits).
    pub fn with_alpha(&self, alpha: u8) -> HexColor {
        self.reshaped(|code| hex_code::set_alpha(alpha, code))
    }

    /// Returns a copy with one color channel replaced.
    ///
    /// The result is kept in long form.
    pub fn with_channel(&self, which: Channel, value: u8) -> HexColor {
        self.reshaped(|code| hex_code::set_channel(code, which, value).and_then(|c| hex_code::to_long(&c)))
    }

    /// Returns a copy with a new red byte.
    pub fn with_r(&self, value: u8) -> HexColor {
        self.with_channel(Channel::R, value)
    }

    /// Returns a copy with a new green byte.
    pub fn with_g(&self, value: u8) -> HexColor {
        self.with_channel(Channel::G, value)
    }

    /// Returns a copy with a new blue byte.
    pub fn with_b(&self, value: u8) -> HexColor {
        self.with_channel(Channel::B, value)
    }

    /// Replaces the alpha byte in place.
    pub fn set_alpha(&mut self, alpha: u8) {
        *self = self.with_alpha(alpha);
    }

    /// Replaces one color channel in place.
    pub fn set_channel(&mut self, which: Channel, value: u8) {
        *self = self.with_channel(which, value);
    }

    /// Alpha decoded through the sRGB EOTF.
    pub fn alpha_f(&self) -> f32 {
        srgb::eotf(self.a())
    }

    /// Returns a copy with alpha encoded from a linear float.
    pub fn with_alpha_f(&self, alpha: f32) -> HexColor {
        self.with_alpha(srgb::oetf(alpha))
    }

    /// One color channel decoded to linear scRGB.
    pub fn linear(&self, which: Channel) -> f32 {
        srgb::eotf(self.channel(which))
    }

    /// Returns a copy with one channel encoded from a linear float.
    pub fn with_linear(&self, which: Channel, value: f32) -> HexColor {
        self.with_channel(which, srgb::oetf(value))
    }

    /// Opaque `#RRGGBB` copy of this color.
    pub fn remove_alpha(&self) -> HexColor {
        let c = self.argb();
        Self::from_rgb(c.r, c.g, c.b)
    }

    /// All four channels decoded to scRGB as `[A, R, G, B]`.
    pub fn channel_values(&self) -> [f32; 4] {
        srgb::eotf_argb(self.argb())
    }

    /// scRGB values: `[A, R, G, B]` for codes with alpha, `[R, G, B]` otherwise.
    pub fn to_values(&self) -> Vec<f32> {
        let values = self.channel_values();
        if self.has_alpha() {
            values.to_vec()
        } else {
            values[1..].to_vec()
        }
    }

    /// Byte channels: `[A, R, G, B]` for codes with alpha, `[R, G, B]` otherwise.
    pub fn to_bytes(&self) -> Vec<u8> {
        let bytes = self.argb().to_array();
        if self.has_alpha() {
            bytes.to_vec()
        } else {
            bytes[1..].to_vec()
        }
    }

    /// Packs into `A << 24 | R << 16 | G << 8 | B`.
    #[inline]
    pub fn to_packed_argb(&self) -> u32 {
        self.argb().to_packed()
    }

    /// Short form when every channel collapses, unchanged otherwise.
    pub fn to_short_code(&self) -> HexColor {
        self.reshaped(hex_code::to_short)
    }

    /// Alias of [`to_short_code`](Self::to_short_code).
    pub fn to_shorter(&self) -> HexColor {
        self.to_short_code()
    }

    /// Long form (6 or 8 digits).
    pub fn to_long_code(&self) -> HexColor {
        self.reshaped(hex_code::to_long)
    }

    /// Alias of [`to_long_code`](Self::to_long_code).
    pub fn to_longer(&self) -> HexColor {
        self.to_long_code()
    }

    /// Rebuilds the color through the scRGB path.
    pub fn clamped(&self) -> HexColor {
        let [a, r, g, b] = self.channel_values();
        Self::from_scrgb(a, r, g, b)
    }

    /// Applies a code transform; the stored code is valid, so a failure
    /// leaves the color unchanged.
    fn reshaped<F>(&self, f: F) -> HexColor
    where
        F: FnOnce(&str) -> HexResult<String>,
    {
        match f(self.as_str()) {
            Ok(code) => Self::from_valid(&code),
            Err(_) => *self,
        }
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HexColor").field(&self.as_str()).finish()
    }
}

impl FromStr for HexColor {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = HexError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = HexError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl TryFrom<&[u8]> for HexColor {
    type Error = HexError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<Argb> for HexColor {
    fn from(c: Argb) -> Self {
        Self::from_argb(c.a, c.r, c.g, c.b)
    }
}

impl From<HexColor> for Argb {
    fn from(c: HexColor) -> Self {
        c.argb()
    }
}

impl From<u32> for HexColor {
    fn from(argb: u32) -> Self {
        Self::from_packed_argb(argb)
    }
}

impl From<HexColor> for u32 {
    fn from(c: HexColor) -> Self {
        c.to_packed_argb()
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.as_str().to_owned()
    }
}

/// scRGB `[A, R, G, B]` of an optional host color.
///
/// An absent color yields all zeros instead of failing.
pub fn native_color_values<P: PlatformColor>(color: Option<&P>) -> [f32; 4] {
    match color {
        Some(c) => HexColor::from_platform(c).channel_values(),
        None => [0.0; 4],
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::parse(&code).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(HexColor::parse("f0d").unwrap().as_str(), "#FF00DD");
        assert_eq!(HexColor::parse("#aabbcc").unwrap().as_str(), "#AABBCC");
        assert_eq!(HexColor::parse("80aabbcc").unwrap().as_str(), "#80AABBCC");
    }

    #[test]
    fn test_parsed_and_built_share_hash() {
        use std::collections::HashSet;

        let parsed = HexColor::parse("#FFF").unwrap();
        let built = HexColor::from_rgb(255, 255, 255);
        assert_eq!(parsed.as_str(), built.as_str());
        let set = HashSet::from([parsed, built]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_errors() {
        assert!(HexColor::parse("").unwrap_err().is_null_or_empty());
        assert!(HexColor::parse("#12345").unwrap_err().is_format_error());
        assert!("#GGGGGG".parse::<HexColor>().unwrap_err().is_format_error());
    }

    #[test]
    fn test_from_argb() {
        assert_eq!(HexColor::from_argb(255, 255, 0, 221).as_str(), "#FFFF00DD");
        assert_eq!(HexColor::from_rgb(1, 2, 3).as_str(), "#010203");
    }

    #[test]
    fn test_packed() {
        let c = HexColor::from_packed_argb(0x80112233);
        assert_eq!(c.as_str(), "#80112233");
        assert_eq!(u32::from(c), 0x80112233);
        assert_eq!(HexColor::parse("#FFF").unwrap().to_packed_argb(), 0xFFFFFFFF);
    }

    #[test]
    fn test_accessors() {
        let c = HexColor::parse("#801A2B3C").unwrap();
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (0x80, 0x1A, 0x2B, 0x3C));
        let opaque = HexColor::parse("#1A2B3C").unwrap();
        assert_eq!(opaque.a(), 255);
    }

    #[test]
    fn test_empty() {
        assert_eq!(HexColor::EMPTY.as_str(), "#00000000");
        assert_eq!(HexColor::default(), HexColor::EMPTY);
        assert!(HexColor::EMPTY.is_empty());
        assert!(!HexColor::from_rgb(0, 0, 0).is_empty());
    }

    #[test]
    fn test_setters_stay_long() {
        let c = HexColor::parse("#F0D").unwrap().to_short_code();
        assert!(c.is_short());
        let c = c.with_channel(Channel::B, 0xDD);
        assert_eq!(c.as_str(), "#FF00DD");
        assert!(!c.is_short());

        let c = c.with_alpha(0x80);
        assert_eq!(c.as_str(), "#80FF00DD");
    }

    #[test]
    fn test_set_in_place() {
        let mut c = HexColor::from_rgb(0x11, 0x22, 0x33);
        c.set_channel(Channel::R, 0xAA);
        c.set_alpha(0x40);
        assert_eq!(c.as_str(), "#40AA2233");
    }

    #[test]
    fn test_fill_keeps_form() {
        assert_eq!(HexColor::parse("#80FF00DD").unwrap().fill().as_str(), "#FF00DD");
        let short = HexColor::parse("#FF00DD").unwrap().to_short_code();
        assert_eq!(short.fill().as_str(), "#F0D");
    }

    #[test]
    fn test_set_fill_ignores_argument() {
        let mut c = HexColor::parse("#80112233").unwrap();
        c.set_fill(HexColor::from_rgb(0xAA, 0xBB, 0xCC));
        assert_eq!(c.as_str(), "#112233");
    }

    #[test]
    fn test_from_bytes_and_values() {
        assert_eq!(HexColor::from_bytes(&[1, 2, 3]).unwrap().as_str(), "#010203");
        assert_eq!(HexColor::from_bytes(&[4, 1, 2, 3]).unwrap().as_str(), "#04010203");
        assert!(HexColor::from_bytes(&[1, 2]).unwrap_err().is_argument_error());

        assert_eq!(HexColor::from_values(&[1.0, 0.0, 1.0]).unwrap().as_str(), "#FFFF00FF");
        assert_eq!(HexColor::from_values(&[0.0, 1.0, 1.0, 1.0]).unwrap().as_str(), "#00FFFFFF");
        assert!(HexColor::from_values(&[]).is_err());
    }

    #[test]
    fn test_scrgb_clamps_at_boundaries() {
        let c = HexColor::from_scrgb(1.5, -0.2, 2.0, f32::NAN);
        assert_eq!(c.as_str(), "#FF00FF00");
    }

    #[test]
    fn test_values_length_follows_form() {
        let opaque = HexColor::parse("#FFFFFF").unwrap();
        assert_eq!(opaque.to_values(), vec![1.0, 1.0, 1.0]);
        assert_eq!(opaque.to_bytes(), vec![255, 255, 255]);

        let argb = HexColor::parse("#00FFFFFF").unwrap();
        assert_eq!(argb.to_values(), vec![0.0, 1.0, 1.0, 1.0]);
        assert_eq!(argb.to_bytes(), vec![0, 255, 255, 255]);
    }

    #[test]
    fn test_float_accessors() {
        let c = HexColor::from_rgb(128, 0, 255);
        assert_relative_eq!(c.linear(Channel::R), 0.21586, epsilon = 1e-4);
        assert_eq!(c.alpha_f(), 1.0);
        assert_eq!(c.with_linear(Channel::G, 1.0).g(), 255);
        assert_eq!(c.with_alpha_f(0.0).a(), 0);
    }

    #[test]
    fn test_remove_alpha() {
        let c = HexColor::parse("#80FF00DD").unwrap().remove_alpha();
        assert_eq!(c.as_str(), "#FF00DD");
        assert_eq!(c.a(), 255);
        // short input comes back long
        let short = HexColor::parse("#F0D").unwrap().to_short_code();
        assert_eq!(short.remove_alpha().as_str(), "#FF00DD");
    }

    #[test]
    fn test_short_long_aliases() {
        let c = HexColor::parse("#FF00DD").unwrap();
        assert_eq!(c.to_short_code().as_str(), "#F0D");
        assert_eq!(c.to_shorter().as_str(), "#F0D");
        let s = HexColor::parse("#F0D").unwrap().to_short_code();
        assert_eq!(s.as_str(), "#F0D");
        assert_eq!(s.to_long_code().as_str(), "#FF00DD");
        assert_eq!(s.to_longer().as_str(), "#FF00DD");
    }

    #[test]
    fn test_platform_roundtrip() {
        let c = HexColor::parse("#80102030").unwrap();
        let p: Argb = c.to_platform();
        assert_eq!(p, Argb::new(0x80, 0x10, 0x20, 0x30));
        assert_eq!(HexColor::from_platform(&p), c);

        let batch = HexColor::to_platform_colors::<Argb>(&[c, HexColor::EMPTY]);
        assert_eq!(HexColor::from_platform_colors(&batch), vec![c, HexColor::EMPTY]);
    }

    #[test]
    fn test_native_values_absent() {
        assert_eq!(native_color_values::<Argb>(None), [0.0; 4]);
        assert_eq!(native_color_values(Some(&Argb::opaque(255, 0, 255))), [1.0, 1.0, 0.0, 1.0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_code_string() {
        let c = HexColor::parse("#f0d").unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#FF00DD\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "#FF00DD");
        let short: HexColor = serde_json::from_str("\"#f0d\"").unwrap();
        assert_eq!(short.as_str(), "#FF00DD");
        assert!(serde_json::from_str::<HexColor>("\"#12\"").is_err());
    }

    #[test]
    fn test_clamped_is_stable_for_bytes() {
        let c = HexColor::parse("#FF00FF").unwrap();
        assert_eq!(c.clamped(), c);
        assert_eq!(c.clamped().as_str(), "#FFFF00FF");
    }
}
