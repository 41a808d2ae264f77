//! Tokenizing free text for embedded color codes.

use crate::HASH;
use crate::validate::is_valid_code;

/// Characters that separate words when scanning text for codes.
///
/// `#` is a delimiter too, so `#1A2B3C` yields the bare token `1A2B3C`.
pub const SEARCH_DELIMITERS: [char; 10] = [HASH, ' ', ',', '.', ';', ':', '-', '\t', '\n', '\r'];

/// Non-empty words of `text`, split on [`SEARCH_DELIMITERS`].
///
/// ```
/// let words: Vec<&str> = hex_code::tokens("color: #FFF;").collect();
/// assert_eq!(words, ["color", "FFF"]);
/// ```
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(&SEARCH_DELIMITERS[..]).filter(|word| !word.is_empty())
}

/// Words of `text` that are valid codes, in order of appearance.
///
/// Any 3, 6 or 8 letter word made only of `a-f` digits counts, so plain
/// words such as `bad` or `facade` are picked up as well.
pub fn codes(text: &str) -> impl Iterator<Item = &str> {
    tokens(text).filter(|word| is_valid_code(word).unwrap_or(false))
}
