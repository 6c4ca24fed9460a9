//! Corpus normalization and tokenization.

/// The 32 ASCII punctuation characters removed by [`remove_punctuation`].
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Returns a copy of `text` without any ASCII punctuation.
///
/// Whitespace, digits, letters and non-ASCII characters are kept as-is.
pub fn remove_punctuation(text: &str) -> String {
	text.chars().filter(|c| !c.is_ascii_punctuation()).collect()
}

/// Splits normalized text on single spaces.
///
/// Consecutive spaces produce empty tokens, which are kept: `"a  b"` yields
/// `["a", "", "b"]`.
pub fn tokenize(text: &str) -> Vec<&str> {
	text.split(' ').collect()
}

/// Uppercases the first character of `word`, leaving the rest unchanged.
pub(crate) fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
