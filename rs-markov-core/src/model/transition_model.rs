use super::successors::Successors;
use crate::error::{MarkovError, Result};
use crate::io::read_corpus;
use crate::text::{remove_punctuation, tokenize};
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Represents a first-order word transition model.
///
/// The `TransitionModel` maps each word to the ordered list of words
/// observed immediately after it in the corpus.
///
/// # Responsibilities
/// - Build the model from a file, raw text, or a token sequence
/// - Expose read-only access to successor lists
///
/// # Invariants
/// - For every adjacent token pair `(a, b)`, `b` is in the list keyed by `a`
/// - The list under a key holds one entry per non-final occurrence of that key
/// - The total number of entries is `tokens.len() - 1`
/// - `order` lists every key once, in order of first appearance
/// - No method mutates a model once it has been built
#[derive(Clone, Debug, Default)]
pub struct TransitionModel {
	/// Mapping from a word to its successors
	states: HashMap<String, Successors>,

	/// Keys in order of first appearance
	order: Vec<String>,
}

/// Summary counters of a model.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelStats {
	/// Number of distinct words having at least one successor.
	pub words: usize,
	/// Number of recorded transitions.
	pub transitions: usize,
}

impl TransitionModel {
	/// Loads a corpus file and builds its model.
	///
	/// Runs the full pipeline: read (lines joined by spaces), strip
	/// punctuation, split on spaces, record transitions.
	///
	/// # Errors
	/// Returns `MarkovError::Io` if the file is missing or unreadable.
	pub fn from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
		let path = filepath.as_ref();
		let corpus = read_corpus(path).map_err(|source| MarkovError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(Self::from_text(&corpus))
	}

	/// Builds a model from raw corpus text.
	pub fn from_text(corpus: &str) -> Self {
		let normalized = remove_punctuation(corpus);
		Self::from_tokens(&tokenize(&normalized))
	}

	/// Builds a model from an already tokenized sequence.
	///
	/// # Notes
	/// - Words are kept with their exact case.
	/// - Empty tokens are regular words.
	pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
		let mut model = Self::default();
		for pair in tokens.windows(2) {
			model.add_transition(pair[0].as_ref(), pair[1].as_ref());
		}

		let stats = model.stats();
		info!(
			"Model trained successfully ({} words, {} transitions)",
			stats.words, stats.transitions
		);
		model
	}

	/// Appends `next_word` to the list of `word`, creating it on first use.
	fn add_transition(&mut self, word: &str, next_word: &str) {
		if let Some(state) = self.states.get_mut(word) {
			state.push(next_word);
		} else {
			self.states.insert(word.to_owned(), Successors::new(next_word));
			self.order.push(word.to_owned());
		}
	}

	/// Returns the successors of `word` in order of occurrence.
	///
	/// Returns `None` if `word` never precedes another word.
	pub fn successors(&self, word: &str) -> Option<&[String]> {
		self.states.get(word).map(Successors::as_slice)
	}

	pub(crate) fn state(&self, word: &str) -> Option<&Successors> {
		self.states.get(word)
	}

	/// Returns `true` if `word` is a key of the model.
	pub fn contains(&self, word: &str) -> bool {
		self.states.contains_key(word)
	}

	/// Number of keys.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Total number of recorded transitions across all keys.
	pub fn transition_count(&self) -> usize {
		self.states.values().map(Successors::len).sum()
	}

	/// Returns the model counters.
	pub fn stats(&self) -> ModelStats {
		ModelStats {
			words: self.len(),
			transitions: self.transition_count(),
		}
	}

	/// Iterates over the keys in order of first appearance.
	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.order.iter().map(String::as_str)
	}

	/// Returns a random key of the model.
	///
	/// Useful for starting a generation when no seed word is given.
	/// The draw only depends on the corpus and `rng`.
	/// Returns `None` if the model is empty.
	pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.order.choose(rng).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::io::tests::temp_corpus;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	const CORPUS: &str = "hello my name is V hello my name is G hello my current name is F world today is a good day";

	#[test]
	fn test_reference_corpus() {
		let model = TransitionModel::from_text(CORPUS);
		assert_eq!(model.successors("hello").unwrap(), ["my", "my", "my"]);
		assert_eq!(model.successors("is").unwrap(), ["V", "G", "F", "a"]);
		assert_eq!(model.successors("my").unwrap(), ["name", "name", "current"]);
		assert_eq!(model.successors("name").unwrap(), ["is", "is", "is"]);
		assert_eq!(model.successors("world").unwrap(), ["today"]);
		assert_eq!(model.successors("day"), None);
		assert_eq!(model.len(), 12);
		assert_eq!(model.transition_count(), tokenize(CORPUS).len() - 1);
	}

	#[test]
	fn test_case_is_preserved() {
		let model = TransitionModel::from_text("The cat saw the dog");
		assert!(model.contains("The"));
		assert!(model.contains("the"));
		assert_eq!(model.successors("The").unwrap(), ["cat"]);
		assert_eq!(model.successors("the").unwrap(), ["dog"]);
	}

	#[test]
	fn test_punctuation_is_stripped_before_tokenizing() {
		let model = TransitionModel::from_text("Hi, there! It's fine.");
		assert_eq!(model.successors("Hi").unwrap(), ["there"]);
		assert_eq!(model.successors("Its").unwrap(), ["fine"]);
		assert!(!model.contains("Hi,"));
	}

	#[test]
	fn test_double_spaces_create_empty_words() {
		let model = TransitionModel::from_text("a  b");
		assert_eq!(model.successors("a").unwrap(), [""]);
		assert_eq!(model.successors("").unwrap(), ["b"]);
		assert_eq!(model.transition_count(), 2);
	}

	#[test]
	fn test_single_token_gives_empty_model() {
		assert!(TransitionModel::from_text("alone").is_empty());
		assert!(TransitionModel::from_text("").is_empty());
		assert_eq!(TransitionModel::from_tokens::<&str>(&[]).transition_count(), 0);
	}

	#[test]
	fn test_stats() {
		let model = TransitionModel::from_text("a b a c");
		assert_eq!(model.stats(), ModelStats { words: 2, transitions: 3 });
	}

	#[test]
	fn test_random_word_is_a_key() {
		let model = TransitionModel::from_text(CORPUS);
		let mut rng = ChaCha8Rng::seed_from_u64(3);
		for _ in 0..20 {
			let word = model.random_word(&mut rng).unwrap();
			assert!(model.contains(word));
		}
		assert_eq!(TransitionModel::default().random_word(&mut rng), None);
	}

	#[test]
	fn test_words_follow_first_appearance() {
		let model = TransitionModel::from_text("b a b c a d");
		assert_eq!(model.words().collect::<Vec<_>>(), ["b", "a", "c"]);
	}

	#[test]
	fn test_random_word_is_reproducible_across_builds() {
		let expected = TransitionModel::from_text(CORPUS)
			.random_word(&mut ChaCha8Rng::seed_from_u64(7))
			.map(str::to_owned);
		for _ in 0..20 {
			let model = TransitionModel::from_text(CORPUS);
			let word = model.random_word(&mut ChaCha8Rng::seed_from_u64(7));
			assert_eq!(word, expected.as_deref());
		}
	}

	#[test]
	fn test_from_file() {
		let path = temp_corpus("model", "hello, my\nname is\n\nV.");
		let model = TransitionModel::from_file(&path).unwrap();
		std::fs::remove_file(&path).unwrap();
		assert_eq!(model.successors("hello").unwrap(), ["my"]);
		assert_eq!(model.successors("my").unwrap(), ["name"]);
		assert_eq!(model.successors("is").unwrap(), [""]);
		assert_eq!(model.successors("").unwrap(), ["V"]);
		assert_eq!(model.successors("V"), None);
		assert_eq!(model.transition_count(), 5);
	}

	#[test]
	fn test_from_file_missing() {
		let err = TransitionModel::from_file("/definitely/not/here.txt").unwrap_err();
		assert!(matches!(err, MarkovError::Io { .. }));
	}

	#[test]
	fn test_model_is_shareable() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<TransitionModel>();
	}
}
