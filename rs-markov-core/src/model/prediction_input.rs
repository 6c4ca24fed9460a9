use crate::error::{MarkovError, Result};

/// What to do when the walk reaches a word without successors.
///
/// Only the last token of a corpus can lack successors, and only if it
/// never appears earlier in the text.
///
/// # Variants
/// - `Stop`: end the sentence early and return what was generated.
/// - `Fail`: return `MarkovError::DeadEnd` with the partial sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeadEndPolicy {
	#[default]
	Stop,
	Fail,
}

/// Parameters of a single generation request.
///
/// # Invariants
/// - `count` is always >= 1
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionInput {
	/// The word the walk starts from, matched with its exact case.
	seed_word: String,

	/// Number of words in the generated sentence, seed included.
	count: usize,

	/// Behavior on a word without successors.
	pub dead_end: DeadEndPolicy,
}

impl PredictionInput {
	/// Creates a request for `count` words starting from `seed_word`.
	///
	/// # Errors
	/// Returns `MarkovError::InvalidCount` if `count` is 0.
	pub fn new(seed_word: &str, count: usize) -> Result<Self> {
		let mut prediction_input = Self {
			seed_word: seed_word.to_owned(),
			count: 1,
			dead_end: DeadEndPolicy::default(),
		};
		prediction_input.set_count(count)?;
		Ok(prediction_input)
	}

	/// Returns the seed word.
	pub fn seed_word(&self) -> &str {
		&self.seed_word
	}

	/// Returns the requested number of words.
	pub fn count(&self) -> usize {
		self.count
	}

	/// Sets the number of words to generate.
	///
	/// # Errors
	/// Returns an error if `count` is 0; the previous value is kept.
	pub fn set_count(&mut self, count: usize) -> Result<()> {
		if count == 0 {
			return Err(MarkovError::InvalidCount(count));
		}
		self.count = count;
		Ok(())
	}

	/// Builder-style variant of setting `dead_end`.
	pub fn with_dead_end(mut self, dead_end: DeadEndPolicy) -> Self {
		self.dead_end = dead_end;
		self
	}
}
