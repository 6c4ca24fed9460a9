use crate::error::{MarkovError, Result};
use crate::model::prediction_input::{DeadEndPolicy, PredictionInput};
use crate::model::transition_model::TransitionModel;
use crate::text::capitalize;
use log::debug;
use rand::Rng;
use std::fmt;

/// Message displayed when the seed word is not part of the model.
pub const WORD_NOT_FOUND: &str = "The word is not in the corpus";

/// Outcome of a generation request.
///
/// An unknown seed word is an expected result, not an error: callers
/// must check for `WordNotFound` before using the sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prediction {
	/// A capitalized, period-terminated sentence.
	Sentence(String),
	/// The seed word is not a key of the model.
	WordNotFound,
}

impl Prediction {
	/// Returns the sentence, or `None` for `WordNotFound`.
	pub fn sentence(&self) -> Option<&str> {
		match self {
			Prediction::Sentence(s) => Some(s),
			Prediction::WordNotFound => None,
		}
	}

	/// Returns `true` if a sentence was generated.
	pub fn is_found(&self) -> bool {
		matches!(self, Prediction::Sentence(_))
	}
}

impl fmt::Display for Prediction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Prediction::Sentence(s) => f.write_str(s),
			Prediction::WordNotFound => f.write_str(WORD_NOT_FOUND),
		}
	}
}

/// Random walk over a borrowed `TransitionModel`.
///
/// The generator keeps no state between calls: each `predict` is an
/// independent walk, so one model can serve any number of generators.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
	model: &'a TransitionModel,
}

impl<'a> Generator<'a> {
	pub fn new(model: &'a TransitionModel) -> Self {
		Self { model }
	}

	/// Generates a sentence for `prediction_input`.
	///
	/// # Behavior
	/// - Returns `Prediction::WordNotFound` if the seed word is not a key.
	/// - Starts with the capitalized seed word.
	/// - Draws `count - 1` successors uniformly from the current word's list,
	///   each becoming the current word for the next draw.
	/// - Ends the sentence with a period.
	///
	/// # Errors
	/// Returns `MarkovError::DeadEnd` if a word without successors is reached
	/// and the policy is `DeadEndPolicy::Fail`. With `DeadEndPolicy::Stop` the
	/// partial sentence is returned instead.
	pub fn predict<R: Rng + ?Sized>(&self, prediction_input: &PredictionInput, rng: &mut R) -> Result<Prediction> {
		let seed_word = prediction_input.seed_word();
		if !self.model.contains(seed_word) {
			debug!("Seed word '{}' not found", seed_word);
			return Ok(Prediction::WordNotFound);
		}

		let mut sentence = capitalize(seed_word);
		let mut current = seed_word;

		for _ in 1..prediction_input.count() {
			let next = match self.model.state(current).and_then(|state| state.sample(rng)) {
				Some(next) => next,
				None => match prediction_input.dead_end {
					DeadEndPolicy::Stop => {
						debug!("Dead end on '{}', stopping early", current);
						break;
					}
					DeadEndPolicy::Fail => {
						return Err(MarkovError::DeadEnd {
							word: current.to_owned(),
							generated: sentence,
						});
					}
				},
			};
			debug!("{} -> {}", current, next);
			sentence.push(' ');
			sentence.push_str(next);
			current = next;
		}

		sentence.push('.');
		Ok(Prediction::Sentence(sentence))
	}
}

/// Generates `count` words from `seed_word` with the default dead-end policy.
///
/// Shorthand for building a `PredictionInput` and calling
/// `Generator::predict`.
///
/// # Errors
/// Returns `MarkovError::InvalidCount` if `count` is 0.
pub fn predict<R: Rng + ?Sized>(
	model: &TransitionModel,
	seed_word: &str,
	count: usize,
	rng: &mut R,
) -> Result<Prediction> {
	let prediction_input = PredictionInput::new(seed_word, count)?;
	Generator::new(model).predict(&prediction_input, rng)
}
