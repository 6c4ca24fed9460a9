use rand::Rng;
use rand::seq::IndexedRandom;

/// Represents a word of the transition model.
///
/// A `Successors` stores every word observed immediately after one word
/// of the corpus, in text order. The word itself is the map key.
///
/// Conceptually, this is a node in a Markov chain where each outgoing edge
/// is repeated once per observation, so that a uniform draw over the list
/// follows the empirical frequencies.
///
/// ## Invariants
/// - The list order matches the order of occurrence in the corpus
/// - The list is never empty once the state has been created
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Successors {
	/// Observed successors, duplicates included.
	/// Example: "is" => ["V", "G", "F", "a"]
	words: Vec<String>,
}

impl Successors {
	/// Creates a state with its first observed successor.
	pub(crate) fn new(first: &str) -> Self {
		Self {
			words: vec![first.to_owned()],
		}
	}

	/// Records one more occurrence of `next_word` after this key.
	pub(crate) fn push(&mut self, next_word: &str) {
		self.words.push(next_word.to_owned());
	}

	/// Returns the successors in order of occurrence.
	pub(crate) fn as_slice(&self) -> &[String] {
		&self.words
	}

	/// Returns the number of recorded transitions.
	pub(crate) fn len(&self) -> usize {
		self.words.len()
	}

	/// Picks a successor uniformly at random.
	///
	/// Returns `None` only if the list is empty, which the invariants rule out.
	pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.words.choose(rng).map(String::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	#[test]
	fn test_push_keeps_order_and_duplicates() {
		let mut state = Successors::new("V");
		state.push("G");
		state.push("V");
		assert_eq!(state.as_slice(), ["V", "G", "V"]);
		assert_eq!(state.len(), 3);
	}

	#[test]
	fn test_sample_returns_a_recorded_successor() {
		let mut state = Successors::new("name");
		state.push("current");
		let mut rng = ChaCha8Rng::seed_from_u64(7);
		for _ in 0..50 {
			let word = state.sample(&mut rng).unwrap();
			assert!(word == "name" || word == "current");
		}
	}

	#[test]
	fn test_single_successor_is_always_chosen() {
		let state = Successors::new("is");
		let mut rng = ChaCha8Rng::seed_from_u64(1);
		assert_eq!(state.sample(&mut rng), Some("is"));
	}
}
