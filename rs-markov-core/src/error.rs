//! Error types for corpus loading and generation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Markov operations.
///
/// A seed word missing from the model is not an error: it is reported
/// through `Prediction::WordNotFound` so callers can branch on it.
#[derive(Error, Debug)]
pub enum MarkovError {
	/// The corpus could not be read.
	#[error("Failed to read corpus {}: {source}", .path.display())]
	Io {
		/// Path of the corpus file.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// A generation request asked for fewer than one word.
	#[error("Word count must be at least 1, got {0}")]
	InvalidCount(usize),

	/// The walk reached a word that never precedes another one.
	#[error("No successor recorded for '{word}' (generated so far: '{generated}')")]
	DeadEnd {
		/// The word without successors.
		word: String,
		/// The sequence generated before the dead end, without the final period.
		generated: String,
	},
}

/// Result type alias for Markov operations.
pub type Result<T> = std::result::Result<T, MarkovError>;
