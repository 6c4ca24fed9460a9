//! Word-level Markov chain text generation library.
//!
//! This crate provides a small first-order prediction pipeline:
//! - Corpus loading (lines joined into a single string)
//! - Punctuation stripping
//! - Word transition model construction
//! - Uniform random walks over the model with an injectable RNG
//!
//! The model is built once and never mutated afterwards, so a single
//! instance can be shared freely between threads.

/// Transition model and sentence generation.
///
/// Exposes the immutable `TransitionModel`, the `Generator` walking it,
/// and the `PredictionInput` describing one generation request.
pub mod model;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Text normalization and tokenization.
pub mod text;

/// Corpus loading.
pub mod io;

pub use error::{MarkovError, Result};
pub use model::generator::{predict, Generator, Prediction, WORD_NOT_FOUND};
pub use model::prediction_input::{DeadEndPolicy, PredictionInput};
pub use model::transition_model::{ModelStats, TransitionModel};
