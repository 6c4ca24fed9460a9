//! Top-level module for the word transition system.
//!
//! This module provides:
//! - The immutable word transition model (`TransitionModel`)
//! - Internal successor lists (`Successors`)
//! - Generation request parameters (`PredictionInput`)
//! - The random walk producing sentences (`Generator`)

/// Random walk over a `TransitionModel`.
///
/// Produces capitalized, period-terminated sentences, or the
/// `WordNotFound` sentinel for unknown seed words.
pub mod generator;

/// First-order word model.
///
/// Handles corpus ingestion and exposes read-only successor lookups.
pub mod transition_model;

/// Ordered successor list of a single word.
///
/// Supports uniform random sampling. This module is not exposed publicly.
mod successors;

/// Generation request parameters and dead-end policy.
pub mod prediction_input;
