//! Top-level module for the sentence generation system.
//!
//! This module provides a token-level Markov text generator, including:
//! - Input sanitization (`sanitizer`)
//! - Token interning (`Interner`)
//! - Successor lists and the owned model (`TransitionTable`, `Model`)
//! - Build and generation parameters (`Limits`, `GenerationInput`)
//! - Single-sentence generation (`SentenceGenerator`)
//! - The retry loop producing the final sentences (`Driver`)

/// Replaces non-printable bytes with spaces before tokenization.
pub mod sanitizer;

/// Dense, first-occurrence ordered token ids.
pub mod interner;

/// Successor lists per token and the `Model` that owns them.
///
/// Handles tokenization, interning and frequency-weighted successor
/// accumulation in a single pass.
pub mod transition_table;

/// Capacity ceilings applied while building a model.
pub mod limits;

/// Generation configuration structure.
///
/// Stores the sentence buffer capacity, retry limits and the walk strategy.
pub mod generation_input;

/// Seeding and walking state machine producing one sentence per call.
pub mod generator;

/// Rejection-sampling loop producing the question and exclamation sentences.
pub mod driver;
