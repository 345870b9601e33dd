//! Token-level Markov sentence generation library.
//!
//! This crate provides the whole sentence generation pipeline:
//! - Sanitizing raw bytes down to printable ASCII
//! - Interning whitespace-delimited tokens into dense ids
//! - Building frequency-weighted successor lists
//! - Random-walk generation of sentences ending with a chosen punctuation mark
//!
//! The typical flow is `io::load` → `Model::from_bytes` → `Driver::run`.

/// Core model, generation and driver logic.
///
/// Exposes the model builder, the sentence generator and the driver loop.
pub mod model;

/// Error types returned by ingestion and generation.
pub mod error;

/// I/O utilities (source loading).
pub mod io;

pub use error::{GenerateError, ModelError};
pub use model::driver::{Driver, Output};
pub use model::generation_input::{GenerationInput, WalkStrategy};
pub use model::generator::{Outcome, Sentence, SentenceGenerator, token_ends_a_sentence};
pub use model::interner::{Interner, Token, TokenId};
pub use model::limits::Limits;
pub use model::transition_table::{Model, TransitionTable};
