use std::fmt;

use log::{debug, trace, warn};
use rand::Rng;

use super::generation_input::GenerationInput;
use super::generator::SentenceGenerator;
use super::transition_table::Model;
use crate::error::GenerateError;

/// The two sentences produced by a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
	/// A sentence ending with `?`.
	pub question: String,
	/// A sentence ending with `!`.
	pub exclamation: String,
}

impl fmt::Display for Output {
	/// Question first, then a blank line, then the exclamation.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}\n\n{}", self.question, self.exclamation)
	}
}

/// Rejection-sampling loop on top of a `SentenceGenerator`.
///
/// # Responsibilities
/// - Reject requests that can never succeed (no token ends with the mark)
/// - Generate sentences until one ends with the requested mark
/// - Give up after `max_sentence_attempts` sentences
pub struct Driver<'a, R> {
	generator: SentenceGenerator<'a, R>,
}

impl<'a, R: Rng> Driver<'a, R> {
	/// Creates a driver generating from `model`.
	///
	/// # Errors
	/// Same as [`SentenceGenerator::new`].
	pub fn new(model: &'a Model, input: GenerationInput, rng: R) -> Result<Self, GenerateError> {
		Ok(Self {
			generator: SentenceGenerator::new(model, input, rng)?,
		})
	}

	/// Generates sentences until one ends with `mark` and returns it.
	///
	/// Sentences ending on a full buffer or on another terminator are
	/// discarded, and so is an attempt whose seed draws all missed.
	///
	/// # Errors
	/// - `GenerateError::NoMatchFound` with `attempts: 0` if no token ends
	///   with `mark`.
	/// - `GenerateError::NoMatchFound` if `max_sentence_attempts` sentences
	///   were rejected.
	/// - Any error of [`SentenceGenerator::generate`].
	pub fn sentence_ending_with(&mut self, mark: char) -> Result<String, GenerateError> {
		if !self.generator.model().has_token_ending_with(mark) {
			warn!("no token ends with '{mark}', giving up without generating");
			return Err(GenerateError::NoMatchFound { mark, attempts: 0 });
		}

		let attempts = self.generator.input().max_sentence_attempts();
		for attempt in 1..=attempts {
			let sentence = match self.generator.generate() {
				Ok(sentence) => sentence,
				Err(GenerateError::NoSeedFound { attempts: draws }) if draws > 0 => {
					trace!("attempt {attempt} rejected (no seed in {draws} draws)");
					continue;
				}
				Err(err) => return Err(err),
			};
			if sentence.ends_with(mark) {
				debug!("sentence ending with '{mark}' found after {attempt} attempts");
				return Ok(sentence.into_text());
			}
			trace!("attempt {attempt} rejected ({:?})", sentence.outcome());
		}

		warn!("no sentence ending with '{mark}' after {attempts} attempts");
		Err(GenerateError::NoMatchFound { mark, attempts })
	}

	/// Generates the question, then the exclamation.
	pub fn run(&mut self) -> Result<Output, GenerateError> {
		let question = self.sentence_ending_with('?')?;
		let exclamation = self.sentence_ending_with('!')?;
		Ok(Output { question, exclamation })
	}
}
