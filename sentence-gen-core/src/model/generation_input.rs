use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Strategy used to pick each token after the seed.
///
/// # Variants
/// - `Uniform`: draw from the whole token set, ignoring the previous token
///   and the transition table.
/// - `Successors`: draw from the successor list of the previous token, so
///   frequent transitions are more likely. Falls back to `Uniform` for a
///   token without successors.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WalkStrategy {
	#[default]
	Uniform,
	Successors,
}

impl FromStr for WalkStrategy {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"uniform" => Ok(WalkStrategy::Uniform),
			"successors" => Ok(WalkStrategy::Successors),
			other => Err(format!("unknown walk strategy '{other}', expected 'uniform' or 'successors'")),
		}
	}
}

impl fmt::Display for WalkStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			WalkStrategy::Uniform => f.write_str("uniform"),
			WalkStrategy::Successors => f.write_str("successors"),
		}
	}
}

/// Input parameters for sentence generation.
///
/// # Responsibilities
/// - Bound the sentence buffer (`sentence_capacity`)
/// - Bound both rejection-sampling loops (`max_seed_attempts`,
///   `max_sentence_attempts`)
/// - Select the walk strategy
///
/// # Invariants
/// - Every numeric field is strictly positive once set through a setter
///   or checked with `validate`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationInput {
	/// Maximum sentence length in bytes, text only (no terminating NUL).
	sentence_capacity: usize,

	/// Draws allowed to find a token starting with an uppercase letter.
	max_seed_attempts: usize,

	/// Sentences the driver may generate before giving up on a mark.
	max_sentence_attempts: usize,

	/// How tokens are picked after the seed.
	pub walk: WalkStrategy,
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			sentence_capacity: 9_999,
			max_seed_attempts: 100_000,
			max_sentence_attempts: 1_000_000,
			walk: WalkStrategy::Uniform,
		}
	}
}

impl GenerationInput {
	pub fn sentence_capacity(&self) -> usize {
		self.sentence_capacity
	}

	pub fn max_seed_attempts(&self) -> usize {
		self.max_seed_attempts
	}

	pub fn max_sentence_attempts(&self) -> usize {
		self.max_sentence_attempts
	}

	/// Sets the sentence buffer capacity in bytes.
	///
	/// # Errors
	/// Returns an error if `capacity` is zero.
	pub fn set_sentence_capacity(&mut self, capacity: usize) -> Result<(), GenerateError> {
		self.sentence_capacity = positive("sentence_capacity", capacity)?;
		Ok(())
	}

	/// Sets how many draws the seeding step may take.
	///
	/// # Errors
	/// Returns an error if `attempts` is zero.
	pub fn set_max_seed_attempts(&mut self, attempts: usize) -> Result<(), GenerateError> {
		self.max_seed_attempts = positive("max_seed_attempts", attempts)?;
		Ok(())
	}

	/// Sets how many sentences the driver may reject per mark.
	///
	/// # Errors
	/// Returns an error if `attempts` is zero.
	pub fn set_max_sentence_attempts(&mut self, attempts: usize) -> Result<(), GenerateError> {
		self.max_sentence_attempts = positive("max_sentence_attempts", attempts)?;
		Ok(())
	}

	/// Checks every field, for values coming from deserialization.
	pub fn validate(&self) -> Result<(), GenerateError> {
		positive("sentence_capacity", self.sentence_capacity)?;
		positive("max_seed_attempts", self.max_seed_attempts)?;
		positive("max_sentence_attempts", self.max_sentence_attempts)?;
		Ok(())
	}
}

fn positive(name: &str, value: usize) -> Result<usize, GenerateError> {
	if value == 0 {
		return Err(GenerateError::InvalidInput(format!("{name} must be > 0")));
	}
	Ok(value)
}
