use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Default ceiling on distinct tokens.
pub const DEFAULT_MAX_TOKENS: usize = 15_000;

/// Capacity ceilings applied while building a `Model`.
///
/// # Invariants
/// - Both limits are strictly positive
///
/// Exceeding `max_tokens` aborts the build; exceeding `max_successors`
/// only drops the extra successor of that token.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Limits {
	/// Maximum number of distinct tokens.
	pub max_tokens: usize,
	/// Maximum length of a single successor list.
	pub max_successors: usize,
}

impl Default for Limits {
	fn default() -> Self {
		Self::with_max_tokens(DEFAULT_MAX_TOKENS)
	}
}

impl Limits {
	/// Creates limits for `max_tokens` distinct tokens, with successor lists
	/// bounded to half of that.
	pub fn with_max_tokens(max_tokens: usize) -> Self {
		Self {
			max_tokens,
			max_successors: (max_tokens / 2).max(1),
		}
	}

	/// Checks that both limits are usable.
	///
	/// # Errors
	/// Returns `ModelError::InvalidLimit` if a limit is zero.
	pub fn validate(&self) -> Result<(), ModelError> {
		if self.max_tokens == 0 {
			return Err(ModelError::InvalidLimit("max_tokens must be > 0".to_owned()));
		}
		if self.max_successors == 0 {
			return Err(ModelError::InvalidLimit("max_successors must be > 0".to_owned()));
		}
		Ok(())
	}
}
