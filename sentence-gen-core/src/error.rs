use thiserror::Error;

/// Errors raised while building a [`Model`](crate::Model).
///
/// Every variant aborts ingestion. Successor-list overflow is not an error:
/// the extra successor is dropped and building continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
	/// The number of distinct tokens exceeds `Limits::max_tokens`.
	#[error("too many distinct tokens (limit is {limit})")]
	TooManyTokens { limit: usize },

	/// An empty string was passed to the interner.
	#[error("cannot intern an empty token")]
	EmptyToken,

	/// A limit is out of its valid range.
	#[error("invalid limit: {0}")]
	InvalidLimit(String),
}

/// Errors raised while generating sentences.
///
/// Per-attempt problems (buffer exhaustion, wrong final mark) are never
/// surfaced: the driver retries them. These variants are what remains once
/// a request can not succeed or the retry budget is spent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
	/// The model has no tokens to sample from.
	#[error("the model contains no tokens")]
	EmptyTokenSet,

	/// The terminator rule was asked about an empty token.
	#[error("an empty token has no final character")]
	EmptyToken,

	/// No token starting with an uppercase letter was drawn.
	#[error("no sentence-starting token found after {attempts} attempts")]
	NoSeedFound { attempts: usize },

	/// No sentence ending with `mark` was generated.
	#[error("no sentence ending with '{mark}' found after {attempts} attempts")]
	NoMatchFound { mark: char, attempts: usize },

	/// A generation parameter is out of its valid range.
	#[error("invalid generation input: {0}")]
	InvalidInput(String),
}
