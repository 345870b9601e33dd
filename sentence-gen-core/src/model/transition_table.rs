use log::debug;

use super::interner::{Interner, Token, TokenId};
use super::limits::Limits;
use super::sanitizer::sanitize;
use crate::error::ModelError;

/// Default token delimiters: space, newline and carriage return.
pub const DEFAULT_DELIMITERS: &[char] = &[' ', '\n', '\r'];

/// Successor lists of every interned token.
///
/// `successors[id]` holds, in reading order, the text of every token that
/// immediately follows an occurrence of `id`. Repeats are kept: the
/// multiplicity of a successor is its observation count.
///
/// # Invariants
/// - One list per interned token
/// - Each list is at most `max_successors` long
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
	successors: Vec<Vec<Token>>,
	max_successors: usize,
	/// Successor occurrences skipped because a list was full.
	dropped: usize,
}

impl TransitionTable {
	fn new(max_successors: usize) -> Self {
		Self {
			successors: Vec::new(),
			max_successors,
			dropped: 0,
		}
	}

	/// Records that `successor` followed an occurrence of `id`.
	///
	/// Silently drops the successor if the list of `id` is full.
	fn add_transition(&mut self, id: TokenId, successor: Token) {
		let Some(list) = self.successors.get_mut(id.index()) else {
			return;
		};
		if list.len() >= self.max_successors {
			self.dropped += 1;
			return;
		}
		list.push(successor);
	}

	/// Returns the successor list of `id` (empty if none was observed).
	pub fn successors(&self, id: TokenId) -> &[Token] {
		self.successors.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Total number of recorded transitions.
	pub fn transition_count(&self) -> usize {
		self.successors.iter().map(Vec::len).sum()
	}

	/// Number of transitions dropped by the per-token cap.
	pub fn dropped(&self) -> usize {
		self.dropped
	}

	pub fn is_empty(&self) -> bool {
		self.successors.iter().all(Vec::is_empty)
	}
}

/// Token model built from a single body of text.
///
/// Owns the interner and the transition table. It is built once and never
/// mutated afterwards; generators borrow it.
#[derive(Clone, Debug)]
pub struct Model {
	interner: Interner,
	table: TransitionTable,
	/// Number of token occurrences in the source (not deduplicated).
	occurrences: usize,
}

impl Model {
	/// Sanitizes `raw` and builds a model from it with the default delimiters.
	///
	/// # Errors
	/// See [`Model::build`].
	pub fn from_bytes(raw: &[u8], limits: &Limits) -> Result<Self, ModelError> {
		Self::from_text(&sanitize(raw), limits)
	}

	/// Builds a model from already sanitized text with the default delimiters.
	///
	/// # Errors
	/// See [`Model::build`].
	pub fn from_text(text: &str, limits: &Limits) -> Result<Self, ModelError> {
		Self::build(text, DEFAULT_DELIMITERS, limits)
	}

	/// Tokenizes `text`, interns every token and fills the successor lists.
	///
	/// # Behavior
	/// - Tokens are maximal runs of characters not in `delimiters`
	/// - Consecutive delimiters never produce empty tokens
	/// - With fewer than two tokens no transition is recorded (not an error)
	///
	/// # Errors
	/// - `ModelError::InvalidLimit` if `limits` is invalid.
	/// - `ModelError::TooManyTokens` if the text has more distinct tokens
	///   than `limits.max_tokens`.
	pub fn build(text: &str, delimiters: &[char], limits: &Limits) -> Result<Self, ModelError> {
		limits.validate()?;

		let mut interner = Interner::new(limits.max_tokens);
		let order = text
			.split(|c: char| delimiters.contains(&c))
			.filter(|token| !token.is_empty())
			.map(|token| interner.intern(token))
			.collect::<Result<Vec<TokenId>, ModelError>>()?;

		let mut table = TransitionTable::new(limits.max_successors);
		table.successors.resize_with(interner.len(), Vec::new);

		if order.len() >= 2 {
			for pair in order.windows(2) {
				// Ids come from this interner, resolve can not fail
				if let Some(successor) = interner.resolve(pair[1]) {
					table.add_transition(pair[0], successor.clone());
				}
			}
		}

		debug!(
			"model built: {} occurrences, {} distinct tokens, {} transitions ({} dropped)",
			order.len(),
			interner.len(),
			table.transition_count(),
			table.dropped()
		);

		Ok(Self {
			interner,
			table,
			occurrences: order.len(),
		})
	}

	pub fn interner(&self) -> &Interner {
		&self.interner
	}

	pub fn table(&self) -> &TransitionTable {
		&self.table
	}

	/// Number of distinct tokens.
	pub fn token_count(&self) -> usize {
		self.interner.len()
	}

	/// Number of token occurrences in the source text.
	pub fn occurrences(&self) -> usize {
		self.occurrences
	}

	/// Returns the token stored under `id`.
	pub fn token(&self, id: TokenId) -> Option<&Token> {
		self.interner.resolve(id)
	}

	/// Returns the successor list of `token`, or `None` if it was never seen.
	pub fn successors_of(&self, token: &str) -> Option<&[Token]> {
		self.interner.get(token).map(|id| self.table.successors(id))
	}

	/// Returns whether any token starts with an uppercase ASCII letter.
	pub fn has_sentence_start(&self) -> bool {
		self.interner.iter().any(|(_, token)| starts_a_sentence(token))
	}

	/// Returns whether any token ends with `mark`.
	pub fn has_token_ending_with(&self, mark: char) -> bool {
		self.interner.iter().any(|(_, token)| token.ends_with(mark))
	}
}

/// Returns whether `token` may open a sentence.
pub(crate) fn starts_a_sentence(token: &str) -> bool {
	token.as_bytes().first().is_some_and(u8::is_ascii_uppercase)
}
