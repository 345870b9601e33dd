use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::ModelError;

/// A whitespace-free piece of source text.
///
/// Shared between the interner and every successor list that mentions it,
/// so cloning a token never copies its content.
pub type Token = Arc<str>;

/// Dense identity of an interned token.
///
/// Ids are assigned in first-occurrence order and always lie in
/// `[0, token_count)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(usize);

impl TokenId {
	/// Returns the id as a vector index.
	pub fn index(self) -> usize {
		self.0
	}
}

impl fmt::Display for TokenId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Maps each distinct token to a stable `TokenId`.
///
/// # Invariants
/// - `tokens[id]` and `ids[token]` describe the same bijection
/// - No token is stored twice
/// - `tokens.len() <= max_tokens`
#[derive(Clone, Debug)]
pub struct Interner {
	/// Token content indexed by id.
	tokens: Vec<Token>,
	/// Reverse lookup, only needed while building.
	ids: HashMap<Token, TokenId>,
	/// Hard ceiling on the number of distinct tokens.
	max_tokens: usize,
}

impl Interner {
	/// Creates an empty interner accepting at most `max_tokens` distinct tokens.
	pub fn new(max_tokens: usize) -> Self {
		Self {
			tokens: Vec::new(),
			ids: HashMap::new(),
			max_tokens,
		}
	}

	/// Returns the id of `token`, registering it first if necessary.
	///
	/// # Errors
	/// - `ModelError::EmptyToken` if `token` is empty.
	/// - `ModelError::TooManyTokens` if `token` is new and the interner is full.
	pub fn intern(&mut self, token: &str) -> Result<TokenId, ModelError> {
		if token.is_empty() {
			return Err(ModelError::EmptyToken);
		}
		if let Some(&id) = self.ids.get(token) {
			return Ok(id);
		}
		if self.tokens.len() >= self.max_tokens {
			return Err(ModelError::TooManyTokens { limit: self.max_tokens });
		}

		let id = TokenId(self.tokens.len());
		let token: Token = Arc::from(token);
		self.tokens.push(token.clone());
		self.ids.insert(token, id);
		Ok(id)
	}

	/// Looks up an already interned token.
	pub fn get(&self, token: &str) -> Option<TokenId> {
		self.ids.get(token).copied()
	}

	/// Returns the token stored under `id`.
	pub fn resolve(&self, id: TokenId) -> Option<&Token> {
		self.tokens.get(id.0)
	}

	/// All tokens, indexed by id.
	pub fn as_slice(&self) -> &[Token] {
		&self.tokens
	}

	/// Number of distinct tokens.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Iterates over `(id, token)` pairs in id order.
	pub fn iter(&self) -> impl Iterator<Item = (TokenId, &Token)> {
		self.tokens.iter().enumerate().map(|(i, token)| (TokenId(i), token))
	}
}
