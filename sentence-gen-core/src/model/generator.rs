use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::generation_input::{GenerationInput, WalkStrategy};
use super::interner::Token;
use super::transition_table::{Model, starts_a_sentence};
use crate::error::GenerateError;

/// Punctuation marks ending a sentence.
pub const TERMINATORS: [char; 3] = ['!', '?', '.'];

/// Returns whether `token` ends with `!`, `?` or `.`.
///
/// # Errors
/// Returns `GenerateError::EmptyToken` for an empty token: it has no final
/// character to look at.
pub fn token_ends_a_sentence(token: &str) -> Result<bool, GenerateError> {
	match token.chars().last() {
		Some(last) => Ok(TERMINATORS.contains(&last)),
		None => Err(GenerateError::EmptyToken),
	}
}

/// How a generation attempt stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
	/// The last token ends a sentence.
	Terminated,
	/// The next token did not fit into the sentence buffer.
	BufferExhausted,
}

/// Result of one generation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
	text: String,
	outcome: Outcome,
}

impl Sentence {
	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn outcome(&self) -> Outcome {
		self.outcome
	}

	pub fn into_text(self) -> String {
		self.text
	}

	/// Returns whether the sentence text ends with `mark`.
	pub fn ends_with(&self, mark: char) -> bool {
		self.text.ends_with(mark)
	}
}

/// Generates one sentence per call by walking over a `Model`.
///
/// Each call goes through three states:
/// - seeding: draw tokens until one starts with an uppercase letter
/// - walking: append tokens picked by the `WalkStrategy`
/// - terminated: a terminator token was appended, or the buffer is full
///
/// Randomness comes from the caller's `rng`, so a seeded generator gives
/// reproducible sentences.
pub struct SentenceGenerator<'a, R> {
	model: &'a Model,
	input: GenerationInput,
	rng: R,
	/// Whether any token can start a sentence, computed once.
	has_seed: bool,
}

impl<'a, R: Rng> SentenceGenerator<'a, R> {
	/// Creates a generator over `model`.
	///
	/// # Errors
	/// - `GenerateError::InvalidInput` if `input` does not validate.
	/// - `GenerateError::EmptyTokenSet` if the model has no tokens.
	pub fn new(model: &'a Model, input: GenerationInput, rng: R) -> Result<Self, GenerateError> {
		input.validate()?;
		if model.token_count() == 0 {
			return Err(GenerateError::EmptyTokenSet);
		}

		Ok(Self {
			model,
			input,
			rng,
			has_seed: model.has_sentence_start(),
		})
	}

	pub fn model(&self) -> &'a Model {
		self.model
	}

	pub fn input(&self) -> &GenerationInput {
		&self.input
	}

	/// Generates one sentence.
	///
	/// The sentence starts with a token whose first character is uppercase
	/// and is built by appending a space and a token until either a
	/// terminator token is appended (`Outcome::Terminated`) or the next token
	/// would exceed `sentence_capacity` bytes (`Outcome::BufferExhausted`).
	/// An exhausted sentence keeps what was accumulated so far.
	///
	/// # Errors
	/// - `GenerateError::NoSeedFound` if no token starts with an uppercase
	///   letter, or none was drawn within `max_seed_attempts`.
	pub fn generate(&mut self) -> Result<Sentence, GenerateError> {
		let capacity = self.input.sentence_capacity();
		let seed = self.seed()?;

		let mut text = String::new();
		if seed.len() > capacity {
			return Ok(Sentence { text, outcome: Outcome::BufferExhausted });
		}
		text.push_str(seed);
		if token_ends_a_sentence(seed)? {
			return Ok(Sentence { text, outcome: Outcome::Terminated });
		}

		let mut previous = seed;
		loop {
			let token = self.next_token(previous)?;

			// One separating space, the sentence is never empty here
			if text.len() + 1 + token.len() > capacity {
				trace!("sentence buffer full at {} bytes", text.len());
				return Ok(Sentence { text, outcome: Outcome::BufferExhausted });
			}
			text.push(' ');
			text.push_str(token);

			if token_ends_a_sentence(token)? {
				return Ok(Sentence { text, outcome: Outcome::Terminated });
			}
			previous = token;
		}
	}

	/// Draws a token that starts with an uppercase letter.
	fn seed(&mut self) -> Result<&'a Token, GenerateError> {
		let attempts = self.input.max_seed_attempts();
		if !self.has_seed {
			return Err(GenerateError::NoSeedFound { attempts: 0 });
		}

		for _ in 0..attempts {
			let token = self.random_token()?;
			if starts_a_sentence(token) {
				return Ok(token);
			}
		}
		Err(GenerateError::NoSeedFound { attempts })
	}

	/// Picks the token following `previous` according to the walk strategy.
	fn next_token(&mut self, previous: &Token) -> Result<&'a Token, GenerateError> {
		let model: &'a Model = self.model;
		match self.input.walk {
			WalkStrategy::Uniform => self.random_token(),
			WalkStrategy::Successors => match model.successors_of(previous) {
				Some(successors) if !successors.is_empty() => {
					successors.choose(&mut self.rng).ok_or(GenerateError::EmptyTokenSet)
				}
				_ => self.random_token(),
			},
		}
	}

	/// Draws a token uniformly from the whole token set.
	fn random_token(&mut self) -> Result<&'a Token, GenerateError> {
		let model: &'a Model = self.model;
		model
			.interner()
			.as_slice()
			.choose(&mut self.rng)
			.ok_or(GenerateError::EmptyTokenSet)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::limits::Limits;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn model(text: &str) -> Model {
		Model::from_text(text, &Limits::default()).unwrap()
	}

	fn generator(model: &Model, input: GenerationInput, seed: u64) -> SentenceGenerator<'_, StdRng> {
		SentenceGenerator::new(model, input, StdRng::seed_from_u64(seed)).unwrap()
	}

	#[test]
	fn terminator_rule() {
		assert_eq!(token_ends_a_sentence("end."), Ok(true));
		assert_eq!(token_ends_a_sentence("what?"), Ok(true));
		assert_eq!(token_ends_a_sentence("wow!"), Ok(true));
		assert_eq!(token_ends_a_sentence("!"), Ok(true));
		assert_eq!(token_ends_a_sentence("comma,"), Ok(false));
		assert_eq!(token_ends_a_sentence("?quoted\""), Ok(false));
		assert_eq!(token_ends_a_sentence(""), Err(GenerateError::EmptyToken));
	}

	#[test]
	fn empty_model_is_rejected() {
		let empty = model("   ");
		let result = SentenceGenerator::new(&empty, GenerationInput::default(), StdRng::seed_from_u64(1));
		assert!(matches!(result, Err(GenerateError::EmptyTokenSet)));
	}

	#[test]
	fn missing_uppercase_token_is_rejected_up_front() {
		let lower = model("all lower case words here.");
		let mut generator = generator(&lower, GenerationInput::default(), 3);
		assert_eq!(generator.generate(), Err(GenerateError::NoSeedFound { attempts: 0 }));
	}

	#[test]
	fn seed_search_is_bounded() {
		let mostly_lower: String = (0..200).map(|i| format!("w{i} ")).collect::<String>() + "Upper";
		let model = model(&mostly_lower);
		let mut input = GenerationInput::default();
		input.set_max_seed_attempts(1).unwrap();
		let mut generator = generator(&model, input, 11);

		let mut failures = 0;
		for _ in 0..50 {
			match generator.generate() {
				Ok(sentence) => assert!(sentence.text().starts_with("Upper")),
				Err(GenerateError::NoSeedFound { attempts: 1 }) => failures += 1,
				Err(other) => panic!("unexpected error: {other}"),
			}
		}
		assert!(failures > 0);
	}

	#[test]
	fn sentences_start_uppercase_and_end_on_a_terminator() {
		let model = model("Hello world. Is this a test? Yes it is!");
		let mut generator = generator(&model, GenerationInput::default(), 42);
		for _ in 0..100 {
			let sentence = generator.generate().unwrap();
			assert_eq!(sentence.outcome(), Outcome::Terminated);
			let first = sentence.text().split(' ').next().unwrap();
			assert!(["Hello", "Is", "Yes"].contains(&first));
			let last = sentence.text().split(' ').last().unwrap();
			assert!(["world.", "test?", "is!"].contains(&last));
			assert!(!sentence.text().contains("  "));
		}
	}

	#[test]
	fn terminator_seed_stops_immediately() {
		let model = model("Stop. now");
		let mut generator = generator(&model, GenerationInput::default(), 5);
		let sentence = generator.generate().unwrap();
		assert_eq!(sentence.text(), "Stop.");
		assert_eq!(sentence.outcome(), Outcome::Terminated);
	}

	#[test]
	fn capacity_bounds_the_sentence() {
		// No terminator at all: every attempt must end on the buffer limit
		let model = model("Start word another");
		let mut input = GenerationInput::default();
		input.set_sentence_capacity(40).unwrap();
		let mut generator = generator(&model, input, 9);
		for _ in 0..20 {
			let sentence = generator.generate().unwrap();
			assert_eq!(sentence.outcome(), Outcome::BufferExhausted);
			assert!(sentence.text().len() <= 40);
			assert!(sentence.text().starts_with("Start"));
			// "another" is the longest token, so less than 8 bytes are left
			assert!(sentence.text().len() > 40 - 8);
		}
	}

	#[test]
	fn seed_larger_than_capacity_gives_an_empty_sentence() {
		let model = model("Enormous");
		let mut input = GenerationInput::default();
		input.set_sentence_capacity(3).unwrap();
		let mut generator = generator(&model, input, 2);
		let sentence = generator.generate().unwrap();
		assert_eq!(sentence.text(), "");
		assert_eq!(sentence.outcome(), Outcome::BufferExhausted);
	}

	#[test]
	fn successor_walk_follows_edges() {
		let model = model("The cat sat. The dog ran!");
		let mut input = GenerationInput::default();
		input.walk = WalkStrategy::Successors;
		let mut generator = generator(&model, input, 17);
		for _ in 0..50 {
			let sentence = generator.generate().unwrap().into_text();
			assert!(
				sentence == "The cat sat." || sentence == "The dog ran!",
				"unexpected sentence {sentence:?}"
			);
		}
	}

	#[test]
	fn uniform_walk_ignores_successor_edges() {
		let model = model("Alpha beta gamma. Delta!");
		let mut generator = generator(&model, GenerationInput::default(), 31);

		let mut off_edge = 0;
		for _ in 0..200 {
			let sentence = generator.generate().unwrap().into_text();
			let words: Vec<&str> = sentence.split(' ').collect();
			for pair in words.windows(2) {
				let successors = model.successors_of(pair[0]).unwrap();
				if !successors.iter().any(|s| &**s == pair[1]) {
					off_edge += 1;
				}
			}
		}
		assert!(off_edge > 0, "every generated pair followed a successor edge");
	}

	#[test]
	fn same_seed_same_sentences() {
		let model = model("Hello world. Is this a test? Yes it is!");
		let mut first = generator(&model, GenerationInput::default(), 1234);
		let mut second = generator(&model, GenerationInput::default(), 1234);
		for _ in 0..10 {
			assert_eq!(first.generate(), second.generate());
		}
	}
}
