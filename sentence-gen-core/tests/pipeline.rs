use std::io::Write;

use rand::SeedableRng;
use rand::rngs::StdRng;

use sentence_gen_core::{
	Driver, GenerateError, GenerationInput, Limits, Model, ModelError, WalkStrategy, io,
};

fn load_model(raw: &[u8]) -> Model {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(raw).unwrap();
	file.flush().unwrap();
	let bytes = io::load(file.path()).unwrap();
	Model::from_bytes(&bytes, &Limits::default()).unwrap()
}

fn bounded_input() -> GenerationInput {
	let mut input = GenerationInput::default();
	input.set_max_sentence_attempts(10_000).unwrap();
	input
}

#[test]
fn file_to_sentences() {
	let model = load_model(b"Hello world.\r\nIs this a test?\n\x00Yes it is!\n");
	assert_eq!(model.token_count(), 9);

	for seed in 0..20 {
		let mut driver = Driver::new(&model, bounded_input(), StdRng::seed_from_u64(seed)).unwrap();
		let output = driver.run().unwrap();
		assert_eq!(output.question.rsplit(' ').next(), Some("test?"));
		assert_eq!(output.exclamation.rsplit(' ').next(), Some("is!"));
	}
}

#[test]
fn successor_walk_on_a_longer_text() {
	let model = load_model(
		b"Where are you going? I am going home! Are you sure? Yes I am sure. \
		  Where is home? Home is where the heart is!",
	);
	let mut input = bounded_input();
	input.walk = WalkStrategy::Successors;
	let mut driver = Driver::new(&model, input, StdRng::seed_from_u64(7)).unwrap();
	let output = driver.run().unwrap();
	assert!(output.question.ends_with('?'));
	assert!(output.exclamation.ends_with('!'));

	// Every adjacent pair of the output must exist in the source
	for sentence in [&output.question, &output.exclamation] {
		let words: Vec<&str> = sentence.split(' ').collect();
		for pair in words.windows(2) {
			let successors = model.successors_of(pair[0]).unwrap();
			assert!(successors.iter().any(|s| &**s == pair[1]), "{pair:?} is not a transition");
		}
	}
}

#[test]
fn token_limit_is_reported() {
	let err = Model::from_bytes(b"one two three four", &Limits::with_max_tokens(3)).unwrap_err();
	assert_eq!(err, ModelError::TooManyTokens { limit: 3 });
}

#[test]
fn empty_source_cannot_generate() {
	let model = load_model(b"\n\r\t ");
	let result = Driver::new(&model, GenerationInput::default(), StdRng::seed_from_u64(0));
	assert!(matches!(result, Err(GenerateError::EmptyTokenSet)));
}
