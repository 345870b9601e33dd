use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use sentence_gen_core::{Driver, Limits, Model, WalkStrategy, io};

mod config;

use config::FileConfig;

/// Generates a question and an exclamation from a body of text.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// Text file to learn from
	#[arg(default_value = "data/example.txt")]
	source: PathBuf,

	/// TOML file with `[limits]` and `[generation]` tables
	#[arg(long)]
	config: Option<PathBuf>,

	/// Random seed (defaults to the current time)
	#[arg(long)]
	seed: Option<u64>,

	/// How tokens are picked after the first one: `uniform` or `successors`
	#[arg(long)]
	walk: Option<WalkStrategy>,

	/// Maximum number of distinct tokens (successor lists default to half of it)
	#[arg(long)]
	max_tokens: Option<usize>,

	/// Maximum length of a successor list
	#[arg(long)]
	max_successors: Option<usize>,

	/// Maximum sentence length in bytes
	#[arg(long)]
	sentence_capacity: Option<usize>,

	/// Sentences generated per mark before giving up
	#[arg(long)]
	max_attempts: Option<usize>,
}

impl Args {
	/// Merges command line flags over the configuration file (or defaults).
	fn resolve_config(&self) -> Result<FileConfig, Box<dyn std::error::Error>> {
		let mut config = match &self.config {
			Some(path) => FileConfig::load(path)?,
			None => FileConfig::default(),
		};

		if let Some(max_tokens) = self.max_tokens {
			config.limits = Limits::with_max_tokens(max_tokens);
		}
		if let Some(max_successors) = self.max_successors {
			config.limits.max_successors = max_successors;
		}
		config.limits.validate()?;

		if let Some(walk) = self.walk {
			config.generation.walk = walk;
		}
		if let Some(capacity) = self.sentence_capacity {
			config.generation.set_sentence_capacity(capacity)?;
		}
		if let Some(attempts) = self.max_attempts {
			config.generation.set_max_sentence_attempts(attempts)?;
		}

		Ok(config)
	}

	fn rng_seed(&self) -> u64 {
		self.seed.unwrap_or_else(|| {
			SystemTime::now()
				.duration_since(UNIX_EPOCH)
				.map(|elapsed| elapsed.as_nanos() as u64)
				.unwrap_or_default()
		})
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();

	let args = Args::parse();
	let config = args.resolve_config()?;
	debug!("configuration: {config:?}");

	let raw = io::load(&args.source)?;
	let model = Model::from_bytes(&raw, &config.limits)?;
	info!(
		"loaded {}: {} tokens, {} distinct",
		args.source.display(),
		model.occurrences(),
		model.token_count()
	);

	let seed = args.rng_seed();
	info!("random seed: {seed}");

	let mut driver = Driver::new(&model, config.generation, StdRng::seed_from_u64(seed))?;
	let output = driver.run()?;

	println!("{}", output.question);
	println!();
	println!("{}", output.exclamation);

	Ok(())
}
