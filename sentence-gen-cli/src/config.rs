use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sentence_gen_core::{GenerateError, GenerationInput, Limits, ModelError};

/// Errors produced while reading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("failed to read config file {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error(transparent)]
	Limits(#[from] ModelError),

	#[error(transparent)]
	Generation(#[from] GenerateError),
}

/// Content of a TOML configuration file.
///
/// ```toml
/// [limits]
/// max_tokens = 15000
/// max_successors = 7500
///
/// [generation]
/// sentence_capacity = 9999
/// max_seed_attempts = 100000
/// max_sentence_attempts = 1000000
/// walk = "uniform"
/// ```
///
/// Missing tables and keys fall back to their defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct FileConfig {
	pub limits: Limits,
	pub generation: GenerationInput,
}

impl FileConfig {
	/// Loads and validates a configuration file.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_owned(),
			source,
		})?;
		let config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
			path: path.to_owned(),
			source,
		})?;
		config.limits.validate()?;
		config.generation.validate()?;
		Ok(config)
	}

	fn parse(contents: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(contents)
	}
}
