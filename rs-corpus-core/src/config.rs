use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, PrepResult};

/// Number of random phrases produced when none is configured.
pub const DEFAULT_PHRASE_COUNT: usize = 200_000;

/// Everything a preparation run needs.
///
/// Input paths have no default. `phrase_count`, `seed` and `output_dir`
/// fall back to `200000`, unseeded and the current directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepConfig {
	/// Flat list of company names, one per line.
	pub companies_path: PathBuf,
	/// Resource dump of geographic names.
	pub geo_path: PathBuf,
	/// Resource dump of person names.
	pub persons_path: PathBuf,
	/// Vocabulary, one token per line.
	pub vocab_path: PathBuf,
	#[serde(default = "default_phrase_count")]
	pub phrase_count: usize,
	#[serde(default)]
	pub seed: Option<u64>,
	#[serde(default = "default_output_dir")]
	pub output_dir: PathBuf,
}

fn default_phrase_count() -> usize {
	DEFAULT_PHRASE_COUNT
}

fn default_output_dir() -> PathBuf {
	PathBuf::from(".")
}

impl PrepConfig {
	pub fn new(
		companies_path: impl Into<PathBuf>,
		geo_path: impl Into<PathBuf>,
		persons_path: impl Into<PathBuf>,
		vocab_path: impl Into<PathBuf>,
	) -> Self {
		Self {
			companies_path: companies_path.into(),
			geo_path: geo_path.into(),
			persons_path: persons_path.into(),
			vocab_path: vocab_path.into(),
			phrase_count: DEFAULT_PHRASE_COUNT,
			seed: None,
			output_dir: default_output_dir(),
		}
	}

	pub fn with_phrase_count(mut self, phrase_count: usize) -> Self {
		self.phrase_count = phrase_count;
		self
	}

	pub fn with_seed(mut self, seed: Option<u64>) -> Self {
		self.seed = seed;
		self
	}

	pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
		self.output_dir = output_dir.into();
		self
	}

	/// Checks that every input path is set.
	///
	/// # Errors
	/// Returns `Config` naming the first empty path.
	pub fn validate(&self) -> PrepResult<()> {
		let inputs: [(&str, &Path); 4] = [
			("companies_path", &self.companies_path),
			("geo_path", &self.geo_path),
			("persons_path", &self.persons_path),
			("vocab_path", &self.vocab_path),
		];
		for (name, path) in inputs {
			if path.as_os_str().is_empty() {
				return Err(PrepError::Config(format!("{name} is empty")));
			}
		}
		Ok(())
	}
}
