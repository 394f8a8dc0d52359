//! Error taxonomy shared by every preparation stage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing a corpus.
///
/// Only [`PrepError::Format`] is recovered locally (the offending resource
/// line is skipped). Every other variant aborts the run.
#[derive(Debug, Error)]
pub enum PrepError {
	#[error("failed to access {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("{path}:{line}: cannot decode text: {reason}")]
	Decode {
		path: PathBuf,
		line: usize,
		reason: String,
	},
	#[error("line {line} is not a bracketed resource identifier")]
	Format { line: usize },
	#[error("invalid input: {0}")]
	InvalidInput(String),
	#[error("configuration error: {0}")]
	Config(String),
}

impl PrepError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}

pub type PrepResult<T> = Result<T, PrepError>;
