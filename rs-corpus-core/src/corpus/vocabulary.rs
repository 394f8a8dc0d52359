use crate::error::{PrepError, PrepResult};
use crate::io::SourceText;

/// Ordered, non-empty list of tokens used to build random phrases.
///
/// # Invariants
/// - At least one token
/// - Tokens are trimmed and never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
	tokens: Vec<String>,
}

impl Vocabulary {
	/// Builds a vocabulary, trimming tokens and skipping blank ones.
	///
	/// # Errors
	/// Returns `InvalidInput` if no token is left.
	pub fn new<I, S>(tokens: I) -> PrepResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let tokens: Vec<String> = tokens
			.into_iter()
			.map(|t| t.as_ref().trim().to_owned())
			.filter(|t| !t.is_empty())
			.collect();

		if tokens.is_empty() {
			return Err(PrepError::InvalidInput("vocabulary is empty".to_owned()));
		}
		Ok(Self { tokens })
	}

	/// Loads one token per line.
	pub fn from_source(source: &SourceText) -> PrepResult<Self> {
		Self::new(source.numbered().map(|(_, line)| line)).map_err(|_| {
			PrepError::InvalidInput(format!("vocabulary {} is empty", source.origin().display()))
		})
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Always `false` for a constructed vocabulary.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.tokens.get(index).map(String::as_str)
	}

	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}
}
