use once_cell::sync::Lazy;
use regex::Regex;

use super::record::{self, BOUNDARY, TOKEN_SEPARATOR};
use crate::error::{PrepError, PrepResult};

/// Stand-in for any run of decimal digits.
pub const DIGIT_PLACEHOLDER: &str = "N";

/// Punctuation split off words in flat name lists.
pub const FLAT_PUNCTUATION: &str = "!,.?&()\"";

/// Punctuation split off words in resource identifiers (quotes are stripped
/// before normalization there).
pub const RESOURCE_PUNCTUATION: &str = "!,.?&()";

static FLAT_RULE: Lazy<Regex> = Lazy::new(|| punctuation_regex(FLAT_PUNCTUATION).unwrap());
static RESOURCE_RULE: Lazy<Regex> = Lazy::new(|| punctuation_regex(RESOURCE_PUNCTUATION).unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

fn punctuation_regex(chars: &str) -> Result<Regex, regex::Error> {
	Regex::new(&format!(r"(\w)([{}])", regex::escape(chars)))
}

/// Which punctuation characters get separated from the word they follow.
#[derive(Debug, Clone)]
pub struct PunctuationRule {
	pattern: Regex,
}

impl PunctuationRule {
	/// Builds a rule from an arbitrary set of punctuation characters.
	///
	/// # Errors
	/// Returns `InvalidInput` if the set is empty.
	pub fn new(chars: &str) -> PrepResult<Self> {
		if chars.is_empty() {
			return Err(PrepError::InvalidInput("punctuation set must not be empty".to_owned()));
		}
		let pattern = punctuation_regex(chars)
			.map_err(|e| PrepError::InvalidInput(format!("bad punctuation set {chars:?}: {e}")))?;
		Ok(Self { pattern })
	}

	/// Rule used for flat name lists: `! , . ? & ( ) "`.
	pub fn flat() -> Self {
		Self { pattern: FLAT_RULE.clone() }
	}

	/// Rule used for resource identifiers: `! , . ? & ( )`.
	pub fn resource() -> Self {
		Self { pattern: RESOURCE_RULE.clone() }
	}
}

/// One named step of the normalization pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
	TrimLowercase,
	SeparatePunctuation,
	MarkBoundaries,
	CollapseDigits,
	Wrap,
}

impl Pass {
	/// Passes in the order they are applied.
	pub const ORDER: [Pass; 5] = [
		Pass::TrimLowercase,
		Pass::SeparatePunctuation,
		Pass::MarkBoundaries,
		Pass::CollapseDigits,
		Pass::Wrap,
	];

	pub fn name(&self) -> &'static str {
		match self {
			Pass::TrimLowercase => "trim_lowercase",
			Pass::SeparatePunctuation => "separate_punctuation",
			Pass::MarkBoundaries => "mark_boundaries",
			Pass::CollapseDigits => "collapse_digits",
			Pass::Wrap => "wrap",
		}
	}
}

/// Turns a raw line into a name record.
///
/// ## Invariants
/// - Every produced record starts and ends with the boundary marker
/// - Tokens never contain whitespace
/// - No decimal digit survives; each digit run becomes one placeholder
#[derive(Debug, Clone)]
pub struct Normalizer {
	rule: PunctuationRule,
}

impl Normalizer {
	pub fn new(rule: PunctuationRule) -> Self {
		Self { rule }
	}

	/// Applies a single pass.
	pub fn apply(&self, pass: Pass, text: &str) -> String {
		match pass {
			Pass::TrimLowercase => trim_lowercase(text),
			Pass::SeparatePunctuation => separate_punctuation(&self.rule, text),
			Pass::MarkBoundaries => mark_boundaries(text),
			Pass::CollapseDigits => collapse_digits(text),
			Pass::Wrap => wrap(text),
		}
	}

	/// Runs every pass in order, without discarding anything.
	///
	/// An empty line gives the degenerate `__`.
	pub fn normalize_raw(&self, line: &str) -> String {
		Pass::ORDER
			.iter()
			.fold(line.to_owned(), |text, pass| self.apply(*pass, &text))
	}

	/// Runs every pass in order.
	///
	/// Returns `None` when the result has no token content.
	pub fn normalize(&self, line: &str) -> Option<String> {
		let record = self.normalize_raw(line);
		record::has_content(&record).then_some(record)
	}
}

/// Trims surrounding whitespace and lowercases.
pub fn trim_lowercase(text: &str) -> String {
	text.trim().to_lowercase()
}

/// Inserts a space between a word character and the punctuation that
/// immediately follows it. Matches do not overlap, so in `a..` only the
/// first dot is split off.
pub fn separate_punctuation(rule: &PunctuationRule, text: &str) -> String {
	rule.pattern.replace_all(text, "${1} ${2}").into_owned()
}

/// Replaces each whitespace run with the token separator.
pub fn mark_boundaries(text: &str) -> String {
	WHITESPACE.replace_all(text, TOKEN_SEPARATOR).into_owned()
}

/// Replaces each maximal run of digits with the placeholder.
pub fn collapse_digits(text: &str) -> String {
	DIGITS.replace_all(text, DIGIT_PLACEHOLDER).into_owned()
}

/// Adds the outer boundary markers.
pub fn wrap(text: &str) -> String {
	format!("{BOUNDARY}{}{BOUNDARY}", text.trim())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn flat() -> Normalizer {
		Normalizer::new(PunctuationRule::flat())
	}

	#[test]
	fn acme_inc() {
		assert_eq!(flat().normalize("Acme, Inc.").as_deref(), Some("_acme_ _,_ _inc_ _._"));
	}

	#[test]
	fn digit_runs_keep_their_count_but_not_their_length() {
		let record = flat().normalize("abc123def45").unwrap();
		assert_eq!(record, "_abcNdefN_");
		assert_eq!(record.matches(DIGIT_PLACEHOLDER).count(), 2);
	}

	#[test]
	fn whitespace_runs_become_one_separator() {
		assert_eq!(mark_boundaries("a \t  b"), "a_ _b");
		assert_eq!(flat().normalize("  General   Motors\t").as_deref(), Some("_general_ _motors_"));
	}

	#[test]
	fn punctuation_is_split_only_after_a_word_character() {
		let rule = PunctuationRule::flat();
		assert_eq!(separate_punctuation(&rule, "what?!"), "what ?!");
		assert_eq!(separate_punctuation(&rule, "(a)"), "(a )");
		assert_eq!(separate_punctuation(&rule, "say \"hi\""), "say \"hi \"");
		assert_eq!(separate_punctuation(&rule, "a&b"), "a &b");
	}

	#[test]
	fn resource_rule_leaves_quotes_alone() {
		let rule = PunctuationRule::resource();
		assert_eq!(separate_punctuation(&rule, "hi\""), "hi\"");
		assert_eq!(separate_punctuation(&rule, "hi."), "hi .");
	}

	#[test]
	fn trim_lowercase_handles_unicode() {
		assert_eq!(trim_lowercase("  ÉCOLE Polytechnique "), "école polytechnique");
	}

	#[test]
	fn wrap_adds_outer_markers() {
		assert_eq!(wrap("a_ _b"), "_a_ _b_");
	}

	#[test]
	fn output_is_always_wrapped() {
		let normalizer = flat();
		for line in ["x", "Foo Bar", "3M Company", "A.B.C.", "  spaced  ", "(paren)"] {
			let record = normalizer.normalize(line).unwrap();
			assert!(record.starts_with(BOUNDARY), "{record}");
			assert!(record.ends_with(BOUNDARY), "{record}");
		}
	}

	#[test]
	fn blank_lines_have_no_record() {
		let normalizer = flat();
		assert_eq!(normalizer.normalize_raw("   "), "__");
		assert_eq!(normalizer.normalize(""), None);
		assert_eq!(normalizer.normalize(" \t "), None);
	}

	#[test]
	fn passes_run_in_declared_order() {
		let names: Vec<_> = Pass::ORDER.iter().map(Pass::name).collect();
		assert_eq!(
			names,
			vec!["trim_lowercase", "separate_punctuation", "mark_boundaries", "collapse_digits", "wrap"]
		);
	}

	#[test]
	fn custom_rule() {
		let normalizer = Normalizer::new(PunctuationRule::new("-").unwrap());
		assert_eq!(normalizer.normalize("x- y.").as_deref(), Some("_x_ _-_ _y._"));
		assert!(PunctuationRule::new("").is_err());
	}
}
