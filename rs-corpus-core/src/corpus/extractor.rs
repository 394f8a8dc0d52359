use std::collections::BTreeSet;

use percent_encoding::percent_decode_str;
use regex::Regex;

use super::normalizer::{Normalizer, PunctuationRule};
use super::record;
use crate::error::{PrepError, PrepResult};
use crate::io::SourceText;

/// Deduplicated name records. Ordered so that output files are reproducible.
pub type NameSet = BTreeSet<String>;

/// Resource prefix of DBpedia dumps.
pub const DBPEDIA_RESOURCE_PREFIX: &str = "http://dbpedia.org/resource/";

/// Counters collected while extracting one source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractStats {
	pub lines: usize,
	pub malformed: usize,
	pub with_comma: usize,
	pub empty: usize,
	pub records: usize,
}

/// A way of turning a line source into name records.
pub trait NameExtractor {
	fn name(&self) -> &'static str;

	fn extract_with_stats(&self, source: &SourceText) -> PrepResult<(NameSet, ExtractStats)>;

	fn extract(&self, source: &SourceText) -> PrepResult<NameSet> {
		let (names, stats) = self.extract_with_stats(source)?;
		log::info!(
			"{} {}: {} records from {} lines ({} malformed, {} with comma, {} empty)",
			self.name(),
			source.origin().display(),
			stats.records,
			stats.lines,
			stats.malformed,
			stats.with_comma,
			stats.empty,
		);
		Ok(names)
	}
}

/// One name per line, normalized as is.
#[derive(Debug, Clone)]
pub struct FlatListExtractor {
	normalizer: Normalizer,
}

impl FlatListExtractor {
	pub fn new() -> Self {
		Self { normalizer: Normalizer::new(PunctuationRule::flat()) }
	}
}

impl Default for FlatListExtractor {
	fn default() -> Self {
		Self::new()
	}
}

impl NameExtractor for FlatListExtractor {
	fn name(&self) -> &'static str {
		"flat-list"
	}

	fn extract_with_stats(&self, source: &SourceText) -> PrepResult<(NameSet, ExtractStats)> {
		let mut names = NameSet::new();
		let mut stats = ExtractStats::default();

		for (_, line) in source.numbered() {
			stats.lines += 1;
			match self.normalizer.normalize(line) {
				Some(name) => {
					names.insert(name);
				}
				None => stats.empty += 1,
			}
		}

		stats.records = names.len();
		Ok((names, stats))
	}
}

/// Lines of the form `<prefixNAME> ...`, where NAME is percent-encoded and
/// uses underscores for spaces.
///
/// ## Behavior
/// - Lines not starting with the bracketed identifier are skipped
/// - Names containing a comma once decoded are discarded
/// - Each record is cut before its first token opening with `(`,
///   which drops disambiguation suffixes such as `(city)`
#[derive(Debug, Clone)]
pub struct ResourceExtractor {
	prefix: String,
	pattern: Regex,
	normalizer: Normalizer,
}

impl ResourceExtractor {
	/// Extractor for DBpedia resource dumps.
	pub fn new() -> Self {
		Self::with_prefix(DBPEDIA_RESOURCE_PREFIX).expect("valid DBpedia prefix")
	}

	/// Extractor for any `scheme://host/path/` resource prefix.
	///
	/// # Errors
	/// Returns `InvalidInput` if the prefix is empty.
	pub fn with_prefix(prefix: &str) -> PrepResult<Self> {
		if prefix.is_empty() {
			return Err(PrepError::InvalidInput("resource prefix must not be empty".to_owned()));
		}
		// Lines are lowercased before matching
		let prefix = prefix.to_lowercase();
		let pattern = Regex::new(&format!(r"^<{}([^<>\s]+)>", regex::escape(&prefix)))
			.map_err(|e| PrepError::InvalidInput(format!("bad resource prefix: {e}")))?;

		Ok(Self {
			prefix,
			pattern,
			normalizer: Normalizer::new(PunctuationRule::resource()),
		})
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Pulls the still-encoded name out of a line.
	fn name_code<'a>(&self, line: &'a str, number: usize) -> Result<&'a str, PrepError> {
		self.pattern
			.captures(line)
			.and_then(|c| c.get(1))
			.map(|m| m.as_str())
			.ok_or(PrepError::Format { line: number })
	}
}

impl Default for ResourceExtractor {
	fn default() -> Self {
		Self::new()
	}
}

/// Cuts a record before its first token opening with `(`.
///
/// Returns `None` if nothing is left.
pub fn strip_disambiguation(name: &str) -> Option<String> {
	let tokens = record::tokens(name);
	let keep = tokens.iter().position(|t| t.starts_with('(')).unwrap_or(tokens.len());
	if keep == 0 {
		return None;
	}
	Some(record::join(&tokens[..keep]))
}

impl NameExtractor for ResourceExtractor {
	fn name(&self) -> &'static str {
		"resource"
	}

	fn extract_with_stats(&self, source: &SourceText) -> PrepResult<(NameSet, ExtractStats)> {
		let mut names = NameSet::new();
		let mut stats = ExtractStats::default();

		for (number, line) in source.numbered() {
			stats.lines += 1;
			let line = line.trim().to_lowercase();

			let code = match self.name_code(&line, number) {
				Ok(code) => code,
				Err(e) => {
					log::debug!("{}: {e}", source.origin().display());
					stats.malformed += 1;
					continue;
				}
			};

			let decoded = percent_decode_str(code).decode_utf8().map_err(|e| PrepError::Decode {
				path: source.origin().to_path_buf(),
				line: number,
				reason: e.to_string(),
			})?;

			if decoded.contains(',') {
				stats.with_comma += 1;
				continue;
			}

			let text = decoded.replace('"', "").replace('_', " ");
			match self.normalizer.normalize(&text) {
				Some(name) => {
					names.insert(name);
				}
				None => stats.empty += 1,
			}
		}

		let names: NameSet = names.iter().filter_map(|n| strip_disambiguation(n)).collect();
		stats.records = names.len();
		Ok((names, stats))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn source(lines: &[&str]) -> SourceText {
		SourceText::from_lines("test.txt", lines.iter().copied())
	}

	fn resource_line(name: &str) -> String {
		format!("<http://dbpedia.org/resource/{name}> <http://xmlns.com/foaf/0.1/name> \"x\"@en .")
	}

	#[test]
	fn flat_list_deduplicates_case_variants() {
		let names = FlatListExtractor::new()
			.extract(&source(&["Acme, Inc.", "ACME, INC.", "acme, inc.  "]))
			.unwrap();
		assert_eq!(names.len(), 1);
		assert!(names.contains("_acme_ _,_ _inc_ _._"));
	}

	#[test]
	fn flat_list_drops_blank_lines() {
		let (names, stats) = FlatListExtractor::new()
			.extract_with_stats(&source(&["", "Foo", "   "]))
			.unwrap();
		assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["_foo_".to_owned()]);
		assert_eq!(stats.empty, 2);
		assert_eq!(stats.lines, 3);
	}

	#[test]
	fn resource_names_use_underscores_as_spaces() {
		let names = ResourceExtractor::new()
			.extract(&source(&[&resource_line("Albert_Einstein")]))
			.unwrap();
		assert!(names.contains("_albert_ _einstein_"));
	}

	#[test]
	fn resource_names_are_percent_decoded() {
		let names = ResourceExtractor::new()
			.extract(&source(&[&resource_line("Z%C3%BCrich"), &resource_line("St._Louis")]))
			.unwrap();
		assert!(names.contains("_zürich_"));
		assert!(names.contains("_st_ _._ _louis_"));
	}

	#[test]
	fn names_with_commas_are_discarded() {
		let lines = [
			resource_line("Springfield,_Illinois"),
			resource_line("Portland%2C_Oregon"),
			resource_line("Boston"),
		];
		let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
		let (names, stats) = ResourceExtractor::new().extract_with_stats(&source(&lines)).unwrap();

		assert_eq!(stats.with_comma, 2);
		assert!(names.iter().all(|n| !n.contains(',')));
		assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["_boston_".to_owned()]);
	}

	#[test]
	fn disambiguation_suffix_is_cut_and_merged() {
		let lines = [resource_line("Paris_(France)"), resource_line("Paris"), resource_line("Mercury_(planet)")];
		let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
		let names = ResourceExtractor::new().extract(&source(&lines)).unwrap();

		assert_eq!(
			names.into_iter().collect::<Vec<_>>(),
			vec!["_mercury_".to_owned(), "_paris_".to_owned()]
		);
	}

	#[test]
	fn quotes_are_stripped() {
		let names = ResourceExtractor::new()
			.extract(&source(&[&resource_line("%22Weird%22_Al_Yankovic")]))
			.unwrap();
		assert!(names.contains("_weird_ _al_ _yankovic_"));
	}

	#[test]
	fn malformed_lines_are_skipped() {
		let lines = [
			"<http://dbpedia.org/resource/Missing_Bracket".to_owned(),
			"<http://dbpedia.org/resource/Foo_Bar <http://xmlns.com/foaf/0.1/name> \"Foo\"@en .".to_owned(),
			"# comment".to_owned(),
			"<http://example.org/resource/Other>".to_owned(),
			resource_line("Berlin"),
		];
		let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
		let (names, stats) = ResourceExtractor::new().extract_with_stats(&source(&lines)).unwrap();

		assert_eq!(stats.malformed, 4);
		assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["_berlin_".to_owned()]);
	}

	#[test]
	fn invalid_percent_bytes_abort_with_line_number() {
		let lines = [resource_line("Ok"), resource_line("Bad%FF")];
		let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
		match ResourceExtractor::new().extract(&source(&lines)) {
			Err(PrepError::Decode { line, .. }) => assert_eq!(line, 2),
			other => panic!("expected decode error, got {other:?}"),
		}
	}

	#[test]
	fn malformed_escape_is_kept_literally() {
		let names = ResourceExtractor::new()
			.extract(&source(&[&resource_line("100%_Pure")]))
			.unwrap();
		assert!(names.contains("_N%_ _pure_"));
	}

	#[test]
	fn custom_prefix() {
		let extractor = ResourceExtractor::with_prefix("http://example.org/Resource/").unwrap();
		assert_eq!(extractor.prefix(), "http://example.org/resource/");
		let names = extractor
			.extract(&source(&["<http://example.org/resource/Lake_Como>"]))
			.unwrap();
		assert!(names.contains("_lake_ _como_"));
		assert!(ResourceExtractor::with_prefix("").is_err());
	}

	#[test]
	fn strip_disambiguation_drops_records_that_become_empty() {
		assert_eq!(strip_disambiguation("_(album_ _)_"), None);
		assert_eq!(strip_disambiguation("_a_ _(b_ _)_").as_deref(), Some("_a_"));
		assert_eq!(strip_disambiguation("_a_ _b_").as_deref(), Some("_a_ _b_"));
	}
}
