use std::path::Path;

use crate::config::PrepConfig;
use crate::corpus::extractor::{FlatListExtractor, NameExtractor, ResourceExtractor};
use crate::corpus::sampler::{make_rng, PhraseSampler};
use crate::corpus::vocabulary::Vocabulary;
use crate::error::PrepResult;
use crate::io::{prepare_folder, write_lines, SourceText};

pub const COMPANY_NAMES_FILE: &str = "company_names.txt";
pub const PROPER_NAMES_FILE: &str = "proper_names.txt";
pub const GEO_NAMES_FILE: &str = "geo_names.txt";
pub const RANDOM_PHRASES_FILE: &str = "random_phrases.txt";

/// Number of lines written to each output file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
	pub company_names: usize,
	pub proper_names: usize,
	pub geo_names: usize,
	pub random_phrases: usize,
}

/// Runs the whole preparation.
///
/// # Behavior
/// - Companies (flat list), persons and geo (resource dumps), then phrases
/// - Each collection is written as soon as it is built
/// - Stops on the first I/O, decode or input error; outputs already written
///   are left in place
pub fn run(config: &PrepConfig) -> PrepResult<RunSummary> {
	config.validate()?;
	let output_dir = prepare_folder(&config.output_dir)?;
	let mut summary = RunSummary::default();

	let resources = ResourceExtractor::new();

	summary.company_names = extract_to(
		&FlatListExtractor::new(),
		&config.companies_path,
		&output_dir.join(COMPANY_NAMES_FILE),
	)?;
	summary.proper_names = extract_to(&resources, &config.persons_path, &output_dir.join(PROPER_NAMES_FILE))?;
	summary.geo_names = extract_to(&resources, &config.geo_path, &output_dir.join(GEO_NAMES_FILE))?;

	let vocabulary = Vocabulary::from_source(&SourceText::read(&config.vocab_path)?)?;
	log::info!(
		"sampling {} phrases from {} tokens (seed: {:?})",
		config.phrase_count,
		vocabulary.len(),
		config.seed
	);
	let phrases = PhraseSampler::new(&vocabulary).sample_many(config.phrase_count, &mut make_rng(config.seed));
	let phrases_path = output_dir.join(RANDOM_PHRASES_FILE);
	summary.random_phrases = write_lines(&phrases_path, &phrases)?;
	log::info!("wrote {} phrases to {}", summary.random_phrases, phrases_path.display());

	Ok(summary)
}

fn extract_to<E: NameExtractor>(extractor: &E, input: &Path, output: &Path) -> PrepResult<usize> {
	let source = SourceText::read(input)?;
	let names = extractor.extract(&source)?;
	let written = write_lines(output, &names)?;
	log::info!("wrote {} names to {}", written, output.display());
	Ok(written)
}
