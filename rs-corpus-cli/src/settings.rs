//! Command-line flags and configuration layering.

use std::path::PathBuf;

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use rs_corpus_core::config::DEFAULT_PHRASE_COUNT;
use rs_corpus_core::PrepConfig;

const ENV_PREFIX: &str = "RS_CORPUS";

/// Build name and phrase corpora from company lists, DBpedia dumps and a vocabulary.
#[derive(Parser, Debug, Default)]
#[command(name = "rs-corpus", version)]
pub struct CliArgs {
    /// TOML file holding any of the settings below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Flat list of company names, one per line
    #[arg(long)]
    pub companies: Option<PathBuf>,

    /// DBpedia dump with geographic resources
    #[arg(long)]
    pub geo: Option<PathBuf>,

    /// DBpedia dump with person resources
    #[arg(long)]
    pub persons: Option<PathBuf>,

    /// Vocabulary, one token per line
    #[arg(long)]
    pub vocab: Option<PathBuf>,

    /// Number of random phrases to generate
    #[arg(long)]
    pub phrase_count: Option<usize>,

    /// Seed for reproducible phrases
    #[arg(long)]
    pub seed: Option<u64>,

    /// Folder receiving the four output files
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

/// Layers defaults, the optional config file, the process environment and
/// the flags, in increasing priority.
pub fn load(args: &CliArgs) -> Result<PrepConfig, ConfigError> {
    build(args, Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
}

fn build(args: &CliArgs, environment: Environment) -> Result<PrepConfig, ConfigError> {
    let mut builder = Config::builder()
        .set_default("phrase_count", DEFAULT_PHRASE_COUNT as u64)?
        .set_default("output_dir", ".")?;

    if let Some(path) = &args.config {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    let cfg = builder
        .add_source(environment)
        .set_override_option("companies_path", path_value(&args.companies))?
        .set_override_option("geo_path", path_value(&args.geo))?
        .set_override_option("persons_path", path_value(&args.persons))?
        .set_override_option("vocab_path", path_value(&args.vocab))?
        .set_override_option("phrase_count", args.phrase_count.map(|n| n as u64))?
        .set_override_option("seed", args.seed)?
        .set_override_option("output_dir", path_value(&args.output_dir))?
        .build()?;

    cfg.try_deserialize()
}

fn path_value(path: &Option<PathBuf>) -> Option<String> {
    path.as_ref().map(|p| p.to_string_lossy().into_owned())
}
