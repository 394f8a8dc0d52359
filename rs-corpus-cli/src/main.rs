mod settings;

use anyhow::{Context, Result};
use clap::Parser;

use settings::CliArgs;

fn main() -> Result<()> {
    // RUST_LOG overrides the default level, e.g. RUST_LOG=debug to see skipped lines
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();

    // Defaults < config file < RS_CORPUS__* environment < command-line flags
    let config = settings::load(&args).context("failed to load configuration")?;
    log::debug!("{config:?}");

    let summary = rs_corpus_core::run(&config).context("corpus preparation aborted")?;

    println!("Company names:  {}", summary.company_names);
    println!("Proper names:   {}", summary.proper_names);
    println!("Geo names:      {}", summary.geo_names);
    println!("Random phrases: {}", summary.random_phrases);

    Ok(())
}
