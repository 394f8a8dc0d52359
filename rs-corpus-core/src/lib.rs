//! Corpus preparation library.
//!
//! This crate builds plaintext name and phrase corpora from line-oriented
//! datasets, including:
//! - Punctuation, whitespace and digit normalization
//! - Name extraction from flat lists and DBpedia-style resource dumps
//! - Random phrase sampling from a vocabulary
//! - A batch pipeline writing each collection to its own file

/// Normalization, extraction and sampling.
pub mod corpus;

/// Run configuration (input paths, phrase count, seed, output folder).
pub mod config;

/// Error taxonomy shared by all stages.
pub mod error;

/// I/O utilities (line loading with decode errors, record writing).
pub mod io;

/// Batch orchestration over the configured files.
pub mod pipeline;

pub use config::PrepConfig;
pub use error::{PrepError, PrepResult};
pub use pipeline::{run, RunSummary};
