//! Text side of corpus preparation.
//!
//! This module provides:
//! - Record helpers (`_token_ _token_` form)
//! - A pass-based punctuation normalizer (`Normalizer`)
//! - Name extraction from flat lists and resource dumps (`NameExtractor`)
//! - Vocabulary loading (`Vocabulary`)
//! - Random phrase sampling (`PhraseSampler`)

/// Joining and splitting of `_token_ _token_` records.
pub mod record;

/// Ordered, named normalization passes.
///
/// Each pass is exposed as a free function so it can be tested on its own.
pub mod normalizer;

/// Flat-list and resource-identifier name extractors.
///
/// Both produce deduplicated `NameSet`s.
pub mod extractor;

/// Ordered token list feeding the phrase sampler.
pub mod vocabulary;

/// Random n-gram phrases with a fixed length distribution.
pub mod sampler;
