use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::record;
use super::vocabulary::Vocabulary;

/// Upper bound (exclusive) of the roll that picks a phrase length.
const LENGTH_ROLLS: u32 = 10;

/// Maps a roll in `0..10` to a phrase length.
///
/// - `0..=4` → 2 (50%)
/// - `5..=6` → 3 (20%)
/// - `7` → 1 (10%)
/// - `8..=9` → 4 (20%)
pub fn phrase_length(roll: u32) -> usize {
	match roll {
		0..=4 => 2,
		5..=6 => 3,
		7 => 1,
		_ => 4,
	}
}

/// Builds a random generator, seeded when reproducibility is wanted.
pub fn make_rng(seed: Option<u64>) -> StdRng {
	match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	}
}

/// Draws random n-grams from a vocabulary.
///
/// Tokens are picked uniformly and with replacement, so the same token may
/// appear several times in one phrase.
#[derive(Debug, Clone, Copy)]
pub struct PhraseSampler<'a> {
	vocabulary: &'a Vocabulary,
}

impl<'a> PhraseSampler<'a> {
	pub fn new(vocabulary: &'a Vocabulary) -> Self {
		Self { vocabulary }
	}

	/// Draws a single phrase.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
		let length = phrase_length(rng.random_range(0..LENGTH_ROLLS));
		let tokens = self.vocabulary.tokens();
		record::join((0..length).map(|_| tokens[rng.random_range(0..tokens.len())].as_str()))
	}

	/// Draws `count` phrases.
	pub fn sample_many<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
		(0..count).map(|_| self.sample(rng)).collect()
	}
}
