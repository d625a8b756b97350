pub mod runner;
pub mod swaps;

use self::swaps::{SwapMode, SwapStream};
use crate::error::CfResult;
use crate::key::Key;
use crate::language::LanguageModel;
use crate::matrix::BigramMatrix;
use crate::text::{filter_letters, rank_letter_frequencies, SubstitutionMap};
use fastrand::Rng;
use tracing::debug;

/// Default number of consecutive non-improving swaps before giving up.
pub const DEFAULT_MAX_STALL: usize = 10_000;

/// One unseeded climb; the key is directly usable as a decoding table
/// through [`SubstitutionMap::from_key`].
pub fn optimize(
    ciphertext: &str,
    model: &LanguageModel,
    mode: SwapMode,
    max_stall: usize,
) -> CfResult<Key> {
    HillClimber::new(model, mode)
        .with_max_stall(max_stall)
        .solve(ciphertext)
        .map(|s| s.key)
}

/// Best key found by a single climb, with loop statistics.
#[derive(Debug, Clone)]
pub struct Solution {
    pub key: Key,
    /// L1 distance of the final matrix to the reference matrix.
    pub score: f32,
    /// Swap candidates evaluated.
    pub evaluated: usize,
    /// Swaps accepted.
    pub accepted: usize,
}

/// Jakobsen's bigram hill climber. One instance runs one climb over one
/// ciphertext; all mutable state (matrix, key, counters) lives inside
/// `solve` and is owned by that call alone. The model is read-only and
/// freely shared across parallel climbs.
pub struct HillClimber<'a> {
    model: &'a LanguageModel,
    mode: SwapMode,
    max_stall: usize,
    seed: Option<u64>,
}

impl<'a> HillClimber<'a> {
    pub fn new(model: &'a LanguageModel, mode: SwapMode) -> Self {
        Self {
            model,
            mode,
            max_stall: DEFAULT_MAX_STALL,
            seed: None,
        }
    }

    pub fn with_max_stall(mut self, max_stall: usize) -> Self {
        self.max_stall = max_stall;
        self
    }

    /// Seeds the weighted generator; deterministic mode never draws
    /// randomness, so the seed only matters in random mode.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn solve(&self, ciphertext: &str) -> CfResult<Solution> {
        let order = self.model.order();
        let filtered = filter_letters(ciphertext);

        // Seed: pair the i-th most frequent cipher letter with the i-th
        // most frequent reference letter.
        let ranked: Vec<u8> = rank_letter_frequencies(&filtered)
            .into_iter()
            .map(|(l, _)| l)
            .collect();
        let mut key = Key::from_ranked(&ranked)?;

        let putative = SubstitutionMap::from_key(&key, order).translate(&filtered);
        let mut matrix = BigramMatrix::from_text(&putative, order)?;
        let reference = self.model.bigram_matrix();
        let mut best = matrix.l1_distance(reference);
        debug!(score = best, mode = %self.mode, "starting climb");

        let rng = match self.seed {
            Some(s) => Rng::with_seed(s),
            None => Rng::new(),
        };
        let mut stream = SwapStream::new(self.mode, self.model, rng)?;

        let mut stall = 0;
        let mut evaluated = 0;
        let mut accepted = 0;

        while stall < self.max_stall {
            let Some((a, b)) = stream.next() else {
                break;
            };
            evaluated += 1;

            let candidate = matrix.swapped(a, b);
            let score = candidate.l1_distance(reference);

            // Strict improvement only; ties would oscillate.
            if score < best {
                matrix = candidate;
                key.swap(a, b);
                best = score;
                stall = 0;
                accepted += 1;
                debug!(score, a, b, "accepted swap");
            } else {
                stall += 1;
            }
        }

        debug_assert!(key.validate().is_ok());
        debug!(score = best, evaluated, accepted, "climb finished");
        Ok(Solution {
            key,
            score: best,
            evaluated,
            accepted,
        })
    }
}
