use crate::error::{CfResult, CipherForgeError};
use crate::language::LanguageModel;
use crate::ALPHABET_LEN;
use fastrand::Rng;
use strum_macros::{Display, EnumString};

/// Which swap-candidate stream drives the hill climber.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, clap::ValueEnum, serde::Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SwapMode {
    /// One exhaustive pass over all 325 unordered position pairs.
    Deterministic,
    /// Infinite frequency-weighted random pairs; the stall counter is
    /// the only stopping condition.
    Random,
}

/// Finite stream of all C(26,2) pairs, ordered by increasing pairwise
/// distance and, within a distance, by increasing lower index.
#[derive(Debug, Clone)]
pub struct DeterministicSwaps {
    dist: usize,
    low: usize,
}

impl DeterministicSwaps {
    pub fn new() -> Self {
        Self { dist: 1, low: 0 }
    }
}

impl Default for DeterministicSwaps {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for DeterministicSwaps {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.dist >= ALPHABET_LEN {
            return None;
        }
        let pair = (self.low, self.low + self.dist);
        self.low += 1;
        if self.low + self.dist >= ALPHABET_LEN {
            self.low = 0;
            self.dist += 1;
        }
        Some(pair)
    }
}

/// Infinite stream of position pairs biased toward frequent reference
/// letters. The pool holds each position repeated in proportion to its
/// frequency percentage (x1000, truncated); every draw takes two
/// distinct pool slots and re-draws until the positions differ.
pub struct WeightedSwaps {
    pool: Vec<u8>,
    rng: Rng,
}

impl WeightedSwaps {
    pub fn new(model: &LanguageModel, rng: Rng) -> CfResult<Self> {
        let mut pool = Vec::new();
        for (pos, &freq) in model.frequencies().iter().enumerate() {
            let weight = (freq * 1000.0) as usize;
            pool.extend(std::iter::repeat(pos as u8).take(weight));
        }

        // Needs at least two distinct positions, or sampling a != b
        // would never terminate.
        let first = pool.first().copied();
        if pool.len() < 2 || pool.iter().all(|&p| Some(p) == first) {
            return Err(CipherForgeError::DegenerateModel(
                "frequency weights round to a zero or single-letter pool".to_string(),
            ));
        }

        Ok(Self { pool, rng })
    }
}

impl Iterator for WeightedSwaps {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        let len = self.pool.len();
        loop {
            let i = self.rng.usize(0..len);
            // Second slot drawn from the remaining len-1, shifted past i.
            let mut j = self.rng.usize(0..len - 1);
            if j >= i {
                j += 1;
            }
            let (a, b) = (self.pool[i], self.pool[j]);
            if a != b {
                return Some((a as usize, b as usize));
            }
        }
    }
}

/// Pull-based stream over either generator. The finite variant signals
/// exhaustion with `None`; the weighted variant never does.
pub enum SwapStream {
    Deterministic(DeterministicSwaps),
    Weighted(WeightedSwaps),
}

impl SwapStream {
    pub fn new(mode: SwapMode, model: &LanguageModel, rng: Rng) -> CfResult<Self> {
        Ok(match mode {
            SwapMode::Deterministic => Self::Deterministic(DeterministicSwaps::new()),
            SwapMode::Random => Self::Weighted(WeightedSwaps::new(model, rng)?),
        })
    }
}

impl Iterator for SwapStream {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        match self {
            Self::Deterministic(s) => s.next(),
            Self::Weighted(s) => s.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_starts_with_adjacent_pairs() {
        let mut pairs = DeterministicSwaps::new();
        assert_eq!(pairs.next(), Some((0, 1)));
        assert_eq!(pairs.next(), Some((1, 2)));
        let rest: Vec<_> = pairs.collect();
        // 325 total; two already consumed.
        assert_eq!(rest.len(), 323);
        assert_eq!(rest.last(), Some(&(0, 25)));
    }
}
