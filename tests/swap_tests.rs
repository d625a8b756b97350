use cipherforge::language::LanguageModel;
use cipherforge::optimizer::swaps::{DeterministicSwaps, WeightedSwaps};
use cipherforge::{CipherForgeError, ALPHABET_LEN};
use std::collections::HashSet;

const SAMPLE: &str = include_str!("data/sample.txt");

#[test]
fn deterministic_emits_every_pair_exactly_once() {
    let pairs: Vec<(usize, usize)> = DeterministicSwaps::new().collect();
    assert_eq!(pairs.len(), 325);

    let unique: HashSet<(usize, usize)> = pairs.iter().copied().collect();
    assert_eq!(unique.len(), 325);

    for a in 0..ALPHABET_LEN {
        for b in (a + 1)..ALPHABET_LEN {
            assert!(
                unique.contains(&(a, b)),
                "pair ({}, {}) never generated",
                a,
                b
            );
        }
    }
}

#[test]
fn deterministic_orders_by_distance_then_lower_index() {
    let pairs: Vec<(usize, usize)> = DeterministicSwaps::new().collect();
    let mut expected = Vec::new();
    for dist in 1..ALPHABET_LEN {
        for low in 0..(ALPHABET_LEN - dist) {
            expected.push((low, low + dist));
        }
    }
    assert_eq!(pairs, expected);
}

#[test]
fn weighted_pairs_are_valid_and_distinct() {
    let model = LanguageModel::from_text(SAMPLE).unwrap();
    let stream = WeightedSwaps::new(&model, fastrand::Rng::with_seed(42)).unwrap();

    for (a, b) in stream.take(5_000) {
        assert!(a < ALPHABET_LEN && b < ALPHABET_LEN);
        assert_ne!(a, b);
    }
}

#[test]
fn weighted_sampling_favors_frequent_positions() {
    let model = LanguageModel::from_text(SAMPLE).unwrap();
    let stream = WeightedSwaps::new(&model, fastrand::Rng::with_seed(7)).unwrap();

    let mut hits = [0usize; ALPHABET_LEN];
    for (a, b) in stream.take(20_000) {
        hits[a] += 1;
        hits[b] += 1;
    }
    // Position 0 is the most frequent reference letter; position 25 the
    // rarest. The bias should be unmistakable over 20k draws.
    assert!(hits[0] > hits[25] * 2);
}

#[test]
fn weighted_streams_reproduce_under_a_fixed_seed() {
    let model = LanguageModel::from_text(SAMPLE).unwrap();
    let a: Vec<_> = WeightedSwaps::new(&model, fastrand::Rng::with_seed(99))
        .unwrap()
        .take(200)
        .collect();
    let b: Vec<_> = WeightedSwaps::new(&model, fastrand::Rng::with_seed(99))
        .unwrap()
        .take(200)
        .collect();
    assert_eq!(a, b);
}

#[test]
fn single_letter_pool_is_degenerate() {
    // Only "a" carries any frequency, so the pool holds one position.
    let model = LanguageModel::from_text("aaaa").unwrap();
    assert!(matches!(
        WeightedSwaps::new(&model, fastrand::Rng::with_seed(1)),
        Err(CipherForgeError::DegenerateModel(_))
    ));
}
