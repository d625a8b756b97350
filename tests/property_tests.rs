use cipherforge::language::LetterOrder;
use cipherforge::matrix::BigramMatrix;
use cipherforge::text::{self, SubstitutionMap};
use cipherforge::ALPHABET_LEN;
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_counts()(
        raw in proptest::collection::vec(0.0f32..50.0, ALPHABET_LEN * ALPHABET_LEN)
    ) -> [[f32; ALPHABET_LEN]; ALPHABET_LEN] {
        let mut counts = [[0.0f32; ALPHABET_LEN]; ALPHABET_LEN];
        for (i, v) in raw.into_iter().enumerate() {
            counts[i / ALPHABET_LEN][i % ALPHABET_LEN] = v;
        }
        counts
    }
}

fn arb_matrix() -> impl Strategy<Value = BigramMatrix> {
    arb_counts().prop_filter_map("all-zero count table", |counts| {
        BigramMatrix::from_counts(counts).ok()
    })
}

fn arb_letter_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(b'a'..=b'z', 2..400)
        .prop_map(|bytes| String::from_utf8(bytes).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn swap_involution_restores_the_matrix(
        m in arb_matrix(),
        a in 0..ALPHABET_LEN,
        b in 0..ALPHABET_LEN
    ) {
        prop_assume!(a != b);
        prop_assert_eq!(m.swapped(a, b).swapped(a, b), m);
    }

    #[test]
    fn distance_is_symmetric_and_non_negative(
        m in arb_matrix(),
        n in arb_matrix()
    ) {
        let d = m.l1_distance(&n);
        prop_assert!(d >= 0.0);
        prop_assert_eq!(d, n.l1_distance(&m));
        prop_assert_eq!(m.l1_distance(&m), 0.0);
    }

    #[test]
    fn any_letter_text_normalizes_to_one_hundred(text in arb_letter_text()) {
        let order = LetterOrder::alphabetical();
        let m = BigramMatrix::from_text(&text, &order).unwrap();
        prop_assert!((m.sum() - 100.0).abs() < 1e-2);
    }

    #[test]
    fn scramble_always_inverts_cleanly(
        text in arb_letter_text(),
        seed in any::<u64>()
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let (cipher, truth) = text::scramble(&text, &mut rng).unwrap();
        prop_assert_eq!(truth.translate(&cipher), text);
    }

    #[test]
    fn translation_preserves_non_alpha(
        text in "[ -~]{0,200}",
        seed in any::<u64>()
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut table = *SubstitutionMap::identity().table();
        rng.shuffle(&mut table);
        let map = SubstitutionMap::from_table(table).unwrap();

        let out = map.translate(&text);
        for (i, c) in text.chars().enumerate() {
            if !c.is_ascii_lowercase() {
                prop_assert_eq!(out.chars().nth(i), Some(c));
            }
        }
    }
}
