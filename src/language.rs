use crate::error::{CfResult, CipherForgeError};
use crate::matrix::BigramMatrix;
use crate::ALPHABET_LEN;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Canonical ordering of the alphabet used to index keys and matrices.
/// Position `i` holds the `i`-th reference letter (descending frequency
/// for a real model, plain a-z for tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterOrder {
    letters: [u8; ALPHABET_LEN],
    index: [u8; ALPHABET_LEN],
}

impl LetterOrder {
    pub fn new(letters: [u8; ALPHABET_LEN]) -> CfResult<Self> {
        let mut index = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (pos, &l) in letters.iter().enumerate() {
            if !l.is_ascii_lowercase() || seen[(l - b'a') as usize] {
                return Err(CipherForgeError::InvalidKey(format!(
                    "letter ordering is not a permutation of a-z: {:?}",
                    String::from_utf8_lossy(&letters)
                )));
            }
            seen[(l - b'a') as usize] = true;
            index[(l - b'a') as usize] = pos as u8;
        }
        Ok(Self { letters, index })
    }

    pub fn alphabetical() -> Self {
        let mut letters = [0u8; ALPHABET_LEN];
        for (i, l) in letters.iter_mut().enumerate() {
            *l = b'a' + i as u8;
        }
        // a-z is trivially a permutation
        Self::new(letters).unwrap()
    }

    #[inline]
    pub fn letter_at(&self, pos: usize) -> u8 {
        self.letters[pos]
    }

    /// Index of an ascii-lowercase letter under this ordering.
    #[inline]
    pub fn position_of(&self, letter: u8) -> usize {
        self.index[(letter - b'a') as usize] as usize
    }

    pub fn letters(&self) -> &[u8; ALPHABET_LEN] {
        &self.letters
    }
}

/// Immutable reference statistics for the target language. Everything is
/// computed eagerly at construction and never mutated afterward, so a
/// model can be shared read-only across parallel solver runs.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    order: LetterOrder,
    /// Letter frequency percentages aligned with `order` (descending).
    freqs: [f32; ALPHABET_LEN],
    bigrams: BigramMatrix,
}

impl LanguageModel {
    /// Builds a model directly from raw reference text: letter and
    /// bigram counts over the lowercased, filtered corpus.
    pub fn from_text(corpus: &str) -> CfResult<Self> {
        let lower = corpus.to_ascii_lowercase();

        let mut letter_counts = [0.0f32; ALPHABET_LEN];
        for b in lower.bytes() {
            if b.is_ascii_lowercase() {
                letter_counts[(b - b'a') as usize] += 1.0;
            }
        }

        let order = rank_order(&letter_counts)?;
        let freqs = to_percentages(&letter_counts, &order)?;

        let bigrams = BigramMatrix::from_text(&lower, &order).map_err(|_| {
            CipherForgeError::DegenerateModel(
                "reference corpus contains no bigrams".to_string(),
            )
        })?;

        let model = Self {
            order,
            freqs,
            bigrams,
        };
        debug!(
            top = %String::from_utf8_lossy(&model.order.letters()[..6]),
            "language model built from corpus text"
        );
        Ok(model)
    }

    /// Loads a Norvig-style `ngrams-all.tsv`: tab-separated rows of an
    /// n-gram token followed by corpus counts. Only 1- and 2-letter
    /// alphabetic tokens are used; section header rows (`2-gram`, ...)
    /// fall out naturally because their tokens are not alphabetic.
    pub fn from_ngram_tsv<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let file = File::open(path)?;
        Self::from_ngram_reader(file)
    }

    pub fn from_ngram_reader<R: Read>(reader: R) -> CfResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut letter_counts = [0.0f32; ALPHABET_LEN];
        let mut pair_counts = [[0.0f32; ALPHABET_LEN]; ALPHABET_LEN];

        for result in rdr.records().flatten() {
            if result.len() < 2 {
                continue;
            }
            let token = result[0].trim().to_ascii_lowercase();
            let bytes = token.as_bytes();
            if bytes.is_empty() || !bytes.iter().all(|b| b.is_ascii_lowercase()) {
                continue;
            }
            let count: f32 = match result[1].trim().parse() {
                Ok(v) => v,
                Err(_) => continue,
            };
            if !(count > 0.0) || !count.is_finite() {
                continue;
            }

            match bytes.len() {
                1 => letter_counts[(bytes[0] - b'a') as usize] += count,
                2 => {
                    pair_counts[(bytes[0] - b'a') as usize][(bytes[1] - b'a') as usize] += count
                }
                _ => {}
            }
        }

        let order = rank_order(&letter_counts)?;
        let freqs = to_percentages(&letter_counts, &order)?;

        // Re-index raw a-z pair counts into canonical order before
        // normalizing.
        let mut counts = [[0.0f32; ALPHABET_LEN]; ALPHABET_LEN];
        for l1 in 0..ALPHABET_LEN {
            for l2 in 0..ALPHABET_LEN {
                let r = order.position_of(b'a' + l1 as u8);
                let c = order.position_of(b'a' + l2 as u8);
                counts[r][c] = pair_counts[l1][l2];
            }
        }
        let bigrams = BigramMatrix::from_counts(counts).map_err(|_| {
            CipherForgeError::DegenerateModel("n-gram data contains no bigram rows".to_string())
        })?;

        debug!(
            top = %String::from_utf8_lossy(&order.letters()[..6]),
            "language model loaded from n-gram table"
        );
        Ok(Self {
            order,
            freqs,
            bigrams,
        })
    }

    pub fn order(&self) -> &LetterOrder {
        &self.order
    }

    /// Letters in descending reference frequency.
    pub fn letters_by_frequency(&self) -> &[u8; ALPHABET_LEN] {
        self.order.letters()
    }

    /// Frequency percentages aligned with `letters_by_frequency`.
    /// Sums to 100.
    pub fn frequencies(&self) -> &[f32; ALPHABET_LEN] {
        &self.freqs
    }

    pub fn letter_frequency(&self, letter: u8) -> f32 {
        self.freqs[self.order.position_of(letter)]
    }

    /// Reference bigram matrix, indexed by `order`. Sums to 100.
    pub fn bigram_matrix(&self) -> &BigramMatrix {
        &self.bigrams
    }
}

/// Orders alphabet indices by descending count, ties alphabetical so the
/// same data always produces the same ordering.
fn rank_order(letter_counts: &[f32; ALPHABET_LEN]) -> CfResult<LetterOrder> {
    let total: f32 = letter_counts.iter().sum();
    if total <= 0.0 {
        return Err(CipherForgeError::DegenerateModel(
            "letter frequency data is empty".to_string(),
        ));
    }

    let mut ranked: Vec<usize> = (0..ALPHABET_LEN).collect();
    ranked.sort_by(|&a, &b| {
        letter_counts[b]
            .partial_cmp(&letter_counts[a])
            .unwrap()
            .then(a.cmp(&b))
    });

    let mut letters = [0u8; ALPHABET_LEN];
    for (pos, &idx) in ranked.iter().enumerate() {
        letters[pos] = b'a' + idx as u8;
    }
    LetterOrder::new(letters)
}

fn to_percentages(
    letter_counts: &[f32; ALPHABET_LEN],
    order: &LetterOrder,
) -> CfResult<[f32; ALPHABET_LEN]> {
    let total: f32 = letter_counts.iter().sum();
    if total <= 0.0 {
        return Err(CipherForgeError::DegenerateModel(
            "letter frequency data is empty".to_string(),
        ));
    }
    let mut freqs = [0.0f32; ALPHABET_LEN];
    for l in 0..ALPHABET_LEN {
        let pos = order.position_of(b'a' + l as u8);
        freqs[pos] = letter_counts[l] / total * 100.0;
    }
    Ok(freqs)
}
