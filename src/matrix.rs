use crate::error::{CfResult, CipherForgeError};
use crate::language::LetterOrder;
use crate::ALPHABET_LEN;

/// 26x26 table of relative bigram frequencies, normalized so all cells
/// sum to 100. Rows and columns are indexed by a [`LetterOrder`], not
/// by raw alphabet position.
#[derive(Debug, Clone, PartialEq)]
pub struct BigramMatrix {
    cells: [[f32; ALPHABET_LEN]; ALPHABET_LEN],
}

impl BigramMatrix {
    /// Counts adjacent letter pairs in `text` (non a-z bytes are skipped,
    /// breaking adjacency) and normalizes to a total of 100.
    pub fn from_text(text: &str, order: &LetterOrder) -> CfResult<Self> {
        let mut counts = [[0.0f32; ALPHABET_LEN]; ALPHABET_LEN];

        let mut prev: Option<usize> = None;
        for b in text.bytes() {
            if !b.is_ascii_lowercase() {
                prev = None;
                continue;
            }
            let pos = order.position_of(b);
            if let Some(p) = prev {
                counts[p][pos] += 1.0;
            }
            prev = Some(pos);
        }

        Self::from_counts(counts)
    }

    /// Normalizes a raw count table. A zero total means the source text
    /// had no bigrams at all, which is an input error, not a NaN matrix.
    pub fn from_counts(counts: [[f32; ALPHABET_LEN]; ALPHABET_LEN]) -> CfResult<Self> {
        let total: f32 = counts.iter().flatten().sum();
        if total <= 0.0 {
            return Err(CipherForgeError::EmptyInput(
                "no bigrams to count (need at least 2 letters)".to_string(),
            ));
        }

        let mut cells = counts;
        for row in cells.iter_mut() {
            for c in row.iter_mut() {
                *c = *c / total * 100.0;
            }
        }
        Ok(Self { cells })
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.cells[row][col]
    }

    /// Total over all cells. ~100 for any matrix built here.
    pub fn sum(&self) -> f32 {
        self.cells.iter().flatten().sum()
    }

    /// Copy with rows `a`/`b` and columns `a`/`b` exchanged. Equivalent
    /// to re-labeling which cipher letter decodes to which plaintext
    /// letter at positions `a` and `b`. Applying the same swap twice
    /// restores the original matrix.
    pub fn swapped(&self, a: usize, b: usize) -> Self {
        let mut cells = self.cells;
        cells.swap(a, b);
        for row in cells.iter_mut() {
            row.swap(a, b);
        }
        Self { cells }
    }

    /// L1 (Manhattan) distance to another matrix. Lower is better; zero
    /// is a perfect match.
    pub fn l1_distance(&self, other: &Self) -> f32 {
        let mut dist = 0.0;
        for r in 0..ALPHABET_LEN {
            for c in 0..ALPHABET_LEN {
                dist += (self.cells[r][c] - other.cells[r][c]).abs();
            }
        }
        dist
    }
}
