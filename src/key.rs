use crate::error::{CfResult, CipherForgeError};
use crate::ALPHABET_LEN;
use std::fmt;

/// Candidate decoding key under optimization. Position `i` holds the
/// cipher letter currently hypothesized to decode to the `i`-th letter of
/// the model's canonical ordering. Always a permutation of a-z.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    letters: [u8; ALPHABET_LEN],
}

impl Key {
    pub fn new(letters: [u8; ALPHABET_LEN]) -> CfResult<Self> {
        let key = Self { letters };
        key.validate()?;
        Ok(key)
    }

    /// Seeds a key from cipher letters ranked by descending observed
    /// frequency. Letters absent from the ciphertext are appended in
    /// alphabetical order so all 26 positions are filled.
    pub fn from_ranked(ranked: &[u8]) -> CfResult<Self> {
        let mut letters = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        let mut n = 0;

        for &l in ranked {
            if n >= ALPHABET_LEN || !l.is_ascii_lowercase() || seen[(l - b'a') as usize] {
                return Err(CipherForgeError::InvalidKey(
                    "ranked letters contain duplicates or non a-z symbols".to_string(),
                ));
            }
            seen[(l - b'a') as usize] = true;
            letters[n] = l;
            n += 1;
        }
        for i in 0..ALPHABET_LEN {
            if !seen[i] {
                letters[n] = b'a' + i as u8;
                n += 1;
            }
        }

        Ok(Self { letters })
    }

    /// Bijection check. Failure signals an implementation defect.
    pub fn validate(&self) -> CfResult<()> {
        let mut seen = [false; ALPHABET_LEN];
        for &l in &self.letters {
            if !l.is_ascii_lowercase() || seen[(l - b'a') as usize] {
                return Err(CipherForgeError::InvalidKey(format!(
                    "key is not a permutation of a-z: {}",
                    self
                )));
            }
            seen[(l - b'a') as usize] = true;
        }
        Ok(())
    }

    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.letters.swap(a, b);
    }

    pub fn letters(&self) -> &[u8; ALPHABET_LEN] {
        &self.letters
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.letters))
    }
}
