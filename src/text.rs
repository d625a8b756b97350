use crate::error::{CfResult, CipherForgeError};
use crate::key::Key;
use crate::language::LetterOrder;
use crate::ALPHABET_LEN;
use fastrand::Rng;

/// Lowercases and strips everything outside a-z.
pub fn filter_letters(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            let l = c.to_ascii_lowercase();
            l.is_ascii_lowercase().then_some(l)
        })
        .collect()
}

/// Observed letters with frequency percentages, descending. Ties break
/// alphabetically so the ranking is deterministic. Letters absent from
/// the text are omitted.
pub fn rank_letter_frequencies(text: &str) -> Vec<(u8, f32)> {
    let mut counts = [0.0f32; ALPHABET_LEN];
    let mut total = 0.0;
    for c in text.chars() {
        let l = c.to_ascii_lowercase();
        if l.is_ascii_lowercase() {
            counts[(l as u8 - b'a') as usize] += 1.0;
            total += 1.0;
        }
    }
    if total <= 0.0 {
        return Vec::new();
    }

    let mut ranked: Vec<(u8, f32)> = counts
        .iter()
        .enumerate()
        .filter(|(_, &c)| c > 0.0)
        .map(|(i, &c)| (b'a' + i as u8, c / total * 100.0))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap().then(a.0.cmp(&b.0)));
    ranked
}

/// Total mapping from every a-z letter to exactly one letter. The one
/// representation used everywhere a text is deciphered or enciphered;
/// characters outside a-z pass through `translate` unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionMap {
    table: [u8; ALPHABET_LEN],
}

impl SubstitutionMap {
    pub fn identity() -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, t) in table.iter_mut().enumerate() {
            *t = b'a' + i as u8;
        }
        Self { table }
    }

    /// `table[l - 'a']` is the output letter for `l`. Must be a
    /// bijection: substitution keys that collapse letters cannot be
    /// inverted.
    pub fn from_table(table: [u8; ALPHABET_LEN]) -> CfResult<Self> {
        let mut seen = [false; ALPHABET_LEN];
        for &t in &table {
            if !t.is_ascii_lowercase() || seen[(t - b'a') as usize] {
                return Err(CipherForgeError::InvalidKey(
                    "substitution table is not a bijection over a-z".to_string(),
                ));
            }
            seen[(t - b'a') as usize] = true;
        }
        Ok(Self { table })
    }

    /// Decode table for a key: the cipher letter at key position `i`
    /// maps to the `i`-th letter of the canonical ordering.
    pub fn from_key(key: &Key, order: &LetterOrder) -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        for (pos, &cipher) in key.letters().iter().enumerate() {
            table[(cipher - b'a') as usize] = order.letter_at(pos);
        }
        Self { table }
    }

    #[inline]
    pub fn map(&self, letter: u8) -> u8 {
        self.table[(letter - b'a') as usize]
    }

    pub fn table(&self) -> &[u8; ALPHABET_LEN] {
        &self.table
    }

    pub fn inverted(&self) -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, &t) in self.table.iter().enumerate() {
            table[(t - b'a') as usize] = b'a' + i as u8;
        }
        Self { table }
    }

    /// Applies the mapping to every a-z character; everything else
    /// (uppercase included) passes through verbatim.
    pub fn translate(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if c.is_ascii_lowercase() {
                    self.map(c as u8) as char
                } else {
                    c
                }
            })
            .collect()
    }
}

/// Enciphers filtered plaintext under a random substitution key. Returns
/// the ciphertext and the true decode map (cipher -> plain), for
/// generating solver test inputs.
pub fn scramble(plaintext: &str, rng: &mut Rng) -> CfResult<(String, SubstitutionMap)> {
    let filtered = filter_letters(plaintext);
    if filtered.is_empty() {
        return Err(CipherForgeError::EmptyInput(
            "plaintext contains no letters to encipher".to_string(),
        ));
    }

    let mut shuffled = SubstitutionMap::identity().table().to_owned();
    rng.shuffle(&mut shuffled);

    // plain -> cipher
    let encode = SubstitutionMap::from_table(shuffled)?;
    let ciphertext = encode.translate(&filtered);
    Ok((ciphertext, encode.inverted()))
}

/// Fraction of the 26 alphabet positions where the recovered decode map
/// agrees with the true one.
pub fn key_accuracy(key: &Key, order: &LetterOrder, truth: &SubstitutionMap) -> f32 {
    let recovered = SubstitutionMap::from_key(key, order);
    let hits = recovered
        .table()
        .iter()
        .zip(truth.table().iter())
        .filter(|(a, b)| a == b)
        .count();
    hits as f32 / ALPHABET_LEN as f32
}

/// Fraction of positions of the deciphered text matching the filtered
/// original plaintext.
pub fn decryption_accuracy(deciphered: &str, plaintext: &str) -> f32 {
    let truth = filter_letters(plaintext);
    if truth.is_empty() {
        return 0.0;
    }
    let hits = deciphered
        .bytes()
        .zip(truth.bytes())
        .filter(|(a, b)| a == b)
        .count();
    hits as f32 / truth.len() as f32
}
