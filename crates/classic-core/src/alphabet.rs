//! Keyed alphabets.

use core::fmt;

use crate::key::Key;

/// The plain A–Z alphabet.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Permutation of A–Z: deduplicated key letters, then the unused letters in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyedAlphabet {
    letters: [u8; 26],
    positions: [u8; 26],
}

impl KeyedAlphabet {
    /// Builds the alphabet for `key`. Non-letters in the key are ignored.
    pub fn new(key: &Key) -> Self {
        let mut letters = [0u8; 26];
        let mut positions = [0u8; 26];
        let mut seen = [false; 26];
        let mut len = 0usize;

        let key_letters = key.as_str().bytes().filter(u8::is_ascii_uppercase);
        for letter in key_letters.chain(ALPHABET.iter().copied()) {
            let idx = (letter - b'A') as usize;
            if seen[idx] {
                continue;
            }
            seen[idx] = true;
            letters[len] = letter;
            positions[idx] = len as u8;
            len += 1;
        }

        Self { letters, positions }
    }

    /// The unkeyed A–Z alphabet.
    pub fn identity() -> Self {
        let mut positions = [0u8; 26];
        for (i, p) in positions.iter_mut().enumerate() {
            *p = i as u8;
        }
        Self {
            letters: *ALPHABET,
            positions,
        }
    }

    /// Uppercase letter at `index` (mod 26).
    #[inline]
    pub fn letter(&self, index: u8) -> u8 {
        self.letters[(index % 26) as usize]
    }

    /// Position of the letter whose plain alphabet index is `index`.
    #[inline]
    pub fn position(&self, index: u8) -> u8 {
        self.positions[(index % 26) as usize]
    }

    /// The permutation as uppercase ASCII bytes.
    pub fn letters(&self) -> &[u8; 26] {
        &self.letters
    }
}

impl fmt::Display for KeyedAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
