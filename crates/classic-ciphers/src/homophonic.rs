//! Homophonic substitution with two-digit codes.
//!
//! The hundred codes `00`–`99` are shared out by English letter frequency, so
//! `E` has eleven homophones and `Z` one. Encoding picks one of a letter's codes
//! at random through the caller's RNG. Decoding is deterministic.

use classic_core::{CipherError, Key, KeyedAlphabet};
use rand::{Rng, RngCore};

/// Homophones per plain letter `A`..`Z`. Sums to 100.
const HOMOPHONES: [u8; 26] = [
    7, 2, 3, 4, 11, 2, 2, 6, 7, 1, 1, 4, 2, 7, 8, 2, 1, 6, 6, 8, 3, 1, 2, 1, 2, 1,
];

/// Code tables for a keyed homophonic cipher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Homophonic {
    /// Codes owned by each plain letter.
    codes: Vec<Vec<u8>>,
    /// Plain letter for each code.
    letters: [u8; 100],
}

impl Homophonic {
    /// Hands out code blocks in keyed-alphabet order.
    pub fn new(key: &Key) -> Self {
        let alphabet = KeyedAlphabet::new(key);
        let mut codes = vec![Vec::new(); 26];
        let mut letters = [0u8; 100];
        let mut next = 0u8;
        for &letter in alphabet.letters() {
            let idx = (letter - b'A') as usize;
            for _ in 0..HOMOPHONES[idx] {
                codes[idx].push(next);
                letters[next as usize] = letter;
                next += 1;
            }
        }
        Self { codes, letters }
    }

    /// Codes that stand for `letter`, or an empty slice for non-letters.
    pub fn codes_for(&self, letter: char) -> &[u8] {
        match classic_core::text::letter_index(letter) {
            Some(idx) => &self.codes[idx as usize],
            None => &[],
        }
    }

    /// Space-separated two-digit codes; non-letters are dropped.
    pub fn encode<R: RngCore + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        text.chars()
            .filter_map(|c| {
                let choices = self.codes_for(c);
                if choices.is_empty() {
                    None
                } else {
                    Some(format!("{:02}", choices[rng.gen_range(0..choices.len())]))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Every whitespace-separated token must be exactly two digits.
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        text.split_whitespace()
            .map(|token| match token.parse::<u8>() {
                Ok(code) if token.len() == 2 && token.bytes().all(|b| b.is_ascii_digit()) => {
                    Ok(self.letters[code as usize] as char)
                }
                _ => Err(CipherError::malformed(format!(
                    "homophone code must be two digits, got {token:?}"
                ))),
            })
            .collect()
    }
}
