//! Polyalphabetic ciphers driven by a per-letter key stream.
//!
//! Every cipher here shifts ASCII letters only and keeps their case. The
//! stream position advances on letters alone, so spacing, digits and
//! punctuation never consume key material.

use classic_core::text::{letter_indices, map_letters, shift_index};
use classic_core::Key;

/// Direction a key stream is applied in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Encode,
    Decode,
}

impl Direction {
    fn signed(self, shift: u8) -> i64 {
        match self {
            Self::Encode => i64::from(shift),
            Self::Decode => -i64::from(shift),
        }
    }
}

/// Applies a repeating key stream by addition (encode) or subtraction (decode).
fn apply_repeating(text: &str, shifts: &[u8], direction: Direction) -> String {
    let mut pos = 0usize;
    map_letters(text, |p| {
        let k = shifts[pos % shifts.len()];
        pos += 1;
        shift_index(p, direction.signed(k))
    })
}

/// Vigenère: shift by the key letters, repeating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vigenere {
    shifts: Vec<u8>,
}

impl Vigenere {
    /// Creates the cipher from a letter key.
    pub fn new(key: &Key) -> Self {
        Self {
            shifts: key.shifts(),
        }
    }

    /// Adds the key stream.
    pub fn encode(&self, text: &str) -> String {
        apply_repeating(text, &self.shifts, Direction::Encode)
    }

    /// Subtracts the key stream.
    pub fn decode(&self, text: &str) -> String {
        apply_repeating(text, &self.shifts, Direction::Decode)
    }
}

/// Gronsfeld: Vigenère with a digit key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gronsfeld {
    shifts: Vec<u8>,
}

impl Gronsfeld {
    /// Creates the cipher from a digit key.
    pub fn new(key: &Key) -> Self {
        Self {
            shifts: key.shifts(),
        }
    }

    /// Adds the digit stream.
    pub fn encode(&self, text: &str) -> String {
        apply_repeating(text, &self.shifts, Direction::Encode)
    }

    /// Subtracts the digit stream.
    pub fn decode(&self, text: &str) -> String {
        apply_repeating(text, &self.shifts, Direction::Decode)
    }
}

/// Beaufort: `c = k − p`. Encoding and decoding are the same operation.
pub fn beaufort(text: &str, key: &Key) -> String {
    let shifts = key.shifts();
    let mut pos = 0usize;
    map_letters(text, |p| {
        let k = shifts[pos % shifts.len()];
        pos += 1;
        shift_index(k, -i64::from(p))
    })
}

/// Autokey: the key primes the stream, then the plaintext itself continues it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Autokey {
    primer: Vec<u8>,
}

impl Autokey {
    /// Creates the cipher from a letter key.
    pub fn new(key: &Key) -> Self {
        Self {
            primer: key.shifts(),
        }
    }

    /// Stream is `key ++ plaintext letters`.
    pub fn encode(&self, text: &str) -> String {
        let plain = letter_indices(text);
        let mut pos = 0usize;
        map_letters(text, |p| {
            let k = self.stream_at(pos, &plain);
            pos += 1;
            shift_index(p, i64::from(k))
        })
    }

    /// Rebuilds the stream from plaintext as it is recovered.
    pub fn decode(&self, text: &str) -> String {
        let mut recovered: Vec<u8> = Vec::new();
        map_letters(text, |c| {
            let k = self.stream_at(recovered.len(), &recovered);
            let p = shift_index(c, -i64::from(k));
            recovered.push(p);
            p
        })
    }

    fn stream_at(&self, pos: usize, plain: &[u8]) -> u8 {
        if pos < self.primer.len() {
            self.primer[pos]
        } else {
            plain[pos - self.primer.len()]
        }
    }
}

/// Porta: reciprocal 13-row tableau selected by `key letter / 2`.
pub fn porta(text: &str, key: &Key) -> String {
    let groups: Vec<u8> = key.shifts().into_iter().map(|k| k / 2).collect();
    let mut pos = 0usize;
    map_letters(text, |p| {
        let g = groups[pos % groups.len()];
        pos += 1;
        porta_letter(p, g)
    })
}

fn porta_letter(p: u8, group: u8) -> u8 {
    if p < 13 {
        13 + (p + group) % 13
    } else {
        (p + 13 - group) % 13
    }
}

/// Trithemius: the `i`-th letter is shifted by `offset + i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trithemius {
    offset: u8,
}

impl Trithemius {
    /// Creates the cipher with a starting shift.
    pub fn new(offset: i64) -> Self {
        Self {
            offset: offset.rem_euclid(26) as u8,
        }
    }

    /// Shifts forward by the growing counter.
    pub fn encode(&self, text: &str) -> String {
        self.apply(text, 1)
    }

    /// Shifts backward by the growing counter.
    pub fn decode(&self, text: &str) -> String {
        self.apply(text, -1)
    }

    fn apply(&self, text: &str, sign: i64) -> String {
        let mut shift = i64::from(self.offset);
        map_letters(text, |p| {
            let out = shift_index(p, sign * shift);
            shift = (shift + 1) % 26;
            out
        })
    }
}

/// Running key: Vigenère over the letters of a long external text.
///
/// The stream is the key text's letters in order. Should the message outlast
/// them, the stream starts over from the first letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunningKey {
    stream: Vec<u8>,
}

impl RunningKey {
    /// Builds the stream from `key_text`.
    pub fn new(key_text: &Key) -> Self {
        Self {
            stream: key_text.shifts(),
        }
    }

    /// Letters available before the stream wraps.
    pub fn stream_len(&self) -> usize {
        self.stream.len()
    }

    /// Adds the running stream.
    pub fn encode(&self, text: &str) -> String {
        self.note_wrap(text);
        apply_repeating(text, &self.stream, Direction::Encode)
    }

    /// Subtracts the running stream.
    pub fn decode(&self, text: &str) -> String {
        self.note_wrap(text);
        apply_repeating(text, &self.stream, Direction::Decode)
    }

    fn note_wrap(&self, text: &str) {
        let letters = text.chars().filter(char::is_ascii_alphabetic).count();
        if letters > self.stream.len() {
            tracing::debug!(letters, stream = self.stream.len(), "running key stream wraps");
        }
    }
}
