//! Letter helpers over ASCII A–Z.
//!
//! Alphabet positions are `u8` values in `0..26`. Anything outside ASCII
//! letters is left to the caller.

/// Returns the alphabet position of an ASCII letter, ignoring case.
#[inline]
pub fn letter_index(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Returns the letter at `index` (taken mod 26) in the requested case.
#[inline]
pub fn letter_from_index(index: u8, upper: bool) -> char {
    let base = if upper { b'A' } else { b'a' };
    (base + index % 26) as char
}

/// Rewrites every ASCII letter through `f`, keeping its case.
///
/// `f` receives the letter's alphabet position and returns the new one. It is
/// called once per letter, in order, so callers can keep a key-stream counter
/// in the closure. Every other character is copied unchanged.
pub fn map_letters(text: &str, mut f: impl FnMut(u8) -> u8) -> String {
    text.chars()
        .map(|c| match letter_index(c) {
            Some(idx) => letter_from_index(f(idx), c.is_ascii_uppercase()),
            None => c,
        })
        .collect()
}

/// Alphabet positions of the letters in `text`, everything else dropped.
pub fn letter_indices(text: &str) -> Vec<u8> {
    text.chars().filter_map(letter_index).collect()
}

/// The letters of `text` in their original case, everything else dropped.
pub fn alphabetic_projection(text: &str) -> Vec<char> {
    text.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Adds `shift` to an alphabet position mod 26. `shift` may be negative.
#[inline]
pub fn shift_index(index: u8, shift: i64) -> u8 {
    (i64::from(index) + shift.rem_euclid(26)).rem_euclid(26) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        assert_eq!(letter_index('a'), Some(0));
        assert_eq!(letter_index('Z'), Some(25));
        assert_eq!(letter_index('1'), None);
        assert_eq!(letter_index('é'), None);
        assert_eq!(letter_from_index(7, true), 'H');
        assert_eq!(letter_from_index(33, false), 'h');
    }

    #[test]
    fn map_letters_keeps_case_and_punctuation() {
        let mut calls = 0;
        let out = map_letters("Ab, c!", |i| {
            calls += 1;
            i + 1
        });
        assert_eq!(out, "Bc, d!");
        assert_eq!(calls, 3);
    }

    #[test]
    fn shift_wraps_both_ways() {
        assert_eq!(shift_index(25, 1), 0);
        assert_eq!(shift_index(0, -1), 25);
        assert_eq!(shift_index(3, -29), 0);
    }

    #[test]
    fn extreme_shifts_reduce_before_adding() {
        assert_eq!(shift_index(25, i64::MAX), (25 + i64::MAX % 26) as u8 % 26);
        assert_eq!(shift_index(0, i64::MIN), i64::MIN.rem_euclid(26) as u8);
        assert_eq!(shift_index(7, 26 * 1_000_000_007), 7);
    }

    #[test]
    fn projection_drops_non_letters() {
        assert_eq!(alphabetic_projection("a b-C9"), vec!['a', 'b', 'C']);
        assert_eq!(letter_indices("a b-C9"), vec![0, 1, 2]);
    }
}
