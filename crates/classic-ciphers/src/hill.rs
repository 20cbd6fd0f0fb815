//! Hill cipher with a fixed 2×2 matrix.

use classic_core::text::letter_indices;
use classic_core::{CipherError, Matrix2};

/// Encryption matrix.
pub const HILL_KEY: Matrix2 = Matrix2::new([[3, 3], [2, 5]]);
/// Inverse of [`HILL_KEY`] mod 26.
pub const HILL_INVERSE: Matrix2 = Matrix2::new([[15, 17], [20, 9]]);

/// Letter used to fill an odd final pair.
pub const HILL_PAD: u8 = b'X' - b'A';

fn transform(letters: &[u8], matrix: &Matrix2) -> String {
    letters
        .chunks_exact(2)
        .flat_map(|pair| matrix.apply([u32::from(pair[0]), u32::from(pair[1])]))
        .map(|v| (b'A' + v as u8) as char)
        .collect()
}

/// Multiplies letter pairs by [`HILL_KEY`]. Output is uppercase letters only.
pub fn hill_encode(text: &str) -> String {
    let mut letters = letter_indices(text);
    if letters.len() % 2 != 0 {
        letters.push(HILL_PAD);
    }
    transform(&letters, &HILL_KEY)
}

/// Multiplies letter pairs by [`HILL_INVERSE`]. Padding is not removed.
pub fn hill_decode(text: &str) -> Result<String, CipherError> {
    let letters = letter_indices(text);
    if letters.len() % 2 != 0 {
        return Err(CipherError::malformed("hill ciphertext has odd letter count"));
    }
    Ok(transform(&letters, &HILL_INVERSE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_inverse() {
        assert_eq!(HILL_KEY.invert(), Some(HILL_INVERSE));
        assert_eq!(HILL_KEY.mul(&HILL_INVERSE), Matrix2::identity());
    }

    #[test]
    fn reference_vector() {
        assert_eq!(hill_encode("help"), "HIAT");
        assert_eq!(hill_decode("HIAT").expect("even"), "HELP");
    }

    #[test]
    fn odd_input_is_padded() {
        let ct = hill_encode("ACT");
        assert_eq!(ct, "GKWX");
        assert_eq!(hill_decode(&ct).expect("even"), "ACTX");
        assert!(hill_decode("GKW").is_err());
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(hill_encode(""), "");
        assert_eq!(hill_decode("  ").expect("even"), "");
    }
}
