//! Monoalphabetic ciphers: Caesar, ROT13, ROT47, Atbash, Affine, keyword substitution.

use classic_core::text::{map_letters, shift_index};
use classic_core::{gcd, mod_inverse, CipherError, Key, KeyedAlphabet};

/// Shifts every letter forward by `shift` (negative shifts go backward).
pub fn caesar_encode(text: &str, shift: i64) -> String {
    map_letters(text, |p| shift_index(p, shift))
}

/// Inverse of [`caesar_encode`]: encodes with `26 - shift mod 26`.
pub fn caesar_decode(text: &str, shift: i64) -> String {
    caesar_encode(text, 26 - shift.rem_euclid(26))
}

/// ROT13, its own inverse.
pub fn rot13(text: &str) -> String {
    caesar_encode(text, 13)
}

/// Rotates printable ASCII `!`..=`~` by 47. Its own inverse.
pub fn rot47(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '!'..='~' => (b'!' + (c as u8 - b'!' + 47) % 94) as char,
            _ => c,
        })
        .collect()
}

/// Reflects the alphabet (`A ↔ Z`). Its own inverse.
pub fn atbash(text: &str) -> String {
    map_letters(text, |p| 25 - p)
}

/// Affine map `x -> a·x + b mod 26` over letters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Affine {
    a: u32,
    b: u32,
    a_inv: u32,
}

impl Affine {
    /// Validates `a` and reduces both coefficients mod 26.
    pub fn new(a: i64, b: i64) -> Result<Self, CipherError> {
        let a_red = a.rem_euclid(26) as u32;
        if gcd(a_red, 26) != 1 {
            return Err(CipherError::NonInvertible { a });
        }
        let a_inv = mod_inverse(a).ok_or(CipherError::NonInvertible { a })?;
        Ok(Self {
            a: a_red,
            b: b.rem_euclid(26) as u32,
            a_inv,
        })
    }

    /// Multiplicative inverse of `a` used when decoding.
    pub fn a_inverse(&self) -> u32 {
        self.a_inv
    }

    /// Applies `E(x)` to every letter.
    pub fn encode(&self, text: &str) -> String {
        map_letters(text, |p| ((self.a * u32::from(p) + self.b) % 26) as u8)
    }

    /// Applies `D(y) = a⁻¹·(y − b)` to every letter.
    pub fn decode(&self, text: &str) -> String {
        map_letters(text, |c| {
            ((self.a_inv * (u32::from(c) + 26 - self.b)) % 26) as u8
        })
    }
}

/// Simple substitution through a keyed alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordSubstitution {
    alphabet: KeyedAlphabet,
}

impl KeywordSubstitution {
    /// Builds the substitution alphabet from `key`.
    pub fn new(key: &Key) -> Self {
        Self {
            alphabet: KeyedAlphabet::new(key),
        }
    }

    /// The cipher alphabet, plain `A` first.
    pub fn alphabet(&self) -> &KeyedAlphabet {
        &self.alphabet
    }

    /// Plain letter `i` becomes the alphabet's `i`-th letter.
    pub fn encode(&self, text: &str) -> String {
        map_letters(text, |p| self.alphabet.letter(p) - b'A')
    }

    /// Inverse of [`KeywordSubstitution::encode`].
    pub fn decode(&self, text: &str) -> String {
        map_letters(text, |c| self.alphabet.position(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn caesar_reference_vectors() {
        assert_eq!(caesar_encode("ABC", 3), "DEF");
        assert_eq!(caesar_encode("Hello", 13), "Uryyb");
        assert_eq!(caesar_encode("xyz", 3), "abc");
        assert_eq!(caesar_decode("DEF", 3), "ABC");
    }

    #[test]
    fn caesar_handles_large_and_negative_shifts() {
        assert_eq!(caesar_encode("abc", -1), "zab");
        assert_eq!(caesar_encode("abc", 29), "def");
        assert_eq!(caesar_decode(&caesar_encode("Mixed, Case!", -40), -40), "Mixed, Case!");
    }

    #[test]
    fn rot13_matches_caesar_and_is_self_inverse() {
        assert_eq!(rot13("Hello"), caesar_encode("Hello", 13));
        assert_eq!(rot13(&rot13("Why did the chicken?")), "Why did the chicken?");
    }

    #[test]
    fn rot47_reference() {
        assert_eq!(rot47("Hello, World!"), "w6==@[ (@C=5P");
        assert_eq!(rot47(&rot47("The Quick Brown Fox 123")), "The Quick Brown Fox 123");
        assert_eq!(rot47("a b\u{e9}"), "2 3\u{e9}");
    }

    #[test]
    fn atbash_reference() {
        assert_eq!(atbash("A"), "Z");
        assert_eq!(atbash("Hello"), "Svool");
        assert_eq!(atbash(&atbash("Round trip 42.")), "Round trip 42.");
    }

    #[test]
    fn affine_reference() {
        let affine = Affine::new(5, 8).expect("coprime");
        assert_eq!(affine.encode("AFFINE cipher"), "IHHWVC swfrcp");
        assert_eq!(affine.decode("IHHWVC swfrcp"), "AFFINE cipher");
        assert_eq!(affine.a_inverse(), 21);
    }

    #[test]
    fn affine_rejects_non_coprime_multiplier() {
        for a in [0, 2, 13, 26, -4] {
            assert_eq!(Affine::new(a, 1), Err(CipherError::NonInvertible { a }));
        }
    }

    #[test]
    fn affine_round_trip_random() {
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        let units = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];
        for _ in 0..50 {
            let a = units[rng.gen_range(0..units.len())];
            let b = rng.gen_range(-30..30);
            let affine = Affine::new(a, b).expect("unit multiplier");
            let text: String = (0..20).map(|_| rng.gen_range(b'A'..=b'z') as char).collect();
            assert_eq!(affine.decode(&affine.encode(&text)), text);
        }
    }

    #[test]
    fn keyword_substitution_reference() {
        let cipher = KeywordSubstitution::new(&Key::alpha("zebras", "KEY"));
        assert_eq!(cipher.encode("Hello World"), "Daiil Vloir");
        assert_eq!(cipher.decode("Daiil Vloir"), "Hello World");
    }
}
