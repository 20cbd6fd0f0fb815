//! Transposition ciphers: rail fence, columnar, double columnar and scytale.
//!
//! All of them permute the letters of the message and keep their case. Spaces,
//! digits and punctuation are dropped before the permutation.

use classic_core::text::alphabetic_projection;
use classic_core::{CipherError, Key};

/// Rail index visited by each position of a zigzag over `rails` rails.
/// `rails` is at least 2 and at most `len`.
fn zigzag(len: usize, rails: usize) -> Vec<usize> {
    let cycle = 2 * (rails - 1);
    (0..len)
        .map(|i| {
            let pos = i % cycle;
            if pos < rails {
                pos
            } else {
                cycle - pos
            }
        })
        .collect()
}

/// Rail fence over `rails` rails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    /// Zero rails is rejected; one rail leaves the letters as they are.
    pub fn new(rails: usize) -> Result<Self, CipherError> {
        if rails == 0 {
            return Err(CipherError::invalid_parameter("rails", "must be at least 1"));
        }
        Ok(Self { rails })
    }

    /// Rails that actually receive letters. `None` when the zigzag never turns,
    /// which leaves the letters in place.
    fn rails_for(&self, len: usize) -> Option<usize> {
        let rails = self.rails.min(len);
        (rails > 1).then_some(rails)
    }

    /// Writes the zigzag and reads rail by rail.
    pub fn encode(&self, text: &str) -> String {
        let letters = alphabetic_projection(text);
        let Some(rails) = self.rails_for(letters.len()) else {
            return letters.into_iter().collect();
        };
        let pattern = zigzag(letters.len(), rails);
        (0..rails)
            .flat_map(|rail| {
                letters
                    .iter()
                    .zip(&pattern)
                    .filter(move |&(_, &r)| r == rail)
                    .map(|(&c, _)| c)
            })
            .collect()
    }

    /// Replays the zigzag to learn each rail's length, then walks it again.
    pub fn decode(&self, text: &str) -> String {
        let letters = alphabetic_projection(text);
        let Some(rails) = self.rails_for(letters.len()) else {
            return letters.into_iter().collect();
        };
        let pattern = zigzag(letters.len(), rails);
        let mut starts = vec![0usize; rails];
        for &r in &pattern {
            starts[r] += 1;
        }
        let mut offset = 0;
        for count in starts.iter_mut() {
            let len = *count;
            *count = offset;
            offset += len;
        }
        pattern
            .iter()
            .map(|&r| {
                let c = letters[starts[r]];
                starts[r] += 1;
                c
            })
            .collect()
    }
}

/// Column read order for a key: indices sorted by key letter, ties by position.
pub fn column_order(key: &str) -> Vec<usize> {
    let bytes = key.as_bytes();
    let mut order: Vec<usize> = (0..bytes.len()).collect();
    order.sort_by_key(|&i| bytes[i]);
    order
}

/// Irregular columnar transposition; no padding is added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Columnar {
    order: Vec<usize>,
}

impl Columnar {
    /// Columns are read in alphabetical order of `key`.
    pub fn new(key: &Key) -> Self {
        Self {
            order: column_order(key.as_str()),
        }
    }

    /// Columns read left to right; the scytale layout. `columns` is at least 1.
    pub(crate) fn sequential(columns: usize) -> Self {
        Self {
            order: (0..columns).collect(),
        }
    }

    /// Number of grid columns.
    pub fn width(&self) -> usize {
        self.order.len()
    }

    /// Writes row-major, reads whole columns in key order.
    pub fn encode(&self, text: &str) -> String {
        self.encode_symbols(&alphabetic_projection(text))
            .into_iter()
            .collect()
    }

    /// Splits the text into column runs and reads the grid back row-major.
    pub fn decode(&self, text: &str) -> String {
        self.decode_symbols(&alphabetic_projection(text))
            .into_iter()
            .collect()
    }

    pub(crate) fn encode_symbols<T: Copy>(&self, symbols: &[T]) -> Vec<T> {
        let width = self.width();
        self.order
            .iter()
            .flat_map(|&col| symbols.iter().skip(col).step_by(width).copied())
            .collect()
    }

    pub(crate) fn decode_symbols<T: Copy>(&self, symbols: &[T]) -> Vec<T> {
        let width = self.width();
        let len = symbols.len();
        let (full_rows, extra) = (len / width, len % width);

        let empty: &[T] = &[];
        let mut columns = vec![empty; width];
        let mut rest = symbols;
        for &col in &self.order {
            let height = full_rows + usize::from(col < extra);
            let (run, tail) = rest.split_at(height);
            columns[col] = run;
            rest = tail;
        }

        (0..len).map(|i| columns[i % width][i / width]).collect()
    }
}

/// Two columnar passes with independent keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoubleTransposition {
    first: Columnar,
    second: Columnar,
}

impl DoubleTransposition {
    /// `key1` is applied first when encoding.
    pub fn new(key1: &Key, key2: &Key) -> Self {
        Self {
            first: Columnar::new(key1),
            second: Columnar::new(key2),
        }
    }

    /// First pass with `key1`, second with `key2`.
    pub fn encode(&self, text: &str) -> String {
        let once = self.first.encode_symbols(&alphabetic_projection(text));
        self.second.encode_symbols(&once).into_iter().collect()
    }

    /// Undoes `key2`, then `key1`.
    pub fn decode(&self, text: &str) -> String {
        let once = self.second.decode_symbols(&alphabetic_projection(text));
        self.first.decode_symbols(&once).into_iter().collect()
    }
}

/// Scytale: a columnar transposition whose columns are read in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scytale {
    diameter: usize,
}

impl Scytale {
    /// `diameter` is the number of letters per turn around the rod.
    pub fn new(diameter: usize) -> Result<Self, CipherError> {
        if diameter == 0 {
            return Err(CipherError::invalid_parameter("diameter", "must be at least 1"));
        }
        Ok(Self { diameter })
    }

    /// A rod wider than the message holds it on one turn, which reads back
    /// unchanged.
    fn grid(&self, len: usize) -> Columnar {
        Columnar::sequential(self.diameter.min(len).max(1))
    }

    /// Reads the wound strip column by column.
    pub fn encode(&self, text: &str) -> String {
        let letters = alphabetic_projection(text);
        self.grid(letters.len())
            .encode_symbols(&letters)
            .into_iter()
            .collect()
    }

    /// Rewinds the strip.
    pub fn decode(&self, text: &str) -> String {
        let letters = alphabetic_projection(text);
        self.grid(letters.len())
            .decode_symbols(&letters)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const MESSAGE: &str = "WEAREDISCOVEREDFLEEATONCE";

    fn key(raw: &str) -> Key {
        Key::alpha(raw, "KEY")
    }

    #[test]
    fn rail_fence_reference() {
        let cipher = RailFence::new(3).expect("rails");
        assert_eq!(cipher.encode(MESSAGE), "WECRLTEERDSOEEFEAOCAIVDEN");
        assert_eq!(cipher.decode("WECRLTEERDSOEEFEAOCAIVDEN"), MESSAGE);
    }

    #[test]
    fn rail_fence_edge_cases() {
        assert!(RailFence::new(0).is_err());
        let one = RailFence::new(1).expect("rails");
        assert_eq!(one.encode("ab, c"), "abc");
        let wide = RailFence::new(40).expect("rails");
        assert_eq!(wide.decode(&wide.encode("short")), "short");
        assert_eq!(RailFence::new(2).expect("rails").encode(""), "");
    }

    #[test]
    fn column_order_is_stable() {
        assert_eq!(column_order("ZEBRAS"), vec![4, 2, 1, 3, 5, 0]);
        assert_eq!(column_order("ABA"), vec![0, 2, 1]);
    }

    #[test]
    fn columnar_reference() {
        let cipher = Columnar::new(&key("ZEBRAS"));
        assert_eq!(cipher.encode(MESSAGE), "EVLNACDTESEAROFODEECWIREE");
        assert_eq!(cipher.decode("EVLNACDTESEAROFODEECWIREE"), MESSAGE);
    }

    #[test]
    fn columnar_keeps_case() {
        let cipher = Columnar::new(&key("ZEBRAS"));
        let ct = cipher.encode("We are discovered!");
        assert_eq!(cipher.decode(&ct), "Wearediscovered");
    }

    #[test]
    fn double_transposition_reference() {
        let cipher = DoubleTransposition::new(&key("ZEBRAS"), &key("STRIPE"));
        assert_eq!(cipher.encode(MESSAGE), "CAEENSOIAEDRLEFWEDREEVTOC");
        assert_eq!(cipher.decode("CAEENSOIAEDRLEFWEDREEVTOC"), MESSAGE);
    }

    #[test]
    fn scytale_reference() {
        let cipher = Scytale::new(4).expect("diameter");
        assert_eq!(cipher.encode(MESSAGE), "WECRLTEEDOEEOAIVDENRSEFAC");
        assert_eq!(cipher.decode("WECRLTEEDOEEOAIVDENRSEFAC"), MESSAGE);
        assert!(Scytale::new(0).is_err());
    }

    #[test]
    fn oversized_rails_and_diameter_leave_letters_in_place() {
        let rails = RailFence::new(usize::MAX).expect("rails");
        assert_eq!(rails.encode(""), "");
        assert_eq!(rails.encode("a-bc"), "abc");
        assert_eq!(rails.decode("abc"), "abc");

        let scytale = Scytale::new(i64::MAX as usize).expect("diameter");
        assert_eq!(scytale.encode("abc"), "abc");
        assert_eq!(scytale.decode("abc"), "abc");
        assert_eq!(Scytale::new(usize::MAX).expect("diameter").encode(""), "");

        let exact = RailFence::new(MESSAGE.len()).expect("rails");
        assert_eq!(exact.encode(MESSAGE), MESSAGE);
        assert_eq!(Scytale::new(MESSAGE.len()).expect("diameter").encode(MESSAGE), MESSAGE);
    }

    #[test]
    fn round_trip_random_lengths() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        for len in 0..60 {
            let text: String = (0..len)
                .map(|_| (b'a' + rng.gen_range(0..26)) as char)
                .collect();
            let k: String = (0..rng.gen_range(1..9))
                .map(|_| (b'A' + rng.gen_range(0..26)) as char)
                .collect();
            let columnar = Columnar::new(&key(&k));
            assert_eq!(columnar.decode(&columnar.encode(&text)), text);
            let rails = RailFence::new(rng.gen_range(1..7)).expect("rails");
            assert_eq!(rails.decode(&rails.encode(&text)), text);
            let scytale = Scytale::new(rng.gen_range(1..7)).expect("diameter");
            assert_eq!(scytale.decode(&scytale.encode(&text)), text);
        }
    }
}
