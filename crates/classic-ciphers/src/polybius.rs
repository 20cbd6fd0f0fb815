//! Coordinate ciphers over a 5×5 square: Polybius, Nihilist, Bifid and tap code.

use classic_core::{CipherError, Coord, Square, SquareKind};

/// Stands in for a symbol that decoded to a coordinate outside the square.
pub const PLACEHOLDER: char = '?';

fn coords(text: &str, square: &Square) -> Vec<Coord> {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .filter_map(|c| square.locate(c))
        .collect()
}

/// One-based digit pair for a coordinate, e.g. `(0, 2)` → `13`.
fn coord_number(coord: Coord) -> u32 {
    (coord.row as u32 + 1) * 10 + coord.col as u32 + 1
}

/// Inverse of [`coord_number`], or `None` when either digit is off the grid.
fn number_coord(n: u32, side: usize) -> Option<Coord> {
    let (row, col) = ((n / 10) as usize, (n % 10) as usize);
    if (1..=side).contains(&row) && (1..=side).contains(&col) {
        Some(Coord::new(row - 1, col - 1))
    } else {
        None
    }
}

/// Polybius square: each letter becomes its one-based `row col` digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polybius {
    square: Square,
}

impl Polybius {
    /// Keyed square; an empty keyword gives the standard square.
    pub fn new(keyword: &str) -> Self {
        Self {
            square: Square::new(keyword, SquareKind::Latin25),
        }
    }

    /// Letter pairs separated by spaces, e.g. `Hello` → `23 15 31 31 34`.
    pub fn encode(&self, text: &str) -> String {
        coords(text, &self.square)
            .into_iter()
            .map(|c| coord_number(c).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Reads digit pairs, ignoring whitespace.
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        let digits: Vec<u32> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                c.to_digit(10)
                    .ok_or_else(|| CipherError::malformed(format!("unexpected character {c:?}")))
            })
            .collect::<Result<_, _>>()?;
        if digits.len() % 2 != 0 {
            return Err(CipherError::malformed("odd number of coordinate digits"));
        }
        Ok(digits
            .chunks_exact(2)
            .map(|d| {
                number_coord(d[0] * 10 + d[1], self.square.side())
                    .and_then(|c| self.square.get(c))
                    .unwrap_or(PLACEHOLDER)
            })
            .collect())
    }
}

/// Nihilist: Polybius numbers plus the key's Polybius numbers, as plain integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nihilist {
    square: Square,
    key_numbers: Vec<u32>,
}

impl Nihilist {
    /// `keyword` arranges the square; `key` supplies the additive numbers.
    pub fn new(keyword: &str, key: &str) -> Self {
        let square = Square::new(keyword, SquareKind::Latin25);
        let mut key_numbers: Vec<u32> =
            coords(key, &square).into_iter().map(coord_number).collect();
        if key_numbers.is_empty() {
            key_numbers.push(0);
        }
        Self { square, key_numbers }
    }

    /// Space-separated sums.
    pub fn encode(&self, text: &str) -> String {
        coords(text, &self.square)
            .into_iter()
            .zip(self.key_numbers.iter().cycle())
            .map(|(c, k)| (coord_number(c) + k).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Subtracts the key numbers. A result that is not a coordinate becomes `?`.
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        let numbers: Vec<u32> = text
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u32>()
                    .map_err(|_| CipherError::malformed(format!("not a number: {token:?}")))
            })
            .collect::<Result<_, _>>()?;
        Ok(numbers
            .into_iter()
            .zip(self.key_numbers.iter().cycle())
            .map(|(n, &k)| {
                n.checked_sub(k)
                    .and_then(|p| number_coord(p, self.square.side()))
                    .and_then(|c| self.square.get(c))
                    .unwrap_or(PLACEHOLDER)
            })
            .collect())
    }
}

/// Bifid: row and column streams are split, concatenated and re-paired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bifid {
    square: Square,
    period: usize,
}

impl Bifid {
    /// `period` of 0 fractionates the whole message at once.
    pub fn new(key: &str, period: usize) -> Self {
        Self {
            square: Square::new(key, SquareKind::Latin25),
            period,
        }
    }

    /// Buffers each period, writes rows then columns, and re-reads pairs.
    pub fn encode(&self, text: &str) -> String {
        let coords = coords(text, &self.square);
        let mut out = String::with_capacity(coords.len());
        for block in coords.chunks(self.block_len(coords.len())) {
            let stream: Vec<usize> = block
                .iter()
                .map(|c| c.row)
                .chain(block.iter().map(|c| c.col))
                .collect();
            out.extend(stream.chunks_exact(2).map(|p| self.square.at(p[0], p[1])));
        }
        out
    }

    /// Flattens each period's coordinates and splits them back into rows and columns.
    pub fn decode(&self, text: &str) -> String {
        let coords = coords(text, &self.square);
        let mut out = String::with_capacity(coords.len());
        for block in coords.chunks(self.block_len(coords.len())) {
            let stream: Vec<usize> = block.iter().flat_map(|c| [c.row, c.col]).collect();
            let (rows, cols) = stream.split_at(block.len());
            out.extend(rows.iter().zip(cols).map(|(&r, &c)| self.square.at(r, c)));
        }
        out
    }

    fn block_len(&self, total: usize) -> usize {
        match self.period {
            0 => total.max(1),
            p => p,
        }
    }
}

/// Tap code: row and column as groups of dots over the K→C square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TapCode {
    square: Square,
}

impl Default for TapCode {
    fn default() -> Self {
        Self::new()
    }
}

impl TapCode {
    /// The fixed tap square.
    pub fn new() -> Self {
        Self {
            square: Square::standard(SquareKind::Tap25),
        }
    }

    /// Letters become `dots dots`, joined by ` / `.
    pub fn encode(&self, text: &str) -> String {
        coords(text, &self.square)
            .into_iter()
            .map(|c| format!("{} {}", ".".repeat(c.row + 1), ".".repeat(c.col + 1)))
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// Each `/`-separated group must hold exactly two runs of dots.
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        let mut out = String::new();
        if text.trim().is_empty() {
            return Ok(out);
        }
        for group in text.split('/') {
            let runs: Vec<&str> = group.split_whitespace().collect();
            let [row, col] = runs.as_slice() else {
                return Err(CipherError::malformed(format!(
                    "tap group {:?} needs two runs",
                    group.trim()
                )));
            };
            if !row.chars().chain(col.chars()).all(|c| c == '.') {
                return Err(CipherError::malformed("tap runs may only contain dots"));
            }
            let letter = self
                .square
                .get(Coord::new(row.len() - 1, col.len() - 1))
                .unwrap_or(PLACEHOLDER);
            out.push(letter);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polybius_reference() {
        let cipher = Polybius::new("");
        assert_eq!(cipher.encode("Hello"), "23 15 31 31 34");
        assert_eq!(cipher.decode("23 15 31 31 34").expect("valid"), "HELLO");
        assert_eq!(cipher.decode("2315313134").expect("valid"), "HELLO");
    }

    #[test]
    fn polybius_malformed_and_out_of_range() {
        let cipher = Polybius::new("");
        assert!(cipher.decode("231").is_err());
        assert!(cipher.decode("23 x5").is_err());
        assert_eq!(cipher.decode("23 67 15").expect("structurally valid"), "H?E");
    }

    #[test]
    fn keyed_polybius_round_trip() {
        let cipher = Polybius::new("ZEBRAS");
        assert_eq!(cipher.encode("Z"), "11");
        assert_eq!(cipher.decode(&cipher.encode("Jumping")).expect("valid"), "IUMPING");
    }

    #[test]
    fn nihilist_reference() {
        let cipher = Nihilist::new("ZEBRAS", "RUSSIAN");
        let ct = cipher.encode("DYNAMITE WINTER PALACE");
        assert_eq!(
            ct,
            "37 106 62 36 67 47 86 26 104 53 62 77 27 55 57 66 55 36 54 27"
        );
        assert_eq!(cipher.decode(&ct).expect("valid"), "DYNAMITEWINTERPALACE");
    }

    #[test]
    fn nihilist_degrades_bad_numbers() {
        let cipher = Nihilist::new("ZEBRAS", "RUSSIAN");
        assert!(cipher.decode("37 x").is_err());
        assert_eq!(cipher.decode("37 5").expect("numeric"), "D?");
    }

    #[test]
    fn bifid_reference() {
        let cipher = Bifid::new("BGWKZQPNDSIOAXEFCLUMTHYVR", 0);
        assert_eq!(cipher.encode("FLEEATONCE"), "UAEOLWRINS");
        assert_eq!(cipher.decode("UAEOLWRINS"), "FLEEATONCE");
    }

    #[test]
    fn bifid_with_period_round_trips() {
        let cipher = Bifid::new("KEY", 5);
        let ct = cipher.encode("defend the east wall");
        assert_ne!(ct, Bifid::new("KEY", 0).encode("defend the east wall"));
        assert_eq!(cipher.decode(&ct), "DEFENDTHEEASTWALL");
    }

    #[test]
    fn tap_code_round_trip() {
        let tap = TapCode::new();
        let ct = tap.encode("Kick");
        assert_eq!(ct, ". ... / .. .... / . ... / . ...");
        assert_eq!(tap.decode(&ct).expect("valid"), "CICC");
        assert_eq!(tap.decode("").expect("empty"), "");
    }

    #[test]
    fn tap_code_malformed() {
        let tap = TapCode::new();
        assert!(tap.decode(". . .").is_err());
        assert!(tap.decode(".. x").is_err());
        assert_eq!(tap.decode("...... .").expect("dots"), "?");
    }
}
