//! ADFGVX and ADFGX: square substitution followed by columnar transposition.

use classic_core::{CipherError, Coord, Key, Square, SquareKind};

use crate::transposition::Columnar;

const ADFGVX: &[u8; 6] = b"ADFGVX";
const ADFGX: &[u8; 5] = b"ADFGX";
const FILLER: char = 'X';

/// Square fractionation into coordinate letters, then a keyed columnar pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fractionating {
    square: Square,
    labels: &'static [u8],
    columnar: Columnar,
}

impl Fractionating {
    /// ADFGVX over a 6×6 letters-and-digits square.
    pub fn adfgvx(square_key: &str, transposition_key: &Key) -> Self {
        Self {
            square: Square::new(square_key, SquareKind::AlphaNumeric36),
            labels: ADFGVX,
            columnar: Columnar::new(transposition_key),
        }
    }

    /// ADFGX over a 5×5 square with `J` folded onto `I`.
    pub fn adfgx(square_key: &str, transposition_key: &Key) -> Self {
        Self {
            square: Square::new(square_key, SquareKind::Latin25),
            labels: ADFGX,
            columnar: Columnar::new(transposition_key),
        }
    }

    /// The substitution square.
    pub fn square(&self) -> &Square {
        &self.square
    }

    /// Substitutes every symbol the square holds, then transposes the label stream.
    /// A lone symbol is padded with `X` first.
    pub fn encode(&self, text: &str) -> String {
        let mut coords: Vec<Coord> = text.chars().filter_map(|c| self.square.locate(c)).collect();
        if coords.len() == 1 {
            coords.extend(self.square.locate(FILLER));
        }
        let fractions: Vec<u8> = coords
            .into_iter()
            .flat_map(|coord| [self.labels[coord.row], self.labels[coord.col]])
            .collect();
        self.columnar
            .encode_symbols(&fractions)
            .into_iter()
            .map(char::from)
            .collect()
    }

    /// Undoes the transposition first, then reads label pairs through the square.
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        let labels: Vec<u8> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                let upper = c.to_ascii_uppercase();
                if upper.is_ascii() && self.labels.contains(&(upper as u8)) {
                    Ok(upper as u8)
                } else {
                    Err(CipherError::malformed(format!("{c:?} is not a coordinate letter")))
                }
            })
            .collect::<Result<_, _>>()?;
        if labels.len() % 2 != 0 {
            return Err(CipherError::malformed("odd number of coordinate letters"));
        }

        let fractions = self.columnar.decode_symbols(&labels);
        fractions
            .chunks_exact(2)
            .map(|pair| {
                let row = self.label_index(pair[0])?;
                let col = self.label_index(pair[1])?;
                self.square
                    .get(Coord::new(row, col))
                    .ok_or_else(|| CipherError::malformed("coordinate outside square"))
            })
            .collect()
    }

    fn label_index(&self, label: u8) -> Result<usize, CipherError> {
        self.labels
            .iter()
            .position(|&l| l == label)
            .ok_or_else(|| CipherError::malformed("unknown coordinate letter"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> Key {
        Key::alpha(raw, "KEY")
    }

    #[test]
    fn adfgvx_reference() {
        let cipher = Fractionating::adfgvx("NA1C3H8TB2OME5WRPD4F6G7I9J0KLQSUVXYZ", &key("PRIVACY"));
        let ct = cipher.encode("Attack at 1200AM");
        assert_eq!(ct, "DGDDDAGDDGAFADDFDADVDVFAADVX");
        assert_eq!(cipher.decode(&ct).expect("valid"), "ATTACKAT1200AM");
    }

    #[test]
    fn adfgx_reference() {
        let cipher = Fractionating::adfgx("BTALPDHOZKQFVSNGICUXMREWY", &key("CARGO"));
        let ct = cipher.encode("attack at once");
        assert_eq!(ct, "FAXDFADDDGDGFFFAFAXAFAFX");
        assert_eq!(cipher.decode(&ct).expect("valid"), "ATTACKATONCE");
    }

    #[test]
    fn single_symbol_is_padded_with_x() {
        let cipher = Fractionating::adfgvx("SECRET", &key("PRIVACY"));
        let ct = cipher.encode("a");
        assert_eq!(ct.len(), 4);
        assert_eq!(ct, cipher.encode("AX"));
        assert_eq!(cipher.decode(&ct).expect("valid"), "AX");

        let five = Fractionating::adfgx("SECRET", &key("PRIVACY"));
        assert_eq!(five.decode(&five.encode("7 q!")).expect("valid"), "QX");
        assert_eq!(five.decode(&five.encode("ab")).expect("valid"), "AB");
    }

    #[test]
    fn decode_rejects_foreign_and_odd_input() {
        let cipher = Fractionating::adfgvx("SECRET", &key("PRIVACY"));
        assert!(cipher.decode("ADF").is_err());
        assert!(cipher.decode("ADFB").is_err());
        assert_eq!(cipher.decode("").expect("empty"), "");
        let five = Fractionating::adfgx("KEY", &key("KEY"));
        assert!(five.decode("AV").is_err());
    }

    #[test]
    fn ciphertext_grouping_is_ignored() {
        let cipher = Fractionating::adfgvx("SECRET", &key("PRIVACY"));
        let ct = cipher.encode("Meet at dawn 5");
        let spaced: String = ct
            .as_bytes()
            .chunks(5)
            .map(|c| String::from_utf8_lossy(c).to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(cipher.decode(&spaced).expect("valid"), "MEETATDAWN5");
    }
}
