//! Digraph ciphers over 5×5 squares: Playfair and Four-Square.

use classic_core::{CipherError, Coord, Square, SquareKind};

/// Filler used to split doubled letters and pad odd lengths.
pub const FILLER: char = 'X';
/// Filler used when the letter needing one is itself `X`.
pub const ALT_FILLER: char = 'Q';

fn filler_for(letter: char) -> char {
    if letter == FILLER {
        ALT_FILLER
    } else {
        FILLER
    }
}

/// Uppercased letters with `J` folded onto `I`; everything else dropped.
fn folded_letters(text: &str, square: &Square) -> Vec<char> {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .filter_map(|c| square.locate(c).map(|coord| square.at(coord.row, coord.col)))
        .collect()
}

/// Splits prepared letters into Playfair pairs.
///
/// A doubled letter inside a pair gets a filler after the first copy, and a
/// trailing single letter is padded the same way.
pub fn playfair_pairs(letters: &[char]) -> Vec<(char, char)> {
    let mut pairs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut i = 0;
    while i < letters.len() {
        let first = letters[i];
        match letters.get(i + 1) {
            Some(&second) if second != first => {
                pairs.push((first, second));
                i += 2;
            }
            _ => {
                let filler = filler_for(first);
                tracing::trace!(position = i, %first, %filler, "playfair filler inserted");
                pairs.push((first, filler));
                i += 1;
            }
        }
    }
    pairs
}

fn located_pairs(letters: &[char], square: &Square) -> Result<Vec<(Coord, Coord)>, CipherError> {
    if letters.len() % 2 != 0 {
        return Err(CipherError::malformed(format!(
            "digraph ciphertext has odd letter count {}",
            letters.len()
        )));
    }
    letters
        .chunks_exact(2)
        .map(|pair| match (square.locate(pair[0]), square.locate(pair[1])) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(CipherError::malformed("letter missing from square")),
        })
        .collect()
}

/// Playfair over a keyed 5×5 square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playfair {
    square: Square,
}

impl Playfair {
    /// Builds the square from `key`.
    pub fn new(key: &str) -> Self {
        Self {
            square: Square::new(key, SquareKind::Latin25),
        }
    }

    /// The keyed square.
    pub fn square(&self) -> &Square {
        &self.square
    }

    /// Encodes the letters of `text` as uppercase digraphs.
    pub fn encode(&self, text: &str) -> String {
        let letters = folded_letters(text, &self.square);
        let mut out = String::with_capacity(letters.len() + 2);
        for (a, b) in playfair_pairs(&letters) {
            // Both letters come from the square, so `locate` cannot miss.
            if let (Some(ca), Some(cb)) = (self.square.locate(a), self.square.locate(b)) {
                let (x, y) = self.substitute(ca, cb, 1);
                out.push(x);
                out.push(y);
            }
        }
        out
    }

    /// Mirrors the encoding rules. Fillers stay in the output.
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        let letters = folded_letters(text, &self.square);
        let side = self.square.side();
        let mut out = String::with_capacity(letters.len());
        for (a, b) in located_pairs(&letters, &self.square)? {
            let (x, y) = self.substitute(a, b, side - 1);
            out.push(x);
            out.push(y);
        }
        Ok(out)
    }

    fn substitute(&self, a: Coord, b: Coord, step: usize) -> (char, char) {
        let sq = &self.square;
        if a.row == b.row {
            (sq.at(a.row, a.col + step), sq.at(b.row, b.col + step))
        } else if a.col == b.col {
            (sq.at(a.row + step, a.col), sq.at(b.row + step, b.col))
        } else {
            (sq.at(a.row, b.col), sq.at(b.row, a.col))
        }
    }
}

/// Four-Square: two plain squares and two keyed squares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FourSquare {
    plain: Square,
    upper_right: Square,
    lower_left: Square,
}

impl FourSquare {
    /// Keys the upper-right square with `key1` and the lower-left with `key2`.
    pub fn new(key1: &str, key2: &str) -> Self {
        Self {
            plain: Square::standard(SquareKind::Latin25),
            upper_right: Square::new(key1, SquareKind::Latin25),
            lower_left: Square::new(key2, SquareKind::Latin25),
        }
    }

    /// Encodes letter pairs; an odd trailing letter is padded with `X`.
    pub fn encode(&self, text: &str) -> String {
        let mut letters = folded_letters(text, &self.plain);
        if letters.len() % 2 != 0 {
            letters.push(FILLER);
        }
        let mut out = String::with_capacity(letters.len());
        for pair in letters.chunks_exact(2) {
            if let (Some(a), Some(b)) = (self.plain.locate(pair[0]), self.plain.locate(pair[1])) {
                out.push(self.upper_right.at(a.row, b.col));
                out.push(self.lower_left.at(b.row, a.col));
            }
        }
        out
    }

    /// Looks pairs up in the keyed squares and reads the plain squares.
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        let letters = folded_letters(text, &self.plain);
        if letters.len() % 2 != 0 {
            return Err(CipherError::malformed("four-square ciphertext has odd letter count"));
        }
        let mut out = String::with_capacity(letters.len());
        for pair in letters.chunks_exact(2) {
            match (self.upper_right.locate(pair[0]), self.lower_left.locate(pair[1])) {
                (Some(a), Some(b)) => {
                    out.push(self.plain.at(a.row, b.col));
                    out.push(self.plain.at(b.row, a.col));
                }
                _ => return Err(CipherError::malformed("letter missing from keyed square")),
            }
        }
        Ok(out)
    }
}
