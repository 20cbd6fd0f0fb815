//! Straddling checkerboard: a prefix-free variable-length digit code.

use classic_core::{CipherError, Key, KeyedAlphabet};

/// Cell holding a full stop.
const STOP: u8 = b'.';
/// Cell announcing that the next digit is literal.
const FIGURE: u8 = b'/';

/// Straddling checkerboard built from a keyed alphabet.
///
/// The top row holds eight symbols on the non-escape digits and encodes them
/// with one digit. The two escape digits prefix two more rows of ten cells
/// each, giving two-digit codes. No one-digit code starts a two-digit code, so
/// decoding left to right is unambiguous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkerboard {
    escapes: [u8; 2],
    top: [Option<u8>; 10],
    rows: [[u8; 10]; 2],
    codes: [Option<(u8, Option<u8>)>; 128],
}

impl Checkerboard {
    /// Builds the board. `escapes` must be two distinct digits.
    pub fn new(key: &Key, escapes: [u8; 2]) -> Result<Self, CipherError> {
        let [e1, e2] = escapes;
        if e1 > 9 || e2 > 9 {
            return Err(CipherError::invalid_parameter("escapes", "escape rows must be digits 0-9"));
        }
        if e1 == e2 {
            return Err(CipherError::invalid_parameter("escapes", "escape rows must differ"));
        }

        let alphabet = KeyedAlphabet::new(key);
        let mut symbols = alphabet.letters().iter().copied().chain([STOP, FIGURE]);

        let mut top = [None; 10];
        let mut rows = [[0u8; 10]; 2];
        let mut codes = [None; 128];

        for digit in (0..10u8).filter(|d| !escapes.contains(d)) {
            if let Some(symbol) = symbols.next() {
                top[digit as usize] = Some(symbol);
                codes[symbol as usize] = Some((digit, None));
            }
        }
        for (row, &prefix) in rows.iter_mut().zip(escapes.iter()) {
            for (digit, cell) in row.iter_mut().enumerate() {
                if let Some(symbol) = symbols.next() {
                    *cell = symbol;
                    codes[symbol as usize] = Some((prefix, Some(digit as u8)));
                }
            }
        }

        Ok(Self {
            escapes,
            top,
            rows,
            codes,
        })
    }

    /// Escape digits prefixing the second and third rows.
    pub fn escapes(&self) -> [u8; 2] {
        self.escapes
    }

    /// Letters and full stops become codes; digits are sent as the figure code
    /// followed by the digit itself. Everything else is dropped.
    pub fn encode(&self, text: &str) -> String {
        let mut out = String::new();
        for c in text.chars() {
            if c.is_ascii_digit() {
                self.push_code(&mut out, FIGURE);
                out.push(c);
            } else if c.is_ascii_alphabetic() || c == STOP as char {
                self.push_code(&mut out, c.to_ascii_uppercase() as u8);
            }
        }
        out
    }

    /// Reads digits left to right; whitespace is ignored.
    pub fn decode(&self, text: &str) -> Result<String, CipherError> {
        let mut digits = text.chars().filter(|c| !c.is_whitespace()).map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| CipherError::malformed(format!("unexpected character {c:?}")))
        });

        let mut out = String::new();
        while let Some(digit) = digits.next() {
            let digit = digit?;
            let symbol = match self.escapes.iter().position(|&e| e == digit) {
                Some(row) => {
                    let next = digits
                        .next()
                        .ok_or_else(|| CipherError::malformed("escape digit at end of input"))??;
                    self.rows[row][next as usize]
                }
                None => match self.top[digit as usize] {
                    Some(symbol) => symbol,
                    None => return Err(CipherError::malformed("empty checkerboard cell")),
                },
            };
            if symbol == FIGURE {
                let literal = digits
                    .next()
                    .ok_or_else(|| CipherError::malformed("figure shift at end of input"))??;
                out.push((b'0' + literal) as char);
            } else {
                out.push(symbol as char);
            }
        }
        Ok(out)
    }

    fn push_code(&self, out: &mut String, symbol: u8) {
        if let Some(Some((first, second))) = self.codes.get(symbol as usize) {
            out.push((b'0' + first) as char);
            if let Some(second) = second {
                out.push((b'0' + second) as char);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Checkerboard {
        Checkerboard::new(&Key::alpha("ASINTOER", "KEY"), [2, 6]).expect("distinct escapes")
    }

    #[test]
    fn frequent_letters_get_single_digits() {
        let board = board();
        assert_eq!(board.encode("A"), "0");
        assert_eq!(board.encode("S"), "1");
        assert_eq!(board.encode("R"), "9");
        assert_eq!(board.encode("B"), "20");
        assert_eq!(board.encode("Z"), "67");
    }

    #[test]
    fn reference_message() {
        let board = board();
        let ct = board.encode("Attack at dawn");
        assert_eq!(ct, "0550212705220644");
        assert_eq!(board.decode(&ct).expect("valid"), "ATTACKATDAWN");
    }

    #[test]
    fn digits_and_stops_round_trip() {
        let board = board();
        let ct = board.encode("Meet at 0900.");
        assert_eq!(board.decode(&ct).expect("valid"), "MEETAT0900.");
    }

    #[test]
    fn custom_escapes() {
        let board = Checkerboard::new(&Key::alpha("", "KEYWORD"), [0, 9]).expect("distinct");
        assert_eq!(board.escapes(), [0, 9]);
        let ct = board.encode("the quick brown fox");
        assert_eq!(board.decode(&ct).expect("valid"), "THEQUICKBROWNFOX");
    }

    #[test]
    fn rejects_bad_escapes() {
        let key = Key::alpha("KEY", "KEY");
        assert!(Checkerboard::new(&key, [3, 3]).is_err());
        assert!(Checkerboard::new(&key, [3, 12]).is_err());
    }

    #[test]
    fn malformed_input() {
        let board = board();
        assert!(board.decode("2").is_err());
        assert!(board.decode("05a").is_err());
        assert_eq!(board.decode("0 5 5").expect("whitespace ignored"), "ATT");
    }
}
