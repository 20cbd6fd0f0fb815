//! Polybius squares over 25 or 36 symbols.

use core::fmt;

const LATIN_25: &[u8] = b"ABCDEFGHIKLMNOPQRSTUVWXYZ";
const TAP_25: &[u8] = b"ABCDEFGHIJLMNOPQRSTUVWXYZ";
const ALPHANUMERIC_36: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Symbol set and folding rule of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SquareKind {
    /// 5×5 letters with `J` folded onto `I`.
    Latin25,
    /// 5×5 letters with `K` folded onto `C`, as used by tap code.
    Tap25,
    /// 6×6 letters followed by digits.
    AlphaNumeric36,
}

impl SquareKind {
    /// Number of rows (and columns).
    pub const fn side(self) -> usize {
        match self {
            Self::Latin25 | Self::Tap25 => 5,
            Self::AlphaNumeric36 => 6,
        }
    }

    const fn symbols(self) -> &'static [u8] {
        match self {
            Self::Latin25 => LATIN_25,
            Self::Tap25 => TAP_25,
            Self::AlphaNumeric36 => ALPHANUMERIC_36,
        }
    }

    /// Maps a character onto the square's symbol set: uppercases and applies the fold.
    /// Returns `None` for characters the square cannot hold.
    pub fn fold(self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        let b = (c as u8).to_ascii_uppercase();
        match self {
            Self::Latin25 if b == b'J' => Some(b'I'),
            Self::Tap25 if b == b'K' => Some(b'C'),
            Self::Latin25 | Self::Tap25 if b.is_ascii_uppercase() => Some(b),
            Self::AlphaNumeric36 if b.is_ascii_uppercase() || b.is_ascii_digit() => Some(b),
            _ => None,
        }
    }
}

/// Zero-based `(row, col)` address in a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Keyed Polybius square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    kind: SquareKind,
    cells: Vec<u8>,
    positions: [Option<Coord>; 128],
}

impl Square {
    /// Builds the square for `key`: folded key symbols, then the base set,
    /// keeping the first occurrence of each. Characters the square cannot hold
    /// are skipped, so an empty key gives the standard square.
    pub fn new(key: &str, kind: SquareKind) -> Self {
        let side = kind.side();
        let mut cells = Vec::with_capacity(side * side);
        let mut positions = [None; 128];

        let key_symbols = key.chars().filter_map(|c| kind.fold(c));
        for symbol in key_symbols.chain(kind.symbols().iter().copied()) {
            let slot = &mut positions[symbol as usize];
            if slot.is_some() {
                continue;
            }
            let idx = cells.len();
            *slot = Some(Coord::new(idx / side, idx % side));
            cells.push(symbol);
        }

        Self {
            kind,
            cells,
            positions,
        }
    }

    /// The unkeyed square.
    pub fn standard(kind: SquareKind) -> Self {
        Self::new("", kind)
    }

    /// Symbol set of this square.
    pub fn kind(&self) -> SquareKind {
        self.kind
    }

    /// Number of rows (and columns).
    pub fn side(&self) -> usize {
        self.kind.side()
    }

    /// Coordinate of `c` after folding, or `None` if the square cannot hold it.
    pub fn locate(&self, c: char) -> Option<Coord> {
        let symbol = self.kind.fold(c)?;
        self.positions[symbol as usize]
    }

    /// Symbol at `coord`, or `None` when outside the grid.
    pub fn get(&self, coord: Coord) -> Option<char> {
        let side = self.side();
        if coord.row >= side || coord.col >= side {
            return None;
        }
        Some(self.cells[coord.row * side + coord.col] as char)
    }

    /// Symbol at `(row, col)`, both taken modulo the side length.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> char {
        let side = self.side();
        self.cells[(row % side) * side + (col % side)] as char
    }

    /// All symbols, row-major.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().map(|&b| b as char)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.side()).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &b) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", b as char)?;
            }
        }
        Ok(())
    }
}
