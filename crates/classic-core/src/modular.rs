//! Arithmetic over Z/26.

/// Alphabet size every letter cipher works modulo.
pub const MODULUS: u32 = 26;

/// Greatest common divisor.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Inverse of `a` mod 26 by search over `1..26`, or `None` if `a` shares a factor with 26.
pub fn mod_inverse(a: i64) -> Option<u32> {
    let a = a.rem_euclid(i64::from(MODULUS)) as u32;
    (1..MODULUS).find(|x| (a * x) % MODULUS == 1)
}

/// 2×2 matrix over Z/26, stored row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matrix2 {
    rows: [[u32; 2]; 2],
}

impl Matrix2 {
    /// Builds a matrix, reducing every entry mod 26.
    pub const fn new(rows: [[u32; 2]; 2]) -> Self {
        Self {
            rows: [
                [rows[0][0] % MODULUS, rows[0][1] % MODULUS],
                [rows[1][0] % MODULUS, rows[1][1] % MODULUS],
            ],
        }
    }

    /// Identity matrix.
    pub const fn identity() -> Self {
        Self::new([[1, 0], [0, 1]])
    }

    /// Entries, row-major.
    pub fn rows(&self) -> &[[u32; 2]; 2] {
        &self.rows
    }

    /// Multiplies the column vector `v` by the matrix.
    pub fn apply(&self, v: [u32; 2]) -> [u32; 2] {
        let [[a, b], [c, d]] = self.rows;
        [(a * v[0] + b * v[1]) % MODULUS, (c * v[0] + d * v[1]) % MODULUS]
    }

    /// Matrix product `self * rhs`.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut out = [[0u32; 2]; 2];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let sum = self.rows[i][0] * rhs.rows[0][j] + self.rows[i][1] * rhs.rows[1][j];
                *cell = sum % MODULUS;
            }
        }
        Self { rows: out }
    }

    /// Determinant mod 26.
    pub fn determinant(&self) -> u32 {
        let [[a, b], [c, d]] = self.rows;
        (a * d + MODULUS * MODULUS - b * c) % MODULUS
    }

    /// Inverse mod 26, or `None` if the determinant is not a unit.
    pub fn invert(&self) -> Option<Self> {
        let det_inv = mod_inverse(i64::from(self.determinant()))?;
        let [[a, b], [c, d]] = self.rows;
        let adjugate = [[d, MODULUS - b], [MODULUS - c, a]];
        let mut rows = [[0u32; 2]; 2];
        for (out_row, adj_row) in rows.iter_mut().zip(adjugate.iter()) {
            for (out, &adj) in out_row.iter_mut().zip(adj_row.iter()) {
                *out = (adj * det_inv) % MODULUS;
            }
        }
        Some(Self { rows })
    }

    /// Returns true if the matrix has an inverse mod 26.
    pub fn is_invertible(&self) -> bool {
        self.invert().is_some()
    }
}
