//! Building blocks shared by every classical cipher in the workspace.
//!
//! This crate provides:
//! - Key normalization with documented fallbacks.
//! - Keyed alphabets and 5×5 / 6×6 Polybius squares.
//! - Modular arithmetic and a 2×2 matrix over Z/26.
//! - Letter helpers that preserve case and non-letters.
//! - The error type shared across the workspace.
//!
//! Everything here is derived fresh from its inputs; nothing is cached between
//! calls. None of it is meant to be secure.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod alphabet;
mod error;
mod key;
mod modular;
mod square;
pub mod text;

pub use crate::alphabet::{KeyedAlphabet, ALPHABET};
pub use crate::error::CipherError;
pub use crate::key::{Key, KeyKind};
pub use crate::modular::{gcd, mod_inverse, Matrix2, MODULUS};
pub use crate::square::{Coord, Square, SquareKind};
