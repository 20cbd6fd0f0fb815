//! Classical cipher families built on `classic-core`.
//!
//! Each family lives in its own module:
//! - [`shift`]: Caesar, ROT13, ROT47, Atbash, Affine, keyword substitution.
//! - [`polyalphabetic`]: Vigenère, Beaufort, Autokey, Gronsfeld, Porta,
//!   Trithemius, running key.
//! - [`digraph`]: Playfair and Four-Square.
//! - [`polybius`]: Polybius, Nihilist, Bifid, tap code.
//! - [`checkerboard`]: straddling checkerboard.
//! - [`homophonic`]: homophonic substitution with an injected RNG.
//! - [`transposition`]: rail fence, columnar, double transposition, scytale.
//! - [`fractionation`]: ADFGVX and ADFGX.
//! - [`hill`]: 2×2 Hill cipher with a fixed matrix.
//!
//! Substitution ciphers keep case and pass non-letters through. Square and
//! transposition ciphers work on the letters alone. Decoders that can meet
//! structurally invalid input return [`classic_core::CipherError`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod checkerboard;
pub mod digraph;
pub mod fractionation;
pub mod hill;
pub mod homophonic;
pub mod polyalphabetic;
pub mod polybius;
pub mod shift;
pub mod transposition;

pub use checkerboard::Checkerboard;
pub use digraph::{FourSquare, Playfair};
pub use fractionation::Fractionating;
pub use hill::{hill_decode, hill_encode};
pub use homophonic::Homophonic;
pub use polyalphabetic::{beaufort, porta, Autokey, Gronsfeld, RunningKey, Trithemius, Vigenere};
pub use polybius::{Bifid, Nihilist, Polybius, TapCode};
pub use shift::{atbash, caesar_decode, caesar_encode, rot13, rot47, Affine, KeywordSubstitution};
pub use transposition::{Columnar, DoubleTransposition, RailFence, Scytale};
