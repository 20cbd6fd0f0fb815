//! Closed set of cipher identifiers.

use std::fmt;
use std::str::FromStr;

use classic_core::CipherError;
use serde::{Deserialize, Serialize};

/// Every cipher the registry can dispatch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CipherId {
    /// Fixed alphabet shift.
    Caesar,
    /// Caesar with shift 13.
    Rot13,
    /// Rotation by 47 over printable ASCII.
    Rot47,
    /// Reversed alphabet.
    Atbash,
    /// `a·x + b mod 26`.
    Affine,
    /// Keyed alphabet substitution.
    Keyword,
    /// Repeating-key additive polyalphabetic.
    Vigenere,
    /// `key − plain`, self-inverse.
    Beaufort,
    /// Plaintext extends the key stream.
    Autokey,
    /// Vigenère with a digit key.
    Gronsfeld,
    /// Reciprocal thirteen-table polyalphabetic.
    Porta,
    /// Progressive shift by position.
    Trithemius,
    /// Key stream taken from a long passage.
    RunningKey,
    /// 5×5 digraph substitution.
    Playfair,
    /// Two keyed squares plus two plain ones.
    FourSquare,
    /// Coordinate fractionation through one square.
    Bifid,
    /// Letters as two-digit coordinates.
    Polybius,
    /// Polybius coordinates with additive key.
    Nihilist,
    /// Knock groups over the K-less square.
    TapCode,
    /// Variable-length digit substitution.
    Checkerboard,
    /// Randomized two-digit homophones.
    Homophonic,
    /// Zigzag transposition.
    RailFence,
    /// Keyed column transposition.
    Columnar,
    /// Two columnar passes.
    DoubleTransposition,
    /// Fixed-width rod transposition.
    Scytale,
    /// 6×6 fractionation and transposition.
    Adfgvx,
    /// 5×5 fractionation and transposition.
    Adfgx,
    /// 2×2 matrix multiplication.
    Hill,
}

impl CipherId {
    /// All identifiers, in registry order.
    pub const ALL: [CipherId; 28] = [
        Self::Caesar,
        Self::Rot13,
        Self::Rot47,
        Self::Atbash,
        Self::Affine,
        Self::Keyword,
        Self::Vigenere,
        Self::Beaufort,
        Self::Autokey,
        Self::Gronsfeld,
        Self::Porta,
        Self::Trithemius,
        Self::RunningKey,
        Self::Playfair,
        Self::FourSquare,
        Self::Bifid,
        Self::Polybius,
        Self::Nihilist,
        Self::TapCode,
        Self::Checkerboard,
        Self::Homophonic,
        Self::RailFence,
        Self::Columnar,
        Self::DoubleTransposition,
        Self::Scytale,
        Self::Adfgvx,
        Self::Adfgx,
        Self::Hill,
    ];

    /// Stable kebab-case name, as accepted by [`CipherId::from_str`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Rot13 => "rot13",
            Self::Rot47 => "rot47",
            Self::Atbash => "atbash",
            Self::Affine => "affine",
            Self::Keyword => "keyword",
            Self::Vigenere => "vigenere",
            Self::Beaufort => "beaufort",
            Self::Autokey => "autokey",
            Self::Gronsfeld => "gronsfeld",
            Self::Porta => "porta",
            Self::Trithemius => "trithemius",
            Self::RunningKey => "running-key",
            Self::Playfair => "playfair",
            Self::FourSquare => "four-square",
            Self::Bifid => "bifid",
            Self::Polybius => "polybius",
            Self::Nihilist => "nihilist",
            Self::TapCode => "tap-code",
            Self::Checkerboard => "checkerboard",
            Self::Homophonic => "homophonic",
            Self::RailFence => "rail-fence",
            Self::Columnar => "columnar",
            Self::DoubleTransposition => "double-transposition",
            Self::Scytale => "scytale",
            Self::Adfgvx => "adfgvx",
            Self::Adfgx => "adfgx",
            Self::Hill => "hill",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for CipherId {
    type Err = CipherError;

    /// Case-insensitive; `_` is accepted in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| CipherError::UnknownCipher { id: s.to_owned() })
    }
}

impl fmt::Display for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Broad grouping used for listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Family {
    /// One fixed substitution alphabet.
    Monoalphabetic,
    /// Substitution alphabet varies with position.
    Polyalphabetic,
    /// Polybius-square based, including digraph and fractionating ciphers.
    Square,
    /// Reorders letters without substituting them.
    Transposition,
    /// Linear algebra over Z/26.
    Matrix,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Monoalphabetic => "monoalphabetic",
            Self::Polyalphabetic => "polyalphabetic",
            Self::Square => "square",
            Self::Transposition => "transposition",
            Self::Matrix => "matrix",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for id in CipherId::ALL {
            assert_eq!(id.as_str().parse::<CipherId>(), Ok(id));
        }
        assert_eq!("Rail_Fence".parse::<CipherId>(), Ok(CipherId::RailFence));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "enigma".parse::<CipherId>(),
            Err(CipherError::UnknownCipher { id: "enigma".into() })
        );
    }

    #[test]
    fn indices_follow_declaration_order() {
        for (i, id) in CipherId::ALL.into_iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }
}
