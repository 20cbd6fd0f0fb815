//! Error type shared by the cipher crates.

use thiserror::Error;

/// Errors produced while validating parameters or decoding ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The payload does not have the structure the cipher expects.
    #[error("malformed input: {reason}")]
    Malformed {
        /// What was wrong with the payload.
        reason: String,
    },

    /// A parameter could not be parsed or is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the cipher's schema.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Affine multiplier shares a factor with 26, so encoding would be lossy.
    #[error("multiplier {a} is not coprime with 26")]
    NonInvertible {
        /// The rejected multiplier.
        a: i64,
    },

    /// Cipher identifier is not part of the registry.
    #[error("unknown cipher: {id}")]
    UnknownCipher {
        /// The identifier that failed to resolve.
        id: String,
    },
}

impl CipherError {
    /// Shorthand for a [`CipherError::Malformed`] error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`CipherError::InvalidParameter`] error.
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns true when the error came from a ciphertext that could not be decoded.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
