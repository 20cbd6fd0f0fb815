//! Key normalization.

use core::fmt;

/// Character set a key is reduced to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Uppercase ASCII letters.
    Alpha,
    /// Uppercase ASCII letters and digits, for 6×6 squares.
    AlphaNumeric,
    /// Decimal digits, for Gronsfeld-style numeric keys.
    Digit,
}

impl KeyKind {
    fn keeps(self, c: char) -> bool {
        match self {
            Self::Alpha => c.is_ascii_alphabetic(),
            Self::AlphaNumeric => c.is_ascii_alphanumeric(),
            Self::Digit => c.is_ascii_digit(),
        }
    }

    /// Last-resort key used when both the raw key and the supplied default are empty.
    pub const fn fallback(self) -> &'static str {
        match self {
            Self::Alpha | Self::AlphaNumeric => "KEY",
            Self::Digit => "31415",
        }
    }

    fn filter(self, raw: &str) -> String {
        raw.chars()
            .filter(|&c| self.keeps(c))
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}

/// Normalized, never-empty key material.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    kind: KeyKind,
    text: String,
}

impl Key {
    /// Normalizes `raw` to `kind`, substituting `default` when nothing survives.
    pub fn normalize(raw: &str, kind: KeyKind, default: &str) -> Self {
        let mut text = kind.filter(raw);
        if text.is_empty() {
            tracing::debug!(?kind, default, "key empty after normalization, using default");
            text = kind.filter(default);
        }
        if text.is_empty() {
            text = kind.fallback().to_owned();
        }
        Self { kind, text }
    }

    /// Letter-only key.
    pub fn alpha(raw: &str, default: &str) -> Self {
        Self::normalize(raw, KeyKind::Alpha, default)
    }

    /// Digit-only key.
    pub fn digits(raw: &str, default: &str) -> Self {
        Self::normalize(raw, KeyKind::Digit, default)
    }

    /// Character set this key was normalized to.
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// Normalized key text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of symbols in the key. Always at least one.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true when the key has no characters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The key with repeated symbols removed, first occurrence kept.
    pub fn deduplicated(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        for c in self.text.chars() {
            if !out.contains(c) {
                out.push(c);
            }
        }
        out
    }

    /// Per-symbol shift values: letters map to `0..26`, digits to `0..10`.
    pub fn shifts(&self) -> Vec<u8> {
        self.text
            .bytes()
            .map(|b| {
                if b.is_ascii_digit() {
                    b - b'0'
                } else {
                    b - b'A'
                }
            })
            .collect()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
