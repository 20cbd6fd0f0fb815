//! Cipher descriptors and parameter schemas.

use classic_core::{CipherError, Key, KeyKind};
use rand::RngCore;
use serde::Serialize;

use crate::cipher_id::{CipherId, Family};
use crate::params::Params;

/// Value type a parameter accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// Signed integer; numeric text is accepted.
    Int,
    /// Free text; integers are rendered in decimal.
    Text,
}

/// Value used when a parameter is omitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamDefault {
    /// Integer default.
    Int(i64),
    /// Text default.
    Text(&'static str),
    /// Optional parameter with no default.
    None,
}

/// One entry of a cipher's parameter schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    /// Name used in [`Params`].
    pub name: &'static str,
    /// Accepted value type.
    pub kind: ParamKind,
    /// Value used when omitted.
    pub default: ParamDefault,
    /// One-line description for listings.
    pub description: &'static str,
}

impl ParamSpec {
    pub(crate) const fn int(name: &'static str, default: i64, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Int,
            default: ParamDefault::Int(default),
            description,
        }
    }

    pub(crate) const fn text(
        name: &'static str,
        default: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            kind: ParamKind::Text,
            default: ParamDefault::Text(default),
            description,
        }
    }

    pub(crate) const fn optional_int(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Int,
            default: ParamDefault::None,
            description,
        }
    }
}

pub(crate) type EncodeFn =
    fn(&str, &Resolved<'_>, &mut dyn RngCore) -> Result<String, CipherError>;
pub(crate) type DecodeFn = fn(&str, &Resolved<'_>) -> Result<String, CipherError>;

/// Immutable descriptor of one cipher: identity, schema and the encode/decode pair.
#[derive(Clone, Copy, Serialize)]
pub struct CipherSpec {
    /// Identifier.
    pub id: CipherId,
    /// Human-readable name.
    pub name: &'static str,
    /// Family used for grouping.
    pub family: Family,
    /// Accepted parameters, with defaults.
    pub params: &'static [ParamSpec],
    /// Whether encoding consumes randomness.
    pub randomized: bool,
    #[serde(skip)]
    pub(crate) encode: EncodeFn,
    #[serde(skip)]
    pub(crate) decode: DecodeFn,
}

impl std::fmt::Debug for CipherSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherSpec")
            .field("id", &self.id)
            .field("family", &self.family)
            .field("params", &self.params)
            .field("randomized", &self.randomized)
            .finish_non_exhaustive()
    }
}

impl CipherSpec {
    /// Schema entry for `name`.
    pub fn param(&self, name: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Checks `params` against the schema and binds it for lookup.
    pub(crate) fn resolve<'a>(&self, params: &'a Params) -> Result<Resolved<'a>, CipherError> {
        for name in params.names() {
            let Some(spec) = self.param(name) else {
                return Err(CipherError::invalid_parameter(
                    name,
                    format!("not a parameter of {}", self.id),
                ));
            };
            if let (ParamKind::Int, Some(value)) = (spec.kind, params.get(name)) {
                value.as_int(name)?;
            }
        }
        Ok(Resolved {
            schema: self.params,
            params,
        })
    }

    /// Encodes with an explicit RNG.
    pub fn encode_with_rng(
        &self,
        text: &str,
        params: &Params,
        rng: &mut dyn RngCore,
    ) -> Result<String, CipherError> {
        let resolved = self.resolve(params)?;
        (self.encode)(text, &resolved, rng)
    }

    /// Decodes. Deterministic for every cipher.
    pub fn decode(&self, text: &str, params: &Params) -> Result<String, CipherError> {
        let resolved = self.resolve(params)?;
        (self.decode)(text, &resolved)
    }
}

/// Parameters checked against a schema, with defaults filled on lookup.
pub(crate) struct Resolved<'a> {
    schema: &'static [ParamSpec],
    params: &'a Params,
}

impl Resolved<'_> {
    fn spec(&self, name: &str) -> Result<&'static ParamSpec, CipherError> {
        self.schema
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| CipherError::invalid_parameter(name, "not in schema"))
    }

    pub(crate) fn opt_int(&self, name: &str) -> Result<Option<i64>, CipherError> {
        let spec = self.spec(name)?;
        match (self.params.get(name), spec.default) {
            (Some(value), _) => value.as_int(name).map(Some),
            (None, ParamDefault::Int(v)) => Ok(Some(v)),
            (None, _) => Ok(None),
        }
    }

    pub(crate) fn int(&self, name: &str) -> Result<i64, CipherError> {
        self.opt_int(name)?
            .ok_or_else(|| CipherError::invalid_parameter(name, "required"))
    }

    /// Non-negative integer.
    pub(crate) fn usize(&self, name: &str) -> Result<usize, CipherError> {
        let value = self.int(name)?;
        usize::try_from(value)
            .map_err(|_| CipherError::invalid_parameter(name, format!("{value} is negative")))
    }

    pub(crate) fn text(&self, name: &str) -> Result<String, CipherError> {
        let spec = self.spec(name)?;
        Ok(match (self.params.get(name), spec.default) {
            (Some(value), _) => value.as_text(),
            (None, ParamDefault::Text(v)) => v.to_owned(),
            (None, ParamDefault::Int(v)) => v.to_string(),
            (None, ParamDefault::None) => String::new(),
        })
    }

    /// Normalized key; falls back to the schema default when nothing usable was given.
    pub(crate) fn key(&self, name: &str, kind: KeyKind) -> Result<Key, CipherError> {
        let spec = self.spec(name)?;
        let default = match spec.default {
            ParamDefault::Text(v) => v,
            _ => kind.fallback(),
        };
        Ok(Key::normalize(&self.text(name)?, kind, default))
    }
}
