//! Caller-supplied cipher parameters.

use std::collections::BTreeMap;

use classic_core::CipherError;
use serde::{Deserialize, Serialize};

/// A single parameter value: an integer or a string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Integer value, e.g. a shift or rail count.
    Int(i64),
    /// Text value, e.g. a keyword.
    Text(String),
}

impl ParamValue {
    /// Reads the value as an integer; numeric text is accepted.
    pub fn as_int(&self, name: &str) -> Result<i64, CipherError> {
        match self {
            Self::Int(v) => Ok(*v),
            Self::Text(s) => s.trim().parse().map_err(|_| {
                CipherError::invalid_parameter(name, format!("expected an integer, got {s:?}"))
            }),
        }
    }

    /// Reads the value as text; integers are rendered in decimal.
    pub fn as_text(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Named parameters for one call. Missing names take the cipher's defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Empty parameter set; every cipher falls back to its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name`, replacing any earlier value.
    pub fn insert(&mut self, name: &str, value: impl Into<ParamValue>) {
        self.0.insert(name.to_owned(), value.into());
    }

    /// Value for `name`, if supplied.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Supplied names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns true when nothing was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a `name=value` assignment. Values that parse as integers become
    /// [`ParamValue::Int`]; anything else stays text.
    pub fn parse_assignment(&mut self, assignment: &str) -> Result<(), CipherError> {
        let (name, value) = assignment.split_once('=').ok_or_else(|| {
            CipherError::invalid_parameter(assignment, "expected NAME=VALUE")
        })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CipherError::invalid_parameter(assignment, "empty parameter name"));
        }
        let value = match value.trim().parse::<i64>() {
            Ok(v) => ParamValue::Int(v),
            Err(_) => ParamValue::Text(value.to_owned()),
        };
        self.0.insert(name.to_owned(), value);
        Ok(())
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
