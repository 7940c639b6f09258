//! Option values and the ordered mapping the trainer's command line is
//! built from.
//!
//! The external trainer consumes a flat `--flag value` token stream, and
//! some of its options are positional groups (a flag followed by several
//! list elements), so the mapping preserves insertion order end to end.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single option value in an experiment configuration.
///
/// The variants mirror what the trainer's command line can express.
/// `Switch` is deliberately distinct from `Bool(true)`: a switch only ever
/// appears, while a boolean option has on/off semantics and disappears when
/// off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArgValue {
    /// Explicitly absent. Emits nothing, but still shadows a base value
    /// during merge.
    Null,
    /// Presence-only flag, value-less.
    Switch,
    /// On/off option: `true` emits the bare flag, `false` emits nothing.
    Bool(bool),
    /// Integer scalar, stringified after the flag.
    Int(i64),
    /// Floating-point scalar, stringified after the flag.
    Float(f64),
    /// String scalar, passed through after the flag.
    Str(String),
    /// Flag followed by each element, stringified in order.
    List(Vec<ArgValue>),
}

impl ArgValue {
    /// Append this value's token rendering for option `key` onto `out`.
    fn push_tokens(&self, key: &str, out: &mut Vec<String>) {
        match self {
            Self::Null | Self::Bool(false) => {}
            Self::Switch | Self::Bool(true) => out.push(format!("--{key}")),
            Self::List(items) => {
                out.push(format!("--{key}"));
                out.extend(items.iter().map(ToString::to_string));
            }
            scalar => {
                out.push(format!("--{key}"));
                out.push(scalar.to_string());
            }
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::Switch => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Insertion-ordered mapping from option name to [`ArgValue`].
///
/// Backed by a vector of pairs: option counts are tiny, and the contract
/// that matters is order, not lookup speed. Replacing an existing key keeps
/// its original position, so merging reproduces the ordering a Python
/// `{**base, **overrides}` would produce.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArgMap {
    entries: Vec<(String, ArgValue)>,
}

impl ArgMap {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the mapping holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an option, replacing any existing value in place.
    ///
    /// A replaced key keeps its original position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Insert an option only when the key is not already present.
    pub fn entry_or(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        let key = key.into();
        if !self.contains_key(&key) {
            self.entries.push((key, value.into()));
        }
    }

    /// Get the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Check whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Shallow-merge `overrides` over this mapping; override keys win.
    ///
    /// Overridden keys keep their position from `self`, new keys append in
    /// `overrides` order.
    #[must_use]
    pub fn merged_with(&self, overrides: &Self) -> Self {
        let mut merged = self.clone();
        for (key, value) in &overrides.entries {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Serialize the mapping into a flat command-line token sequence.
    ///
    /// Entries are emitted in insertion order. `Null` and `Bool(false)`
    /// emit nothing; `Switch` and `Bool(true)` emit the bare flag; a list
    /// emits the flag followed by each element; any other value emits the
    /// flag followed by the stringified scalar. Option names and values are
    /// passed through unvalidated — the trainer's flag set is the caller's
    /// contract, not ours.
    #[must_use]
    pub fn to_cli_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        for (key, value) in &self.entries {
            value.push_tokens(key, &mut tokens);
        }
        tokens
    }
}
