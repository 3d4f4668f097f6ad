//! Filter value wrapper for optional listing constraints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The sentinel value a dropdown uses for "no constraint".
pub const ALL: &str = "all";

/// A single-valued filter that is either unconstrained or pinned to a value.
///
/// `All` is never transmitted; only `Only(value)` produces a query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice<T> {
    /// No constraint.
    #[default]
    All,
    /// Constrain to exactly this value.
    Only(T),
}

impl<T> Choice<T> {
    /// Return the constrained value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v),
        }
    }

    /// Whether this filter is unconstrained.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: FromStr> Choice<T> {
    /// Parse a dropdown value. `"all"` (any case) and blank strings mean
    /// no constraint.
    pub fn parse(raw: &str) -> Result<Self, T::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Only(v),
            None => Self::All,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(v) => v.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_and_blank_mean_unconstrained() {
        assert!(Choice::<String>::parse("all").unwrap().is_all());
        assert!(Choice::<String>::parse("ALL").unwrap().is_all());
        assert!(Choice::<String>::parse("  ").unwrap().is_all());
    }

    #[test]
    fn test_value_is_kept() {
        let choice = Choice::<String>::parse("Bengaluru").unwrap();
        assert_eq!(choice.value().map(String::as_str), Some("Bengaluru"));
    }
}
