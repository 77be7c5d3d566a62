//! Scalar — a single JSON value as it travels to and from a storage column.
//!
//! District counters are not type-checked on the way in: whatever scalar the
//! client sends is bound as-is, and the column's type affinity decides what
//! is stored (`"17"` into an `INTEGER` column becomes `17`). Values read back
//! keep whatever type storage holds.

use serde::{Deserialize, Serialize};

/// A JSON scalar, or the value of a single storage cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Scalar {
    /// Whether this is the null value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
