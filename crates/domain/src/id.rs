//! Typed identifier newtypes backed by the storage engine's integer keys.
//!
//! Keys arrive as URL path segments. Parsing follows the integer affinity of
//! the key columns: surrounding whitespace is ignored and a real literal with
//! no fractional part (`1.0`, `1e0`) names the same row as the integer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A path segment that no integer key can equal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not an integer key: {0:?}")]
pub struct InvalidKey(String);

// 2^63; every finite f64 strictly inside this bound converts without saturating
const KEY_LIMIT: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn parse_key(s: &str) -> Result<i64, InvalidKey> {
    let trimmed = s.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }
    match trimmed.parse::<f64>() {
        Ok(real) if real.is_finite() && real.trunc() == real && real.abs() < KEY_LIMIT => {
            Ok(real as i64)
        }
        _ => Err(InvalidKey(s.to_string())),
    }
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap an existing integer key.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner integer key.
            #[must_use]
            pub const fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = InvalidKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_key(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Primary key of a [`State`](crate::state::State).
    StateId
);

define_id!(
    /// Primary key of a [`District`](crate::district::District).
    DistrictId
);
