use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::domain::EntryError;

/// A validated entry identifier.
///
/// Wraps i32 to match the database SERIAL type. Only positive values are
/// valid, so anything parsed from a URL segment that is not a positive
/// integer is rejected before it reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i32);

impl EntryId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for EntryId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<EntryId> for i32 {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

impl FromStr for EntryId {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i32>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(EntryError::InvalidId(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        assert_eq!("42".parse::<EntryId>().unwrap(), EntryId::new(42));
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "abc", "0", "-3", "64b7f1c2e4b0a1d2c3e4f5a6", "1.5"] {
            assert!(
                matches!(raw.parse::<EntryId>(), Err(EntryError::InvalidId(_))),
                "expected {raw:?} to be rejected"
            );
        }
    }
}
