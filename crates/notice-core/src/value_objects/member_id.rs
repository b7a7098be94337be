//! Member ID - surrogate identity assigned by the database on insert

use serde::{Deserialize, Serialize};
use std::fmt;

/// Database-assigned member identity (`member_id` column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
    /// Create a MemberId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, MemberIdParseError> {
        s.trim()
            .parse::<i64>()
            .ok()
            .filter(|id| *id > 0)
            .map(MemberId)
            .ok_or(MemberIdParseError::InvalidFormat)
    }
}

/// Error when parsing a MemberId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MemberIdParseError {
    #[error("invalid member id format")]
    InvalidFormat,
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MemberId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<MemberId> for i64 {
    fn from(id: MemberId) -> Self {
        id.0
    }
}

impl std::str::FromStr for MemberId {
    type Err = MemberIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberId::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(MemberId::parse("42").unwrap(), MemberId::new(42));
        assert_eq!(" 7 ".parse::<MemberId>().unwrap().into_inner(), 7);
    }

    #[test]
    fn test_parse_rejects_garbage_and_non_positive() {
        assert_eq!(MemberId::parse("abc"), Err(MemberIdParseError::InvalidFormat));
        assert_eq!(MemberId::parse("0"), Err(MemberIdParseError::InvalidFormat));
        assert_eq!(MemberId::parse("-3"), Err(MemberIdParseError::InvalidFormat));
    }

    #[test]
    fn test_display_and_conversions() {
        let id = MemberId::from(123);
        assert_eq!(id.to_string(), "123");
        assert_eq!(i64::from(id), 123);
    }
}
