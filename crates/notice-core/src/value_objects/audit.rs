//! Audit timestamps stamped on every persisted write

use chrono::{DateTime, Utc};

/// Creation and last-modification timestamps of a persisted record.
///
/// Never set by callers: the store stamps a fresh pair on insert and
/// touches `modified_at` on every update. `created_at` is fixed after insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditStamp {
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl AuditStamp {
    /// Stamp for a record being inserted now
    pub fn on_insert() -> Self {
        Self::inserted_at(Utc::now())
    }

    /// Stamp for a record inserted at the given instant
    pub fn inserted_at(at: DateTime<Utc>) -> Self {
        Self {
            created_at: at,
            modified_at: at,
        }
    }

    /// Rebuild a stamp read back from storage
    pub fn restore(created_at: DateTime<Utc>, modified_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            modified_at,
        }
    }

    /// Refresh the modification time, returning the new value
    pub fn touch(&mut self) -> DateTime<Utc> {
        self.touch_at(Utc::now())
    }

    /// Refresh the modification time to `at`.
    ///
    /// The modification time never moves before the creation time, even if
    /// the clock stepped backwards.
    pub fn touch_at(&mut self, at: DateTime<Utc>) -> DateTime<Utc> {
        self.modified_at = at.max(self.created_at);
        self.modified_at
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn modified_at(&self) -> DateTime<Utc> {
        self.modified_at
    }
}
