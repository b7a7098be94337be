//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Member, NewMember};
use crate::error::DomainError;
use crate::value_objects::MemberId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Insert a new member, assigning its identity and audit timestamps.
    ///
    /// Missing required fields are rejected by the store as
    /// `DomainError::ConstraintViolation`; a taken username as
    /// `DomainError::UsernameAlreadyExists`.
    async fn save(&self, member: &NewMember) -> RepoResult<Member>;

    /// Flush in-place mutations of a loaded member, refreshing `modified_at`
    async fn update(&self, member: &Member) -> RepoResult<Member>;

    /// Find member by ID
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>>;

    /// Find member by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Member>>;

    /// Check if a username is already taken
    async fn exists_by_username(&self, username: &str) -> RepoResult<bool>;

    /// List all members ordered by ID
    async fn find_all(&self) -> RepoResult<Vec<Member>>;

    /// Count stored members
    async fn count(&self) -> RepoResult<i64>;

    /// Remove a member
    async fn delete(&self, member: &Member) -> RepoResult<()> {
        self.delete_by_id(member.id()).await
    }

    /// Remove a member by ID
    async fn delete_by_id(&self, id: MemberId) -> RepoResult<()>;
}
