//! # notice-core
//!
//! Domain layer containing the member entity, value objects, and the ports
//! (repository and password encoder traits) implemented by infrastructure crates.
//! This crate has zero dependencies on infrastructure (database, hashing library, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Member, MemberBuilder, NewMember, Role, RoleParseError};
pub use error::DomainError;
pub use traits::{MemberRepository, PasswordEncoder, RepoResult};
pub use value_objects::{AuditStamp, MemberId, MemberIdParseError};
