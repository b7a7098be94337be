//! Repository implementations
//!
//! PostgreSQL implementation of the repository traits defined in notice-core.

mod error;
mod member;

pub use member::PgMemberRepository;
