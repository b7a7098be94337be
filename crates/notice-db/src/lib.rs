//! # notice-db
//!
//! Database layer implementing the member repository with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the PostgreSQL implementation of the `MemberRepository`
//! trait defined in `notice-core`. It handles:
//!
//! - Connection pool management
//! - The `member` table definition
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Audit timestamps on every write
//!
//! ## Usage
//!
//! ```rust,ignore
//! use notice_core::{Member, MemberRepository};
//! use notice_db::{create_pool, ensure_schema, DatabaseConfig, PgMemberRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     ensure_schema(&pool).await?;
//!     let repo = PgMemberRepository::new(pool);
//!
//!     let member = Member::builder()
//!         .username("username")
//!         .password("1234567890")
//!         .name("Member1")
//!         .nickname("NickName1")
//!         .age(22)
//!         .build();
//!     let saved = repo.save(&member).await?;
//!     assert!(repo.exists_by_username(saved.username()).await?);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::PgMemberRepository;
pub use schema::ensure_schema;
