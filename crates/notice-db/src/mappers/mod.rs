//! Entity to model mappers
//!
//! This module provides conversions between domain entities (notice-core) and database models.
//! - `TryFrom<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod member;

pub use member::{role_to_str, MemberInsert, MemberUpdate};
