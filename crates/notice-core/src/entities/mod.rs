//! Domain entities - core business objects

mod member;
mod role;

pub use member::{Member, MemberBuilder, NewMember};
pub use role::{Role, RoleParseError};
