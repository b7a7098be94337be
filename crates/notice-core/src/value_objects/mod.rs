//! Value objects - immutable types that represent domain concepts

mod audit;
mod member_id;

pub use audit::AuditStamp;
pub use member_id::{MemberId, MemberIdParseError};
