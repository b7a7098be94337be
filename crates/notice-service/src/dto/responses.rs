//! Response DTOs for member use cases

use chrono::{DateTime, Utc};
use notice_core::{Member, MemberId, Role};
use serde::Serialize;

/// Public view of a member; the stored password is never included
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    pub id: MemberId,
    pub username: String,
    pub name: String,
    pub nickname: String,
    pub age: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id(),
            username: member.username().to_string(),
            name: member.name().to_string(),
            nickname: member.nickname().to_string(),
            age: member.age(),
            role: member.role(),
            created_at: member.created_at(),
            modified_at: member.modified_at(),
        }
    }
}
