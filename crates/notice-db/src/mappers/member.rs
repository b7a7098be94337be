//! Member entity <-> model mapper

use chrono::{DateTime, Utc};
use notice_core::entities::{Member, NewMember, Role};
use notice_core::error::DomainError;
use notice_core::value_objects::{AuditStamp, MemberId};

use crate::models::MemberModel;

/// Convert Role enum to the stored column value
pub fn role_to_str(role: Role) -> &'static str {
    role.as_str()
}

/// Convert MemberModel to Member entity
impl TryFrom<MemberModel> for Member {
    type Error = DomainError;

    fn try_from(model: MemberModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .as_deref()
            .map(str::parse::<Role>)
            .transpose()
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(Member::restore(
            MemberId::new(model.member_id),
            model.username,
            model.password,
            model.name,
            model.nick_name,
            model.age,
            role,
            AuditStamp::restore(model.created_data, model.last_modified_date),
        ))
    }
}

/// NewMember values for database insertion.
///
/// Absent fields bind as NULL so the NOT NULL constraints reject the row.
pub struct MemberInsert<'a> {
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub name: Option<&'a str>,
    pub nick_name: Option<&'a str>,
    pub age: Option<i32>,
    pub role: Option<&'static str>,
    pub created_data: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl<'a> MemberInsert<'a> {
    pub fn new(member: &'a NewMember, audit: AuditStamp) -> Self {
        Self {
            username: member.username(),
            password: member.password(),
            name: member.name(),
            nick_name: member.nickname(),
            age: member.age(),
            role: member.role().map(role_to_str),
            created_data: audit.created_at(),
            last_modified_date: audit.modified_at(),
        }
    }
}

/// Member values for database update. `username` and `created_data` are never written.
pub struct MemberUpdate<'a> {
    pub member_id: i64,
    pub password: &'a str,
    pub name: &'a str,
    pub nick_name: &'a str,
    pub age: i32,
    pub role: Option<&'static str>,
    pub last_modified_date: DateTime<Utc>,
}

impl<'a> MemberUpdate<'a> {
    pub fn new(member: &'a Member) -> Self {
        let mut audit = member.audit();
        Self {
            member_id: member.id().into_inner(),
            password: member.password(),
            name: member.name(),
            nick_name: member.nickname(),
            age: member.age(),
            role: member.role().map(role_to_str),
            last_modified_date: audit.touch(),
        }
    }
}
