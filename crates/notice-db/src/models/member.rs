//! Member database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the member table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub member_id: i64,
    pub username: String,
    pub password: String,
    pub name: String,
    pub nick_name: String,
    pub age: i32,
    pub role: Option<String>,
    pub created_data: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}
