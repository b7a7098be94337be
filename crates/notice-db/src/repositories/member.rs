//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument, warn};

use notice_core::entities::{Member, NewMember};
use notice_core::error::DomainError;
use notice_core::traits::{MemberRepository, RepoResult};
use notice_core::value_objects::{AuditStamp, MemberId};

use crate::mappers::{MemberInsert, MemberUpdate};
use crate::models::MemberModel;

use super::error::{map_db_error, map_write_error, member_not_found};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self, member), fields(username = ?member.username()))]
    async fn save(&self, member: &NewMember) -> RepoResult<Member> {
        if member.password().is_some() && !member.is_password_encoded() {
            warn!("Saving member with a password that was not encoded");
        }

        let insert = MemberInsert::new(member, AuditStamp::on_insert());
        let model = sqlx::query_as::<_, MemberModel>(
            r"
            INSERT INTO member (username, password, name, nick_name, age, role,
                                created_data, last_modified_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING member_id, username, password, name, nick_name, age, role,
                      created_data, last_modified_date
            ",
        )
        .bind(insert.username)
        .bind(insert.password)
        .bind(insert.name)
        .bind(insert.nick_name)
        .bind(insert.age)
        .bind(insert.role)
        .bind(insert.created_data)
        .bind(insert.last_modified_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, || {
                DomainError::UsernameAlreadyExists(insert.username.unwrap_or_default().to_string())
            })
        })?;

        debug!(member_id = model.member_id, "Member inserted");
        Member::try_from(model)
    }

    #[instrument(skip(self, member), fields(member_id = %member.id()))]
    async fn update(&self, member: &Member) -> RepoResult<Member> {
        let update = MemberUpdate::new(member);
        let model = sqlx::query_as::<_, MemberModel>(
            r"
            UPDATE member
            SET password = $2, name = $3, nick_name = $4, age = $5, role = $6,
                last_modified_date = $7
            WHERE member_id = $1
            RETURNING member_id, username, password, name, nick_name, age, role,
                      created_data, last_modified_date
            ",
        )
        .bind(update.member_id)
        .bind(update.password)
        .bind(update.name)
        .bind(update.nick_name)
        .bind(update.age)
        .bind(update.role)
        .bind(update.last_modified_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, || {
                DomainError::UsernameAlreadyExists(member.username().to_string())
            })
        })?
        .ok_or_else(|| member_not_found(member.id()))?;

        Member::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: MemberId) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT member_id, username, password, name, nick_name, age, role,
                   created_data, last_modified_date
            FROM member
            WHERE member_id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT member_id, username, password, name, nick_name, age, role,
                   created_data, last_modified_date
            FROM member
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn exists_by_username(&self, username: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM member WHERE username = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let models = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT member_id, username, password, name, nick_name, age, role,
                   created_data, last_modified_date
            FROM member
            ORDER BY member_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Member::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM member")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: MemberId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM member WHERE member_id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMemberRepository>();
    }
}
