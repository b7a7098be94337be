//! Member table definition

use sqlx::PgPool;
use tracing::{info, instrument};

/// DDL for the member table. Column names follow the persisted schema,
/// including `created_data` for the creation timestamp.
pub const MEMBER_TABLE_DDL: &str = r"
    CREATE TABLE IF NOT EXISTS member (
        member_id          BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
        username           VARCHAR(30)  NOT NULL UNIQUE,
        password           VARCHAR(255) NOT NULL,
        name               VARCHAR(30)  NOT NULL,
        nick_name          VARCHAR(30)  NOT NULL,
        age                INTEGER      NOT NULL,
        role               VARCHAR(16)  CHECK (role IN ('USER', 'ADMIN')),
        created_data       TIMESTAMPTZ  NOT NULL,
        last_modified_date TIMESTAMPTZ  NOT NULL
    )
";

/// Create the member table if it does not exist yet
#[instrument(skip(pool))]
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(MEMBER_TABLE_DDL).execute(pool).await?;
    info!("Member schema ready");
    Ok(())
}
