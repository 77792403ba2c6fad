use sqlx::PgPool;
use time::OffsetDateTime;

use crate::db::models::VerificationCode;

const COLUMNS: &str = "id, email, code, type, expires_at, used, created_at";

pub(crate) async fn delete_for(pool: &PgPool, email: &str, kind: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM verification_codes WHERE email = $1 AND type = $2")
        .bind(email)
        .bind(kind)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete_all_for_email(pool: &PgPool, email: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM verification_codes WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub(crate) struct CreateCode<'a> {
    pub(crate) email: &'a str,
    pub(crate) code: &'a str,
    pub(crate) kind: &'a str,
    pub(crate) expires_at: OffsetDateTime,
}

pub(crate) async fn create(pool: &PgPool, params: CreateCode<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO verification_codes (email, code, type, expires_at) VALUES ($1,$2,$3,$4)",
    )
    .bind(params.email)
    .bind(params.code)
    .bind(params.kind)
    .bind(params.expires_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Marks the newest unused, unexpired code for the triple as used in one
/// statement. `None` means there was nothing to consume, including when a
/// concurrent request won the race.
pub(crate) async fn consume(
    pool: &PgPool,
    email: &str,
    code: &str,
    kind: &str,
    now: OffsetDateTime,
) -> Result<Option<VerificationCode>, sqlx::Error> {
    sqlx::query_as::<_, VerificationCode>(&format!(
        "UPDATE verification_codes SET used = TRUE
         WHERE id = (
             SELECT id FROM verification_codes
             WHERE email = $1 AND code = $2 AND type = $3 AND used = FALSE AND expires_at > $4
             ORDER BY id DESC
             LIMIT 1
             FOR UPDATE SKIP LOCKED
         )
         AND used = FALSE
         RETURNING {COLUMNS}"
    ))
    .bind(email)
    .bind(code)
    .bind(kind)
    .bind(now)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
pub(crate) async fn list_for(
    pool: &PgPool,
    email: &str,
    kind: &str,
) -> Result<Vec<VerificationCode>, sqlx::Error> {
    sqlx::query_as::<_, VerificationCode>(&format!(
        "SELECT {COLUMNS} FROM verification_codes WHERE email = $1 AND type = $2 ORDER BY id"
    ))
    .bind(email)
    .bind(kind)
    .fetch_all(pool)
    .await
}
