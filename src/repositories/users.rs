use sqlx::PgPool;

use crate::db::models::User;

// gpa is NUMERIC(3,2) in storage and read back as float8.
const COLUMNS: &str = "\
    id, name, email, password, avatar, student_id, major, department, program, \
    gpa::float8 AS gpa, level, mode, is_verified, is_onboarding_complete, \
    enrolled_courses, created_at, updated_at";

pub(crate) async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE email = $1"))
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Passwords are opaque strings compared verbatim.
pub(crate) async fn find_by_credentials(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {COLUMNS} FROM users WHERE email = $1 AND password = $2"
    ))
    .bind(email)
    .bind(password)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn exists_by_email(pool: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)")
        .bind(email)
        .fetch_one(pool)
        .await
}

pub(crate) async fn password_matches(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<bool, sqlx::Error> {
    let id = sqlx::query_scalar::<_, String>(
        "SELECT id FROM users WHERE email = $1 AND password = $2",
    )
    .bind(email)
    .bind(password)
    .fetch_optional(pool)
    .await?;
    Ok(id.is_some())
}

pub(crate) struct CreateUser<'a> {
    pub(crate) id: &'a str,
    pub(crate) name: &'a str,
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
    pub(crate) avatar: &'a str,
    pub(crate) student_id: &'a str,
    pub(crate) mode: &'a str,
}

/// New accounts start unverified with onboarding incomplete.
pub(crate) async fn create(pool: &PgPool, params: CreateUser<'_>) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (
            id, name, email, password, avatar, student_id, mode,
            is_verified, is_onboarding_complete
        ) VALUES ($1,$2,$3,$4,$5,$6,$7,FALSE,FALSE)
        RETURNING {COLUMNS}",
    ))
    .bind(params.id)
    .bind(params.name)
    .bind(params.email)
    .bind(params.password)
    .bind(params.avatar)
    .bind(params.student_id)
    .bind(params.mode)
    .fetch_one(pool)
    .await
}

/// Every field except `program` is written as given, NULLs included.
pub(crate) struct UpdateProfile {
    pub(crate) name: String,
    pub(crate) avatar: Option<String>,
    pub(crate) major: Option<String>,
    pub(crate) department: Option<String>,
    pub(crate) program: Option<String>,
    pub(crate) gpa: Option<f64>,
    pub(crate) level: Option<i32>,
    pub(crate) mode: Option<String>,
    pub(crate) is_onboarding_complete: bool,
    pub(crate) enrolled_courses: Vec<String>,
}

pub(crate) async fn update_profile(
    pool: &PgPool,
    email: &str,
    params: UpdateProfile,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE users SET
            name = $1,
            avatar = $2,
            major = $3,
            department = $4,
            program = COALESCE($5, program),
            gpa = $6,
            level = $7,
            mode = $8,
            is_onboarding_complete = $9,
            enrolled_courses = $10,
            updated_at = NOW()
         WHERE email = $11",
    )
    .bind(params.name)
    .bind(params.avatar)
    .bind(params.major)
    .bind(params.department)
    .bind(params.program)
    .bind(params.gpa)
    .bind(params.level)
    .bind(params.mode)
    .bind(params.is_onboarding_complete)
    .bind(params.enrolled_courses)
    .bind(email)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn update_password(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("UPDATE users SET password = $1, updated_at = NOW() WHERE email = $2")
            .bind(password)
            .bind(email)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn mark_verified(pool: &PgPool, email: &str) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("UPDATE users SET is_verified = TRUE, updated_at = NOW() WHERE email = $1")
            .bind(email)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users").execute(pool).await?;
    Ok(result.rows_affected())
}
