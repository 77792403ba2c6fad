use sqlx::PgPool;

use crate::core::seed;
use crate::repositories;

const CREATE_TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id VARCHAR(50) PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(100) NOT NULL UNIQUE,
        password VARCHAR(100) NOT NULL,
        avatar VARCHAR(255),
        student_id VARCHAR(50),
        major VARCHAR(100),
        department VARCHAR(100),
        program VARCHAR(100),
        gpa NUMERIC(3,2),
        level INT,
        mode VARCHAR(20) DEFAULT 'student',
        is_verified BOOLEAN NOT NULL DEFAULT FALSE,
        is_onboarding_complete BOOLEAN NOT NULL DEFAULT FALSE,
        enrolled_courses TEXT[] NOT NULL DEFAULT '{}',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE TABLE IF NOT EXISTS tasks (
        id VARCHAR(50) PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        course VARCHAR(100),
        priority VARCHAR(20) DEFAULT 'low',
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        description TEXT,
        user_id VARCHAR(50),
        due_date TIMESTAMPTZ,
        notification_id INT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE TABLE IF NOT EXISTS verification_codes (
        id BIGSERIAL PRIMARY KEY,
        email VARCHAR(100) NOT NULL,
        code VARCHAR(10) NOT NULL,
        type VARCHAR(20) NOT NULL,
        expires_at TIMESTAMPTZ NOT NULL,
        used BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE INDEX IF NOT EXISTS idx_verification_codes_email ON verification_codes (email)",
    "CREATE INDEX IF NOT EXISTS idx_verification_codes_code ON verification_codes (code)",
    "CREATE TABLE IF NOT EXISTS announcements (
        id VARCHAR(50) PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        message TEXT,
        date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        type VARCHAR(20) NOT NULL DEFAULT 'general'
            CHECK (type IN ('general', 'exam', 'assignment', 'event')),
        is_read BOOLEAN NOT NULL DEFAULT FALSE,
        course_id VARCHAR(50)
    )",
    "CREATE TABLE IF NOT EXISTS schedule_events (
        id VARCHAR(50) PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        start_time TIMESTAMPTZ NOT NULL,
        end_time TIMESTAMPTZ NOT NULL,
        location VARCHAR(100),
        instructor VARCHAR(100),
        course_id VARCHAR(50),
        description TEXT,
        type VARCHAR(20) DEFAULT 'lecture'
    )",
    "CREATE TABLE IF NOT EXISTS courses (
        id VARCHAR(50) PRIMARY KEY,
        code VARCHAR(20) NOT NULL,
        name VARCHAR(100) NOT NULL,
        category VARCHAR(50),
        credit_hours INT,
        professors JSONB,
        description TEXT,
        schedule JSONB,
        content JSONB,
        assignments JSONB,
        exams JSONB
    )",
];

/// Columns added to `users` after the first deployments. Older databases
/// created the table without them.
const ADDITIVE_COLUMNS: &[(&str, &str, &str)] = &[
    ("users", "program", "VARCHAR(100)"),
    ("users", "is_verified", "BOOLEAN NOT NULL DEFAULT FALSE"),
];

#[derive(Debug, Default)]
pub(crate) struct BootstrapReport {
    pub(crate) columns_added: Vec<&'static str>,
    pub(crate) tasks_seeded: u64,
    pub(crate) courses_seeded: u64,
}

/// Idempotent: safe to run on every start against an empty or an existing database.
pub(crate) async fn ensure_schema(pool: &PgPool) -> Result<BootstrapReport, sqlx::Error> {
    let mut report = BootstrapReport::default();

    for statement in CREATE_TABLES {
        sqlx::query(*statement).execute(pool).await?;
    }

    for &(table, column, definition) in ADDITIVE_COLUMNS {
        if column_exists(pool, table, column).await? {
            continue;
        }
        sqlx::query(&format!("ALTER TABLE {table} ADD COLUMN {column} {definition}"))
            .execute(pool)
            .await?;
        tracing::info!(table, column, "Added missing column");
        report.columns_added.push(column);
    }

    if repositories::tasks::count(pool).await? == 0 {
        for task in seed::tasks() {
            report.tasks_seeded += repositories::tasks::insert_seed(pool, &task).await?;
        }
        tracing::info!(count = report.tasks_seeded, "Default tasks inserted");
    }

    if repositories::courses::count(pool).await? == 0 {
        for course in seed::courses(time::OffsetDateTime::now_utc()) {
            report.courses_seeded += repositories::courses::insert_seed(pool, &course).await?;
        }
        tracing::info!(count = report.courses_seeded, "Default courses inserted");
    }

    Ok(report)
}

async fn column_exists(pool: &PgPool, table: &str, column: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (
            SELECT 1 FROM information_schema.columns
            WHERE table_schema = current_schema() AND table_name = $1 AND column_name = $2
        )",
    )
    .bind(table)
    .bind(column)
    .fetch_one(pool)
    .await
}
