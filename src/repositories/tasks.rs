use sqlx::PgPool;
use time::OffsetDateTime;

use crate::core::seed::SeedTask;
use crate::db::models::Task;

const COLUMNS: &str = "\
    id, title, course, priority, completed, description, user_id, due_date, \
    notification_id, created_at, updated_at";

pub(crate) async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks").fetch_one(pool).await
}

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "SELECT {COLUMNS} FROM tasks ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!("SELECT {COLUMNS} FROM tasks WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) struct CreateTask<'a> {
    pub(crate) id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) course: &'a str,
    pub(crate) priority: &'a str,
    pub(crate) description: &'a str,
    pub(crate) user_id: Option<&'a str>,
    pub(crate) due_date: Option<OffsetDateTime>,
    pub(crate) notification_id: Option<i32>,
}

pub(crate) async fn create(pool: &PgPool, params: CreateTask<'_>) -> Result<Task, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "INSERT INTO tasks (
            id, title, course, priority, completed, description, user_id, due_date,
            notification_id
        ) VALUES ($1,$2,$3,$4,FALSE,$5,$6,$7,$8)
        RETURNING {COLUMNS}",
    ))
    .bind(params.id)
    .bind(params.title)
    .bind(params.course)
    .bind(params.priority)
    .bind(params.description)
    .bind(params.user_id)
    .bind(params.due_date)
    .bind(params.notification_id)
    .fetch_one(pool)
    .await
}

/// Writes the mutable columns of an already merged task. `None` when the row is gone.
pub(crate) async fn update(pool: &PgPool, task: &Task) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks SET
            title = $1,
            course = $2,
            priority = $3,
            completed = $4,
            description = $5,
            due_date = $6,
            updated_at = NOW()
         WHERE id = $7
         RETURNING {COLUMNS}",
    ))
    .bind(&task.title)
    .bind(&task.course)
    .bind(&task.priority)
    .bind(task.completed)
    .bind(&task.description)
    .bind(task.due_date)
    .bind(&task.id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn toggle(pool: &PgPool, id: &str) -> Result<Option<Task>, sqlx::Error> {
    sqlx::query_as::<_, Task>(&format!(
        "UPDATE tasks SET completed = NOT completed, updated_at = NOW()
         WHERE id = $1
         RETURNING {COLUMNS}"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub(crate) async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1").bind(id).execute(pool).await?;
    Ok(result.rows_affected())
}

pub(crate) async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM tasks").execute(pool).await?;
    Ok(result.rows_affected())
}

pub(crate) async fn insert_seed(pool: &PgPool, task: &SeedTask) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO tasks (id, title, course, priority, completed, description)
         VALUES ($1,$2,$3,$4,FALSE,$5)
         ON CONFLICT (id) DO NOTHING",
    )
    .bind(task.id)
    .bind(task.title)
    .bind(task.course)
    .bind(task.priority)
    .bind(task.description)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
