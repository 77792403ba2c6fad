use sqlx::types::Json;
use sqlx::PgPool;

use crate::core::seed::SeedCourse;
use crate::db::models::Course;

const COLUMNS: &str = "\
    id, code, name, category, credit_hours, description, professors, schedule, content, \
    assignments, exams";

pub(crate) async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses").fetch_one(pool).await
}

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(&format!("SELECT {COLUMNS} FROM courses ORDER BY id"))
        .fetch_all(pool)
        .await
}

pub(crate) async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(&format!("SELECT {COLUMNS} FROM courses WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub(crate) async fn insert_seed(pool: &PgPool, course: &SeedCourse) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO courses (
            id, code, name, category, credit_hours, professors, description, schedule,
            content, assignments, exams
        ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11)
        ON CONFLICT (id) DO NOTHING",
    )
    .bind(course.id)
    .bind(course.code)
    .bind(course.name)
    .bind(course.category)
    .bind(course.credit_hours)
    .bind(Json(&course.professors))
    .bind(course.description)
    .bind(Json(&course.schedule))
    .bind(Json(&course.content))
    .bind(Json(&course.assignments))
    .bind(Json(&course.exams))
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
