use sqlx::PgPool;
use time::OffsetDateTime;

use crate::db::models::ScheduleEvent;

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<ScheduleEvent>, sqlx::Error> {
    sqlx::query_as::<_, ScheduleEvent>(
        "SELECT id, title, start_time, end_time, location, instructor, course_id, description, type
         FROM schedule_events
         ORDER BY start_time ASC",
    )
    .fetch_all(pool)
    .await
}

pub(crate) struct CreateEvent<'a> {
    pub(crate) id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) start_time: OffsetDateTime,
    pub(crate) end_time: OffsetDateTime,
    pub(crate) location: Option<&'a str>,
    pub(crate) instructor: Option<&'a str>,
    pub(crate) course_id: Option<&'a str>,
    pub(crate) description: Option<&'a str>,
    pub(crate) kind: &'a str,
}

pub(crate) async fn create(pool: &PgPool, params: CreateEvent<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO schedule_events (
            id, title, start_time, end_time, location, instructor, course_id, description, type
        ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)",
    )
    .bind(params.id)
    .bind(params.title)
    .bind(params.start_time)
    .bind(params.end_time)
    .bind(params.location)
    .bind(params.instructor)
    .bind(params.course_id)
    .bind(params.description)
    .bind(params.kind)
    .execute(pool)
    .await?;
    Ok(())
}
