use sqlx::PgPool;

use crate::db::models::Announcement;

pub(crate) async fn list(pool: &PgPool) -> Result<Vec<Announcement>, sqlx::Error> {
    sqlx::query_as::<_, Announcement>(
        "SELECT id, title, message, date, type, is_read, course_id
         FROM announcements
         ORDER BY date DESC",
    )
    .fetch_all(pool)
    .await
}

pub(crate) struct CreateAnnouncement<'a> {
    pub(crate) id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) message: Option<&'a str>,
    pub(crate) kind: &'a str,
    pub(crate) course_id: Option<&'a str>,
}

pub(crate) async fn create(
    pool: &PgPool,
    params: CreateAnnouncement<'_>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO announcements (id, title, message, type, course_id) VALUES ($1,$2,$3,$4,$5)",
    )
    .bind(params.id)
    .bind(params.title)
    .bind(params.message)
    .bind(params.kind)
    .bind(params.course_id)
    .execute(pool)
    .await?;
    Ok(())
}

pub(crate) async fn mark_read(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE announcements SET is_read = TRUE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
