use sqlx::{Executor, Sqlite};

use crate::error::{Error, Result};
use crate::models::{NewVideo, Video};

pub async fn create_video_table<'e, E>(executor: E) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    executor
        .execute(
            "CREATE TABLE IF NOT EXISTS videos (\
                id INTEGER PRIMARY KEY AUTOINCREMENT,\
                name TEXT NOT NULL,\
                url TEXT NOT NULL,\
                notes TEXT,\
                video_id TEXT NOT NULL UNIQUE\
            );",
        )
        .await?;
    Ok(())
}

pub async fn insert_video<'e, E>(executor: E, new: &NewVideo, video_id: &str) -> Result<Video>
where
    E: Executor<'e, Database = Sqlite>,
{
    let res = sqlx::query_as::<Sqlite, Video>(
        "INSERT INTO videos (name, url, notes, video_id) VALUES (?, ?, ?, ?) \
         RETURNING id, name, url, notes, video_id;",
    )
    .bind(new.name.trim())
    .bind(&new.url)
    .bind(new.normalized_notes())
    .bind(video_id)
    .fetch_one(executor)
    .await;

    match res {
        Ok(video) => Ok(video),
        Err(e) if is_unique_violation(&e) => Err(Error::DuplicateVideo),
        Err(e) => Err(e.into()),
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

pub async fn get_video<'e, E>(executor: E, id: i64) -> Result<Option<Video>>
where
    E: Executor<'e, Database = Sqlite>,
{
    Ok(sqlx::query_as::<Sqlite, Video>(
        "SELECT id, name, url, notes, video_id FROM videos WHERE id = ?;",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?)
}

pub async fn get_videos<'e, E>(executor: E) -> Result<Vec<Video>>
where
    E: Executor<'e, Database = Sqlite>,
{
    Ok(sqlx::query_as::<Sqlite, Video>(
        "SELECT id, name, url, notes, video_id FROM videos \
         ORDER BY name COLLATE NOCASE ASC, id ASC;",
    )
    .fetch_all(executor)
    .await?)
}

pub async fn search_videos<'e, E>(executor: E, term: &str) -> Result<Vec<Video>>
where
    E: Executor<'e, Database = Sqlite>,
{
    Ok(sqlx::query_as::<Sqlite, Video>(
        "SELECT id, name, url, notes, video_id FROM videos \
         WHERE name LIKE '%' || ? || '%' ESCAPE '\\' \
         ORDER BY name COLLATE NOCASE ASC, id ASC;",
    )
    .bind(escape_like(term))
    .fetch_all(executor)
    .await?)
}

pub async fn delete_video<'e, E>(executor: E, id: i64) -> Result<bool>
where
    E: Executor<'e, Database = Sqlite>,
{
    let res = sqlx::query("DELETE FROM videos WHERE id = ?;")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(res.rows_affected() > 0)
}

// LIKE patterns treat `%` and `_` specially; a user search term must match
// those characters literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
