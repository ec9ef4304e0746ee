use std::path::Path;

use log::{error, info};
use sqlx::{Sqlite, SqlitePool, migrate::MigrateDatabase};

use super::internal::video;
use crate::error::{Error, Result};

const VALID_DB_VERSION: i64 = 1;

pub async fn check_db_version(db_pool: &SqlitePool) -> Result<()> {
    let version = sqlx::query_as::<Sqlite, (i64,)>("PRAGMA user_version;")
        .fetch_one(db_pool)
        .await?;
    if version.0 == VALID_DB_VERSION {
        Ok(())
    } else {
        Err(Error::DbError(
            "Invalid database version, please upgrade db file".to_string(),
        ))
    }
}

pub async fn create_db_pool(db_path: &Path) -> Result<SqlitePool> {
    info!("Initializing database pool at path: {db_path:?}");
    if db_path.is_file() {
        info!("Database file exists at {db_path:?}. Connecting...");
        let db_pool = SqlitePool::connect(db_path.to_str().ok_or_else(|| {
            Error::DbError(format!("invalid database path {db_path:?}"))
        })?)
        .await?;
        check_db_version(&db_pool).await.map_err(|e| {
            error!("Database version check failed: {e}");
            e
        })?;
        Ok(db_pool)
    } else {
        info!("Database file not found at {db_path:?}. Creating new database...");
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let path = db_path
            .to_str()
            .ok_or_else(|| Error::DbError(format!("invalid database path {db_path:?}")))?;
        Sqlite::create_database(path).await?;
        let db_pool = SqlitePool::connect(path).await?;
        create_tables(&db_pool).await?;
        info!("Database tables created successfully.");
        Ok(db_pool)
    }
}

pub async fn create_tables(db_pool: &SqlitePool) -> Result<()> {
    video::create_video_table(db_pool).await?;
    sqlx::query(format!("PRAGMA user_version = {VALID_DB_VERSION};").as_str())
        .execute(db_pool)
        .await?;
    Ok(())
}
