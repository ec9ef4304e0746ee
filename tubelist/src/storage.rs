#![allow(async_fn_in_trait)]
pub mod database;
pub mod internal;

use log::{debug, info};
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{NewVideo, Video};
use internal::video;

/// Persistence seam for the catalog. Creation relies on the store's unique
/// constraint on `video_id`; concurrent creates of the same video race on
/// that constraint, not on an application-level pre-check.
pub trait VideoStorage: Send + Sync + Clone + 'static {
    /// Inserts a new record. A `video_id` collision yields
    /// [`crate::error::Error::DuplicateVideo`].
    async fn create_video(&self, new: &NewVideo, video_id: &str) -> Result<Video>;
    async fn get_video(&self, id: i64) -> Result<Option<Video>>;
    /// All records, ascending by case-insensitive name, then insertion order.
    async fn get_videos(&self) -> Result<Vec<Video>>;
    /// Records whose name contains `term` case-insensitively, same order.
    async fn search_videos(&self, term: &str) -> Result<Vec<Video>>;
    /// Returns false when no record with that id exists.
    async fn delete_video(&self, id: i64) -> Result<bool>;
}

#[derive(Debug, Clone)]
pub struct StorageImpl {
    db_pool: SqlitePool,
}

impl StorageImpl {
    pub fn new(db_pool: SqlitePool) -> Self {
        StorageImpl { db_pool }
    }
}

impl VideoStorage for StorageImpl {
    async fn create_video(&self, new: &NewVideo, video_id: &str) -> Result<Video> {
        let video = video::insert_video(&self.db_pool, new, video_id).await?;
        info!("saved video {} with video_id {}", video.id, video.video_id);
        Ok(video)
    }

    async fn get_video(&self, id: i64) -> Result<Option<Video>> {
        video::get_video(&self.db_pool, id).await
    }

    async fn get_videos(&self) -> Result<Vec<Video>> {
        let videos = video::get_videos(&self.db_pool).await?;
        debug!("fetched {} videos from local", videos.len());
        Ok(videos)
    }

    async fn search_videos(&self, term: &str) -> Result<Vec<Video>> {
        let videos = video::search_videos(&self.db_pool, term).await?;
        debug!("search for {term:?} matched {} videos", videos.len());
        Ok(videos)
    }

    async fn delete_video(&self, id: i64) -> Result<bool> {
        let deleted = video::delete_video(&self.db_pool, id).await?;
        if deleted {
            info!("deleted video {id}");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod local_tests {
    use super::*;
    use crate::error::Error;

    async fn setup_storage() -> StorageImpl {
        let db_pool = SqlitePool::connect(":memory:").await.unwrap();
        database::create_tables(&db_pool).await.unwrap();
        StorageImpl::new(db_pool)
    }

    fn new_video(name: &str, url: &str) -> NewVideo {
        NewVideo {
            name: name.to_string(),
            url: url.to_string(),
            notes: Some("example".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_video() {
        let storage = setup_storage().await;
        let new = new_video("winner", "https://www.youtube.com/watch?v=U24wsr048FY");

        let created = storage.create_video(&new, "U24wsr048FY").await.unwrap();
        assert_eq!(created.name, "winner");
        assert_eq!(created.url, "https://www.youtube.com/watch?v=U24wsr048FY");
        assert_eq!(created.video_id, "U24wsr048FY");

        let fetched = storage.get_video(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_duplicate_video_id_is_rejected() {
        let storage = setup_storage().await;
        let first = new_video("first", "https://www.youtube.com/watch?v=same");
        let second = new_video("second", "https://www.youtube.com/watch?v=same&t=1");

        storage.create_video(&first, "same").await.unwrap();
        let err = storage.create_video(&second, "same").await.unwrap_err();
        assert!(matches!(err, Error::DuplicateVideo));

        let videos = storage.get_videos().await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].name, "first");
    }

    #[tokio::test]
    async fn test_videos_ordered_by_case_insensitive_name() {
        let storage = setup_storage().await;
        for (name, id) in [("BPE", "123"), ("hsx", "656"), ("BBB", "849"), ("clo", "631")] {
            let url = format!("https://www.youtube.com/watch?v={id}");
            storage.create_video(&new_video(name, &url), id).await.unwrap();
        }

        let names: Vec<String> = storage
            .get_videos()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, ["BBB", "BPE", "clo", "hsx"]);
    }

    #[tokio::test]
    async fn test_name_ties_keep_insertion_order() {
        let storage = setup_storage().await;
        storage
            .create_video(&new_video("Same", "https://www.youtube.com/watch?v=a"), "a")
            .await
            .unwrap();
        storage
            .create_video(&new_video("same", "https://www.youtube.com/watch?v=b"), "b")
            .await
            .unwrap();

        let videos = storage.get_videos().await.unwrap();
        assert_eq!(videos[0].video_id, "a");
        assert_eq!(videos[1].video_id, "b");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let storage = setup_storage().await;
        for (name, id) in [("ABC", "1"), ("nope", "2"), ("abc", "3"), ("hello aBc!!!", "4")] {
            let url = format!("https://www.youtube.com/watch?v={id}");
            storage.create_video(&new_video(name, &url), id).await.unwrap();
        }

        let matched = storage.search_videos("abc").await.unwrap();
        let names: Vec<&str> = matched.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["ABC", "abc", "hello aBc!!!"]);

        assert!(storage.search_videos("kittens").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let storage = setup_storage().await;
        storage
            .create_video(
                &new_video("100% focus", "https://www.youtube.com/watch?v=pc"),
                "pc",
            )
            .await
            .unwrap();
        storage
            .create_video(
                &new_video("plain", "https://www.youtube.com/watch?v=pl"),
                "pl",
            )
            .await
            .unwrap();

        let matched = storage.search_videos("100%").await.unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "100% focus");

        // `%` must not act as a match-anything wildcard.
        assert!(storage.search_videos("1%s").await.unwrap().is_empty());
        assert!(storage.search_videos("_lain").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_video() {
        let storage = setup_storage().await;
        let created = storage
            .create_video(&new_video("gone", "https://www.youtube.com/watch?v=g"), "g")
            .await
            .unwrap();

        assert!(storage.delete_video(created.id).await.unwrap());
        assert!(storage.get_video(created.id).await.unwrap().is_none());
        assert!(!storage.delete_video(created.id).await.unwrap());
    }
}
