//! Test mock for storage
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    error::{Error, Result},
    models::{NewVideo, Video},
    storage::VideoStorage,
};

#[derive(Debug, Clone, Default)]
pub struct MockStorage {
    inner: Arc<Mutex<Vec<Video>>>,
    fail_create: Arc<AtomicBool>,
}

impl MockStorage {
    pub fn new() -> Self {
        Default::default()
    }

    /// Makes the next create fail with a database error, for exercising the
    /// store-failure path without a broken pool.
    pub fn fail_next_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }
}

fn sorted(mut videos: Vec<Video>) -> Vec<Video> {
    // Stable sort keeps insertion order for equal names.
    videos.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    videos
}

impl VideoStorage for MockStorage {
    async fn create_video(&self, new: &NewVideo, video_id: &str) -> Result<Video> {
        if self.fail_create.swap(false, Ordering::SeqCst) {
            return Err(Error::DbError("injected failure".to_string()));
        }
        let mut inner = self.inner.lock().unwrap();
        if inner.iter().any(|v| v.video_id == video_id) {
            return Err(Error::DuplicateVideo);
        }
        let video = Video {
            id: inner.len() as i64 + 1,
            name: new.name.trim().to_string(),
            url: new.url.clone(),
            notes: new.normalized_notes(),
            video_id: video_id.to_string(),
        };
        inner.push(video.clone());
        Ok(video)
    }

    async fn get_video(&self, id: i64) -> Result<Option<Video>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.iter().find(|v| v.id == id).cloned())
    }

    async fn get_videos(&self) -> Result<Vec<Video>> {
        let inner = self.inner.lock().unwrap();
        Ok(sorted(inner.clone()))
    }

    async fn search_videos(&self, term: &str) -> Result<Vec<Video>> {
        let term = term.to_lowercase();
        let inner = self.inner.lock().unwrap();
        let matched = inner
            .iter()
            .filter(|v| v.name.to_lowercase().contains(&term))
            .cloned()
            .collect();
        Ok(sorted(matched))
    }

    async fn delete_video(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.len();
        inner.retain(|v| v.id != id);
        Ok(inner.len() != before)
    }
}
