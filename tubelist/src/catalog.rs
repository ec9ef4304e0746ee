//! Catalog operations on top of the storage seam. URL validation happens
//! here, before any store call, so a record is never persisted with an
//! invalid url.

use log::{info, warn};

use crate::error::{Error, Result};
use crate::extractor::extract_video_id;
use crate::models::{NewVideo, Video};
use crate::storage::VideoStorage;

pub const MAX_SEARCH_TERM_LEN: usize = 200;

#[derive(Debug, Clone)]
pub struct Catalog<S: VideoStorage> {
    storage: S,
}

impl<S: VideoStorage> Catalog<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Validates the input, derives the video id and inserts the record.
    /// Duplicate detection is left to the store's unique constraint.
    pub async fn add_video(&self, new: NewVideo) -> Result<Video> {
        new.validate()?;
        let video_id = extract_video_id(&new.url).map_err(|e| {
            warn!("rejected video url {:?}: {e}", new.url);
            e
        })?;
        let video = self.storage.create_video(&new, &video_id).await?;
        info!("added video {:?} as #{}", video.name, video.id);
        Ok(video)
    }

    /// All videos, or those whose name contains `search_term`, ascending by
    /// case-insensitive name with ties in insertion order. A term that fails
    /// form validation (blank, or over-long) falls back to the full list,
    /// mirroring an unfiltered request.
    pub async fn list_videos(&self, search_term: Option<&str>) -> Result<Vec<Video>> {
        match search_term.map(str::trim) {
            Some(term) if !term.is_empty() && term.chars().count() <= MAX_SEARCH_TERM_LEN => {
                self.storage.search_videos(term).await
            }
            _ => self.storage.get_videos().await,
        }
    }

    pub async fn video(&self, id: i64) -> Result<Option<Video>> {
        self.storage.get_video(id).await
    }

    pub async fn delete_video(&self, id: i64) -> Result<bool> {
        self.storage.delete_video(id).await
    }
}
