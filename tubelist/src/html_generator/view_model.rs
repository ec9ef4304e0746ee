use serde::Serialize;

use crate::models::Video;

/// Template-facing projection of a [`Video`]; absent notes render as an
/// empty string.
#[derive(Debug, Clone, Serialize)]
pub struct VideoView {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub notes: String,
    pub video_id: String,
}

impl VideoView {
    pub fn from_video(video: &Video) -> Self {
        VideoView {
            id: video.id,
            name: video.name.clone(),
            url: video.url.clone(),
            notes: video.notes.clone().unwrap_or_default(),
            video_id: video.video_id.clone(),
        }
    }
}

/// Previously submitted add-form values, redisplayed after a rejection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormView {
    pub name: String,
    pub url: String,
    pub notes: String,
}
