use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{Error, Result};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_URL_LEN: usize = 400;

/// A catalogued video. `video_id` is derived from `url` once at creation
/// time and is unique across the catalog; callers never set it directly.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Video {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub notes: Option<String>,
    pub video_id: String,
}

/// Typed form input for creating a video, validated before any store call.
#[derive(Debug, Clone, Deserialize)]
pub struct NewVideo {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewVideo {
    pub fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("name must not be empty".into()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(Error::InvalidInput(format!(
                "name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        if self.url.chars().count() > MAX_URL_LEN {
            return Err(Error::InvalidInput(format!(
                "url must be at most {MAX_URL_LEN} characters"
            )));
        }
        Ok(())
    }

    /// Empty notes from a form post are stored as absent.
    pub fn normalized_notes(&self) -> Option<String> {
        match self.notes.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(n) => Some(n.to_string()),
        }
    }
}
