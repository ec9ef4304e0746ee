//! Validation and video id extraction for submitted YouTube links.

use url::{Url, form_urlencoded};

use crate::error::{Error, Result};

const EXPECTED_SCHEME: &str = "https";
const EXPECTED_HOST: &str = "www.youtube.com";
const EXPECTED_PATH: &str = "/watch";

/// Extracts the video id from a YouTube watch URL.
///
/// Only `https://www.youtube.com/watch?...v=<id>...` is accepted. Checks are
/// applied in order and the first failing one determines the reported
/// message. The query string is parsed strictly: a stray `&` or a segment
/// without `=` rejects the URL instead of being skipped.
pub fn extract_video_id(raw: &str) -> Result<String> {
    let url = Url::parse(raw).map_err(|_| not_youtube(raw))?;

    if url.scheme() != EXPECTED_SCHEME {
        return Err(not_youtube(raw));
    }
    if url.host_str() != Some(EXPECTED_HOST) {
        return Err(not_youtube(raw));
    }
    if url.path() != EXPECTED_PATH {
        return Err(not_youtube(raw));
    }

    let query = match url.query() {
        Some(q) if !q.is_empty() => q,
        _ => return Err(invalid_youtube(raw)),
    };

    // Url::query_pairs is lenient and would silently skip malformed
    // segments, so validate the shape before decoding.
    for segment in query.split('&') {
        if segment.is_empty() || !segment.contains('=') {
            return Err(invalid_youtube(raw));
        }
    }

    let id = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| {
            Error::InvalidUrl(format!("Invalid Youtube URL, missing parameters {raw}"))
        })?;

    // An empty id would collide with every other empty id on the unique
    // constraint, so reject it here.
    if id.is_empty() {
        return Err(invalid_youtube(raw));
    }
    Ok(id)
}

fn not_youtube(raw: &str) -> Error {
    Error::InvalidUrl(format!("not a Youtube URL {raw}"))
}

fn invalid_youtube(raw: &str) -> Error {
    Error::InvalidUrl(format!("Invalid Youtube URL {raw}"))
}
