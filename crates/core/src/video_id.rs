use url::Url;

use crate::{
    error::{Result, TubepostError},
    types::VideoId,
};

const SHORT_LINK_HOST: &str = "youtu.be";
const STANDARD_HOST: &str = "youtube.com";
const SHORTS_SEGMENT: &str = "shorts";

/// Extract the video ID from a short link, a watch link or a shorts link.
pub fn extract_video_id(input: &str) -> Result<VideoId> {
    let failure = |reason: String| TubepostError::Extraction {
        url: input.to_string(),
        reason,
    };

    let url = Url::parse(input.trim()).map_err(|e| failure(e.to_string()))?;
    let host = url.host_str().unwrap_or_default();

    let id = if host.contains(SHORT_LINK_HOST) {
        Some(url.path().trim_start_matches('/').to_string())
    } else if host.contains(STANDARD_HOST) {
        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.collect())
            .unwrap_or_default();

        match segments.iter().position(|s| *s == SHORTS_SEGMENT) {
            Some(pos) => segments.get(pos + 1).map(|s| s.to_string()),
            // first `v` wins when repeated
            None => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
        }
    } else {
        None
    };

    id.and_then(VideoId::new)
        .ok_or_else(|| failure("could not extract video ID".to_string()))
}
