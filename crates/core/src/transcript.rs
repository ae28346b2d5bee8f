use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::{fs, process::Command};

use crate::types::{TranscriptSegment, VideoId};

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("Could not run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Caption download failed for {video_id}: {reason}")]
    DownloadFailed { video_id: String, reason: String },

    #[error("No captions available for video {video_id}")]
    NoCaptions { video_id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid caption data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Maps a video ID to its ordered transcript segments.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch(&self, video_id: &VideoId) -> Result<Vec<TranscriptSegment>, TranscriptError>;
}

/// Fetches captions (manual or auto-generated) through `yt-dlp` in json3 form.
#[derive(Debug, Clone)]
pub struct YtDlpTranscripts {
    binary: String,
    languages: Vec<String>,
}

impl Default for YtDlpTranscripts {
    fn default() -> Self {
        Self {
            binary: "yt-dlp".to_string(),
            languages: vec!["en".to_string(), "en-US".to_string()],
        }
    }
}

impl YtDlpTranscripts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    async fn download_captions(
        &self,
        video_id: &VideoId,
        out_dir: &Path,
    ) -> Result<(), TranscriptError> {
        let output_template = out_dir.join("%(id)s.%(ext)s");
        let output = Command::new(&self.binary)
            .arg("--skip-download")
            .arg("--write-subs")
            .arg("--write-auto-subs")
            .arg("--sub-langs")
            .arg(self.languages.join(","))
            .arg("--sub-format")
            .arg("json3")
            .arg("--no-warnings")
            .arg("-o")
            .arg(&output_template)
            .arg(video_id.watch_url())
            .output()
            .await
            .map_err(|source| TranscriptError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TranscriptError::DownloadFailed {
                video_id: video_id.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }

    /// Pick the caption file for the most preferred language, else any.
    async fn find_caption_file(&self, out_dir: &Path) -> Result<Option<PathBuf>, TranscriptError> {
        let mut files = Vec::new();
        let mut entries = fs::read_dir(out_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json3") {
                files.push(path);
            }
        }
        files.sort();

        let preferred = self.languages.iter().find_map(|lang| {
            let suffix = format!(".{lang}.json3");
            files
                .iter()
                .find(|p| p.to_string_lossy().ends_with(&suffix))
                .cloned()
        });

        Ok(preferred.or_else(|| files.into_iter().next()))
    }
}

#[async_trait]
impl TranscriptSource for YtDlpTranscripts {
    #[tracing::instrument(skip_all, fields(video_id = %video_id))]
    async fn fetch(&self, video_id: &VideoId) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let tmp = tempfile::tempdir()?;

        self.download_captions(video_id, tmp.path()).await?;

        let no_captions = || TranscriptError::NoCaptions {
            video_id: video_id.to_string(),
        };

        let caption_file = self
            .find_caption_file(tmp.path())
            .await?
            .ok_or_else(no_captions)?;
        tracing::debug!(file = %caption_file.display(), "Found caption file");

        let content = fs::read_to_string(&caption_file).await?;
        let segments = parse_json3(&content)?;
        if segments.is_empty() {
            return Err(no_captions());
        }

        tracing::info!(segments = segments.len(), "Transcript fetched");
        Ok(segments)
    }
}

#[derive(Debug, Deserialize)]
struct Json3Captions {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Json3Event {
    #[serde(default)]
    t_start_ms: u64,
    #[serde(default)]
    d_duration_ms: u64,
    #[serde(default)]
    segs: Vec<Json3Seg>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    #[serde(default)]
    utf8: String,
}

/// Parse YouTube json3 captions into segments, dropping events with no text.
pub fn parse_json3(content: &str) -> Result<Vec<TranscriptSegment>, serde_json::Error> {
    let captions: Json3Captions = serde_json::from_str(content)?;

    Ok(captions
        .events
        .into_iter()
        .filter_map(|event| {
            let text = event
                .segs
                .iter()
                .map(|seg| seg.utf8.as_str())
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");

            (!text.is_empty()).then(|| TranscriptSegment {
                text,
                start: event.t_start_ms as f64 / 1000.0,
                duration: event.d_duration_ms as f64 / 1000.0,
            })
        })
        .collect())
}
