use std::fmt;

/// YouTube video identifier, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub const WATCH_URL: &'static str = "https://www.youtube.com/watch";

    pub(crate) fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        (!id.is_empty()).then_some(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn watch_url(&self) -> String {
        format!("{}?v={}", Self::WATCH_URL, self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: VideoId,
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// Segment texts joined with single spaces, in order.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|seg| seg.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn word_count(&self) -> usize {
        self.segments
            .iter()
            .map(|seg| seg.text.split_whitespace().count())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
}

impl Chunk {
    /// 1-based part number used in prompts and labels.
    pub fn part(&self) -> usize {
        self.index + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSummary {
    pub index: usize,
    pub text: String,
}

impl ChunkSummary {
    pub fn part(&self) -> usize {
        self.index + 1
    }
}

/// Outcome of a successful summarization run.
#[derive(Debug, Clone)]
pub struct Summary {
    pub post: String,
    pub chunk_count: usize,
    pub chunk_summaries: Vec<ChunkSummary>,
    /// Indices of chunks whose summary request failed.
    pub failed_chunks: Vec<usize>,
}

impl Summary {
    /// Whether synthesis produced any text worth showing.
    pub fn has_post(&self) -> bool {
        !self.post.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub video_id: VideoId,
    pub segment_count: usize,
    pub word_count: usize,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str, start: f64, duration: f64) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            start,
            duration,
        }
    }

    #[test]
    fn transcript_text_joins_segments_in_order() {
        let transcript = Transcript {
            video_id: VideoId::new("abc").unwrap(),
            segments: vec![
                segment("hello there", 0.0, 1.5),
                segment("general", 1.5, 1.0),
                segment("kenobi", 2.5, 2.0),
            ],
        };

        assert_eq!(transcript.text(), "hello there general kenobi");
        assert_eq!(transcript.word_count(), 4);
    }

    #[test]
    fn blank_post_is_not_a_post() {
        let summary = |post: &str| Summary {
            post: post.to_string(),
            chunk_count: 1,
            chunk_summaries: Vec::new(),
            failed_chunks: Vec::new(),
        };

        assert!(summary("A post.").has_post());
        assert!(!summary("").has_post());
        assert!(!summary(" \n\t").has_post());
    }

    #[test]
    fn video_id_rejects_empty() {
        assert!(VideoId::new("").is_none());
        assert_eq!(
            VideoId::new("ABC123").unwrap().watch_url(),
            "https://www.youtube.com/watch?v=ABC123"
        );
    }
}
