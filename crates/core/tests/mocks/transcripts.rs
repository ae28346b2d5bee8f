use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tubepost_core::{TranscriptError, TranscriptSegment, TranscriptSource, VideoId};

#[derive(Clone)]
pub struct MockTranscripts {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl MockTranscripts {
    /// One segment per `words_per_segment` words, `total_words` words overall.
    pub fn with_words(total_words: usize, words_per_segment: usize) -> Self {
        let words: Vec<String> = (0..total_words).map(|i| format!("w{i}")).collect();
        let segments = words
            .chunks(words_per_segment.max(1))
            .enumerate()
            .map(|(i, words)| TranscriptSegment {
                text: words.join(" "),
                start: i as f64 * 2.0,
                duration: 2.0,
            })
            .collect();

        Self {
            segments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            segments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }
}

#[async_trait]
impl TranscriptSource for MockTranscripts {
    async fn fetch(&self, video_id: &VideoId) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if self.fail {
            return Err(TranscriptError::NoCaptions {
                video_id: video_id.to_string(),
            });
        }
        Ok(self.segments.clone())
    }
}
