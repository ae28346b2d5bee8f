use std::sync::Arc;

use tubepost_core::{Summarizer, TranscriptSource};

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup from the configured provider and API key
    pub summarizer: Arc<Summarizer>,
    pub transcripts: Arc<dyn TranscriptSource>,
}

impl AppState {
    pub fn new(summarizer: Summarizer, transcripts: impl TranscriptSource + 'static) -> Self {
        Self {
            summarizer: Arc::new(summarizer),
            transcripts: Arc::new(transcripts),
        }
    }
}
