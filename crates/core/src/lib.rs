//! Tubepost Core Library
//!
//! Turns a YouTube video into a social media post: extract the video ID,
//! fetch its transcript, summarize it chunk by chunk and synthesize the post.

pub mod chunk;
pub mod completion;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod prompts;
pub mod provider;
pub mod summarizer;
pub mod transcript;
pub mod types;
pub mod video_id;

// Re-export commonly used items at crate root
pub use chunk::{CHUNK_WORDS, split_into_chunks};
pub use completion::{ChatClient, CompletionClient, CompletionError, CompletionRequest};
pub use error::{GENERATION_FAILED, Result, TubepostError};
pub use format::{format_chunk_summaries, format_timestamp, format_transcript_with_timestamps};
pub use pipeline::{fetch_transcript, generate_post};
pub use provider::{Provider, ProviderConfig, ProviderError};
pub use summarizer::{Summarizer, SummarizerConfig, TRANSCRIPT_NOT_AVAILABLE};
pub use transcript::{TranscriptError, TranscriptSource, YtDlpTranscripts};
pub use types::{
    Chunk, ChunkSummary, GeneratedPost, Summary, Transcript, TranscriptSegment, VideoId,
};
pub use video_id::extract_video_id;
