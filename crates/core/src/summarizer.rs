use std::sync::Arc;

use futures::{FutureExt, StreamExt, future::BoxFuture, stream};

use crate::{
    chunk::{CHUNK_WORDS, split_into_chunks},
    completion::{CompletionClient, CompletionError, CompletionRequest},
    error::{Result, TubepostError},
    prompts::{
        CHUNK_SYSTEM_PROMPT, POST_SYSTEM_PROMPT, build_chunk_prompt, build_post_prompt,
        combine_chunk_summaries,
    },
    types::{Chunk, ChunkSummary, Summary},
};

/// Returned instead of a post when the transcript has no words.
pub const TRANSCRIPT_NOT_AVAILABLE: &str = "Transcript not available.";

#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub model: String,
    pub chunk_words: usize,
    pub chunk_max_tokens: u32,
    pub post_max_tokens: u32,
    pub temperature: f32,
    /// Chunk requests in flight at once; 1 issues them one after another.
    pub concurrency: usize,
}

impl SummarizerConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            chunk_words: CHUNK_WORDS,
            chunk_max_tokens: 100,
            post_max_tokens: 400,
            temperature: 0.7,
            concurrency: 4,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

/// Map-then-reduce summarizer: one short summary per chunk, then one
/// synthesis call over all of them.
pub struct Summarizer {
    client: Arc<dyn CompletionClient>,
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new(client: impl CompletionClient + 'static, config: SummarizerConfig) -> Self {
        Self {
            client: Arc::new(client),
            config,
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn chunks(&self, transcript_text: &str) -> Vec<Chunk> {
        split_into_chunks(transcript_text, self.config.chunk_words)
    }

    fn chunk_request(&self, chunk: &Chunk) -> CompletionRequest {
        CompletionRequest {
            system_prompt: CHUNK_SYSTEM_PROMPT.to_string(),
            user_prompt: build_chunk_prompt(chunk),
            model: self.config.model.clone(),
            max_tokens: self.config.chunk_max_tokens,
            temperature: self.config.temperature,
        }
    }

    /// Owned request future for one chunk, so the buffered stream borrows nothing.
    fn summarize_chunk(
        &self,
        chunk: Chunk,
    ) -> BoxFuture<'static, (Chunk, std::result::Result<String, CompletionError>)> {
        let client = Arc::clone(&self.client);
        let request = self.chunk_request(&chunk);

        async move {
            let outcome = client.complete(&request).await;
            (chunk, outcome)
        }
        .boxed()
    }

    /// Summarize every chunk. Failed chunks are logged and skipped; the
    /// returned summaries keep chunk order whatever order requests finish in.
    #[tracing::instrument(skip_all, fields(chunks = chunks.len()))]
    pub async fn summarize_chunks(&self, chunks: &[Chunk]) -> (Vec<ChunkSummary>, Vec<usize>) {
        let requests: Vec<_> = chunks
            .iter()
            .cloned()
            .map(|chunk| self.summarize_chunk(chunk))
            .collect();

        let outcomes: Vec<_> = stream::iter(requests)
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await;

        let mut summaries = Vec::with_capacity(outcomes.len());
        let mut failed = Vec::new();

        for (chunk, outcome) in outcomes {
            match outcome {
                Ok(text) => summaries.push(ChunkSummary {
                    index: chunk.index,
                    text: text.trim().to_string(),
                }),
                Err(source) => {
                    let err = TubepostError::ChunkSummary {
                        part: chunk.part(),
                        source,
                    };
                    tracing::warn!(error = %err, "Skipping chunk summary");
                    failed.push(chunk.index);
                }
            }
        }

        (summaries, failed)
    }

    /// Merge chunk summaries into the final post.
    #[tracing::instrument(skip_all, fields(summaries = summaries.len()))]
    pub async fn synthesize(&self, summaries: &[ChunkSummary]) -> Result<String> {
        let request = CompletionRequest {
            system_prompt: POST_SYSTEM_PROMPT.to_string(),
            user_prompt: build_post_prompt(&combine_chunk_summaries(summaries)),
            model: self.config.model.clone(),
            max_tokens: self.config.post_max_tokens,
            temperature: self.config.temperature,
        };

        let post = self
            .client
            .complete(&request)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to generate final post"))
            .map_err(TubepostError::Synthesis)?;

        Ok(post.trim().to_string())
    }

    /// Summarize a full transcript into a post.
    #[tracing::instrument(skip_all, fields(chars = transcript_text.len()))]
    pub async fn summarize(&self, transcript_text: &str) -> Result<Summary> {
        let chunks = self.chunks(transcript_text);
        if chunks.is_empty() {
            tracing::info!("Empty transcript, nothing to summarize");
            return Ok(Summary {
                post: TRANSCRIPT_NOT_AVAILABLE.to_string(),
                chunk_count: 0,
                chunk_summaries: Vec::new(),
                failed_chunks: Vec::new(),
            });
        }

        let (chunk_summaries, failed_chunks) = self.summarize_chunks(&chunks).await;
        if chunk_summaries.is_empty() {
            tracing::warn!(chunks = chunks.len(), "Every chunk summary failed");
        }

        let post = self.synthesize(&chunk_summaries).await?;

        Ok(Summary {
            post,
            chunk_count: chunks.len(),
            chunk_summaries,
            failed_chunks,
        })
    }
}
