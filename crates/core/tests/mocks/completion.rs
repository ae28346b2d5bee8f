use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use tubepost_core::{CompletionClient, CompletionError, CompletionRequest, prompts};

/// Answers chunk prompts with "summary of part N" and the post prompt with
/// `post`, failing the parts listed in `failing_parts`.
#[derive(Clone)]
pub struct MockCompletion {
    pub post: String,
    pub calls: Arc<Mutex<Vec<CompletionRequest>>>,
    pub failing_parts: HashSet<usize>,
    pub fail_post: bool,
    pub delays: HashMap<usize, Duration>,
}

impl MockCompletion {
    pub fn new(post: &str) -> Self {
        Self {
            post: post.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            failing_parts: HashSet::new(),
            fail_post: false,
            delays: HashMap::new(),
        }
    }

    pub fn failing_parts(mut self, parts: &[usize]) -> Self {
        self.failing_parts = parts.iter().copied().collect();
        self
    }

    pub fn failing_post(mut self) -> Self {
        self.fail_post = true;
        self
    }

    pub fn delay_part(mut self, part: usize, delay: Duration) -> Self {
        self.delays.insert(part, delay);
        self
    }

    pub fn chunk_calls(&self) -> Vec<CompletionRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.system_prompt == prompts::CHUNK_SYSTEM_PROMPT)
            .cloned()
            .collect()
    }

    pub fn post_calls(&self) -> Vec<CompletionRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.system_prompt == prompts::POST_SYSTEM_PROMPT)
            .cloned()
            .collect()
    }
}

fn part_of(prompt: &str) -> usize {
    prompt
        .strip_prefix("Summarize the key points from part ")
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|n| n.parse().ok())
        .expect("chunk prompt names its part")
}

#[async_trait]
impl CompletionClient for MockCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(request.clone());

        if request.system_prompt == prompts::POST_SYSTEM_PROMPT {
            if self.fail_post {
                return Err(CompletionError::Api {
                    status: 500,
                    message: "synthesis unavailable".to_string(),
                });
            }
            return Ok(self.post.clone());
        }

        let part = part_of(&request.user_prompt);
        if let Some(delay) = self.delays.get(&part) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_parts.contains(&part) {
            return Err(CompletionError::Api {
                status: 429,
                message: format!("part {part} rejected"),
            });
        }
        Ok(format!("  summary of part {part}\n"))
    }
}
