use crate::types::{Chunk, ChunkSummary};

pub const CHUNK_SYSTEM_PROMPT: &str =
    "You are a concise summarizer. Focus on the main ideas and key information.";

pub const POST_SYSTEM_PROMPT: &str = "You are a social media content creator skilled at \
synthesizing information from video summaries into engaging, complete posts. Ensure your post \
covers all main points and has a proper conclusion.";

pub fn build_chunk_prompt(chunk: &Chunk) -> String {
    format!(
        "Summarize the key points from part {} of a video transcript (30-50 words):\n\n{}",
        chunk.part(),
        chunk.text
    )
}

/// Label each summary with its source part number, separated by blank lines.
pub fn combine_chunk_summaries(summaries: &[ChunkSummary]) -> String {
    summaries
        .iter()
        .map(|summary| format!("Part {}:\n{}", summary.part(), summary.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn build_post_prompt(combined_summary: &str) -> String {
    format!(
        "Based on these summaries of different parts of a video transcript, create an engaging \
and complete social media post that captures the main ideas and essence of the entire video. \
Ensure the post is coherent and fully summarizes the content:\n\n{combined_summary}"
    )
}
