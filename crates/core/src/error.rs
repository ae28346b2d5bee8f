use thiserror::Error;

use crate::{completion::CompletionError, transcript::TranscriptError};

/// Shown whenever no post could be produced.
pub const GENERATION_FAILED: &str = "Failed to generate summary.";

#[derive(Error, Debug)]
pub enum TubepostError {
    #[error("No video URL given")]
    MissingUrl,

    #[error("Could not extract video ID from URL '{url}': {reason}")]
    Extraction { url: String, reason: String },

    #[error(transparent)]
    Transcript(#[from] TranscriptError),

    #[error("Summary of part {part} failed: {source}")]
    ChunkSummary {
        part: usize,
        #[source]
        source: CompletionError,
    },

    #[error("Final post generation failed: {0}")]
    Synthesis(#[source] CompletionError),
}

impl TubepostError {
    /// Terminal message a front-end shows for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            TubepostError::MissingUrl => "Please enter a YouTube video URL.",
            TubepostError::Extraction { .. } | TubepostError::Transcript(_) => {
                "Failed to retrieve transcript."
            }
            TubepostError::ChunkSummary { .. } | TubepostError::Synthesis(_) => GENERATION_FAILED,
        }
    }

    /// Detail line shown above the terminal message, for failures that carry one.
    pub fn detail(&self) -> Option<String> {
        match self {
            TubepostError::Extraction { .. } | TubepostError::Transcript(_) => {
                Some(format!("Error retrieving transcript: {self}"))
            }
            _ => None,
        }
    }

    /// Blank input is a warning, not an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, TubepostError::MissingUrl)
    }
}

pub type Result<T> = std::result::Result<T, TubepostError>;
