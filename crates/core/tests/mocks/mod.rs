pub mod completion;
pub mod transcripts;
