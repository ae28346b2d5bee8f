use crate::{
    error::{Result, TubepostError},
    summarizer::Summarizer,
    transcript::TranscriptSource,
    types::{GeneratedPost, Transcript, VideoId},
    video_id::extract_video_id,
};

/// Fetch the transcript for `video_id` from `source`.
#[tracing::instrument(skip(source))]
pub async fn fetch_transcript(
    source: &dyn TranscriptSource,
    video_id: &VideoId,
) -> Result<Transcript> {
    let segments = source
        .fetch(video_id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Failed to retrieve transcript"))?;

    Ok(Transcript {
        video_id: video_id.clone(),
        segments,
    })
}

/// URL in, post out: extract the video ID, fetch its transcript and
/// summarize it. Nothing is fetched when the URL yields no video ID.
#[tracing::instrument(skip(transcripts, summarizer))]
pub async fn generate_post(
    url: &str,
    transcripts: &dyn TranscriptSource,
    summarizer: &Summarizer,
) -> Result<GeneratedPost> {
    let url = url.trim();
    if url.is_empty() {
        return Err(TubepostError::MissingUrl);
    }

    let video_id = extract_video_id(url)?;
    let transcript = fetch_transcript(transcripts, &video_id).await?;
    let summary = summarizer.summarize(&transcript.text()).await?;

    Ok(GeneratedPost {
        video_id,
        segment_count: transcript.segments.len(),
        word_count: transcript.word_count(),
        summary,
    })
}
