use crate::types::{Summary, Transcript};

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Format transcript segments with timestamps
pub fn format_transcript_with_timestamps(transcript: &Transcript) -> String {
    transcript
        .segments
        .iter()
        .map(|seg| format!("[{}] {}", format_timestamp(seg.start), seg.text.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per chunk: its summary, or a marker when the request failed.
pub fn format_chunk_summaries(summary: &Summary) -> String {
    (0..summary.chunk_count)
        .map(|index| {
            match summary
                .chunk_summaries
                .iter()
                .find(|s| s.index == index)
            {
                Some(s) => format!("Part {}: {}", s.part(), s.text),
                None => format!("Part {}: (failed)", index + 1),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
