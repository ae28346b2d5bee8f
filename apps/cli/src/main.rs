use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tubepost_core::{
    ChatClient, GENERATION_FAILED, Provider, Summarizer, SummarizerConfig, Summary, TubepostError,
    YtDlpTranscripts, extract_video_id, fetch_transcript, format_chunk_summaries,
    format_transcript_with_timestamps,
};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Copy, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Groq,
    Grok,
    Openai,
    Gemini,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Groq => Provider::Groq,
            CliProvider::Grok => Provider::Grok,
            CliProvider::Openai => Provider::Openai,
            CliProvider::Gemini => Provider::Gemini,
        }
    }
}

#[derive(Parser)]
#[command(name = "tubepost", version)]
#[command(about = "Turn a YouTube video into a social media post using its transcript")]
struct Cli {
    /// Video URL (youtu.be, youtube.com/watch or youtube.com/shorts)
    url: String,

    /// AI provider for summarization
    #[arg(short, long, env = "TUBEPOST_PROVIDER", default_value = "groq")]
    provider: CliProvider,

    /// Model override (defaults to the provider's model)
    #[arg(short, long, env = "TUBEPOST_MODEL")]
    model: Option<String>,

    /// Part summaries requested at once
    #[arg(short, long, env = "TUBEPOST_CONCURRENCY", default_value_t = 4)]
    concurrency: usize,

    /// Print the timestamped transcript instead of writing a post
    #[arg(short, long)]
    transcript: bool,

    /// Also print the summary of every part
    #[arg(long)]
    show_parts: bool,
}

/// The post to print, or `None` when synthesis came back blank.
fn finished_post(summary: &Summary) -> Option<&str> {
    summary.has_post().then_some(summary.post.as_str())
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn report_failure(err: &TubepostError) -> ! {
    if let Some(detail) = err.detail() {
        eprintln!("{} {}", style("Error:").red().bold(), detail);
    }
    if err.is_warning() {
        eprintln!("{} {}", style("Warning:").yellow().bold(), err.user_message());
    } else {
        eprintln!("{} {}", style("✗").red().bold(), err.user_message());
    }
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing();

    let provider: Provider = cli.provider.into();

    // Validate API key early; transcript-only runs never call the LLM
    let summarizer = if cli.transcript {
        None
    } else {
        let api_key = match provider.validate_api_key() {
            Ok(key) => key,
            Err(e) => {
                eprintln!("{} {}", style("Error:").red().bold(), e);
                std::process::exit(1);
            }
        };
        let model = cli
            .model
            .unwrap_or_else(|| provider.config().model.to_string());
        Some(Summarizer::new(
            ChatClient::for_provider(&provider, api_key),
            SummarizerConfig::new(model).with_concurrency(cli.concurrency),
        ))
    };

    println!(
        "\n{}  {}\n",
        style("tubepost").cyan().bold(),
        style("YouTube Video Summarizer").dim()
    );

    let url = cli.url.trim();
    if url.is_empty() {
        report_failure(&TubepostError::MissingUrl);
    }

    let video_id = extract_video_id(url).unwrap_or_else(|e| report_failure(&e));
    println!(
        "{} Video: {}",
        style("✓").green().bold(),
        style(&video_id).yellow()
    );
    println!("{}", style("─".repeat(60)).dim());

    let total_start = Instant::now();

    // Step 1: Fetch transcript
    let step_start = Instant::now();
    let spinner = create_spinner("Retrieving transcript...");
    let transcript = match fetch_transcript(&YtDlpTranscripts::new(), &video_id).await {
        Ok(transcript) => transcript,
        Err(e) => {
            spinner.finish_and_clear();
            report_failure(&e);
        }
    };
    spinner.finish_with_message(format!(
        "{} Transcript: {} segments, {} words {}",
        style("✓").green().bold(),
        transcript.segments.len(),
        transcript.word_count(),
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    ));

    let Some(summarizer) = summarizer else {
        println!("{}", style("─".repeat(60)).dim());
        println!("{}", format_transcript_with_timestamps(&transcript));
        return Ok(());
    };

    // Step 2: Summarize parts and write the post
    let step_start = Instant::now();
    let text = transcript.text();
    let parts = summarizer.chunks(&text).len();
    let spinner = create_spinner(&format!(
        "Summarizing {} part(s) with {} ({})...",
        parts,
        provider.name(),
        summarizer.config().model
    ));
    let summary = match summarizer.summarize(&text).await {
        Ok(summary) => summary,
        Err(e) => {
            spinner.finish_and_clear();
            report_failure(&e);
        }
    };
    let Some(post) = finished_post(&summary) else {
        spinner.finish_and_clear();
        eprintln!("{} {}", style("✗").red().bold(), GENERATION_FAILED);
        std::process::exit(1);
    };
    let failed = if summary.failed_chunks.is_empty() {
        String::new()
    } else {
        format!(", {} failed", summary.failed_chunks.len())
    };
    spinner.finish_with_message(format!(
        "{} Summary generated successfully! ({} part(s){}) {}",
        style("✓").green().bold(),
        summary.chunk_count,
        failed,
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    ));

    println!(
        "\n{} {}\n",
        style("Total time:").dim(),
        style(format_duration(total_start.elapsed())).cyan().bold()
    );

    if cli.show_parts && summary.chunk_count > 0 {
        println!("{}", style("Parts").bold());
        println!("{}\n", format_chunk_summaries(&summary));
    }

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", post);

    Ok(())
}
