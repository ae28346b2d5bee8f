use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tubepost_core::{ChatClient, Provider, Summarizer, SummarizerConfig, YtDlpTranscripts};
use tubepost_web::{AppState, create_router};

#[derive(Parser, Debug)]
#[command(name = "tubepost-web", version)]
#[command(about = "Serve the YouTube-to-post form over HTTP")]
struct Config {
    /// Address to listen on
    #[arg(long, env = "TUBEPOST_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// AI provider for summarization (groq, grok, openai, gemini)
    #[arg(short, long, env = "TUBEPOST_PROVIDER", default_value = "groq")]
    provider: Provider,

    /// Model override (defaults to the provider's model)
    #[arg(short, long, env = "TUBEPOST_MODEL")]
    model: Option<String>,

    /// Part summaries requested at once per submission
    #[arg(short, long, env = "TUBEPOST_CONCURRENCY", default_value_t = 4)]
    concurrency: usize,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let config = Config::parse();
    init_tracing();

    let api_key = config.provider.validate_api_key()?;
    let model = config
        .model
        .unwrap_or_else(|| config.provider.config().model.to_string());

    info!(
        provider = config.provider.name(),
        model = %model,
        concurrency = config.concurrency,
        "Configured summarizer"
    );

    let summarizer = Summarizer::new(
        ChatClient::for_provider(&config.provider, api_key),
        SummarizerConfig::new(model).with_concurrency(config.concurrency),
    );
    let state = AppState::new(summarizer, YtDlpTranscripts::new());

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Listening on http://{}", config.bind);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
