use super::page::{Outcome, render_page};
use super::state::AppState;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use tracing::{Instrument, info, info_span, warn};
use tubepost_core::{GENERATION_FAILED, generate_post};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub url: String,
}

/// GET /
pub async fn index() -> Html<String> {
    Html(render_page("", None))
}

/// POST /generate
/// Runs the whole pipeline for one URL and renders the outcome on the form page
pub async fn generate(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Html<String> {
    let request_id = Uuid::new_v4();
    let span = info_span!("generate", %request_id);

    async move {
        let outcome =
            match generate_post(&form.url, state.transcripts.as_ref(), &state.summarizer).await {
                Ok(generated) if !generated.summary.has_post() => {
                    warn!(video_id = %generated.video_id, "Synthesis returned an empty post");
                    Outcome::Error {
                        detail: None,
                        message: GENERATION_FAILED,
                    }
                }
                Ok(generated) => {
                    info!(
                        video_id = %generated.video_id,
                        words = generated.word_count,
                        chunks = generated.summary.chunk_count,
                        failed_chunks = generated.summary.failed_chunks.len(),
                        "Post generated"
                    );
                    Outcome::Success(generated.summary.post)
                }
                Err(e) => {
                    warn!(error = %e, "Post generation failed");
                    Outcome::from_error(&e)
                }
            };

        Html(render_page(&form.url, Some(&outcome)))
    }
    .instrument(span)
    .await
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
