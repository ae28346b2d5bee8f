//! HTTP surface of the web front-end
//!
//! - GET /          - The URL form
//! - POST /generate - Generate a post for the submitted URL
//! - GET /health    - Health check

mod handlers;
mod page;
mod routes;
mod state;

pub use page::{Outcome, escape_html, render_page};
pub use routes::create_router;
pub use state::AppState;
