//! Web front-end for tubepost: one form, one URL in, one post out.

pub mod http;

pub use http::{AppState, create_router};
