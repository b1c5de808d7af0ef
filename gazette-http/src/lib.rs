//! HTTP surface for the Gazette content-publishing service.
//!
//! Thin axum layer over the [`gazette`] facade: handlers resolve the caller
//! from request headers, delegate to the facade, and serialize the result
//! contexts as JSON. Rendering markup is somebody else's job.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod error;
mod handlers;

pub use auth::{CallerResolver, TokenCallerResolver};

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};

use gazette::Gazette;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Facade serving reads and writes.
    pub gazette: Arc<Gazette>,
    /// Maps request headers to a caller identity.
    pub resolver: Arc<dyn CallerResolver>,
}

/// Build the router with every route wired to `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home_handler))
        .route("/healthz", get(handlers::healthz_handler))
        .route("/news/:id", get(handlers::detail_handler))
        .route("/news/:id/comments", post(handlers::submit_comment_handler))
        .route(
            "/news/:id/comments/:cid",
            put(handlers::edit_comment_handler).delete(handlers::delete_comment_handler),
        )
        .with_state(state)
}
