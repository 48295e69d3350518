//! Route tables and the assembled application router.

mod catalog;
mod common;
mod openapi;

pub use catalog::{playlist_routes, song_routes};
pub use common::common_routes;
pub use openapi::{openapi_routes, ApiDoc};

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Every route the service exposes, with request tracing and a body size limit.
/// The limit is enforced by the body extractor, so oversized bodies get the JSON error envelope.
pub fn app_router(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(openapi_routes())
        .merge(song_routes(state.clone()))
        .merge(playlist_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit_bytes)),
        )
}
