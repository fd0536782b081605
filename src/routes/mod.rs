//! Router assembly: list routes, common routes, CORS, body limit, and request tracing.

mod common;
mod lists;

pub use common::common_routes_with_ready;
pub use lists::list_routes;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Largest accepted request body. Enforced while the body is buffered, so an oversize body
/// surfaces as a JSON rejection with the usual `{"error"}` shape.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Open to all origins for GET/POST/PUT/DELETE/OPTIONS with Content-Type and Authorization.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// The full HTTP surface.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(list_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer())
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
}
