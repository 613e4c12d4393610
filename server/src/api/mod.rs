//! API route modules
//!
//! - [`reservations`] - reservation intake and review endpoints
//! - [`health`] - health check (public)

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod health;
pub mod reservations;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(reservations::router())
        .merge(health::router())
}

/// Build the fully configured application: routes plus middleware.
///
/// Used by both the HTTP server and the integration tests.
pub fn build_app(_state: &ServerState) -> Router<ServerState> {
    build_router()
        // CORS - the intake form and dashboard are served elsewhere
        .layer(CorsLayer::permissive())
        // Gzip compress responses
        .layer(CompressionLayer::new())
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Unique ID per request, propagated to the response
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
}
