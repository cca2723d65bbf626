//! HTTP surface: a thin wrapper that hands two strings to the issuer.

pub mod error;
pub mod handlers;

use crate::clock::Clock;
use crate::jwt::TokenIssuer;
use axum::{
    error_handling::HandleErrorLayer,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ErrorResponse};
pub use handlers::{GetTokenRequest, GetTokenResponse};

/// Build the service router.
pub fn create_router<C: Clock + 'static>(
    issuer: Arc<TokenIssuer<C>>,
    request_timeout: Duration,
) -> Router {
    let router = Router::new()
        .route("/get-token", post(handlers::get_token::<C>))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics_text))
        .layer(TraceLayer::new_for_http());

    with_request_timeout(router, request_timeout).with_state(issuer)
}

/// Abort requests running longer than `request_timeout` with a JSON 408.
pub fn with_request_timeout<S>(router: Router<S>, request_timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(error::handle_middleware_error))
            .layer(TimeoutLayer::new(request_timeout)),
    )
}
