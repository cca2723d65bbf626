//! Route handlers.

use crate::api::error::ApiError;
use crate::clock::Clock;
use crate::jwt::{JwtSerializer, TokenIssuer};
use crate::metrics;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Body of `POST /get-token`.
#[derive(Debug, Default, Deserialize)]
pub struct GetTokenRequest {
    /// Composite `<identifier>:<secret-hex>` credential.
    #[serde(default)]
    pub admin_api_key: Option<String>,
    /// Required, not used in the claims.
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of a successful `POST /get-token`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetTokenResponse {
    /// Compact signed token.
    pub token: String,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok`.
    pub status: &'static str,
}

/// `POST /get-token`
///
/// A body that is not a JSON object is treated like an empty one, so it is
/// reported as missing input rather than a parse failure.
pub async fn get_token<C: Clock + 'static>(
    State(issuer): State<Arc<TokenIssuer<C>>>,
    body: Result<Json<GetTokenRequest>, JsonRejection>,
) -> Result<Json<GetTokenResponse>, ApiError> {
    let start = Instant::now();

    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(reason = %rejection, "Unparseable token request body");
            GetTokenRequest::default()
        }
    };

    let result = issuer.issue_now(
        request.admin_api_key.as_deref().unwrap_or_default(),
        request.url.as_deref().unwrap_or_default(),
    );

    metrics::record_http_latency("/get-token", start.elapsed().as_secs_f64());

    match result {
        Ok(token) => {
            metrics::record_token_issued(JwtSerializer::ALGORITHM_NAME);
            info!("Admin token issued");
            Ok(Json(GetTokenResponse { token }))
        }
        Err(err) => {
            metrics::record_issue_failure(err.code());
            Err(err.into())
        }
    }
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// `GET /metrics`
pub async fn metrics_text() -> Result<impl IntoResponse, ApiError> {
    let body = metrics::render()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    ))
}
