//! HTTP error responses.

use crate::error::TokenError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use serde::Serialize;
use tracing::{error, warn};

/// Message returned when the secret half of the credential is unusable.
pub const INVALID_KEY_MESSAGE: &str = "Invalid Admin API Key";

/// Message returned for any server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message returned when a request exceeds the configured timeout.
pub const TIMEOUT_MESSAGE: &str = "Request timed out";

/// Error JSON body: `{ "error": "..." }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Client-visible message.
    pub error: String,
}

/// A [`TokenError`] on its way out of an HTTP handler.
#[derive(Debug)]
pub struct ApiError(pub TokenError);

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code and client-visible message. Internal details are never exposed.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match &self.0 {
            TokenError::MissingInput => (StatusCode::BAD_REQUEST, self.0.to_string()),
            TokenError::InvalidKeyEncoding(_) => {
                (StatusCode::BAD_REQUEST, INVALID_KEY_MESSAGE.to_string())
            }
            TokenError::JwtEncodingError(_)
            | TokenError::JwtDecodingError(_)
            | TokenError::ConfigError(_)
            | TokenError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_client_error() {
            warn!(error_code = self.0.code(), "Rejected token request");
        } else {
            error!(error_code = self.0.code(), error = %self.0, "Token request failed");
        }

        let (status, message) = self.status_and_message();
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Maps failures raised by tower middleware onto the `{ "error": .. }` body.
pub async fn handle_middleware_error(err: BoxError) -> Response {
    let (status, message) = if err.is::<tower::timeout::error::Elapsed>() {
        warn!("Request timed out");
        (StatusCode::REQUEST_TIMEOUT, TIMEOUT_MESSAGE)
    } else {
        error!(error = %err, "Unhandled middleware error");
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    };

    (status, Json(ErrorResponse { error: message.to_string() })).into_response()
}
