//! Error types for the token issuer and its HTTP surface.

use thiserror::Error;

/// Errors produced while issuing admin tokens or starting the service.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The composite credential or the url was absent or empty.
    #[error("Missing admin_api_key or url")]
    MissingInput,

    /// The secret half of the composite credential is not decodable hex.
    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    /// JWT encoding error.
    #[error("JWT encoding error: {0}")]
    JwtEncodingError(String),

    /// JWT decoding error.
    #[error("JWT decoding error: {0}")]
    JwtDecodingError(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TokenError {
    /// Build a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Build an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the caller caused the failure and must resupply input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingInput | Self::InvalidKeyEncoding(_))
    }

    /// Stable code used in logs and metric labels.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingInput => TOKEN_MISSING_INPUT,
            Self::InvalidKeyEncoding(_) => TOKEN_INVALID_KEY_ENCODING,
            Self::JwtEncodingError(_) => TOKEN_ENCODING_ERROR,
            Self::JwtDecodingError(_) => TOKEN_DECODING_ERROR,
            Self::ConfigError(_) => TOKEN_CONFIG_ERROR,
            Self::Internal(_) => TOKEN_INTERNAL_ERROR,
        }
    }
}

impl From<hex::FromHexError> for TokenError {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidKeyEncoding(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::JwtEncodingError(err.to_string())
    }
}

// Error codes for logs and metrics
/// Code for [`TokenError::MissingInput`].
pub const TOKEN_MISSING_INPUT: &str = "TOKEN_MISSING_INPUT";
/// Code for [`TokenError::InvalidKeyEncoding`].
pub const TOKEN_INVALID_KEY_ENCODING: &str = "TOKEN_INVALID_KEY_ENCODING";
/// Code for [`TokenError::JwtEncodingError`].
pub const TOKEN_ENCODING_ERROR: &str = "TOKEN_ENCODING_ERROR";
/// Code for [`TokenError::JwtDecodingError`].
pub const TOKEN_DECODING_ERROR: &str = "TOKEN_DECODING_ERROR";
/// Code for [`TokenError::ConfigError`].
pub const TOKEN_CONFIG_ERROR: &str = "TOKEN_CONFIG_ERROR";
/// Code for [`TokenError::Internal`].
pub const TOKEN_INTERNAL_ERROR: &str = "TOKEN_INTERNAL_ERROR";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(TokenError::MissingInput.is_client_error());
        assert!(TokenError::InvalidKeyEncoding("odd".to_string()).is_client_error());
        assert!(!TokenError::JwtEncodingError("boom".to_string()).is_client_error());
        assert!(!TokenError::config("bad port").is_client_error());
        assert!(!TokenError::internal("registry").is_client_error());
    }

    #[test]
    fn test_missing_input_message() {
        assert_eq!(
            TokenError::MissingInput.to_string(),
            "Missing admin_api_key or url"
        );
    }

    #[test]
    fn test_hex_error_maps_to_invalid_key_encoding() {
        let err: TokenError = hex::decode("abc").unwrap_err().into();
        assert_eq!(err.code(), TOKEN_INVALID_KEY_ENCODING);
    }
}
