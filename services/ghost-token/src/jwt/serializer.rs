//! Compact JWS encoding.

use crate::error::TokenError;
use crate::jwt::claims::AdminClaims;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{decode_header, encode, Algorithm, EncodingKey, Header};

/// Compact HS256 serialization for admin tokens.
pub struct JwtSerializer;

impl JwtSerializer {
    /// Signing algorithm for every admin token.
    pub const ALGORITHM: Algorithm = Algorithm::HS256;
    /// `alg` header value, used as a metric label.
    pub const ALGORITHM_NAME: &'static str = "HS256";

    /// Header carrying only `alg` and `kid`.
    pub fn header(key_id: &str) -> Header {
        let mut header = Header::new(Self::ALGORITHM);
        header.typ = None;
        header.kid = Some(key_id.to_string());
        header
    }

    /// Sign `claims` into a compact token with `key_id` as the `kid`.
    pub fn serialize(claims: &AdminClaims, key: &EncodingKey, key_id: &str) -> Result<String, TokenError> {
        Ok(encode(&Self::header(key_id), claims, key)?)
    }

    /// Decode header and claims without checking the signature.
    ///
    /// For diagnostics and tests only; this service never verifies tokens.
    pub fn deserialize_unverified(token: &str) -> Result<(Header, AdminClaims), TokenError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(TokenError::JwtDecodingError("Invalid token format".to_string()));
        }

        let header = decode_header(token).map_err(|e| TokenError::JwtDecodingError(e.to_string()))?;

        let payload = URL_SAFE_NO_PAD
            .decode(parts[1])
            .map_err(|e| TokenError::JwtDecodingError(e.to_string()))?;

        let claims = serde_json::from_slice(&payload)
            .map_err(|e| TokenError::JwtDecodingError(e.to_string()))?;

        Ok((header, claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use jsonwebtoken::{decode, DecodingKey, Validation};

    fn claims_at(secs: i64) -> AdminClaims {
        AdminClaims::new(Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn test_header_has_no_typ() {
        let header = JwtSerializer::header("key-1");
        let json = serde_json::to_string(&header).unwrap();
        assert_eq!(json, r#"{"alg":"HS256","kid":"key-1"}"#);
    }

    #[test]
    fn test_serialize_verifies_with_standard_validation() {
        let secret = b"test-secret-key-for-testing-only";
        let claims = AdminClaims::new(Utc::now());

        let token = JwtSerializer::serialize(&claims, &EncodingKey::from_secret(secret), "key-1").unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&["/v5/admin/"]);
        let data = decode::<AdminClaims>(&token, &DecodingKey::from_secret(secret), &validation).unwrap();

        assert_eq!(data.claims, claims);
        assert_eq!(data.header.kid.as_deref(), Some("key-1"));
    }

    #[test]
    fn test_serialize_key_family_mismatch_is_encoding_error() {
        let claims = claims_at(1_700_000_000);
        let rsa_key = EncodingKey::from_rsa_der(b"not-an-hmac-key");

        let err = JwtSerializer::serialize(&claims, &rsa_key, "abc").unwrap_err();
        assert!(matches!(err, TokenError::JwtEncodingError(_)));
    }

    #[test]
    fn test_deserialize_unverified() {
        let claims = claims_at(1_700_000_000);
        let token = JwtSerializer::serialize(&claims, &EncodingKey::from_secret(b"k"), "abc").unwrap();

        let (header, decoded) = JwtSerializer::deserialize_unverified(&token).unwrap();
        assert_eq!(header.alg, Algorithm::HS256);
        assert_eq!(header.kid.as_deref(), Some("abc"));
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_deserialize_unverified_rejects_malformed() {
        assert!(JwtSerializer::deserialize_unverified("only.two").is_err());
        assert!(JwtSerializer::deserialize_unverified("a.b.c").is_err());
    }
}
