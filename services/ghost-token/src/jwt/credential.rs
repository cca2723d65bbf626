//! Composite admin credential parsing.
//!
//! An admin API key has the form `<identifier>:<secret-hex>`. The identifier
//! becomes the token's `kid` and the decoded secret is the HMAC key.

use crate::error::TokenError;
use jsonwebtoken::EncodingKey;
use std::fmt;
use zeroize::Zeroizing;

/// Separator between the key identifier and the hex secret.
pub const CREDENTIAL_SEPARATOR: char = ':';

/// A parsed `<identifier>:<secret-hex>` admin credential.
///
/// The decoded secret is wiped from memory when the credential is dropped.
pub struct CompositeCredential {
    key_id: String,
    secret: Zeroizing<Vec<u8>>,
}

impl CompositeCredential {
    /// Split `raw` on its first `:` and hex-decode the secret half.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidKeyEncoding`] when there is no separator,
    /// the secret is empty, or the secret is not valid hex.
    pub fn parse(raw: &str) -> Result<Self, TokenError> {
        let (key_id, secret_hex) = raw.split_once(CREDENTIAL_SEPARATOR).ok_or_else(|| {
            TokenError::InvalidKeyEncoding("credential has no ':' separator".to_string())
        })?;

        if secret_hex.is_empty() {
            return Err(TokenError::InvalidKeyEncoding(
                "credential secret is empty".to_string(),
            ));
        }

        let secret = Zeroizing::new(hex::decode(secret_hex)?);

        Ok(Self {
            key_id: key_id.to_string(),
            secret,
        })
    }

    /// Key identifier, used as the `kid` header.
    #[must_use]
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Decoded secret bytes.
    #[must_use]
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// HMAC encoding key over the decoded secret.
    #[must_use]
    pub fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(&self.secret)
    }
}

impl fmt::Debug for CompositeCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeCredential")
            .field("key_id", &self.key_id)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_credential() {
        let credential = CompositeCredential::parse("abc123:48656c6c6f").unwrap();
        assert_eq!(credential.key_id(), "abc123");
        assert_eq!(credential.secret(), b"Hello");
    }

    #[test]
    fn test_parse_uppercase_hex() {
        let credential = CompositeCredential::parse("id:48656C6C6F").unwrap();
        assert_eq!(credential.secret(), b"Hello");
    }

    #[test]
    fn test_parse_splits_on_first_separator() {
        // The secret keeps everything after the first ':', so it fails hex decoding.
        let err = CompositeCredential::parse("id:abcd:ef").unwrap_err();
        assert!(matches!(err, TokenError::InvalidKeyEncoding(_)));
    }

    #[test]
    fn test_parse_empty_identifier_allowed() {
        let credential = CompositeCredential::parse(":00ff").unwrap();
        assert_eq!(credential.key_id(), "");
        assert_eq!(credential.secret(), &[0x00, 0xff]);
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let err = CompositeCredential::parse("abc12348656c6c6f").unwrap_err();
        assert!(matches!(err, TokenError::InvalidKeyEncoding(_)));
    }

    #[test]
    fn test_parse_rejects_empty_secret() {
        let err = CompositeCredential::parse("abc123:").unwrap_err();
        assert!(matches!(err, TokenError::InvalidKeyEncoding(_)));
    }

    #[test]
    fn test_parse_rejects_odd_length() {
        let err = CompositeCredential::parse("abc123:abc").unwrap_err();
        assert!(matches!(err, TokenError::InvalidKeyEncoding(_)));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let err = CompositeCredential::parse("id:not-hex-zz").unwrap_err();
        assert!(matches!(err, TokenError::InvalidKeyEncoding(_)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credential = CompositeCredential::parse("abc123:48656c6c6f").unwrap();
        let debug = format!("{credential:?}");
        assert!(debug.contains("abc123"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("48656c6c6f"));
    }
}
