//! Admin token issuance.
//!
//! Turns a composite admin credential into a five-minute HS256 token whose
//! `kid` is the credential identifier and whose audience is always
//! [`ADMIN_AUDIENCE`](crate::jwt::ADMIN_AUDIENCE).

use crate::clock::{Clock, SystemClock};
use crate::error::TokenError;
use crate::jwt::claims::AdminClaims;
use crate::jwt::credential::CompositeCredential;
use crate::jwt::serializer::JwtSerializer;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Issue a signed admin token for `composite_credential` at `now`.
///
/// `url` must be present but does not influence the claims; the audience is
/// fixed.
///
/// # Errors
///
/// - [`TokenError::MissingInput`] if either input is empty.
/// - [`TokenError::InvalidKeyEncoding`] if the credential has no separator or
///   its secret is not valid hex.
pub fn issue(composite_credential: &str, url: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
    if composite_credential.is_empty() || url.is_empty() {
        return Err(TokenError::MissingInput);
    }

    let credential = CompositeCredential::parse(composite_credential)?;
    let claims = AdminClaims::new(now);
    let token = JwtSerializer::serialize(&claims, &credential.encoding_key(), credential.key_id())?;

    debug!(kid = %credential.key_id(), exp = claims.exp, "Issued admin token");

    Ok(token)
}

/// Stateless issuer bound to a clock. Safe to share across requests.
#[derive(Debug, Clone, Default)]
pub struct TokenIssuer<C = SystemClock> {
    clock: C,
}

impl<C: Clock> TokenIssuer<C> {
    /// Issuer reading `now` from `clock`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Issue a token using the issuer's clock for `now`.
    ///
    /// # Errors
    ///
    /// Same as [`issue`].
    pub fn issue_now(&self, composite_credential: &str, url: &str) -> Result<String, TokenError> {
        issue(composite_credential, url, self.clock.now())
    }
}
