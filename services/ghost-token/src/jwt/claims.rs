//! Claim set of an admin token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audience embedded in every admin token.
pub const ADMIN_AUDIENCE: &str = "/v5/admin/";

/// Fixed lifetime of an admin token (5 minutes).
pub const TOKEN_TTL_SECONDS: i64 = 300;

/// Claim set carried by an admin token.
///
/// Field order is the serialized order: `exp` then `aud`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminClaims {
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Always [`ADMIN_AUDIENCE`].
    pub aud: String,
}

impl AdminClaims {
    /// Claims for a token signed at `now`. Sub-second precision is floored.
    pub fn new(now: DateTime<Utc>) -> Self {
        AdminClaims {
            exp: now.timestamp() + TOKEN_TTL_SECONDS,
            aud: ADMIN_AUDIENCE.to_string(),
        }
    }
}
