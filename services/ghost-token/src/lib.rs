//! Ghost Token Service library.
//!
//! Issues five-minute HS256 admin tokens from composite
//! `<identifier>:<secret-hex>` admin API keys, and exposes the issuer over
//! a small HTTP API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod jwt;
pub mod metrics;
pub mod observability;
pub mod shutdown;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::TokenError;
pub use jwt::{issue, TokenIssuer};
