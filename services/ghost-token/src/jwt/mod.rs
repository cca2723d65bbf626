//! Admin token construction: credential parsing, claims, signing.

pub mod claims;
pub mod credential;
pub mod issuer;
pub mod serializer;

pub use claims::{AdminClaims, ADMIN_AUDIENCE, TOKEN_TTL_SECONDS};
pub use credential::CompositeCredential;
pub use issuer::{issue, TokenIssuer};
pub use serializer::JwtSerializer;
