//! Bearer-token authentication: signing keys, claims, and the request
//! extractor used by protected routes.

pub mod extract;
pub mod token;

pub use extract::AuthClaims;
pub use token::{AuthKeys, Claims};
