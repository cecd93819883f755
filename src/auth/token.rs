//! Token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with the shared `JWT_SECRET` and carry a
//! fixed lifetime. Claims hold the subject id and role only.

use std::fmt;

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (user or rider id).
    pub id: String,
    /// Subject role (e.g. `"user"`, `"rider"`).
    pub rol: String,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: u64,
}

/// Signing and verification keys plus the token lifetime.
///
/// Built once at startup from [`crate::config::GatewayConfig`] and shared
/// through [`crate::app_state::AppState`].
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_secs: u64,
}

impl fmt::Debug for AuthKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthKeys")
            .field("expiry_secs", &self.expiry_secs)
            .finish_non_exhaustive()
    }
}

impl AuthKeys {
    /// Creates keys from the shared secret.
    #[must_use]
    pub fn new(secret: &str, expiry_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_secs,
        }
    }

    /// Issues a signed token for the given subject and role.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if encoding fails.
    pub fn issue_token(&self, subject: &str, role: &str) -> Result<String, GatewayError> {
        #[allow(clippy::cast_sign_loss)]
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        let claims = Claims {
            id: subject.to_string(),
            rol: role.to_string(),
            exp: now.saturating_add(self.expiry_secs),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| GatewayError::Internal(format!("token encoding failed: {e}")))
    }

    /// Verifies a token signature and expiry, returning the claims.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unauthorized`] if the token is malformed,
    /// carries a bad signature, or is expired.
    pub fn verify_token(&self, token: &str) -> Result<Claims, GatewayError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| GatewayError::Unauthorized(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_round_trips_claims() {
        let keys = AuthKeys::new("test-secret", 3_600);
        let Ok(token) = keys.issue_token("kurye-42", "rider") else {
            panic!("issuing failed");
        };

        let Ok(claims) = keys.verify_token(&token) else {
            panic!("verification failed");
        };
        assert_eq!(claims.id, "kurye-42");
        assert_eq!(claims.rol, "rider");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let keys = AuthKeys::new("test-secret", 3_600);
        let other = AuthKeys::new("baska-secret", 3_600);

        let Ok(token) = keys.issue_token("kurye-42", "rider") else {
            panic!("issuing failed");
        };
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = AuthKeys::new("test-secret", 3_600);
        // Hand-encode claims that expired long ago.
        let claims = Claims {
            id: "kurye-42".to_string(),
            rol: "rider".to_string(),
            exp: 1,
        };
        let Ok(token) = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        ) else {
            panic!("encoding failed");
        };

        let result = keys.verify_token(&token);
        let Err(GatewayError::Unauthorized(_)) = result else {
            panic!("expected an unauthorized error");
        };
    }

    #[test]
    fn garbage_token_is_rejected() {
        let keys = AuthKeys::new("test-secret", 3_600);
        assert!(keys.verify_token("degil.bir.jwt").is_err());
    }
}
