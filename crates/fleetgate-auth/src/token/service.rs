//! Session token issuance and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use fleetgate_core::config::auth::AuthConfig;
use fleetgate_core::error::AppError;
use fleetgate_entity::user::User;

use super::claims::SessionClaims;

/// Result of a successful token issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The signed session token.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies stateless HS256 session tokens.
///
/// Pure over the token bytes and the server secret: verification performs
/// no I/O and never suspends.
#[derive(Clone)]
pub struct TokenService {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Token lifetime in days.
    ttl_days: i64,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_days", &self.ttl_days)
            .finish()
    }
}

impl TokenService {
    /// Creates a new token service from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl_days: config.token_ttl_days,
        }
    }

    /// Issue a session token for the given user, valid for the configured
    /// lifetime (7 days by default, not renewable).
    pub fn issue(&self, user: &User) -> Result<IssuedToken, AppError> {
        let claims = SessionClaims::for_user(user, Duration::days(self.ttl_days));
        let token = self.sign(&claims)?;
        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Verify a token and return its claims.
    ///
    /// Malformed, wrongly signed, and expired tokens all collapse into
    /// `None`: callers cannot distinguish the failure modes, which keeps
    /// the error surface at exactly one "invalid token" class.
    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .ok()
    }

    /// Sign arbitrary claims. Issuance goes through [`Self::issue`]; this
    /// exists so tests can craft tokens with chosen timestamps.
    fn sign(&self, claims: &SessionClaims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::user_with_role;

    fn service() -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        })
    }

    #[test]
    fn round_trip_preserves_claims() {
        let svc = service();
        let user = user_with_role("Subsidiary", Some("10"));
        let issued = svc.issue(&user).unwrap();

        let claims = svc.verify(&issued.token).expect("token should verify");
        assert_eq!(claims.id, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, "Subsidiary");
        assert_eq!(claims.spcode.as_deref(), Some("10"));
    }

    #[test]
    fn seven_day_expiry_is_stamped() {
        let svc = service();
        let user = user_with_role("company", Some("5"));
        let issued = svc.issue(&user).unwrap();
        let claims = svc.verify(&issued.token).unwrap();
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
    }

    #[test]
    fn expired_token_verifies_to_none() {
        let svc = service();
        let user = user_with_role("company", Some("5"));
        let mut claims = SessionClaims::for_user(&user, Duration::days(7));
        claims.iat -= 8 * 24 * 3600;
        claims.exp -= 8 * 24 * 3600;
        let token = svc.sign(&claims).unwrap();
        assert!(svc.verify(&token).is_none());
    }

    #[test]
    fn malformed_and_tampered_tokens_verify_to_none() {
        let svc = service();
        assert!(svc.verify("not-a-jwt").is_none());
        assert!(svc.verify("").is_none());

        let other = TokenService::new(&AuthConfig {
            jwt_secret: "different-secret".to_string(),
            ..AuthConfig::default()
        });
        let user = user_with_role("admin", None);
        let issued = other.issue(&user).unwrap();
        assert!(svc.verify(&issued.token).is_none());
    }
}
