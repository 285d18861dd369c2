//! bcrypt password hashing and verification.

use fleetgate_core::config::auth::AuthConfig;
use fleetgate_core::error::AppError;

/// Handles password hashing and verification using bcrypt.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    /// bcrypt work factor.
    cost: u32,
}

impl PasswordHasher {
    /// Creates a new password hasher from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Verifies a plaintext password against a stored bcrypt hash.
    ///
    /// A malformed stored hash is treated as a non-match, never an error:
    /// login against a corrupt row fails closed instead of surfacing a 500.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        // Minimum cost keeps the test fast; production cost comes from config.
        PasswordHasher { cost: 4 }
    }

    #[test]
    fn round_trip() {
        let h = hasher();
        let hash = h.hash_password("hunter2").unwrap();
        assert!(h.verify_password("hunter2", &hash));
        assert!(!h.verify_password("hunter3", &hash));
    }

    #[test]
    fn malformed_hash_is_a_non_match() {
        let h = hasher();
        assert!(!h.verify_password("hunter2", "not-a-bcrypt-hash"));
        assert!(!h.verify_password("hunter2", ""));
    }

    #[test]
    fn default_cost_is_twelve() {
        assert_eq!(PasswordHasher::default().cost, 12);
    }
}
