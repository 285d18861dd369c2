//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    ///
    /// The default exists for non-production use only; deployments must
    /// override it via `FLEETGATE__AUTH__JWT_SECRET` or the config file.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Session token validity in days. Tokens are not refreshable.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,
    /// bcrypt work factor for password hashing.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl_days(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl_days() -> i64 {
    7
}

fn default_bcrypt_cost() -> u32 {
    12
}
