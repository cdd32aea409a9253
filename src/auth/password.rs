use argon2::{
    password_hash::{PasswordHasher as _, SaltString},
    Argon2,
};
use tracing::error;

use crate::error::{ServiceError, ServiceResult};

/// Turns a plaintext password into the value stored in `users.password`.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> ServiceResult<String>;
}

/// Argon2id with a fixed, configured salt.
///
/// The output must be deterministic: sign-in looks users up by `(email, hash)`.
pub struct Argon2Hasher {
    salt: SaltString,
}

impl Argon2Hasher {
    pub fn new(salt: &str) -> anyhow::Result<Self> {
        let salt = SaltString::encode_b64(salt.as_bytes())
            .map_err(|e| anyhow::anyhow!("invalid password salt: {e}"))?;
        Ok(Self { salt })
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> ServiceResult<String> {
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &self.salt)
            .map_err(|e| {
                error!(error = %e, "argon2 hash_password error");
                ServiceError::Hash(e.to_string())
            })?
            .to_string();
        Ok(hash)
    }
}
