use argon2::{
    Algorithm, Argon2, ParamsBuilder, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::RngCore;

use crate::auth::{AuthConfig, AuthError, AuthResult};

const SALT_LEN: usize = 16;

/// One-way salted password hashing (argon2id).
///
/// Digests are PHC strings, so the salt and parameters travel inside the
/// digest itself and verification needs no side channel. Plaintext is never
/// stored anywhere.
#[derive(Clone)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        let mut builder = ParamsBuilder::new();
        builder.m_cost(config.hash_memory_kib);
        builder.t_cost(config.hash_iterations);
        builder.p_cost(config.hash_parallelism);
        let params = builder.build().map_err(AuthError::from)?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        Ok(Self { argon2 })
    }

    /// Hash a plaintext under a freshly generated random salt.
    pub fn hash_password(&self, password: &str) -> AuthResult<String> {
        let mut salt_bytes = [0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes).map_err(AuthError::from)?;
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(AuthError::from)?
            .to_string();
        Ok(hash)
    }

    /// Recompute the digest under the stored digest's own salt and compare.
    pub fn verify_password(&self, password: &str, encoded: &str) -> AuthResult<bool> {
        let parsed = PasswordHash::new(encoded)?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(AuthError::from(err)),
        }
    }
}
