use crate::auth::AuthResult;

/// Password-hashing work factor, loaded from environment variables once at
/// startup and injected into the service. Defaults follow the OWASP
/// argon2id baseline.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub hash_memory_kib: u32,
    pub hash_iterations: u32,
    pub hash_parallelism: u32,
}

impl AuthConfig {
    pub fn from_env() -> AuthResult<Self> {
        let hash_memory_kib = std::env::var("TRIPS_HASH_MEMORY_KIB")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(19 * 1024);
        let hash_iterations = std::env::var("TRIPS_HASH_ITERATIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(2);
        let hash_parallelism = std::env::var("TRIPS_HASH_PARALLELISM")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1);

        Ok(Self {
            hash_memory_kib,
            hash_iterations,
            hash_parallelism,
        })
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            hash_memory_kib: 19 * 1024,
            hash_iterations: 2,
            hash_parallelism: 1,
        }
    }
}
