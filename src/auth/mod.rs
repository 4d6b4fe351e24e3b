//! Authentication module: configuration, password hashing, and the Rocket
//! request guard that proves caller identity on every request.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod guards;
pub mod passwords;

pub use config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use guards::AuthUser;
pub use passwords::PasswordService;

/// Auth context built once at startup and injected as Rocket managed state.
#[derive(Clone)]
pub struct AuthState {
    pub config: AuthConfig,
    pub password_service: Arc<PasswordService>,
}

impl AuthState {
    pub fn new(config: AuthConfig, password_service: PasswordService) -> Self {
        Self {
            config,
            password_service: Arc::new(password_service),
        }
    }
}
