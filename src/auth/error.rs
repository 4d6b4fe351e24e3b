use rocket::http::Status;
use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

/// Failures raised while establishing or checking caller identity.
///
/// Everything credential-shaped collapses to `Unauthorized` at the wire so
/// a prober cannot tell a missing user from a wrong password.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,
    #[error("configuration error: {0}")]
    Config(String),
    #[error("argon2 parameter error: {0}")]
    Argon2(String),
    #[error("password hashing error: {0}")]
    PasswordHash(String),
}

impl AuthError {
    pub fn status(&self) -> Status {
        match self {
            AuthError::Unauthorized => Status::Unauthorized,
            AuthError::Forbidden => Status::Forbidden,
            AuthError::Config(_) | AuthError::Argon2(_) | AuthError::PasswordHash(_) => {
                Status::InternalServerError
            }
        }
    }
}

impl From<argon2::Error> for AuthError {
    fn from(err: argon2::Error) -> Self {
        AuthError::Argon2(err.to_string())
    }
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AuthError::PasswordHash(err.to_string())
    }
}
