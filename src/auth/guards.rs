use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use rocket::Request;
use rocket::State;
use rocket::request::{FromRequest, Outcome};

use crate::auth::{AuthError, AuthResult, AuthState};
use crate::store::Store;

/// The authenticated caller, proven from the `Authorization: Basic` header
/// on this request. There are no sessions or tokens; every request carries
/// and re-proves its credentials.
///
/// Any failure along the way (missing header, wrong scheme, undecodable
/// credentials, unknown user, wrong password) surfaces as the same 401 so
/// responses do not reveal which user names exist.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub name: String,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthUser {
    type Error = AuthError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match extract_user(request).await {
            Ok(user) => Outcome::Success(user),
            Err(err) => Outcome::Error((err.status(), err)),
        }
    }
}

async fn extract_user(request: &Request<'_>) -> AuthResult<AuthUser> {
    let (name, password) = basic_credentials_from_request(request)?;

    let auth_state = request
        .guard::<&State<AuthState>>()
        .await
        .succeeded()
        .ok_or_else(|| AuthError::Config("AuthState missing from state".into()))?;

    let store = request
        .guard::<&State<Store>>()
        .await
        .succeeded()
        .ok_or_else(|| AuthError::Config("document store missing from state".into()))?;

    // Unknown name and wrong password take the same path out.
    let user = store
        .find_user_by_name(&name)
        .ok_or(AuthError::Unauthorized)?;

    if auth_state
        .password_service
        .verify_password(&password, &user.password_hash)?
    {
        Ok(AuthUser { name: user.name })
    } else {
        Err(AuthError::Unauthorized)
    }
}

fn basic_credentials_from_request(request: &Request<'_>) -> AuthResult<(String, String)> {
    let header = request
        .headers()
        .get_one("Authorization")
        .ok_or(AuthError::Unauthorized)?;
    let mut parts = header.splitn(2, ' ');
    let scheme = parts.next().unwrap_or_default();
    let encoded = parts.next().unwrap_or_default();
    if !scheme.eq_ignore_ascii_case("Basic") || encoded.is_empty() {
        return Err(AuthError::Unauthorized);
    }

    let decoded = BASE64
        .decode(encoded)
        .map_err(|_| AuthError::Unauthorized)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::Unauthorized)?;
    let (name, password) = decoded.split_once(':').ok_or(AuthError::Unauthorized)?;
    if name.is_empty() {
        return Err(AuthError::Unauthorized);
    }

    Ok((name.to_string(), password.to_string()))
}
