//! Account endpoints.
//!
//! Signup is the one unauthenticated mutation in the API (it is how an
//! identity comes to exist). Reads are restricted to the account owner.

use rocket::State;
use rocket::serde::json::Json;
use rocket::serde::uuid::Uuid;

use crate::auth::{AuthState, AuthUser};
use crate::error::ApiError;
use crate::models::{NewUser, UserProfile};
use crate::policy;
use crate::store::Store;

/// Create an account. Rejects names that are already taken with 409 and
/// responds with the profile only; the password digest never leaves the
/// store.
#[post("/users", data = "<payload>")]
pub fn create_user(
    store: &State<Store>,
    auth: &State<AuthState>,
    payload: Json<NewUser>,
) -> Result<Json<UserProfile>, ApiError> {
    let name = payload.name.trim();
    let password = payload.password.trim();
    if name.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(
            "Name and password are required".to_string(),
        ));
    }

    // Known race: check-then-insert is not atomic, so two concurrent
    // signups for the same name can both pass this check. Closing it needs
    // a uniqueness constraint in the store itself.
    if store.user_name_taken(name) {
        return Err(ApiError::Conflict(format!(
            "User '{}' already exists",
            name
        )));
    }

    let digest = auth.password_service.hash_password(password)?;
    let user = store.create_user(name, digest);
    log::info!("created user '{}'", user.name);

    Ok(Json(UserProfile::from(user)))
}

/// Fetch an account by id. Only the account owner may read it; any other
/// authenticated caller gets 403.
#[get("/users/<id>")]
pub fn get_user(
    caller: AuthUser,
    store: &State<Store>,
    id: Uuid,
) -> Result<Json<UserProfile>, ApiError> {
    let user = store
        .users
        .find_one(id)
        .ok_or_else(|| ApiError::NotFound(format!("User '{}' not found", id)))?;

    policy::assert_self(&user, &caller)?;

    Ok(Json(UserProfile::from(user)))
}
