//! Trip endpoints. All of them require authentication, and every
//! id-addressed operation resolves the document before deciding anything:
//! missing is 404, present-but-not-yours is 403, in that order.

use rocket::State;
use rocket::response::status::NoContent;
use rocket::serde::json::Json;
use rocket::serde::uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::{Trip, TripPayload};
use crate::policy::Owned;
use crate::store::Store;

/// Create a trip owned by the caller. Whatever `owner` the payload may
/// claim is discarded; ownership comes from the verified credentials.
#[post("/trips", data = "<payload>")]
pub fn create_trip(
    caller: AuthUser,
    store: &State<Store>,
    payload: Json<TripPayload>,
) -> Result<Json<Trip>, ApiError> {
    let trip = store
        .trips
        .insert_with(|id| Trip::new(id, payload.into_inner(), &caller.name));
    log::info!("user '{}' created trip {}", caller.name, trip.id);
    Ok(Json(trip))
}

/// List the caller's trips. There is no global listing.
#[get("/trips")]
pub fn list_trips(caller: AuthUser, store: &State<Store>) -> Json<Vec<Trip>> {
    Json(store.trips.find(|trip| trip.is_owned_by(&caller)))
}

#[get("/trips/<id>")]
pub fn get_trip(
    caller: AuthUser,
    store: &State<Store>,
    id: Uuid,
) -> Result<Json<Trip>, ApiError> {
    let trip = resolve_owned(store, id, &caller)?;
    Ok(Json(trip))
}

/// Replace the mutable fields of a trip. `owner` survives any payload.
///
/// The read and the write are two store calls; a delete landing between
/// them turns this into a lost update, which is tolerated: the merged
/// document is returned either way and nothing is resurrected.
#[put("/trips/<id>", data = "<payload>")]
pub fn update_trip(
    caller: AuthUser,
    store: &State<Store>,
    id: Uuid,
    payload: Json<TripPayload>,
) -> Result<Json<Trip>, ApiError> {
    let mut trip = resolve_owned(store, id, &caller)?;
    trip.apply(payload.into_inner());
    if !store.trips.replace(id, trip.clone()) {
        log::debug!("trip {} deleted mid-update; returning merged document", id);
    }
    Ok(Json(trip))
}

#[delete("/trips/<id>")]
pub fn delete_trip(
    caller: AuthUser,
    store: &State<Store>,
    id: Uuid,
) -> Result<NoContent, ApiError> {
    let trip = resolve_owned(store, id, &caller)?;
    let deleted = store.trips.delete(trip.id);
    // Value equality on the count; a racing delete may have gotten here
    // first, in which case the document is genuinely gone.
    if deleted == 1 {
        log::info!("user '{}' deleted trip {}", caller.name, id);
        Ok(NoContent)
    } else {
        Err(ApiError::NotFound(format!("Trip '{}' not found", id)))
    }
}

/// Shared resolution for id-addressed operations: 404 before 403, never
/// collapsed into each other.
fn resolve_owned(store: &State<Store>, id: Uuid, caller: &AuthUser) -> Result<Trip, ApiError> {
    let trip = store
        .trips
        .find_one(id)
        .ok_or_else(|| ApiError::NotFound(format!("Trip '{}' not found", id)))?;
    trip.check_owner(caller)?;
    Ok(trip)
}
