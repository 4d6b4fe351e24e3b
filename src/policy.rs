//! Single-owner authorization rules.
//!
//! Every trip has exactly one owner, bound at creation from the
//! authenticated caller and immutable afterwards. Resolution order is
//! fixed: a missing resource is `NotFound`; an existing resource with a
//! different owner is `Forbidden`. The two are never collapsed.

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::models::{Trip, User};

/// Resources with a single owning user, identified by login name.
pub trait Owned {
    fn owner(&self) -> &str;

    fn is_owned_by(&self, caller: &AuthUser) -> bool {
        self.owner() == caller.name
    }

    /// Reject the caller unless they own this resource.
    fn check_owner(&self, caller: &AuthUser) -> Result<(), ApiError> {
        if self.is_owned_by(caller) {
            Ok(())
        } else {
            Err(ApiError::Forbidden)
        }
    }
}

impl Owned for Trip {
    fn owner(&self) -> &str {
        &self.owner
    }
}

/// Users may only read their own account. There is no cross-user
/// visibility and no role hierarchy.
pub fn assert_self(target: &User, caller: &AuthUser) -> Result<(), ApiError> {
    if target.name == caller.name {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TripPayload;
    use chrono::Utc;
    use uuid::Uuid;

    fn caller(name: &str) -> AuthUser {
        AuthUser {
            name: name.to_string(),
        }
    }

    fn trip_owned_by(owner: &str) -> Trip {
        Trip::new(
            Uuid::new_v4(),
            TripPayload {
                name: "trip".into(),
                waypoints: vec![],
            },
            owner,
        )
    }

    #[test]
    fn owner_passes_the_check() {
        let trip = trip_owned_by("alice");
        assert!(trip.check_owner(&caller("alice")).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let trip = trip_owned_by("alice");
        let err = trip.check_owner(&caller("bob")).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));
    }

    #[test]
    fn self_read_rule() {
        let user = User {
            id: Uuid::new_v4(),
            name: "alice".into(),
            password_hash: "digest".into(),
            created_at: Utc::now(),
        };
        assert!(assert_self(&user, &caller("alice")).is_ok());
        assert!(matches!(
            assert_self(&user, &caller("bob")),
            Err(ApiError::Forbidden)
        ));
    }
}
