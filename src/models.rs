use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ===== Users =====

/// Stored account document.
///
/// Deliberately not `Serialize`: the only outward user shape is
/// [`UserProfile`], so the password digest cannot leak through a response
/// by construction.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Signup payload.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub password: String,
}

/// Outward representation of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

// ===== Trips =====

/// Stored (and outward) trip document. `owner` is the creator's user name,
/// set once in [`Trip::new`] and never touched again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub name: String,
    /// Ordered waypoint entries. Opaque to the server; clients may store
    /// any JSON shape per entry.
    pub waypoints: Vec<Value>,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

/// Create/update payload for a trip.
///
/// There is intentionally no `owner` field here: an `owner` key in a
/// request body is dropped during deserialization, so ownership always
/// comes from the authenticated caller.
#[derive(Debug, Clone, Deserialize)]
pub struct TripPayload {
    pub name: String,
    #[serde(default)]
    pub waypoints: Vec<Value>,
}

impl Trip {
    pub fn new(id: Uuid, payload: TripPayload, owner: &str) -> Self {
        Self {
            id,
            name: payload.name,
            waypoints: payload.waypoints,
            owner: owner.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Copy the mutable fields from an update payload. `id`, `owner`, and
    /// `created_at` are immutable for the document's lifetime.
    pub fn apply(&mut self, payload: TripPayload) {
        self.name = payload.name;
        self.waypoints = payload.waypoints;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn owner_key_in_payload_is_ignored() {
        let payload: TripPayload = serde_json::from_value(json!({
            "name": "coast run",
            "waypoints": ["A", "B"],
            "owner": "mallory"
        }))
        .expect("payload parses");
        let trip = Trip::new(Uuid::new_v4(), payload, "alice");
        assert_eq!(trip.owner, "alice");
    }

    #[test]
    fn apply_updates_only_mutable_fields() {
        let created = Trip::new(
            Uuid::new_v4(),
            TripPayload {
                name: "before".into(),
                waypoints: vec![json!("A")],
            },
            "alice",
        );
        let mut trip = created.clone();
        trip.apply(TripPayload {
            name: "after".into(),
            waypoints: vec![json!("B"), json!("C")],
        });
        assert_eq!(trip.name, "after");
        assert_eq!(trip.waypoints, vec![json!("B"), json!("C")]);
        assert_eq!(trip.id, created.id);
        assert_eq!(trip.owner, "alice");
        assert_eq!(trip.created_at, created.created_at);
    }

    #[test]
    fn user_profile_drops_the_digest() {
        let user = User {
            id: Uuid::new_v4(),
            name: "alice".into(),
            password_hash: "$argon2id$fake".into(),
            created_at: Utc::now(),
        };
        let profile = UserProfile::from(user);
        let body = serde_json::to_value(&profile).expect("serializes");
        assert_eq!(body["name"], "alice");
        assert!(body.get("password").is_none());
        assert!(body.get("password_hash").is_none());
    }
}
