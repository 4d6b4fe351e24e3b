//! In-process document store.
//!
//! The handlers only ever see the narrow collection surface below: insert
//! with a store-generated id, find by id, filtered find, replace, and
//! delete returning the number of removed documents. Consistency is
//! per-document only (one `DashMap` entry at a time); any check-then-act
//! sequence spanning two calls can race and is documented at its call
//! site rather than papered over here.

use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::{Trip, User};

/// A single keyed collection of documents.
pub struct Collection<T> {
    docs: DashMap<Uuid, T>,
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self {
            docs: DashMap::new(),
        }
    }

    /// Insert a new document, generating its id. The builder receives the
    /// assigned id so the stored document can carry it.
    pub fn insert_with(&self, build: impl FnOnce(Uuid) -> T) -> T {
        let id = Uuid::new_v4();
        let doc = build(id);
        self.docs.insert(id, doc.clone());
        doc
    }

    pub fn find_one(&self, id: Uuid) -> Option<T> {
        self.docs.get(&id).map(|entry| entry.value().clone())
    }

    /// All documents matching the predicate. Iteration order is
    /// unspecified.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
        self.docs
            .iter()
            .filter(|entry| pred(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Replace an existing document. Returns false when the document is
    /// already gone, in which case nothing is written.
    pub fn replace(&self, id: Uuid, doc: T) -> bool {
        match self.docs.get_mut(&id) {
            Some(mut entry) => {
                *entry = doc;
                true
            }
            None => false,
        }
    }

    /// Remove a document, returning how many were removed (0 or 1).
    pub fn delete(&self, id: Uuid) -> usize {
        usize::from(self.docs.remove(&id).is_some())
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The two collections backing the API, shared as Rocket managed state.
pub struct Store {
    pub users: Collection<User>,
    pub trips: Collection<Trip>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            users: Collection::new(),
            trips: Collection::new(),
        }
    }

    // User-scoped helpers: lookups are by login name, which is the unique
    // handle the rest of the system keys ownership on.

    pub fn find_user_by_name(&self, name: &str) -> Option<User> {
        self.users
            .find(|user| user.name == name)
            .into_iter()
            .next()
    }

    pub fn user_name_taken(&self, name: &str) -> bool {
        self.find_user_by_name(name).is_some()
    }

    pub fn create_user(&self, name: &str, password_hash: String) -> User {
        self.users.insert_with(|id| User {
            id,
            name: name.to_string(),
            password_hash,
            created_at: Utc::now(),
        })
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Trip, TripPayload};
    use serde_json::json;

    #[test]
    fn insert_assigns_an_id_and_find_one_round_trips() {
        let store = Store::new();
        let trip = store.trips.insert_with(|id| {
            Trip::new(
                id,
                TripPayload {
                    name: "trip".into(),
                    waypoints: vec![json!({"name": "place"})],
                },
                "alice",
            )
        });
        let found = store.trips.find_one(trip.id).expect("stored");
        assert_eq!(found.id, trip.id);
        assert_eq!(found.name, "trip");
    }

    #[test]
    fn delete_reports_a_value_equal_count() {
        let store = Store::new();
        let trip = store.trips.insert_with(|id| {
            Trip::new(
                id,
                TripPayload {
                    name: "trip".into(),
                    waypoints: vec![],
                },
                "alice",
            )
        });
        assert_eq!(store.trips.delete(trip.id), 1);
        assert_eq!(store.trips.delete(trip.id), 0);
        assert!(store.trips.find_one(trip.id).is_none());
    }

    #[test]
    fn replace_skips_missing_documents() {
        let store = Store::new();
        let ghost = Trip::new(
            Uuid::new_v4(),
            TripPayload {
                name: "ghost".into(),
                waypoints: vec![],
            },
            "alice",
        );
        assert!(!store.trips.replace(ghost.id, ghost.clone()));
        assert!(store.trips.find_one(ghost.id).is_none());
    }

    #[test]
    fn user_lookups_are_scoped_by_name() {
        let store = Store::new();
        store.create_user("alice", "digest-a".into());
        store.create_user("bob", "digest-b".into());
        assert!(store.user_name_taken("alice"));
        assert!(!store.user_name_taken("carol"));
        let alice = store.find_user_by_name("alice").expect("present");
        assert_eq!(alice.password_hash, "digest-a");
    }
}
