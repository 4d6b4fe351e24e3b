//! Shared helpers for integration tests: a fresh Rocket instance per test
//! (each gets its own in-process store) and Basic-auth plumbing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;
use serde_json::{Value, json};

pub fn client() -> Client {
    Client::tracked(trips_api::rocket()).expect("valid rocket instance")
}

pub fn basic_auth(name: &str, password: &str) -> Header<'static> {
    let encoded = BASE64.encode(format!("{name}:{password}"));
    Header::new("Authorization", format!("Basic {encoded}"))
}

/// Create a user and return its response body.
pub fn signup(client: &Client, name: &str, password: &str) -> Value {
    let response = client
        .post("/api/v1/users")
        .header(ContentType::JSON)
        .body(json!({ "name": name, "password": password }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    response.into_json().expect("json body")
}

/// Create a trip as the given user and return its response body.
pub fn create_trip(client: &Client, name: &str, password: &str, body: Value) -> Value {
    let response = client
        .post("/api/v1/trips")
        .header(ContentType::JSON)
        .header(basic_auth(name, password))
        .body(body.to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    response.into_json().expect("json body")
}
