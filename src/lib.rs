#[macro_use]
extern crate rocket;

pub mod auth;
pub mod error;
pub mod models;
pub mod policy;
pub mod request_logger;
pub mod routes;
pub mod store;

use crate::auth::{AuthConfig, AuthState, PasswordService};
use crate::request_logger::RequestLogger;
use crate::store::Store;
use env_logger::Env;
use rocket::http::Method;
use rocket::{Build, Rocket};
use rocket_cors::{AllowedOrigins, CorsOptions};
use std::sync::Once;

static LOGGER: Once = Once::new();

fn init_logger() {
    LOGGER.call_once(|| {
        env_logger::Builder::from_env(
            Env::default().default_filter_or("info,rocket::server=warn,rocket::request=warn"),
        )
        .init();
    });
}

/// Build the Rocket instance: configuration and services are constructed
/// once here and injected as managed state, so handlers never reach for
/// ambient globals. Tests build the exact same instance.
pub fn rocket() -> Rocket<Build> {
    init_logger();

    let auth_config = AuthConfig::from_env().expect("auth configuration");
    let password_service =
        PasswordService::new(&auth_config).expect("argon2 parameters are valid");
    let auth_state = AuthState::new(auth_config, password_service);

    // Configure CORS
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_methods(
            vec![Method::Get, Method::Post, Method::Put, Method::Delete]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allow_credentials(true)
        .to_cors()
        .expect("Error creating CORS");

    rocket::build()
        .attach(RequestLogger)
        .attach(cors)
        .manage(auth_state)
        .manage(Store::new())
        .mount(
            "/api/v1",
            routes![
                routes::health::health_check,
                routes::users::create_user,
                routes::users::get_user,
                routes::trips::create_trip,
                routes::trips::list_trips,
                routes::trips::get_trip,
                routes::trips::update_trip,
                routes::trips::delete_trip,
            ],
        )
}
