#[macro_use]
extern crate rocket;

#[launch]
fn rocket() -> _ {
    let rocket = trips_api::rocket();
    log::info!("Starting trips API server");
    rocket
}
