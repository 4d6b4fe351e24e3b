use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Data, Request, Response};
use std::time::Instant;

/// Fairing that logs one line per HTTP request with status and timing.
pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request Logger",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        request.local_cache(Instant::now);
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let start_time = request.local_cache(Instant::now);
        let duration = start_time.elapsed();

        log::info!(
            "{} {} -> {} ({:.2}ms)",
            request.method(),
            request.uri(),
            response.status().code,
            duration.as_secs_f64() * 1000.0
        );
    }
}
