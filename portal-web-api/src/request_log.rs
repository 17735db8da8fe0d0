use rocket::{
    fairing::{Fairing, Info, Kind},
    Data, Request, Response,
};
use std::time::Instant;
use tracing::info;

pub struct RequestTimer;

#[derive(Clone)]
struct TimerStart(Option<Instant>);

#[rocket::async_trait]
impl Fairing for RequestTimer {
    fn info(&self) -> Info {
        Info {
            name: "Request log",
            kind: Kind::Request | Kind::Response,
        }
    }

    async fn on_request(&self, request: &mut Request<'_>, _: &mut Data<'_>) {
        request.local_cache(|| TimerStart(Some(Instant::now())));
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        if request.uri().path().as_str() == "/health" {
            return;
        }
        let elapsed_ms = match request.local_cache(|| TimerStart(None)).0 {
            Some(start) => start.elapsed().as_millis(),
            None => 0,
        };
        info!(
            "{} {} -> {} ({} ms)",
            request.method(),
            request.uri().path(),
            response.status().code,
            elapsed_ms
        );
    }
}
