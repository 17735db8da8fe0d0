mod catalog;
mod college;
mod config;
mod dto;
mod error;
mod lead;
mod pool;
mod request_log;
mod routes;
mod scoring;
mod session;

#[cfg(test)]
mod routes_tests;
#[cfg(test)]
mod test_support;

use config::PortalConfig;
use dto::{ResponseData, RESPONSE_INTERNAL_ERROR, RESPONSE_NOT_FOUND};
use pool::Db;
use portal_db_migration::{Migrator, MigratorTrait};
use rocket::{
    fairing::{self, AdHoc},
    serde::json::Json,
    Build, Request, Rocket,
};
use sea_orm_rocket::Database;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

#[macro_use]
extern crate rocket;

#[get("/health")]
async fn health_ping() -> &'static str {
    ""
}

#[catch(404)]
async fn not_found(req: &Request<'_>) -> Json<ResponseData<String>> {
    let message = format!("Couldn't find '{}'", req.uri());
    Json(ResponseData::new(RESPONSE_NOT_FOUND, message, None))
}

#[catch(500)]
async fn internal_error() -> Json<ResponseData<String>> {
    Json(ResponseData::new(
        RESPONSE_INTERNAL_ERROR,
        "Whoops! Looks like we messed up.".to_owned(),
        None,
    ))
}

async fn run_migrations(rocket: Rocket<Build>) -> fairing::Result {
    let conn = match Db::fetch(&rocket) {
        Some(db) => &db.conn,
        None => return Err(rocket),
    };
    match Migrator::up(conn, None).await {
        Ok(()) => {
            info!("Database schema is up to date");
            Ok(rocket)
        }
        Err(err) => {
            error!("Failed running migrations: {:?}", err);
            Err(rocket)
        }
    }
}

/// Assembles the service on top of an already prepared figment.
pub fn build(portal_config: PortalConfig, figment: rocket::figment::Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .register("/", catchers![internal_error, not_found])
        .attach(Db::init())
        .attach(AdHoc::try_on_ignite("Migrations", run_migrations))
        .attach(request_log::RequestTimer)
        .manage(portal_config)
        .attach(routes::mount())
        .mount("/", routes![health_ping])
}

#[launch]
async fn rocket() -> _ {
    let portal_config = PortalConfig::load().expect("Invalid portal configuration");
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", &portal_config.rust_log);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                format!("portal_web_api={}", &portal_config.web_api_log)
                    .parse()
                    .expect("Error parsing directive"),
            ),
        )
        .with_span_events(FmtSpan::FULL)
        .init();

    let figment = portal_config.rocket_figment();
    build(portal_config, figment)
}
