use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "sqlite://students.db?mode=rwc".to_owned(),
            rust_log: "warn".to_owned(),
        }
    }
}

/// Same sources as the web service: defaults, `App.toml`, then environment.
pub fn load() -> Result<Config, figment::Error> {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file("App.toml"))
        .merge(Env::raw().only(&["database_url", "rust_log"]))
        .extract()
}

pub async fn get_db_connection(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.database_url.to_owned());
    options
        .max_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);
    Database::connect(options).await
}
