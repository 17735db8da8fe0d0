use async_trait::async_trait;
use rocket::serde::Deserialize;
use sea_orm::ConnectOptions;
use sea_orm_rocket::{rocket::figment::Figment, Database};
use std::time::Duration;

#[derive(Database, Debug)]
#[database("sea_orm")]
pub struct Db(SeaOrmPool);

#[derive(Debug, Clone)]
pub struct SeaOrmPool {
    pub conn: sea_orm::DatabaseConnection,
}

/// Settings read from the `databases.sea_orm` table of the Rocket figment.
#[derive(Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
struct PoolConfig {
    url: String,
    max_connections: u32,
    min_connections: Option<u32>,
    connect_timeout: Option<u64>,
    idle_timeout: Option<u64>,
    max_lifetime: Option<u64>,
    sqlx_logging: Option<bool>,
    sqlx_logging_level: Option<String>,
}

#[async_trait]
impl sea_orm_rocket::Pool for SeaOrmPool {
    type Error = sea_orm::DbErr;

    type Connection = sea_orm::DatabaseConnection;

    async fn init(figment: &Figment) -> Result<Self, Self::Error> {
        let config = figment
            .extract::<PoolConfig>()
            .map_err(|error| sea_orm::DbErr::Custom(error.to_string()))?;
        let mut options: ConnectOptions = config.url.into();
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections.unwrap_or(1))
            .connect_timeout(Duration::from_secs(config.connect_timeout.unwrap_or(8)))
            .idle_timeout(Duration::from_secs(config.idle_timeout.unwrap_or(600)))
            .max_lifetime(Duration::from_secs(config.max_lifetime.unwrap_or(1800)))
            .sqlx_logging(config.sqlx_logging.unwrap_or(false))
            .sqlx_logging_level(
                match config
                    .sqlx_logging_level
                    .as_deref()
                    .unwrap_or("info")
                    .parse::<log::LevelFilter>()
                {
                    Ok(level) => level,
                    Err(_) => log::LevelFilter::Info,
                },
            );

        let conn = sea_orm::Database::connect(options).await?;

        Ok(SeaOrmPool { conn })
    }

    fn borrow(&self) -> &Self::Connection {
        &self.conn
    }
}
