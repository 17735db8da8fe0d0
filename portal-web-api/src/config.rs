use rocket::figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use rocket::serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const DEFAULT_SECRET_KEY: &str = "your_very_secret_key_fallback";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://students.db?mode=rwc";

/// Application settings. Every key can be overridden by `App.toml` and by
/// the upper-cased environment variable of the same name.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct PortalConfig {
    pub secret_key: String,
    pub database_url: String,
    pub rust_log: String,
    pub web_api_log: String,
    pub recent_leads_limit: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        PortalConfig {
            secret_key: DEFAULT_SECRET_KEY.to_owned(),
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            rust_log: "info".to_owned(),
            web_api_log: "info".to_owned(),
            recent_leads_limit: 10,
        }
    }
}

impl PortalConfig {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(PortalConfig::default()))
            .merge(Toml::file("App.toml"))
            .merge(Env::raw().only(&[
                "secret_key",
                "database_url",
                "rust_log",
                "web_api_log",
                "recent_leads_limit",
            ]))
    }

    pub fn load() -> Result<PortalConfig, rocket::figment::Error> {
        PortalConfig::figment().extract()
    }

    /// Rocket's own figment with the cookie key and the pool url filled in
    /// from this config.
    pub fn rocket_figment(&self) -> Figment {
        rocket::Config::figment()
            .merge(("secret_key", cookie_secret(&self.secret_key)))
            .merge(("databases.sea_orm.url", self.database_url.to_owned()))
            .join(("databases.sea_orm.max_connections", 10))
    }
}

/// Rocket wants a 256-bit key; any configured secret is stretched to one
/// and handed over hex encoded.
pub fn cookie_secret(secret: &str) -> String {
    Sha256::digest(secret.as_bytes())
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}
