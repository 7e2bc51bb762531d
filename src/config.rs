//! Runtime configuration, sourced from the environment (plus `.env` via dotenvy).

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite connection string, e.g. `sqlite:certdesk.sqlite`.
    pub database_url: String,
    /// HTTP listening port.
    pub port: u16,
    /// Key material for the private session cookie. Any non-empty string;
    /// it is stretched with SHA-512 before use.
    pub session_secret: String,
    /// Idle lifetime of a server-side session, in hours.
    pub session_ttl_hours: i64,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:certdesk.sqlite".to_string(),
            port: 8132,
            session_secret: "change-me".to_string(),
            session_ttl_hours: 24,
            loglevel: "info".to_string(),
        }
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(
            Env::raw()
                .only(&[
                    "DATABASE_URL",
                    "PORT",
                    "SESSION_SECRET",
                    "SESSION_TTL_HOURS",
                    "LOGLEVEL",
                ])
                .map(|key| key.as_str().to_ascii_lowercase().into()),
        )
        .extract()
        .expect("invalid environment configuration")
});
