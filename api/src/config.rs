use std::env;

use anyhow::{bail, Context};

/// Which repository implementation the server runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" | "in-memory" => Ok(StoreKind::Memory),
            _ => Err(format!("Unknown webinar store: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreKind,
    /// Required when `store` is `Postgres`
    pub database_url: Option<String>,
    pub port: u16,
    /// Principal used for requests without an `X-User-Id` header
    pub default_user_id: String,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let store = match env::var("WEBINAR_STORE") {
            Ok(value) => value.parse::<StoreKind>().map_err(anyhow::Error::msg)?,
            Err(_) => StoreKind::Postgres,
        };

        let database_url = env::var("DATABASE_URL").ok();
        if store == StoreKind::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when WEBINAR_STORE is postgres");
        }

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {}", value))?,
            Err(_) => 8080,
        };

        let run_migrations = match env::var("RUN_MIGRATIONS") {
            Ok(value) => value
                .parse::<bool>()
                .with_context(|| format!("RUN_MIGRATIONS must be true or false, got {}", value))?,
            Err(_) => true,
        };

        Ok(Self {
            store,
            database_url,
            port,
            default_user_id: env::var("DEFAULT_USER_ID")
                .unwrap_or_else(|_| "test-user".to_string()),
            run_migrations,
        })
    }

    /// Configuration for tests: in-memory store, no database
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            store: StoreKind::Memory,
            database_url: None,
            port: 0,
            default_user_id: "test-user".to_string(),
            run_migrations: false,
        }
    }
}
