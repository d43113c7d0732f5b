use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_ADMIN_PASSWORD;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_port: u16,
    pub log_level: String,
    pub admin_password: String,
    pub assets_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://car_rental.db?mode=rwc".to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8787".to_string())
                .parse()
                .unwrap_or(8787),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            admin_password: admin_password_or_default(env::var("ADMIN_PASSWORD").ok()),
            assets_dir: env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
        })
    }
}

// An empty secret counts as unset.
fn admin_password_or_default(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string())
}
