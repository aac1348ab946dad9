use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub db_name: String,
    pub port: u16,
    pub host: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mongodb_uri = env::var("MONGODB_URI")
            .context("MONGODB_URI environment variable is required")?;

        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "agency".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "service".to_string());

        Ok(Config {
            mongodb_uri,
            db_name,
            port,
            host,
            static_dir,
        })
    }

    /// Logs everything except the connection string, which carries credentials.
    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database name: {}", self.db_name);
        tracing::info!("  Static assets: {}", self.static_dir);
        tracing::info!("  Service listening on: {}:{}", self.host, self.port);
    }
}
