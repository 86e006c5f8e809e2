//! # Configuration Management
//!
//! Configuration comes from environment variables (12-factor style), with a
//! `.env` file loaded first when present.
//!
//! ## Environment Variables
//! - `HOST`: server bind address (default: 127.0.0.1)
//! - `PORT`: server port (default: 3000)
//! - `DATABASE_URL`: SQLite connection string

use anyhow::Result;
use std::env;

/// Everything needed to run the server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host/IP address to bind to.
    pub host: String,

    /// Server port number.
    pub port: u16,

    /// SQLite connection URL. The `mode=rwc` parameter means read, write,
    /// create if missing.
    pub database_url: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset. Fails only if `PORT` is set but not a number.
    pub fn from_env() -> Result<Self> {
        // Load .env if it exists (dotenvy doesn't error if the file is missing).
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),

            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,

            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:users.db?mode=rwc".to_string()),
        })
    }

    /// Host and port combined into the form `tokio::net::TcpListener::bind`
    /// expects, e.g. "127.0.0.1:3000".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "sqlite::memory:".to_string(),
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
