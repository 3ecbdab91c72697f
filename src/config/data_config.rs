//! # Server & Data Store Configuration
//!
//! HTTP bind address and CORS origins. These are only read by the binary
//! entry point; the MongoDB settings live with the [`crate::db::Database`]
//! wrapper that consumes them.

use std::env;

/// HTTP server settings.
pub struct ServerConfig;

impl ServerConfig {
    /// Bind host, `HOST` env var (default `127.0.0.1`).
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// Bind port, `PORT` env var (default `8080`).
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .unwrap_or_else(|e| {
                log::error!("PORT parse failed: {}. Using default 8080", e);
                8080
            })
    }

    /// Allowed CORS origins, `CORS_ORIGINS` env var as a comma-separated
    /// list. Defaults to the local frontend and the server itself.
    pub fn cors_origins() -> Vec<String> {
        env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:3000".to_string(),
                    "http://127.0.0.1:3000".to_string(),
                    "http://localhost:8080".to_string(),
                    "http://127.0.0.1:8080".to_string(),
                ]
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cors_origins_include_local_frontend() {
        // Only meaningful when CORS_ORIGINS is unset, as in the test env.
        if env::var("CORS_ORIGINS").is_err() {
            let origins = ServerConfig::cors_origins();
            assert!(origins.contains(&"http://localhost:3000".to_string()));
        }
    }
}
