use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub api_prefix: String,
    pub cors_allowed_origins: Vec<String>,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let data_file = env::var("TODO_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/todos.json"));

        let api_prefix = normalize_prefix(
            &env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
        )
        .context("API_PREFIX must start with '/' (or be empty)")?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            data_file,
            api_prefix,
            cors_allowed_origins,
            service_port,
            service_host,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data file: {}", self.data_file.display());
        tracing::info!("  API prefix: {}",
            if self.api_prefix.is_empty() { "(none)" } else { &self.api_prefix });
        tracing::info!("  CORS origins: {}", self.cors_allowed_origins.join(", "));
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}

/// Strips a trailing slash; "" and "/" both mean routes are mounted at the root.
fn normalize_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Some(String::new());
    }
    trimmed.starts_with('/').then(|| trimmed.to_string())
}
