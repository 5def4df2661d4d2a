//! Configuration module for the rental admin backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;

/// Where property listings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderKind {
    /// In-memory fixture, filtered and sorted in-process.
    Local,
    /// Remote Medusa store; filtering happens upstream.
    Medusa,
}

impl ProviderKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" | "mock" => Some(ProviderKind::Local),
            "medusa" | "remote" => Some(ProviderKind::Medusa),
            _ => None,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Connection settings for the Medusa store.
#[derive(Debug, Clone)]
pub struct MedusaConfig {
    pub base_url: String,
    pub publishable_key: Option<String>,
    pub timeout: Duration,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    pub provider: ProviderKind,
    /// JSON file replacing the bundled fixture for the local provider
    pub fixture_path: Option<PathBuf>,
    /// Required when `provider` is Medusa
    pub medusa: Option<MedusaConfig>,
    /// Upper bound for the `limit` query parameter
    pub max_page_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("RENTAL_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid RENTAL_BIND_ADDR: {}", e)))?;

        let log_level = env::var("RENTAL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("RENTAL_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let provider = match env::var("RENTAL_PROVIDER") {
            Ok(raw) => ProviderKind::parse(&raw)
                .ok_or_else(|| AppError::Config(format!("Unknown RENTAL_PROVIDER: {}", raw)))?,
            Err(_) => ProviderKind::Local,
        };

        let fixture_path = env::var("RENTAL_FIXTURE_PATH").ok().map(PathBuf::from);

        let timeout_secs = match env::var("RENTAL_MEDUSA_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("Invalid RENTAL_MEDUSA_TIMEOUT_SECS: {}", e))
            })?,
            Err(_) => 10,
        };

        let medusa = env::var("RENTAL_MEDUSA_URL").ok().map(|base_url| MedusaConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            publishable_key: env::var("RENTAL_MEDUSA_PUBLISHABLE_KEY").ok(),
            timeout: Duration::from_secs(timeout_secs),
        });

        if provider == ProviderKind::Medusa && medusa.is_none() {
            return Err(AppError::Config(
                "RENTAL_MEDUSA_URL is required when RENTAL_PROVIDER=medusa".to_string(),
            ));
        }

        let max_page_size = match env::var("RENTAL_MAX_PAGE_SIZE") {
            Ok(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| AppError::Config(format!("Invalid RENTAL_MAX_PAGE_SIZE: {}", raw)))?,
            Err(_) => 100,
        };

        Ok(Self {
            bind_addr,
            log_level,
            log_format,
            provider,
            fixture_path,
            medusa,
            max_page_size,
        })
    }
}
