use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_ANALYSIS_LOG_PATH: &str = "data/user-analyses.json";
const DEFAULT_HEADLINE_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";

/// Which `AnalysisStore` implementation backs the history endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StoreBackend::File),
            "memory" => Ok(StoreBackend::Memory),
            other => bail!("ANALYSIS_STORE must be 'file' or 'memory', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub analysis_log_path: PathBuf,
    pub store_backend: StoreBackend,
    /// Optional JSON role catalog. Built-in tables are used when unset.
    pub role_catalog_path: Option<PathBuf>,
    pub headline_api_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analysis_log_path: std::env::var("ANALYSIS_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_ANALYSIS_LOG_PATH)),
            store_backend: std::env::var("ANALYSIS_STORE")
                .map(|v| StoreBackend::parse(&v))
                .unwrap_or(Ok(StoreBackend::File))?,
            role_catalog_path: optional_env("ROLE_CATALOG_PATH").map(PathBuf::from),
            headline_api_base: optional_env("HEADLINE_API_BASE")
                .unwrap_or_else(|| DEFAULT_HEADLINE_API_BASE.to_string()),
        })
    }
}

/// Returns the variable's value, treating an empty string as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
