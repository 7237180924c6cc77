use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;

/// Path of the parsing endpoint, relative to the configured base URL.
pub const PARSE_RESUME_PATH: &str = "parse_resume/";
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Client configuration loaded from environment variables.
/// CLI flags may override individual fields after loading.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout: Option<Duration>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let timeout = match std::env::var("PARSE_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };

        Ok(Config {
            api_url: std::env::var("PARSE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Full URL of the parse endpoint: `parse_resume/` under the base URL's path,
    /// so `http://gateway/resume-api` becomes `http://gateway/resume-api/parse_resume/`.
    pub fn endpoint(&self) -> Result<Url> {
        let mut base = Url::parse(&self.api_url)
            .with_context(|| format!("PARSE_API_URL '{}' is not a valid URL", self.api_url))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(PARSE_RESUME_PATH)
            .with_context(|| format!("Cannot build parse endpoint from '{}'", self.api_url))
    }
}

pub fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .context("PARSE_TIMEOUT_SECS must be a whole number of seconds")?;
    if secs == 0 {
        anyhow::bail!("PARSE_TIMEOUT_SECS must be at least 1; unset it for no timeout");
    }
    Ok(Duration::from_secs(secs))
}
