use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Headless Chromium executable used for PDF export.
    pub chrome_bin: String,
    /// Milliseconds the browser lets the page settle before printing.
    pub pdf_virtual_time_budget_ms: u64,
    pub body_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 5000,
            rust_log: "info".to_string(),
            chrome_bin: "chromium".to_string(),
            pdf_virtual_time_budget_ms: 10_000,
            body_limit_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            chrome_bin: std::env::var("CHROME_BIN").unwrap_or(defaults.chrome_bin),
            pdf_virtual_time_budget_ms: parse_env(
                "PDF_VIRTUAL_TIME_BUDGET_MS",
                defaults.pdf_virtual_time_budget_ms,
            )?,
            body_limit_bytes: parse_env("BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
