// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Scraper settings: the expansion retry budget, the two settle delays, and
/// the HTTP fetch parameters. All fields are optional in `config.yaml`;
/// missing ones keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Maximum expansion rounds before giving up on convergence.
    pub max_retries: usize,
    /// Pause after each control invocation, for async content to render.
    pub settle_delay_ms: u64,
    /// Pause after a full expansion pass.
    pub converge_delay_ms: u64,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            settle_delay_ms: 400,
            converge_delay_ms: 800,
            fetch_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from `$SCRAPEDIN_CONFIG` or `./config.yaml`.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var("SCRAPEDIN_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load configuration from a file, falling back to defaults when the file
    /// does not exist. The scraper is usable with no configuration at all.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "No configuration file at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_settle_delay_ms(mut self, ms: u64) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    pub fn with_converge_delay_ms(mut self, ms: u64) -> Self {
        self.converge_delay_ms = ms;
        self
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn converge_delay(&self) -> Duration {
        Duration::from_millis(self.converge_delay_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.settle_delay(), Duration::from_millis(400));
        assert_eq!(config.converge_delay(), Duration::from_millis(800));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ScraperConfig =
            serde_yaml::from_str("max_retries: 5\nsettle_delay_ms: 100\n")
                .expect("partial config parses");
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.settle_delay_ms, 100);
        assert_eq!(config.converge_delay_ms, 800);
        assert_eq!(config.user_agent, ScraperConfig::default().user_agent);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = ScraperConfig::load_from(Path::new("/nonexistent/config.yaml"))
            .expect("missing file is not an error");
        assert_eq!(config.max_retries, ScraperConfig::default().max_retries);
    }

    #[test]
    fn test_builders() {
        let config = ScraperConfig::default()
            .with_max_retries(1)
            .with_settle_delay_ms(0)
            .with_converge_delay_ms(0);
        assert_eq!(config.max_retries, 1);
        assert_eq!(config.settle_delay(), Duration::ZERO);
        assert_eq!(config.converge_delay(), Duration::ZERO);
    }
}
