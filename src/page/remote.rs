// src/page/remote.rs
use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use super::SnapshotPage;
use crate::config::ScraperConfig;

/// Fetch a profile page over HTTP into a single-snapshot driver.
///
/// Server-rendered markup only; controls on the fetched page cannot reveal
/// anything further, so expansion over it is a no-op.
pub async fn fetch_page(url: &str, config: &ScraperConfig) -> Result<SnapshotPage> {
    info!("Fetching profile page: {}", url);

    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.fetch_timeout())
        .build()
        .context("Failed to create HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .context("Failed to fetch profile page")?;

    if !response.status().is_success() {
        anyhow::bail!("HTTP error: {}", response.status());
    }

    let html = response
        .text()
        .await
        .context("Failed to read response body")?;

    Ok(SnapshotPage::new(html).with_url(url))
}
