//! Profile extraction over a pluggable page driver.
//!
//! Two phases run strictly in order: the [`expand::SectionExpander`] clicks
//! "Show all …" controls until the matched count converges or the retry
//! budget runs out, then the [`extract`] pass walks the settled document once
//! and fills a [`ProfileRecord`]. Nothing is retried once extraction begins.

use tracing::info;

pub mod config;
pub mod error;
pub mod expand;
pub mod extract;
pub mod page;
pub mod profile;
pub mod responder;

pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use profile::ProfileRecord;

use expand::SectionExpander;
use page::PageDriver;

/// Combined expand-then-extract pipeline.
pub struct ProfileScraper {
    config: ScraperConfig,
}

impl ProfileScraper {
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Expand the page, extract once, and apply the usability criterion: a
    /// record with neither a name nor an experience entry is reported as
    /// [`ScrapeError::NoProfileData`] rather than returned.
    pub async fn scrape(&self, page: &mut dyn PageDriver) -> Result<ProfileRecord, ScrapeError> {
        info!("Starting profile extraction");

        SectionExpander::new(self.config.clone()).expand(page).await;

        let html = page.content()?;
        let record = extract::extract_profile(&html, page.url().as_deref())?;

        if !record.has_profile_data() {
            return Err(ScrapeError::NoProfileData);
        }

        info!(
            "Profile extraction completed for '{}'",
            record.personal_info.full_name
        );
        Ok(record)
    }
}

/// Convenience wrapper: scrape one page with default settings.
pub async fn scrape_profile(page: &mut dyn PageDriver) -> Result<ProfileRecord, ScrapeError> {
    ProfileScraper::new(ScraperConfig::default())
        .scrape(page)
        .await
}
