// src/error.rs
use thiserror::Error;

/// Failure modes surfaced at the message boundary. Anything lower level
/// (a control click failing, a selector missing) is absorbed during the run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Extraction completed normally but the record has neither a name nor a
    /// single experience entry.
    #[error("No profile data found")]
    NoProfileData,

    /// The extraction pass itself failed, e.g. the driver could not produce
    /// the document.
    #[error("Profile extraction failed: {0}")]
    Extraction(#[from] anyhow::Error),
}
