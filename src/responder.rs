// src/responder.rs
//! Message boundary: the extraction routine answers host-controlled requests
//! and produces exactly one completion message per request.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::config::ScraperConfig;
use crate::page::PageDriver;
use crate::profile::ProfileRecord;
use crate::ProfileScraper;

/// Incoming request, tagged by its `action` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    /// Liveness check.
    Ping,
    /// Run the full expand-then-extract pipeline.
    ExtractProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ProfileRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn pong() -> Self {
        Self {
            success: true,
            loaded: Some(true),
            data: None,
            error: None,
        }
    }

    pub fn extracted(data: ProfileRecord) -> Self {
        Self {
            success: true,
            loaded: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            loaded: None,
            data: None,
            error: Some(message.into()),
        }
    }
}

pub struct Responder {
    scraper: ProfileScraper,
}

impl Responder {
    pub fn new(config: ScraperConfig) -> Self {
        Self {
            scraper: ProfileScraper::new(config),
        }
    }

    /// Handle one request against the page. Errors never escape; both a
    /// propagated extraction failure and the no-data condition fold into a
    /// `success: false` response.
    pub async fn handle(&self, request: Request, page: &mut dyn PageDriver) -> Response {
        match request {
            Request::Ping => Response::pong(),
            Request::ExtractProfile => match self.scraper.scrape(page).await {
                Ok(record) => Response::extracted(record),
                Err(e) => {
                    error!("Extraction request failed: {}", e);
                    Response::failure(e.to_string())
                }
            },
        }
    }
}
