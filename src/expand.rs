// src/expand.rs
//! Section expander: reveal collapsed "Show all …" content before extraction.
//!
//! The target page lazily hides long lists behind toggle controls, so each
//! round scans for expand affordances, clicks them, and lets the page settle.
//! The loop stops once a round scans the same number of matching controls as
//! the previous round, or when the retry budget runs out. Equal counts only:
//! a strictly decreasing count keeps the loop going. A control whose text
//! starts matching only after an earlier click can therefore be missed when
//! the counts happen to tie; that behavior is intentional and relied upon.

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::ScraperConfig;
use crate::page::{Control, PageDriver};

static SHOW_ALL_COUNTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)show all \d+").expect("show-all pattern is valid"));

pub struct SectionExpander {
    config: ScraperConfig,
}

impl SectionExpander {
    pub fn new(config: ScraperConfig) -> Self {
        Self { config }
    }

    /// Run expansion rounds to convergence or retry exhaustion.
    ///
    /// Never fails: a control that refuses the click is logged and skipped,
    /// and in the worst case the page simply stays partially collapsed.
    pub async fn expand(&self, page: &mut dyn PageDriver) {
        let mut previous: Option<usize> = None;

        for round in 1..=self.config.max_retries {
            let matched: Vec<Control> = page
                .controls()
                .into_iter()
                .filter(|control| control.visible && is_expand_affordance(control))
                .collect();

            if previous == Some(matched.len()) {
                debug!(
                    "Expansion converged at {} control(s) after {} round(s)",
                    matched.len(),
                    round - 1
                );
                return;
            }
            previous = Some(matched.len());

            info!(
                "Expansion round {}: {} \"Show all\" control(s)",
                round,
                matched.len()
            );

            for control in &matched {
                debug!("Clicking: {}", control.text);
                match page.invoke(control).await {
                    Ok(()) => sleep(self.config.settle_delay()).await,
                    Err(e) => warn!("Error clicking control '{}': {}", control.text, e),
                }
            }

            sleep(self.config.converge_delay()).await;
        }

        debug!(
            "Expansion retry budget of {} round(s) exhausted",
            self.config.max_retries
        );
    }
}

/// Expand-affordance heuristic over a control's visible text and accessible
/// label, case-insensitive, including localized phrasings.
fn is_expand_affordance(control: &Control) -> bool {
    let text = control.text.to_lowercase();
    let label = control.label.to_lowercase();

    text.contains("show all")
        || text.contains("voir tout")
        || text.contains("voir les")
        || SHOW_ALL_COUNTED.is_match(&text)
        || label.contains("show all")
}
