// src/page/mod.rs
//! Page driver boundary.
//!
//! The extraction routine originally ran inside a live page it did not own.
//! Here the page is behind a small driver trait: probe the interactive
//! controls, invoke one, read the current markup. Anything that can answer
//! those three questions can be scraped, including deterministic fakes.

use anyhow::Result;
use async_trait::async_trait;

pub mod remote;
pub mod snapshot;

pub use remote::fetch_page;
pub use snapshot::SnapshotPage;

/// One interactive control scanned from the page, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub index: usize,
    /// Visible text content, whitespace-collapsed.
    pub text: String,
    /// Accessible label, empty when the control has none.
    pub label: String,
    pub visible: bool,
}

#[async_trait]
pub trait PageDriver: Send {
    /// Scan the current document for interactive controls.
    fn controls(&self) -> Vec<Control>;

    /// Activate a control. A failure here is per-control and recoverable;
    /// callers log it and move on.
    async fn invoke(&mut self, control: &Control) -> Result<()>;

    /// Current document markup. This is the one driver failure that
    /// propagates all the way to the message boundary.
    fn content(&self) -> Result<String>;

    /// Address of the page, when known.
    fn url(&self) -> Option<String> {
        None
    }
}
