// src/page/snapshot.rs
use anyhow::Result;
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::{Control, PageDriver};

/// Driver over captured page markup.
///
/// A single snapshot behaves as a static page whose controls do nothing. A
/// staged sequence simulates lazy reveal: each successful invoke advances to
/// the next snapshot, saturating at the last one.
pub struct SnapshotPage {
    stages: Vec<String>,
    cursor: usize,
    url: Option<String>,
}

impl SnapshotPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            stages: vec![html.into()],
            cursor: 0,
            url: None,
        }
    }

    pub fn staged(stages: Vec<String>) -> Self {
        let stages = if stages.is_empty() {
            vec![String::new()]
        } else {
            stages
        };
        Self {
            stages,
            cursor: 0,
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    fn current(&self) -> &str {
        &self.stages[self.cursor]
    }
}

#[async_trait]
impl PageDriver for SnapshotPage {
    fn controls(&self) -> Vec<Control> {
        let document = Html::parse_document(self.current());
        let Ok(selector) = Selector::parse("button") else {
            return Vec::new();
        };

        document
            .select(&selector)
            .enumerate()
            .map(|(index, element)| Control {
                index,
                text: collapse_whitespace(&element.text().collect::<Vec<_>>().join(" ")),
                label: element
                    .value()
                    .attr("aria-label")
                    .unwrap_or_default()
                    .to_string(),
                visible: element_visible(&element),
            })
            .collect()
    }

    async fn invoke(&mut self, control: &Control) -> Result<()> {
        debug!("Invoking control: {}", control.text);
        if self.cursor + 1 < self.stages.len() {
            self.cursor += 1;
        }
        Ok(())
    }

    fn content(&self) -> Result<String> {
        Ok(self.current().to_string())
    }

    fn url(&self) -> Option<String> {
        self.url.clone()
    }
}

// A snapshot has no layout, so visibility is judged from the markup alone.
fn element_visible(element: &ElementRef) -> bool {
    if element.value().attr("hidden").is_some() {
        return false;
    }
    if element.value().attr("aria-hidden") == Some("true") {
        return false;
    }
    if let Some(style) = element.value().attr("style") {
        let style: String = style.chars().filter(|c| !c.is_whitespace()).collect();
        if style.contains("display:none") {
            return false;
        }
    }
    true
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
