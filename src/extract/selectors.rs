// src/extract/selectors.rs
//! Selector fallback chains: an ordered list of structural queries tried in
//! sequence until one yields an element. A selector that fails to parse is
//! treated the same as one that matches nothing.

use scraper::{ElementRef, Html, Selector};

/// First candidate that structurally matches anywhere in the document.
/// The element's presence decides the match; its text may still be empty.
pub fn first_text(document: &Html, candidates: &[&str]) -> Option<String> {
    for candidate in candidates {
        if let Ok(selector) = Selector::parse(candidate) {
            if let Some(element) = document.select(&selector).next() {
                return Some(element_text(&element));
            }
        }
    }
    None
}

/// Fallback chain scoped to one element subtree.
pub fn first_text_in(scope: ElementRef<'_>, candidates: &[&str]) -> Option<String> {
    for candidate in candidates {
        if let Ok(selector) = Selector::parse(candidate) {
            if let Some(element) = scope.select(&selector).next() {
                return Some(element_text(&element));
            }
        }
    }
    None
}

/// Fallback chain returning an attribute of the first matching element.
pub fn first_attr(document: &Html, candidates: &[&str], attr: &str) -> Option<String> {
    for candidate in candidates {
        if let Ok(selector) = Selector::parse(candidate) {
            if let Some(element) = document.select(&selector).next() {
                return Some(element.value().attr(attr).unwrap_or_default().to_string());
            }
        }
    }
    None
}

/// Resolve a section by its anchor id and return the enclosing element the
/// section's content actually lives under. Absent anchor means the whole
/// section is skipped.
pub fn section_scope<'a>(document: &'a Html, anchor: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(anchor).ok()?;
    let element = document.select(&selector).next()?;
    element.parent().and_then(ElementRef::wrap)
}

/// The section's list items, or `None` when the section anchor is absent.
pub fn section_items<'a>(document: &'a Html, anchor: &str) -> Option<Vec<ElementRef<'a>>> {
    let scope = section_scope(document, anchor)?;
    let selector = Selector::parse("li.artdeco-list__item").ok()?;
    Some(scope.select(&selector).collect())
}

pub fn element_text(element: &ElementRef) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

/// Collapse whitespace runs and drop blank lines.
pub fn clean_text(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
