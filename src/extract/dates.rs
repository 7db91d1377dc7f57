// src/extract/dates.rs
use once_cell::sync::Lazy;
use regex::Regex;

// "Jan 2020 - Present", "Mar 2018 – Jun 2021"; hyphen or en dash.
static EXPERIENCE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w+ \d{4})\s*[-–]\s*(\w+ \d{4}|Present)").expect("experience pattern is valid")
});

// Education only carries bare years: "2018 - 2022".
static EDUCATION_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\s*[-–]\s*(\d{4})").expect("education pattern is valid"));

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExperienceDates {
    pub start: String,
    /// Empty when `current` is set.
    pub end: String,
    pub current: bool,
}

/// Parse an experience date range. Text that does not match the expected
/// "<Month> <Year> - <Month Year | Present>" shape leaves everything empty.
pub fn parse_experience_dates(raw: &str) -> ExperienceDates {
    let Some(caps) = EXPERIENCE_RANGE.captures(raw) else {
        return ExperienceDates::default();
    };

    let start = caps[1].to_string();
    let end = caps[2].to_string();
    let current = end.to_lowercase().contains("present");

    ExperienceDates {
        start,
        end: if current { String::new() } else { end },
        current,
    }
}

/// Parse an education year range; anything else yields empty years.
pub fn parse_education_years(raw: &str) -> (String, String) {
    match EDUCATION_RANGE.captures(raw) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => (String::new(), String::new()),
    }
}
