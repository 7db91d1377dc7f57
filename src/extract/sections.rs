// src/extract/sections.rs
//! Per-section item walks. Each section resolves its anchor, enumerates the
//! list items under it, and skips any item missing its primary field rather
//! than emitting a partial entry. Entry ids are `kind-<position>` with the
//! position taken from the list, so skipped items leave gaps.

use scraper::Html;
use tracing::debug;

use super::dates::{parse_education_years, parse_experience_dates};
use super::selectors::{first_text_in, section_items, section_scope};
use crate::profile::{
    Certification, Education, Experience, Language, Proficiency, Project, SkillGroup,
};

const MAX_SKILLS: usize = 20;
const MAX_SKILL_LEN: usize = 100;

const TITLE_CHAIN: &[&str] = &[".t-bold span[aria-hidden='true']", ".mr1.t-bold span"];
const COMPANY_CHAIN: &[&str] = &[
    ".t-14.t-normal span[aria-hidden='true']",
    ".t-14.t-normal.t-black--light span",
];
const EXPERIENCE_DATES_CHAIN: &[&str] = &[
    ".t-14.t-normal.t-black--light span[aria-hidden='true']:last-child",
    ".pvs-entity__caption-wrapper time",
];
const DESCRIPTION_CHAIN: &[&str] = &[
    ".inline-show-more-text span[aria-hidden='true']",
    ".pvs-list__outer-container span",
];

const SCHOOL_CHAIN: &[&str] = &[
    ".t-bold span[aria-hidden='true']",
    ".mr1.hoverable-link-text span",
];
const DEGREE_CHAIN: &[&str] = &[".t-14.t-normal span[aria-hidden='true']"];
const EDUCATION_DATES_CHAIN: &[&str] = &[".t-14.t-normal.t-black--light span[aria-hidden='true']"];

const NAME_CHAIN: &[&str] = &[".t-bold span[aria-hidden='true']"];
const SUBTITLE_CHAIN: &[&str] = &[".t-14.t-normal span[aria-hidden='true']"];
const CAPTION_CHAIN: &[&str] = &[".t-14.t-normal.t-black--light span[aria-hidden='true']"];

pub fn experience(document: &Html) -> Vec<Experience> {
    let Some(items) = section_items(document, "#experience") else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        let Some(title) = first_text_in(item, TITLE_CHAIN) else {
            debug!("Skipping experience item {} without a title", index);
            continue;
        };

        let dates_raw = first_text_in(item, EXPERIENCE_DATES_CHAIN).unwrap_or_default();
        let dates = parse_experience_dates(&dates_raw);

        entries.push(Experience {
            id: format!("exp-{}", index),
            title,
            company: first_text_in(item, COMPANY_CHAIN).unwrap_or_default(),
            location: String::new(),
            start_date: dates.start,
            end_date: dates.end,
            current: dates.current,
            description: first_text_in(item, DESCRIPTION_CHAIN).unwrap_or_default(),
            highlights: Vec::new(),
        });
    }
    entries
}

pub fn education(document: &Html) -> Vec<Education> {
    let Some(items) = section_items(document, "#education") else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        let Some(school) = first_text_in(item, SCHOOL_CHAIN) else {
            debug!("Skipping education item {} without a school", index);
            continue;
        };

        let dates_raw = first_text_in(item, EDUCATION_DATES_CHAIN).unwrap_or_default();
        let (start_date, end_date) = parse_education_years(&dates_raw);

        entries.push(Education {
            id: format!("edu-{}", index),
            degree: first_text_in(item, DEGREE_CHAIN).unwrap_or_default(),
            institution: school,
            location: String::new(),
            start_date,
            end_date,
            gpa: String::new(),
            description: String::new(),
        });
    }
    entries
}

/// Skills arrive as one flat list of spans; UI chrome sneaks in, so entries
/// carrying the endorse marker or running past the length cap are dropped.
pub fn skills(document: &Html) -> Vec<SkillGroup> {
    let Some(scope) = section_scope(document, "#skills") else {
        return Vec::new();
    };
    let Ok(selector) =
        scraper::Selector::parse(".pvs-list__item--line-separated span[aria-hidden='true']")
    else {
        return Vec::new();
    };

    let items: Vec<String> = scope
        .select(&selector)
        .map(|element| super::selectors::element_text(&element))
        .filter(|text| {
            !text.is_empty() && !text.contains("Endorse") && text.chars().count() < MAX_SKILL_LEN
        })
        .take(MAX_SKILLS)
        .collect();

    if items.is_empty() {
        return Vec::new();
    }

    vec![SkillGroup {
        id: "skills-1".to_string(),
        category: "Technical Skills".to_string(),
        items,
        level: "intermediate".to_string(),
    }]
}

pub fn certifications(document: &Html) -> Vec<Certification> {
    let Some(items) = section_items(document, "#licenses_and_certifications") else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        let Some(name) = first_text_in(item, NAME_CHAIN) else {
            debug!("Skipping certification item {} without a name", index);
            continue;
        };

        entries.push(Certification {
            id: format!("cert-{}", index),
            name,
            issuer: first_text_in(item, SUBTITLE_CHAIN).unwrap_or_default(),
            date: first_text_in(item, CAPTION_CHAIN).unwrap_or_default(),
            credential_url: String::new(),
        });
    }
    entries
}

pub fn projects(document: &Html) -> Vec<Project> {
    let Some(items) = section_items(document, "#projects") else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        let Some(name) = first_text_in(item, NAME_CHAIN) else {
            debug!("Skipping project item {} without a name", index);
            continue;
        };

        entries.push(Project {
            id: format!("proj-{}", index),
            name,
            description: first_text_in(item, &[".inline-show-more-text span[aria-hidden='true']"])
                .unwrap_or_default(),
            technologies: Vec::new(),
            url: String::new(),
            github_url: String::new(),
        });
    }
    entries
}

pub fn languages(document: &Html) -> Vec<Language> {
    let Some(items) = section_items(document, "#languages") else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        let Some(language) = first_text_in(item, NAME_CHAIN) else {
            debug!("Skipping language item {} without a name", index);
            continue;
        };

        let proficiency = first_text_in(item, SUBTITLE_CHAIN)
            .map(|raw| Proficiency::classify(&raw))
            .unwrap_or_default();

        entries.push(Language {
            id: format!("lang-{}", index),
            language,
            proficiency,
        });
    }
    entries
}
