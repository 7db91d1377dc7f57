// src/profile.rs
//! Structured profile record produced by one extraction pass.
//!
//! Field names serialize in camelCase because the consuming application
//! expects the record in that shape. Every string defaults to empty and every
//! list to empty; the record never carries nulls.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub personal_info: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillGroup>,
    pub languages: Vec<Language>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
}

impl ProfileRecord {
    /// Usability criterion applied after extraction: a record with neither a
    /// name nor a single experience entry counts as "no profile data found".
    pub fn has_profile_data(&self) -> bool {
        !self.personal_info.full_name.is_empty() || !self.experience.is_empty()
    }
}

/// Top-of-page fields. Email, phone and the extra link slots are part of the
/// record shape the importer expects but are never populated from the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub linkedin: String,
    pub photo: String,
    pub website: String,
    pub github: String,
    pub portfolio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    /// Not extracted from the page; kept for record-shape compatibility.
    pub location: String,
    pub start_date: String,
    /// Empty when `current` is set.
    pub end_date: String,
    pub current: bool,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub id: String,
    pub category: String,
    pub items: Vec<String>,
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: String,
    pub github_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: String,
    pub language: String,
    pub proficiency: Proficiency,
}

/// Proficiency bucket a free-text language entry is classified into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Native,
    Professional,
    #[default]
    Conversational,
    Basic,
}

impl Proficiency {
    /// Classify proficiency free text by keyword containment. Unmatched or
    /// missing text falls back to conversational.
    pub fn classify(raw: &str) -> Self {
        let raw = raw.to_lowercase();
        if raw.contains("native") || raw.contains("bilingual") {
            Proficiency::Native
        } else if raw.contains("professional") {
            Proficiency::Professional
        } else if raw.contains("limited") {
            Proficiency::Basic
        } else {
            Proficiency::Conversational
        }
    }
}
