// src/extract/mod.rs
//! Field extractor: one pass over the expanded document.
//!
//! Runs after expansion has settled and never mutates the page. Every field
//! is probed through a fallback chain; a miss leaves the default in place, so
//! one bad region never costs the rest of the record.

pub mod dates;
pub mod sections;
pub mod selectors;

use anyhow::Result;
use scraper::Html;
use tracing::info;

use crate::profile::ProfileRecord;
use selectors::{first_attr, first_text, first_text_in, section_scope};

const NAME_CHAIN: &[&str] = &[
    "h1.text-heading-xlarge",
    "h1.inline.t-24.v-align-middle.break-words",
];
const TITLE_CHAIN: &[&str] = &[".text-body-medium.break-words", ".top-card-layout__headline"];
const LOCATION_CHAIN: &[&str] = &[
    ".text-body-small.inline.t-black--light.break-words",
    ".top-card__subline-item",
];
const PHOTO_CHAIN: &[&str] = &[
    "img.pv-top-card-profile-picture__image",
    "button img.ember-view",
];
const SUMMARY_CHAIN: &[&str] = &[
    ".inline-show-more-text span[aria-hidden='true']",
    ".pv-shared-text-with-see-more span",
];

/// Populate a fresh [`ProfileRecord`] from the page markup. `source_url`
/// becomes the record's linkedin field when known.
///
/// Idempotent over an unchanged document; per-field misses stay silent and
/// only a document-level failure surfaces as an error.
pub fn extract_profile(html: &str, source_url: Option<&str>) -> Result<ProfileRecord> {
    let document = Html::parse_document(html);
    let mut record = ProfileRecord::default();

    record.personal_info.linkedin = source_url.unwrap_or_default().to_string();
    record.personal_info.full_name = first_text(&document, NAME_CHAIN).unwrap_or_default();
    record.personal_info.title = first_text(&document, TITLE_CHAIN).unwrap_or_default();
    record.personal_info.location = first_text(&document, LOCATION_CHAIN).unwrap_or_default();
    record.personal_info.photo = first_attr(&document, PHOTO_CHAIN, "src").unwrap_or_default();

    // The summary lives next to the #about anchor, not under it.
    if let Some(scope) = section_scope(&document, "#about") {
        record.personal_info.summary = first_text_in(scope, SUMMARY_CHAIN).unwrap_or_default();
    }

    record.experience = sections::experience(&document);
    record.education = sections::education(&document);
    record.skills = sections::skills(&document);
    record.certifications = sections::certifications(&document);
    record.projects = sections::projects(&document);
    record.languages = sections::languages(&document);

    info!(
        "Extracted profile: name='{}', {} experience, {} education, {} certification(s)",
        record.personal_info.full_name,
        record.experience.len(),
        record.education.len(),
        record.certifications.len()
    );

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Proficiency;

    fn fixture() -> String {
        let long_skill = format!("A{}", "x".repeat(101));
        format!(
            r#"<html><body><main>
  <h1 class="text-heading-xlarge">Jane Doe</h1>
  <div class="text-body-medium break-words">Staff Engineer</div>
  <span class="text-body-small inline t-black--light break-words">Lyon, France</span>
  <img class="pv-top-card-profile-picture__image" src="https://media.example.com/jane.jpg">

  <section>
    <div id="about"></div>
    <div class="inline-show-more-text"><span aria-hidden="true">Distributed systems plumber.</span></div>
  </section>

  <section>
    <div id="experience"></div>
    <ul>
      <li class="artdeco-list__item">
        <div class="t-bold"><span aria-hidden="true">Staff Engineer</span></div>
        <span class="t-14 t-normal"><span aria-hidden="true">Initech</span></span>
        <span class="t-14 t-normal t-black--light"><span aria-hidden="true">Jan 2020 - Present</span></span>
        <div class="inline-show-more-text"><span aria-hidden="true">Keeps the lights on.</span></div>
      </li>
      <li class="artdeco-list__item">
        <span class="t-14 t-normal"><span aria-hidden="true">Orphaned company line</span></span>
      </li>
      <li class="artdeco-list__item">
        <div class="t-bold"><span aria-hidden="true">Backend Engineer</span></div>
        <span class="t-14 t-normal"><span aria-hidden="true">Globex</span></span>
        <span class="t-14 t-normal t-black--light"><span aria-hidden="true">Mar 2016 - Dec 2019</span></span>
      </li>
    </ul>
  </section>

  <section>
    <div id="education"></div>
    <ul>
      <li class="artdeco-list__item">
        <div class="t-bold"><span aria-hidden="true">ENS Lyon</span></div>
        <span class="t-14 t-normal"><span aria-hidden="true">MSc, Computer Science</span></span>
        <span class="t-14 t-normal t-black--light"><span aria-hidden="true">2014 - 2016</span></span>
      </li>
    </ul>
  </section>

  <section>
    <div id="skills"></div>
    <ul>
      <li class="pvs-list__item--line-separated"><span aria-hidden="true">Python</span></li>
      <li class="pvs-list__item--line-separated"><span aria-hidden="true">Endorse Python</span></li>
      <li class="pvs-list__item--line-separated"><span aria-hidden="true">{long_skill}</span></li>
      <li class="pvs-list__item--line-separated"><span aria-hidden="true">Rust</span></li>
    </ul>
  </section>

  <section>
    <div id="licenses_and_certifications"></div>
    <ul>
      <li class="artdeco-list__item">
        <div class="t-bold"><span aria-hidden="true">CKA</span></div>
        <span class="t-14 t-normal"><span aria-hidden="true">CNCF</span></span>
        <span class="t-14 t-normal t-black--light"><span aria-hidden="true">Issued Jun 2021</span></span>
      </li>
    </ul>
  </section>

  <section>
    <div id="projects"></div>
    <ul>
      <li class="artdeco-list__item">
        <div class="t-bold"><span aria-hidden="true">linkmap</span></div>
        <div class="inline-show-more-text"><span aria-hidden="true">Graph visualizer.</span></div>
      </li>
    </ul>
  </section>

  <section>
    <div id="languages"></div>
    <ul>
      <li class="artdeco-list__item">
        <div class="t-bold"><span aria-hidden="true">French</span></div>
        <span class="t-14 t-normal"><span aria-hidden="true">Native or bilingual proficiency</span></span>
      </li>
      <li class="artdeco-list__item">
        <div class="t-bold"><span aria-hidden="true">German</span></div>
      </li>
    </ul>
  </section>
</main></body></html>"#
        )
    }

    #[test]
    fn test_full_extraction() {
        let record = extract_profile(&fixture(), Some("https://linkedin.example/in/jane"))
            .expect("extraction succeeds");

        assert_eq!(record.personal_info.full_name, "Jane Doe");
        assert_eq!(record.personal_info.title, "Staff Engineer");
        assert_eq!(record.personal_info.location, "Lyon, France");
        assert_eq!(record.personal_info.photo, "https://media.example.com/jane.jpg");
        assert_eq!(record.personal_info.linkedin, "https://linkedin.example/in/jane");
        assert_eq!(record.personal_info.email, "");
        assert_eq!(
            record.personal_info.summary,
            "Distributed systems plumber."
        );

        // The item without a title is skipped whole; ids keep list positions.
        assert_eq!(record.experience.len(), 2);
        assert_eq!(record.experience[0].id, "exp-0");
        assert_eq!(record.experience[0].company, "Initech");
        assert_eq!(record.experience[0].start_date, "Jan 2020");
        assert_eq!(record.experience[0].end_date, "");
        assert!(record.experience[0].current);
        assert_eq!(record.experience[0].description, "Keeps the lights on.");
        assert_eq!(record.experience[1].id, "exp-2");
        assert_eq!(record.experience[1].end_date, "Dec 2019");
        assert!(!record.experience[1].current);

        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].institution, "ENS Lyon");
        assert_eq!(record.education[0].degree, "MSc, Computer Science");
        assert_eq!(record.education[0].start_date, "2014");
        assert_eq!(record.education[0].end_date, "2016");

        assert_eq!(record.skills.len(), 1);
        assert_eq!(record.skills[0].items, vec!["Python", "Rust"]);
        assert_eq!(record.skills[0].id, "skills-1");
        assert_eq!(record.skills[0].level, "intermediate");

        assert_eq!(record.certifications.len(), 1);
        assert_eq!(record.certifications[0].name, "CKA");
        assert_eq!(record.certifications[0].issuer, "CNCF");

        assert_eq!(record.projects.len(), 1);
        assert_eq!(record.projects[0].name, "linkmap");

        assert_eq!(record.languages.len(), 2);
        assert_eq!(record.languages[0].proficiency, Proficiency::Native);
        assert_eq!(record.languages[1].language, "German");
        assert_eq!(record.languages[1].proficiency, Proficiency::Conversational);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = fixture();
        let first = extract_profile(&html, None).expect("first pass");
        let second = extract_profile(&html, None).expect("second pass");
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_sections_leave_empty_lists() {
        let record = extract_profile(
            r#"<h1 class="text-heading-xlarge">Solo Name</h1>"#,
            None,
        )
        .expect("extraction succeeds");

        assert_eq!(record.personal_info.full_name, "Solo Name");
        assert!(record.experience.is_empty());
        assert!(record.education.is_empty());
        assert!(record.skills.is_empty());
        assert!(record.certifications.is_empty());
        assert!(record.projects.is_empty());
        assert!(record.languages.is_empty());
        assert!(record.has_profile_data());
    }

    #[test]
    fn test_empty_document_has_no_profile_data() {
        let record = extract_profile("<html><body></body></html>", None)
            .expect("extraction still succeeds");
        assert!(!record.has_profile_data());
    }
}
