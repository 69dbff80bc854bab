// src/jobs/sections.rs
//! Job-description section parsing
//!
//! Raw postings arrive as free text with optional "Description:",
//! "Qualification:" and "Responsibilities:" labels. Whatever the input
//! carried, the stored form is always the canonical three-line string with
//! all three labels present, missing sections left empty.

use regex::Regex;

/// The three labeled sections of a job posting
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobSections {
    pub description: String,
    pub qualification: String,
    pub responsibilities: String,
}

impl JobSections {
    /// Canonical stored form: all three labels on their own lines
    pub fn to_canonical(&self) -> String {
        format!(
            "Description: {}\nQualification: {}\nResponsibilities: {}",
            self.description, self.qualification, self.responsibilities
        )
    }
}

/// Split a raw description into its labeled sections.
///
/// Each section runs non-greedily until the next known label or end of
/// string. Sections absent from the input come back as empty strings.
pub fn parse_description(raw: &str) -> JobSections {
    let description_re =
        Regex::new(r"(?s)Description:\s*(.*?)(?:Qualification:|Responsibilities:|$)").unwrap();
    let qualification_re = Regex::new(r"(?s)Qualification:\s*(.*?)(?:Responsibilities:|$)").unwrap();
    let responsibilities_re = Regex::new(r"(?s)Responsibilities:\s*(.*)").unwrap();

    let capture = |re: &Regex| {
        re.captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    };

    JobSections {
        description: capture(&description_re),
        qualification: capture(&qualification_re),
        responsibilities: capture(&responsibilities_re),
    }
}

/// Parse a raw description and recombine it into the canonical stored form
pub fn normalize_description(raw: &str) -> String {
    parse_description(raw).to_canonical()
}
