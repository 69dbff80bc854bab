// src/candidates/extract.rs
//! Resume text extraction and field parsing
//!
//! Extraction failures never propagate: a bad PDF yields an empty string,
//! the empty string parses to sentinel fields, and the candidate simply
//! scores 0 downstream. Only the fields the screening pipeline consumes are
//! parsed, each with a first-match regex.

use crate::candidates::models::CvProfile;
use regex::Regex;
use tracing::warn;

/// Sentinel for fields no pattern matched
pub const NOT_AVAILABLE: &str = "N/A";

/// Extract plain text from PDF bytes, trimmed of surrounding whitespace.
/// Returns an empty string on any extraction failure.
pub fn extract_text(pdf_bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(pdf_bytes) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!(error = %e, "Failed to extract text from PDF");
            String::new()
        }
    }
}

/// The candidate's display name is the source file's base name
pub fn candidate_name_from_filename(filename: &str) -> String {
    filename
        .strip_suffix(".pdf")
        .unwrap_or(filename)
        .to_string()
}

/// Parse the extracted resume text into the fields the pipeline consumes.
///
/// All matches are first-match only. The inferred job title is the text
/// between the "Work Experience" marker and the literal "at"; the
/// work-experience body runs until the next known section label.
pub fn parse_cv_text(text: &str) -> CvProfile {
    let title_re = Regex::new(r"(?s)Work Experience\s*(.*?)\s+at").unwrap();
    let experience_re =
        Regex::new(r"(?s)Work Experience\s*(.*?)(?:Skills:|Certifications:|Achievements:|$)")
            .unwrap();
    let email_re = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
    let phone_re = Regex::new(r"\+?\d[\d -]{8,}\d").unwrap();
    let skills_re = Regex::new(r"Skills:\s*([^\n]*)").unwrap();

    let captured = |re: &Regex| {
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    };

    let email = email_re
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let phone = phone_re
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let skills = skills_re
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    CvProfile {
        job_title: captured(&title_re),
        work_experience: captured(&experience_re),
        email,
        phone,
        skills,
    }
}
