// src/services/matching.rs
//! Keyword containment scoring
//!
//! Intentionally crude bag-of-words containment: no stemming, no term
//! weighting, no idf. Shortlist and scheduling thresholds are policy
//! constants layered on top in ScreeningConfig, not part of this contract.

use crate::candidates::models::CvProfile;
use regex::Regex;

/// Compatibility score between one parsed resume and one job posting.
///
/// The title gate runs first: unless the resume's inferred job title equals
/// the posting title (case-insensitive exact match), the score is 0 no
/// matter how much content overlaps. Past the gate, the posting description
/// is tokenized into words and each token occurrence (duplicates included)
/// contributes 1 when it appears as a substring of the lower-cased
/// work-experience body.
pub fn score_candidate(profile: &CvProfile, job_title: &str, job_description: &str) -> u32 {
    if profile.job_title.to_lowercase() != job_title.to_lowercase() {
        return 0;
    }

    let word_re = Regex::new(r"\b\w+\b").unwrap();
    let description = job_description.to_lowercase();
    let haystack = profile.work_experience.to_lowercase();

    word_re
        .find_iter(&description)
        .filter(|keyword| haystack.contains(keyword.as_str()))
        .count() as u32
}
