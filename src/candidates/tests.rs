// src/candidates/tests.rs

use crate::candidates::extract::{
    candidate_name_from_filename, extract_text, parse_cv_text, NOT_AVAILABLE,
};

#[test]
fn test_parse_cv_text_full_resume() {
    let text = "John Smith\njohn.smith@example.com\n+1 415 555 0123\n\
                Work Experience\nEngineer at Acme\nBuilt data pipelines.\n\
                Skills: Python, SQL\nCertifications: AWS";
    let profile = parse_cv_text(text);

    assert_eq!(profile.job_title, "Engineer");
    assert_eq!(profile.email, "john.smith@example.com");
    assert_eq!(profile.phone, "+1 415 555 0123");
    assert_eq!(profile.skills, "Python, SQL");
    assert_eq!(
        profile.work_experience,
        "Engineer at Acme\nBuilt data pipelines."
    );
}

#[test]
fn test_parse_cv_text_empty_input_yields_sentinels() {
    let profile = parse_cv_text("");

    assert_eq!(profile.job_title, "");
    assert_eq!(profile.work_experience, "");
    assert_eq!(profile.email, NOT_AVAILABLE);
    assert_eq!(profile.phone, NOT_AVAILABLE);
    assert_eq!(profile.skills, NOT_AVAILABLE);
}

#[test]
fn test_parse_cv_text_email_is_first_match() {
    let text = "first@example.com\nsecond@example.org";
    assert_eq!(parse_cv_text(text).email, "first@example.com");
}

#[test]
fn test_parse_cv_text_phone_with_plus_and_separators() {
    let profile = parse_cv_text("Call me: +91 98765-43210");
    assert_eq!(profile.phone, "+91 98765-43210");
}

#[test]
fn test_parse_cv_text_skills_stop_at_newline() {
    let profile = parse_cv_text("Skills: Rust, SQL\nAchievements: shipped v1");
    assert_eq!(profile.skills, "Rust, SQL");
}

#[test]
fn test_parse_cv_text_work_experience_runs_to_end_without_markers() {
    let profile = parse_cv_text("Work Experience\nAnalyst at Globex since 2020");
    assert_eq!(profile.job_title, "Analyst");
    assert_eq!(profile.work_experience, "Analyst at Globex since 2020");
}

#[test]
fn test_parse_cv_text_missing_work_experience_section() {
    let profile = parse_cv_text("Education\nBSc Computer Science");
    assert_eq!(profile.job_title, "");
    assert_eq!(profile.work_experience, "");
}

#[test]
fn test_candidate_name_from_filename() {
    assert_eq!(candidate_name_from_filename("jane_doe.pdf"), "jane_doe");
    assert_eq!(candidate_name_from_filename("no_extension"), "no_extension");
}

#[test]
fn test_extract_text_unreadable_pdf_yields_empty_string() {
    assert_eq!(extract_text(b"not a pdf at all"), "");
    assert_eq!(extract_text(b""), "");
}
