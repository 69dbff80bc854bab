// src/jobs/csv.rs
//! CSV ingestion for job postings
//!
//! Upload sources disagree on column naming: some carry "Job Title" /
//! "Job Description" headers, others are bare two-column files. Rows are
//! resolved into one typed record at this boundary; everything downstream
//! uses the record's fields, never raw row indexing.

use csv::ReaderBuilder;
use std::io::Read;

/// One job posting row, resolved from either header-named or positional columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCsvRecord {
    pub title: String,
    pub description: String,
}

const TITLE_HEADER: &str = "Job Title";
const DESCRIPTION_HEADER: &str = "Job Description";

/// Read job postings from CSV bytes.
///
/// Header names win when present; otherwise the first row is treated as an
/// unrecognized header and columns 0/1 are used positionally. Rows with
/// fewer than two columns are skipped. Cell bytes outside UTF-8 (legacy
/// windows-1252 exports) are replaced rather than rejected.
pub fn read_jobs<R: Read>(input: R) -> Result<Vec<JobCsvRecord>, csv::Error> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    let headers = reader.byte_headers()?.clone();
    let find_column = |wanted: &str| {
        headers
            .iter()
            .position(|h| String::from_utf8_lossy(h).trim() == wanted)
    };

    let (title_idx, description_idx) =
        match (find_column(TITLE_HEADER), find_column(DESCRIPTION_HEADER)) {
            (Some(t), Some(d)) => (t, d),
            _ => (0, 1),
        };

    let mut records = Vec::new();
    for row in reader.byte_records() {
        let row = row?;
        let (Some(title), Some(description)) = (row.get(title_idx), row.get(description_idx))
        else {
            continue;
        };
        records.push(JobCsvRecord {
            title: String::from_utf8_lossy(title).trim().to_string(),
            description: String::from_utf8_lossy(description).trim().to_string(),
        });
    }

    Ok(records)
}
