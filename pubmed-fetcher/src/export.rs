//! CSV export of paper records
//!
//! Columns, in order: `PubmedID`, `Title`, `Publication Date`,
//! `Non-academic Author(s)`, `Company Affiliation(s)`,
//! `Corresponding Author Email`. Multi-valued fields are joined with `", "`
//! into a single cell.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::pubmed::models::PaperRecord;

/// Header row written by [`write_csv`] and [`write_csv_to`]
pub const CSV_HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "PubmedID")]
    pubmed_id: &'a str,
    #[serde(rename = "Title")]
    title: &'a str,
    #[serde(rename = "Publication Date")]
    publication_date: &'a str,
    #[serde(rename = "Non-academic Author(s)")]
    non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    corresponding_author_email: &'a str,
}

impl<'a> From<&'a PaperRecord> for CsvRow<'a> {
    fn from(record: &'a PaperRecord) -> Self {
        Self {
            pubmed_id: &record.pubmed_id,
            title: &record.title,
            publication_date: &record.publication_date,
            non_academic_authors: record.non_academic_authors.join(", "),
            company_affiliations: record.company_affiliations.join(", "),
            corresponding_author_email: &record.corresponding_author_email,
        }
    }
}

/// Write records as CSV to `path`, creating or truncating the file
///
/// # Example
///
/// ```no_run
/// use pubmed_fetcher::export::write_csv;
///
/// write_csv(&[], "empty.csv").unwrap();
/// ```
#[instrument(skip(records, path), fields(records = records.len(), path = %path.as_ref().display()))]
pub fn write_csv<P: AsRef<Path>>(records: &[PaperRecord], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_csv_to(records, file)?;
    debug!("CSV file written");
    Ok(())
}

/// Write records as CSV to any writer
///
/// The header row is always written, even for zero records.
pub fn write_csv_to<W: Write>(records: &[PaperRecord], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADERS)?;
    for record in records {
        wtr.serialize(CsvRow::from(record))?;
    }
    wtr.flush()?;

    Ok(())
}

/// Render records as CSV text
pub fn to_csv_string(records: &[PaperRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(records, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
