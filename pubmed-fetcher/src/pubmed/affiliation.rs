//! Affiliation heuristics applied to ESummary author lists
//!
//! An author is treated as non-academic when the affiliation is present and
//! mentions none of `university`, `college`, `institute` or `lab`. The match is
//! a plain substring test on the lower-cased text, so "Laboratories Inc" counts
//! as academic and "Mayo Clinic" does not.

use std::sync::OnceLock;

use regex::Regex;

use super::models::{Author, EMAIL_NOT_AVAILABLE, NonAcademicAuthors, UNKNOWN};

fn academic_keyword_regex() -> &'static Regex {
    static ACADEMIC_REGEX: OnceLock<Regex> = OnceLock::new();
    ACADEMIC_REGEX.get_or_init(|| {
        Regex::new(r"university|college|institute|lab").expect("Invalid academic keyword regex")
    })
}

/// Split out authors whose affiliation does not look academic
///
/// Returned names and affiliations are index-aligned. Affiliations are
/// returned lower-cased; authors without an affiliation are skipped.
///
/// # Example
///
/// ```
/// use pubmed_fetcher::{Author, classify_authors};
///
/// let authors = vec![
///     Author::new("Jane Doe", "Acme Pharma Inc"),
///     Author::new("Bob Lee", "MIT university"),
/// ];
///
/// let result = classify_authors(&authors);
/// assert_eq!(result.names, vec!["Jane Doe"]);
/// assert_eq!(result.affiliations, vec!["acme pharma inc"]);
/// ```
pub fn classify_authors(authors: &[Author]) -> NonAcademicAuthors {
    let mut result = NonAcademicAuthors::default();

    for author in authors {
        let affiliation = author
            .affiliation
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();

        if affiliation.is_empty() || academic_keyword_regex().is_match(&affiliation) {
            continue;
        }

        let name = author.name.clone().unwrap_or_else(|| UNKNOWN.to_string());
        result.push(name, affiliation);
    }

    result
}

/// First affiliation containing "@", returned verbatim
///
/// The whole affiliation field is returned rather than a parsed address.
/// Falls back to `"Not Available"`.
pub fn extract_email(authors: &[Author]) -> String {
    authors
        .iter()
        .filter_map(|author| author.affiliation.as_deref())
        .find(|affiliation| affiliation.contains('@'))
        .map(str::to_string)
        .unwrap_or_else(|| EMAIL_NOT_AVAILABLE.to_string())
}
