use std::fmt;

use serde::Deserialize;

/// Sentinel used for a missing title or publication date
pub const UNKNOWN: &str = "Unknown";

/// Sentinel used when no author affiliation carries an email address
pub const EMAIL_NOT_AVAILABLE: &str = "Not Available";

/// Author entry as found in an ESummary document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Author {
    /// Display name (e.g., "Doe J")
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text affiliation
    #[serde(default)]
    pub affiliation: Option<String>,
}

impl Author {
    pub fn new<N: Into<String>, A: Into<String>>(name: N, affiliation: A) -> Self {
        Self {
            name: Some(name.into()),
            affiliation: Some(affiliation.into()),
        }
    }
}

/// Paper metadata with its non-academic authors
///
/// `non_academic_authors` and `company_affiliations` always have the same
/// length; entries at the same index belong to the same author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
    /// PubMed ID
    pub pubmed_id: String,
    /// Article title, `"Unknown"` when absent
    pub title: String,
    /// Publication date as supplied by PubMed, `"Unknown"` when absent
    pub publication_date: String,
    /// Names of authors whose affiliation does not look academic
    pub non_academic_authors: Vec<String>,
    /// Lower-cased affiliations of those authors, same order
    pub company_affiliations: Vec<String>,
    /// First affiliation containing "@", or `"Not Available"`
    pub corresponding_author_email: String,
}

impl PaperRecord {
    /// Build a record from raw ESummary fields, applying the affiliation heuristics
    pub fn from_summary(
        pubmed_id: impl Into<String>,
        title: Option<String>,
        publication_date: Option<String>,
        authors: &[Author],
    ) -> Self {
        let NonAcademicAuthors {
            names,
            affiliations,
        } = super::affiliation::classify_authors(authors);

        Self {
            pubmed_id: pubmed_id.into(),
            title: title.unwrap_or_else(|| UNKNOWN.to_string()),
            publication_date: publication_date.unwrap_or_else(|| UNKNOWN.to_string()),
            non_academic_authors: names,
            company_affiliations: affiliations,
            corresponding_author_email: super::affiliation::extract_email(authors),
        }
    }
}

impl fmt::Display for PaperRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PubmedID: {} | Title: {} | Publication Date: {} | Non-academic Author(s): {} | Company Affiliation(s): {} | Corresponding Author Email: {}",
            self.pubmed_id,
            self.title,
            self.publication_date,
            self.non_academic_authors.join(", "),
            self.company_affiliations.join(", "),
            self.corresponding_author_email
        )
    }
}

/// Output of [`classify_authors`](super::classify_authors)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonAcademicAuthors {
    pub names: Vec<String>,
    pub affiliations: Vec<String>,
}

impl NonAcademicAuthors {
    pub(crate) fn push(&mut self, name: String, affiliation: String) {
        self.names.push(name);
        self.affiliations.push(affiliation);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
