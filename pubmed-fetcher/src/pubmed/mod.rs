//! PubMed client for searching articles and summarizing their authors
//!
//! - `client/mod.rs` - Core client struct, constructors, ESearch and the search-then-fetch pipeline
//! - `client/summary` - ESummary API and record building
//! - `affiliation` - Non-academic author and email heuristics

pub mod affiliation;
pub mod client;
pub mod models;
pub mod responses;

// Re-export public types
pub use affiliation::{classify_authors, extract_email};
pub use client::PubMedClient;
pub use models::{Author, NonAcademicAuthors, PaperRecord};
