//! # PubMed Fetcher
//!
//! Search PubMed through the NCBI E-utilities JSON API and list, for every
//! matching paper, the authors whose affiliation does not look academic.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pubmed_fetcher::PubMedClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PubMedClient::new();
//!     let papers = client.fetch_papers("cancer AND aspirin").await?;
//!
//!     for paper in &papers {
//!         println!("{}", paper);
//!     }
//!
//!     pubmed_fetcher::export::write_csv(&papers, "papers.csv")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod pubmed;

// Re-export main types for convenience
pub use config::ClientConfig;
pub use error::{PubMedError, Result};
pub use pubmed::{
    Author, NonAcademicAuthors, PaperRecord, PubMedClient, classify_authors, extract_email,
};
