use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use pubmed_fetcher::{PaperRecord, PubMedClient, export};

#[derive(Args, Debug)]
pub struct Papers {
    /// Search query for PubMed
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Filename to save results (CSV)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Maximum number of papers to fetch
    #[arg(short = 'n', long, default_value = "10")]
    pub max_results: usize,
}

impl Papers {
    pub async fn execute<W: Write>(&self, client: &PubMedClient, out: &mut W) -> Result<()> {
        tracing::debug!(query = %self.query, max_results = self.max_results, "Fetching papers");

        let papers = client
            .fetch_papers(&self.query)
            .await
            .with_context(|| format!("Failed to fetch papers for query '{}'", self.query))?;

        tracing::info!(papers = papers.len(), "Fetched papers");

        match &self.file {
            Some(path) => {
                save_to_csv(&papers, path)?;
                writeln!(out, "✅ Results saved to {}", path.display())?;
            }
            None => print_papers(&papers, out)?,
        }

        Ok(())
    }
}

fn save_to_csv(papers: &[PaperRecord], path: &Path) -> Result<()> {
    export::write_csv(papers, path)
        .with_context(|| format!("Failed to write results to {}", path.display()))
}

fn print_papers<W: Write>(papers: &[PaperRecord], out: &mut W) -> Result<()> {
    for paper in papers {
        writeln!(out, "{}", paper)?;
    }
    Ok(())
}
