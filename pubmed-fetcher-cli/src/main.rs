use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "get-papers-list",
    version,
    about = "Fetch PubMed research papers",
    long_about = "Search PubMed and list papers with authors affiliated to non-academic organizations"
)]
struct Cli {
    #[command(flatten)]
    papers: commands::papers::Papers,

    /// Enable debug mode
    #[arg(short, long)]
    debug: bool,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "get-papers-list")]
    tool: String,

    /// Override the E-utilities base URL
    #[arg(long, env = "PUBMED_BASE_URL")]
    base_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        write_debug_banner(&mut std::io::stdout().lock())?;
    }

    let filter = if cli.debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let client = commands::create_pubmed_client(
        cli.email.as_deref(),
        &cli.tool,
        cli.base_url.as_deref(),
        cli.timeout,
        cli.papers.max_results,
    );

    cli.papers
        .execute(&client, &mut std::io::stdout().lock())
        .await
}

fn write_debug_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "🔍 Debug Mode Enabled")?;
    Ok(())
}
