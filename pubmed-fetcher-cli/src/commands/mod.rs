pub mod papers;

use pubmed_fetcher::{ClientConfig, PubMedClient};

pub fn create_pubmed_client(
    email: Option<&str>,
    tool: &str,
    base_url: Option<&str>,
    timeout_seconds: u64,
    max_results: usize,
) -> PubMedClient {
    let mut config = ClientConfig::new()
        .with_tool(tool)
        .with_timeout_seconds(timeout_seconds)
        .with_max_results(max_results);

    if let Some(email) = email {
        config = config.with_email(email);
    }

    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }

    PubMedClient::with_config(config)
}
