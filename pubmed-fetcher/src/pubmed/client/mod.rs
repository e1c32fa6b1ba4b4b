mod summary;

use crate::config::ClientConfig;
use crate::error::{PubMedError, Result};
use crate::pubmed::models::PaperRecord;
use crate::pubmed::responses::ESearchResult;
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the PubMed E-utilities API
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    pub(crate) base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_fetcher::PubMedClient;
    ///
    /// let client = PubMedClient::new();
    /// ```
    pub fn new() -> Self {
        let config = ClientConfig::new();
        Self::with_config(config)
    }

    /// Create a new PubMed client with custom configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_fetcher::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_email("researcher@example.com")
    ///     .with_max_results(20);
    ///
    /// let client = PubMedClient::with_config(config);
    /// ```
    pub fn with_config(config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Create a new PubMed client with a custom HTTP client and default configuration
    ///
    /// # Example
    ///
    /// ```
    /// use pubmed_fetcher::PubMedClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PubMedClient::with_client(http_client);
    /// ```
    pub fn with_client(client: Client) -> Self {
        let config = ClientConfig::new();
        let base_url = config.effective_base_url().to_string();

        Self {
            client,
            base_url,
            config,
        }
    }

    /// Get a reference to the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search for articles using a query string
    ///
    /// # Arguments
    ///
    /// * `query` - Search query string
    /// * `max_results` - Maximum number of PMIDs to return (`retmax`)
    ///
    /// # Returns
    ///
    /// PMIDs of matching articles in the order PubMed ranks them. An answer
    /// without `esearchresult.idlist` yields an empty list.
    ///
    /// # Errors
    ///
    /// * `PubMedError::RequestError` - If the HTTP request fails
    /// * `PubMedError::ApiError` - If the endpoint returns a non-success status
    /// * `PubMedError::JsonError` - If the body is not valid JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_fetcher::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     let pmids = client.search_articles("cancer AND aspirin", 10).await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, max_results = max_results))]
    pub async fn search_articles(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmode=json&retmax={}",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let json_text = response.text().await?;

        let search_result: ESearchResult = serde_json::from_str(&json_text)?;

        // NCBI sometimes answers 200 OK with an ERROR field and no ids
        if let Some(error_msg) = &search_result.esearchresult.error {
            warn!(error = %error_msg, "ESearch reported an error");
        }

        let pmids = search_result.esearchresult.idlist;
        info!(results_found = pmids.len(), "Search completed successfully");

        Ok(pmids)
    }

    /// Search PubMed and build a [`PaperRecord`] for every hit
    ///
    /// Uses the configured `max_results` as the search cap.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pubmed_fetcher::PubMedClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::new();
    ///     for paper in client.fetch_papers("cancer AND aspirin").await? {
    ///         println!("{}", paper);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_papers(&self, query: &str) -> Result<Vec<PaperRecord>> {
        let pmids = self
            .search_articles(query, self.config.max_results)
            .await?;
        self.fetch_details(&pmids).await
    }

    /// Send a GET request, appending the configured API parameters (email, tool).
    /// Non-success statuses are turned into `PubMedError::ApiError`.
    pub(crate) async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PubMedError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Default for PubMedClient {
    fn default() -> Self {
        Self::new()
    }
}
