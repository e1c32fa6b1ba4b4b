//! Client configuration for NCBI E-utilities requests

use std::time::Duration;

/// Default E-utilities endpoint root; `esearch.fcgi` and `esummary.fcgi` live below it.
pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Number of identifiers requested from ESearch when nothing else is configured.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// HTTP request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for [`PubMedClient`](crate::PubMedClient)
///
/// # Example
///
/// ```
/// use pubmed_fetcher::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_email("researcher@example.com")
///     .with_max_results(25);
///
/// assert_eq!(config.max_results, 25);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Override for the E-utilities base URL (used to point at mock servers)
    pub base_url: Option<String>,
    /// Contact email sent with each request, as NCBI asks tools to do
    pub email: Option<String>,
    /// Tool name sent with each request
    pub tool: Option<String>,
    /// Custom User-Agent header
    pub user_agent: Option<String>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Maximum number of identifiers requested from ESearch
    pub max_results: usize,
}

impl ClientConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self {
            base_url: None,
            email: None,
            tool: None,
            user_agent: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        let base_url = base_url.into();
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Base URL actually used for requests
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// User-Agent actually sent with requests
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("pubmed-fetcher/{}", env!("CARGO_PKG_VERSION")))
    }

    /// Extra query parameters appended to every request.
    ///
    /// Only explicitly configured values are included.
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }

        if let Some(tool) = &self.tool {
            params.push(("tool".to_string(), tool.clone()));
        }

        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
