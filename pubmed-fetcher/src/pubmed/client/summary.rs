//! ESummary API operations for turning PMIDs into paper records

use crate::error::Result;
use crate::pubmed::models::PaperRecord;
use crate::pubmed::responses::{ESummaryDocSum, ESummaryResponse};
use tracing::{debug, info, instrument, warn};

use super::PubMedClient;

impl PubMedClient {
    /// Fetch ESummary documents for `pmids` in one request and build a record for each
    ///
    /// Records come back in the order of `pmids`. An id missing from the
    /// response gets a record with default values instead of an error.
    /// An empty slice returns immediately without contacting the API.
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
    ///     let ids = vec!["31978945".to_string(), "33515491".to_string()];
    ///     for paper in client.fetch_details(&ids).await? {
    ///         println!("{}: {}", paper.pubmed_id, paper.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(pmids_count = pmids.len()))]
    pub async fn fetch_details(&self, pmids: &[String]) -> Result<Vec<PaperRecord>> {
        if pmids.is_empty() {
            debug!("No PMIDs provided, skipping ESummary request");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esummary.fcgi?db=pubmed&id={}&retmode=json",
            self.base_url,
            pmids.join(",")
        );

        debug!("Making ESummary API request");
        let response = self.make_request(&url).await?;
        let json_text = response.text().await?;

        let records = Self::parse_esummary_response(&json_text, pmids)?;
        info!(
            requested = pmids.len(),
            records = records.len(),
            "ESummary fetch completed"
        );

        Ok(records)
    }

    /// Parse an ESummary JSON body into one record per requested PMID
    pub(crate) fn parse_esummary_response(
        json_text: &str,
        pmids: &[String],
    ) -> Result<Vec<PaperRecord>> {
        let response: ESummaryResponse = serde_json::from_str(json_text)?;

        let records = pmids
            .iter()
            .map(|pmid| {
                let doc = match response.result.get(pmid) {
                    Some(value) => ESummaryDocSum::from_value(pmid, value),
                    None => {
                        warn!(uid = %pmid, "UID not found in ESummary response");
                        ESummaryDocSum::default()
                    }
                };

                if let Some(error) = &doc.error {
                    warn!(uid = %pmid, error = %error, "ESummary returned error for UID");
                }

                PaperRecord::from_summary(pmid.as_str(), doc.title, doc.pubdate, &doc.authors)
            })
            .collect();

        Ok(records)
    }
}
