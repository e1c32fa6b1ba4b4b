//! Integration tests for ESummary fetching and the full search-then-fetch pipeline
//!
//! These tests use wiremock to simulate NCBI ESearch and ESummary responses.

use pubmed_fetcher::{ClientConfig, PaperRecord, PubMedClient};
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// ESummary answer where "222" is absent
const ESUMMARY_STUDY_A: &str = r#"{
    "header": {"type": "esummary", "version": "0.3"},
    "result": {
        "uids": ["111"],
        "111": {
            "uid": "111",
            "title": "Study A",
            "pubdate": "2020",
            "authors": [
                {"name": "Jane Doe", "affiliation": "Acme Pharma Inc"},
                {"name": "Bob Lee", "affiliation": "MIT university"}
            ]
        }
    }
}"#;

const ESUMMARY_WITH_EMAIL: &str = r#"{
    "result": {
        "uids": ["333"],
        "333": {
            "title": "Study C",
            "pubdate": "2023 Mar 14",
            "authors": [
                {"name": "Ann Smith", "affiliation": "Department of Oncology, Stanford University"},
                {"name": "Carl Wu", "affiliation": "Genentech Inc., South San Francisco. carl.wu@gene.com"},
                {"affiliation": "BioNTech SE, Mainz"},
                {"name": "Dee Ray", "affiliation": "Pfizer, dee@pfizer.com"}
            ]
        }
    }
}"#;

fn create_test_client(mock_server: &MockServer) -> PubMedClient {
    let config = ClientConfig::new().with_base_url(mock_server.uri());
    PubMedClient::with_config(config)
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn assert_lists_aligned(records: &[PaperRecord]) {
    for record in records {
        assert_eq!(
            record.non_academic_authors.len(),
            record.company_affiliations.len(),
            "author and affiliation lists diverged for {}",
            record.pubmed_id
        );
    }
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_sends_expected_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "111,222"))
        .and(query_param("retmode", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESUMMARY_STUDY_A))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let records = client
        .fetch_details(&ids(&["111", "222"]))
        .await
        .expect("fetch should succeed");

    assert_eq!(records.len(), 2);
    assert_lists_aligned(&records);

    let study_a = &records[0];
    assert_eq!(study_a.pubmed_id, "111");
    assert_eq!(study_a.title, "Study A");
    assert_eq!(study_a.publication_date, "2020");
    assert_eq!(study_a.non_academic_authors, vec!["Jane Doe"]);
    assert_eq!(study_a.company_affiliations, vec!["acme pharma inc"]);
    assert_eq!(study_a.corresponding_author_email, "Not Available");

    let missing = &records[1];
    assert_eq!(missing.pubmed_id, "222");
    assert_eq!(missing.title, "Unknown");
    assert_eq!(missing.publication_date, "Unknown");
    assert!(missing.non_academic_authors.is_empty());
    assert!(missing.company_affiliations.is_empty());
    assert_eq!(missing.corresponding_author_email, "Not Available");
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_email_and_unknown_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESUMMARY_WITH_EMAIL))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let records = client.fetch_details(&ids(&["333"])).await.unwrap();
    assert_lists_aligned(&records);

    let record = &records[0];
    assert_eq!(record.publication_date, "2023 Mar 14");
    assert_eq!(record.non_academic_authors, vec!["Carl Wu", "Unknown", "Dee Ray"]);
    assert_eq!(
        record.company_affiliations,
        vec![
            "genentech inc., south san francisco. carl.wu@gene.com",
            "biontech se, mainz",
            "pfizer, dee@pfizer.com",
        ]
    );
    assert_eq!(
        record.corresponding_author_email,
        "Genentech Inc., South San Francisco. carl.wu@gene.com"
    );
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_empty_input_makes_no_request() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let records = client
        .fetch_details(&[])
        .await
        .expect("Empty input should return Ok");
    assert!(records.is_empty());

    let received_requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        received_requests.len(),
        0,
        "No HTTP requests should be made for empty input"
    );
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_server_error_loses_batch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client
        .fetch_details(&ids(&["111", "222"]))
        .await
        .unwrap_err();

    assert!(err.is_network_error());
}

#[tokio::test]
#[traced_test]
async fn test_fetch_details_invalid_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.fetch_details(&ids(&["111"])).await.unwrap_err();

    assert!(err.is_malformed_response());
}

#[tokio::test]
#[traced_test]
async fn test_fetch_papers_pipeline() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("term", "cancer AND aspirin"))
        .and(query_param("retmax", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"esearchresult": {"count": "2", "idlist": ["111", "222"]}}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .and(query_param("id", "111,222"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ESUMMARY_STUDY_A))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let records = client.fetch_papers("cancer AND aspirin").await.unwrap();

    let pmids: Vec<&str> = records.iter().map(|r| r.pubmed_id.as_str()).collect();
    assert_eq!(pmids, vec!["111", "222"]);
    assert_eq!(records[0].non_academic_authors, vec!["Jane Doe"]);
    assert_eq!(records[1].title, "Unknown");
}

#[tokio::test]
#[traced_test]
async fn test_fetch_papers_respects_max_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("retmax", "3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"esearchresult": {"idlist": []}}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new()
        .with_base_url(mock_server.uri())
        .with_max_results(3);
    let client = PubMedClient::with_config(config);

    let records = client.fetch_papers("rare disease").await.unwrap();
    assert!(records.is_empty());

    // No hits, so ESummary is never called
    let received_requests = mock_server.received_requests().await.unwrap();
    assert_eq!(received_requests.len(), 1);
}
