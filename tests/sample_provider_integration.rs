//! Integration tests for the sample provider using wiremock

use core::time::Duration;
use demostat::sample::{Gender, Provider, SampleRequest};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESPONSE_BODY: &str = r#"{
    "results": [
        {
            "gender": "female",
            "name": {"title": "Mrs", "first": "Silje", "last": "Madsen"},
            "dob": {"date": "1983-07-14T07:29:45.213Z", "age": 42},
            "location": {"country": "Denmark", "city": "Copenhagen"},
            "registered": {"date": "2012-02-09T20:28:13.522Z", "age": 13}
        },
        {
            "gender": "male",
            "name": {"title": "Mr", "first": "Diego", "last": "Ortega"},
            "dob": {"date": "2001-11-02T11:04:18.094Z", "age": 24},
            "location": {"country": "Spain", "city": "Sevilla"},
            "registered": {"date": "2019-08-30T02:51:40.017Z", "age": 6}
        }
    ],
    "info": {"seed": "abc123", "results": 2, "page": 1, "version": "1.4"}
}"#;

fn provider_for(server: &MockServer) -> Provider {
    let base_url = Url::parse(&format!("{}/api/", server.uri())).expect("mock server URI should parse");
    Provider::new(Some(&base_url), Duration::from_secs(5)).expect("failed to create provider")
}

#[tokio::test]
async fn test_fetch_sample_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("results", "2"))
        .and(query_param("seed", "abc123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(RESPONSE_BODY, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let request = SampleRequest {
        results: 2,
        seed: Some("abc123".to_string()),
        nationalities: Vec::new(),
    };

    let sample = provider.fetch_sample(&request).await.expect("fetch should succeed");

    assert_eq!(sample.len(), 2);
    assert_eq!(sample.info.seed, "abc123");

    let first = &sample.records[0];
    assert_eq!(first.gender, Gender::Female);
    assert_eq!(first.age(), 42);
    assert_eq!(first.country(), "Denmark");
    assert_eq!(first.registration_year(), 2012);

    let second = &sample.records[1];
    assert_eq!(second.gender, Gender::Male);
    assert_eq!(second.registration_year(), 2019);
}

#[tokio::test]
async fn test_fetch_sample_restricts_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("inc", "gender,dob,location,registered"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(RESPONSE_BODY, "application/json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let request = SampleRequest {
        results: 2,
        seed: None,
        nationalities: Vec::new(),
    };

    let sample = provider.fetch_sample(&request).await.expect("fetch should succeed");
    assert_eq!(sample.len(), 2);
}

#[tokio::test]
async fn test_fetch_sample_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let request = SampleRequest {
        results: 10,
        seed: None,
        nationalities: Vec::new(),
    };

    let err = provider.fetch_sample(&request).await.expect_err("fetch should fail");
    assert!(err.to_string().contains("503"), "error should mention the status: {err}");
}

#[tokio::test]
async fn test_fetch_sample_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let request = SampleRequest {
        results: 10,
        seed: None,
        nationalities: Vec::new(),
    };

    assert!(provider.fetch_sample(&request).await.is_err());
}

#[tokio::test]
async fn test_fetch_sample_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"results\": \"oops\"}", "application/json"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let request = SampleRequest {
        results: 1,
        seed: None,
        nationalities: Vec::new(),
    };

    let err = provider.fetch_sample(&request).await.expect_err("fetch should fail");
    assert!(err.to_string().contains("decode"), "error should mention decoding: {err}");
}

#[tokio::test]
async fn test_fetch_sample_empty_results() {
    let mock_server = MockServer::start().await;

    let body = r#"{"results": [], "info": {"seed": "xyz", "results": 0, "page": 1, "version": "1.4"}}"#;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let request = SampleRequest {
        results: 5,
        seed: None,
        nationalities: Vec::new(),
    };

    let sample = provider.fetch_sample(&request).await.expect("fetch should succeed");
    assert!(sample.is_empty());
}
