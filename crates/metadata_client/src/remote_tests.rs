//! Unit tests for the HTTP metadata client, backed by a mock server.

use super::*;
use crate::models::AddressField;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RemoteMetadataClient {
    let endpoint = Url::parse(&format!("{}/address", server.uri())).unwrap();
    RemoteMetadataClient::new(RemoteClientConfig::new(endpoint))
}

#[tokio::test]
async fn test_returns_record_when_service_has_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/address/data/XX"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id": "data/XX", "fmt": "%N%n%A%n%C", "require": "AC", "sub_keys": "XA~XB"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let country = client.query_country("data/XX").await.unwrap().unwrap();

    assert_eq!(country.id.as_deref(), Some("data/XX"));
    assert_eq!(country.format.as_deref(), Some("%N%n%A%n%C"));
    assert_eq!(
        country.required,
        Some(vec![AddressField::StreetAddress, AddressField::Locality])
    );
    assert_eq!(
        country.child_keys,
        Some(vec!["XA".to_string(), "XB".to_string()])
    );
}

#[tokio::test]
async fn test_missing_record_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/address/data/XX"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.query_country("data/XX").await.unwrap();

    assert_eq!(result, None);
}

#[tokio::test]
async fn test_server_failure_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/address/data/XX"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.query_country("data/XX").await;

    assert!(matches!(result, Err(Error::Transport(_))));
}

#[tokio::test]
async fn test_malformed_body_is_a_deserialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/address/data/XX"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.query_country("data/XX").await;

    assert!(matches!(result, Err(Error::Deserialization(_))));
}

#[tokio::test]
async fn test_language_suffixed_identifier_is_requested_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/address/data/XX/ZZ--en"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id": "data/XX/ZZ--en"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let province = client.query_province("data/XX/ZZ--en").await.unwrap().unwrap();

    assert_eq!(province.id.as_deref(), Some("data/XX/ZZ--en"));
}
