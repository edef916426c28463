#![cfg(test)]
use ipterm_common::messages;
use ipterm_core::lookup::{GeoLookup, IpApiClient, LookupError};
use ipterm_integration_tests::{fail_body, google_dns_body, mount_lookup};
use wiremock::{MockServer, ResponseTemplate};

#[tokio::test]
async fn lookup_success_returns_full_record() {
    let server = MockServer::start().await;
    mount_lookup(
        &server,
        "8.8.8.8",
        ResponseTemplate::new(200).set_body_json(google_dns_body()),
        1,
    )
    .await;

    let client = IpApiClient::new(&server.uri()).unwrap();
    let record = client.lookup("8.8.8.8").await.unwrap();

    assert_eq!(record.status(), Some("success"));
    assert_eq!(record.city(), Some("Ashburn"));
    assert_eq!(record.longitude(), Some(-77.5));
    assert_eq!(record.get("proxy"), Some(&serde_json::Value::Bool(false)));
    assert_eq!(record.query(), Some("8.8.8.8"));
    assert_eq!(record.rows().len(), 24);
}

#[tokio::test]
async fn lookup_service_failure_passes_message_through() {
    let server = MockServer::start().await;
    mount_lookup(
        &server,
        "10.0.0.1",
        ResponseTemplate::new(200).set_body_json(fail_body(Some("private range"))),
        1,
    )
    .await;

    let client = IpApiClient::new(&server.uri()).unwrap();
    let err = client.lookup("10.0.0.1").await.unwrap_err();

    assert!(matches!(err, LookupError::Service { .. }));
    assert_eq!(err.user_message(), "private range");
}

#[tokio::test]
async fn lookup_service_failure_without_message_uses_fallback() {
    let server = MockServer::start().await;
    mount_lookup(
        &server,
        "127.0.0.1",
        ResponseTemplate::new(200).set_body_json(fail_body(None)),
        1,
    )
    .await;

    let client = IpApiClient::new(&server.uri()).unwrap();
    let err = client.lookup("127.0.0.1").await.unwrap_err();

    assert_eq!(err.user_message(), messages::LOOKUP_FAILED);
}

#[tokio::test]
async fn lookup_non_success_status_is_generic_error() {
    let server = MockServer::start().await;
    mount_lookup(
        &server,
        "1.1.1.1",
        ResponseTemplate::new(429).set_body_json(google_dns_body()),
        1,
    )
    .await;

    let client = IpApiClient::new(&server.uri()).unwrap();
    let err = client.lookup("1.1.1.1").await.unwrap_err();

    assert!(matches!(err, LookupError::Status(429)));
    assert_eq!(err.user_message(), messages::LOOKUP_ERROR);
}

#[tokio::test]
async fn lookup_malformed_body_is_generic_error() {
    let server = MockServer::start().await;
    mount_lookup(
        &server,
        "1.1.1.1",
        ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
        1,
    )
    .await;

    let client = IpApiClient::new(&server.uri()).unwrap();
    let err = client.lookup("1.1.1.1").await.unwrap_err();

    assert!(matches!(err, LookupError::Decode(_)));
    assert_eq!(err.user_message(), messages::LOOKUP_ERROR);
}

#[tokio::test]
async fn lookup_unreachable_service_is_generic_error() {
    let client = IpApiClient::new("http://127.0.0.1:1").unwrap();
    let err = client.lookup("8.8.8.8").await.unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)));
    assert_eq!(err.user_message(), messages::LOOKUP_ERROR);
}

#[tokio::test]
async fn lookup_encodes_zone_id_in_path() {
    let server = MockServer::start().await;
    mount_lookup(
        &server,
        "fe80::1%25eth0",
        ResponseTemplate::new(200).set_body_json(fail_body(Some("reserved range"))),
        1,
    )
    .await;

    let client = IpApiClient::new(&server.uri()).unwrap();
    let err = client.lookup("fe80::1%eth0").await.unwrap_err();

    assert_eq!(err.user_message(), "reserved range");
}
