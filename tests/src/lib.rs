//! Fixtures shared by the integration suites.

use ipterm_common::network::record::FIELDS;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A full answer for 8.8.8.8, in the service's own key order.
pub fn google_dns_body() -> Value {
    json!({
        "status": "success",
        "continent": "North America",
        "continentCode": "NA",
        "country": "United States",
        "countryCode": "US",
        "region": "VA",
        "regionName": "Virginia",
        "city": "Ashburn",
        "district": "",
        "zip": "20149",
        "lat": 39.03,
        "lon": -77.5,
        "timezone": "America/New_York",
        "offset": -14400,
        "currency": "USD",
        "isp": "Google LLC",
        "org": "Google Public DNS",
        "as": "AS15169 Google LLC",
        "asname": "GOOGLE",
        "reverse": "dns.google",
        "mobile": false,
        "proxy": false,
        "hosting": true,
        "query": "8.8.8.8"
    })
}

pub fn fail_body(message: Option<&str>) -> Value {
    match message {
        Some(message) => json!({ "status": "fail", "message": message }),
        None => json!({ "status": "fail" }),
    }
}

/// Mounts a GET handler for `/json/{encoded_address}` that insists on the
/// full field list and expects to be hit exactly `hits` times.
pub async fn mount_lookup(
    server: &MockServer,
    encoded_address: &str,
    response: ResponseTemplate,
    hits: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("/json/{encoded_address}")))
        .and(query_param("fields", FIELDS.join(",")))
        .respond_with(response)
        .expect(hits)
        .mount(server)
        .await;
}
