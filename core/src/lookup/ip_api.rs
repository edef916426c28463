//! HTTP client for the ip-api.com JSON endpoint.
//!
//! One GET per lookup, no timeout, retry or cache. A body whose `status` is
//! `"fail"` is a service-reported failure; any other JSON object is a record.

use anyhow::{Context, ensure};
use async_trait::async_trait;
use ipterm_common::network::record::{FIELDS, LookupRecord};
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;

use super::{GeoLookup, LookupError};

const FAIL_STATUS: &str = "fail";

pub struct IpApiClient {
    client: Client,
    endpoint: Url,
}

impl IpApiClient {
    /// Builds a client for the service rooted at `endpoint`, e.g. `http://ip-api.com`.
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid lookup endpoint '{endpoint}'"))?;
        ensure!(
            !endpoint.cannot_be_a_base(),
            "lookup endpoint '{endpoint}' cannot carry a path"
        );

        let client = ClientBuilder::new()
            .user_agent(concat!("ipterm/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// `{endpoint}/json/{address}?fields=...` with the address as one
    /// percent-encoded path segment, so a zone id like `%eth0` survives.
    pub fn request_url(&self, address: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("json").push(address);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("fields", &FIELDS.join(","));
        url
    }
}

#[async_trait]
impl GeoLookup for IpApiClient {
    async fn lookup(&self, address: &str) -> Result<LookupRecord, LookupError> {
        let url = self.request_url(address);
        debug!("Querying {} for {}", self.name(), address);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        trace!("Received {} bytes from {}", body.len(), self.name());
        parse_response(&body)
    }

    fn name(&self) -> &'static str {
        "ip-api"
    }
}

fn parse_response(body: &[u8]) -> Result<LookupRecord, LookupError> {
    let value: Value = serde_json::from_slice(body)?;

    if value.get("status").and_then(Value::as_str) == Some(FAIL_STATUS) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        return Err(LookupError::Service { message });
    }

    Ok(serde_json::from_value(value)?)
}
