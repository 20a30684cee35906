// API client module: a small blocking HTTP client for the realm status
// endpoint. One GET per call, no retries, no auth.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::models::Response;

pub const DEFAULT_HOST: &str = "battle.net";
pub const DEFAULT_REGION: &str = "us";

/// Holds a reqwest blocking client plus the region and host the status
/// URL is built from.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    region: String,
    host: String,
}

impl ApiClient {
    /// Build a client for `<region>.<host>`. The request has no timeout.
    pub fn new(region: &str, host: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client, region, host))
    }

    /// Use a preconfigured reqwest client.
    pub fn with_client(client: Client, region: &str, host: &str) -> Self {
        ApiClient {
            client,
            region: region.to_string(),
            host: host.to_string(),
        }
    }

    /// Region and realm list are passed through as given.
    pub fn status_url(&self, realms: &str) -> String {
        format!(
            "http://{}.{}/api/wow/realm/status?realms={}",
            self.region, self.host, realms
        )
    }

    /// GET the status endpoint and decode the body. The status code is only
    /// logged; the body is decoded either way.
    pub fn fetch_status(&self, realms: &str) -> Result<Response> {
        let url = self.status_url(realms);
        debug!(%url, "requesting realm status");

        let res = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to send realm status request to {url}"))?;
        let status = res.status();
        if !status.is_success() {
            warn!(%status, %url, "realm status endpoint returned a non-success status");
        }

        // `res` is dropped on both paths below, which releases the connection.
        let resp = Response::from_reader(res)
            .with_context(|| format!("Parsing realm status json (HTTP {status})"))?;
        debug!(realms = resp.realms.len(), "decoded realm status");
        Ok(resp)
    }
}
