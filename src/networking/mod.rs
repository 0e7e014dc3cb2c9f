use std::time::Duration;

use log::{info, warn};
use reqwest::Client;

use crate::bundle::models::Manifest;

#[derive(Clone)]
pub struct NetworkClient {
    client: Client,
}

impl NetworkClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|err| {
                warn!("network client: falling back to default HTTP client configuration ({err})");
                Client::new()
            });
        Self { client }
    }

    /// Download and decode `{base_url}/manifest.json` for the instance.
    pub async fn fetch_manifest(&self, base_url: &str) -> Result<Manifest, String> {
        let url = format!("{}/manifest.json", base_url.trim_end_matches('/'));
        info!("fetch: downloading manifest from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("GET {url} failed: {e}"))?;
        if !response.status().is_success() {
            return Err(format!(
                "failed to download manifest.json from this instance (status {})",
                response.status()
            ));
        }

        response
            .json()
            .await
            .map_err(|e| format!("invalid manifest.json: {e}"))
    }

    /// Download `{base_url}/favicon.png` as raw bytes.
    pub async fn fetch_icon(&self, base_url: &str) -> Result<Vec<u8>, String> {
        let url = format!("{}/favicon.png", base_url.trim_end_matches('/'));
        info!("fetch: downloading favicon from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("GET {url} failed: {e}"))?;
        if !response.status().is_success() {
            return Err(format!(
                "failed to download favicon.png from this instance (status {})",
                response.status()
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("failed to read favicon.png body: {e}"))?;
        Ok(bytes.to_vec())
    }
}
