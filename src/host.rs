use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::error::MatchError;

/// Client for the image corpus host.
///
/// The host serves static images under `/images/<category>/<file>` and two
/// JSON endpoints returning a random image URL, per category and global.
pub struct ImageHost {
    client: Client,
    base_url: String,
    probe_timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    image: Option<String>,
}

impl ImageHost {
    pub fn new(base_url: impl Into<String>, timeout: Duration, probe_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        let base_url: String = base_url.into();
        ImageHost {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            probe_timeout,
        }
    }

    /// Full URL for a catalog image path like "dessert/dessert24.jpg".
    pub fn image_url(&self, image_path: &str) -> String {
        format!("{}/images/{}", self.base_url, image_path)
    }

    /// Full URL for the n-th image of a category.
    pub fn indexed_image_url(&self, category: &str, index: u32) -> String {
        format!("{}/images/{}/{}{}.jpg", self.base_url, category, category, index)
    }

    /// Lightweight existence probe: HEAD with a short timeout, 200 = present.
    /// Any error counts as absent.
    pub async fn probe(&self, url: &str) -> bool {
        let result = self
            .client
            .head(url)
            .timeout(self.probe_timeout)
            .send()
            .await;
        match result {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(error) => {
                debug!("Probe failed for {}: {}", url, error);
                false
            }
        }
    }

    /// Ask the host for a random image within a category.
    pub async fn random_from_category(&self, category: &str) -> Result<Option<String>, MatchError> {
        let url = format!("{}/api/images/{}", self.base_url, category);
        self.fetch_image_field(&url).await
    }

    /// Ask the host for a random image from any category.
    pub async fn random(&self) -> Result<Option<String>, MatchError> {
        let url = format!("{}/api/", self.base_url);
        self.fetch_image_field(&url).await
    }

    async fn fetch_image_field(&self, url: &str) -> Result<Option<String>, MatchError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let body: ImageResponse = response.json().await?;
        Ok(body.image)
    }
}
