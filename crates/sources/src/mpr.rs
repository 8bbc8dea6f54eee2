//! USDA market report client.

use crate::error::{Error, Result};
use crate::traits::ReportSource;
use crate::REQUEST_TIMEOUT_SECS;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Base URL for the USDA Market News API.
const MARS_API_BASE_URL: &str = "https://marsapi.ams.usda.gov/services/v1.2";

/// Client for USDA market reports (auction summaries, direct cash trade,
/// 5-area weighted averages, weekly slaughter).
#[derive(Debug, Clone)]
pub struct MprClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl MprClient {
    /// Create a client against the production API. The key is optional;
    /// without one the public (rate-limited) tier is used.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(MARS_API_BASE_URL, api_key)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .get(url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));
        if let Some(key) = &self.api_key {
            // The API authenticates with the key as the basic-auth user.
            req = req.basic_auth(key, Option::<&str>::None);
        }
        req
    }
}

#[async_trait]
impl ReportSource for MprClient {
    async fn fetch_report(&self, slug_id: &str) -> Result<Value> {
        let url = format!("{}/reports/{}", self.base_url, slug_id);
        debug!("fetching report from: {}", url);

        let response = self.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "report {} returned status {}",
                slug_id,
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    async fn fetch_report_text(&self, slug_id: &str) -> Result<String> {
        let url = format!("{}/reports/{}?format=text", self.base_url, slug_id);
        debug!("fetching text report from: {}", url);

        let response = self.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "text report {} returned status {}",
                slug_id,
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = MprClient::new(None);
        assert_eq!(client.base_url, MARS_API_BASE_URL);
        assert!(client.api_key.is_none());
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = MprClient::with_base_url("http://localhost:9090", Some("k".to_string()));
        assert_eq!(client.base_url, "http://localhost:9090");
        assert_eq!(client.api_key.as_deref(), Some("k"));
    }
}
