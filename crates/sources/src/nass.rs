//! NASS Quick Stats client.

use crate::error::{Error, Result};
use crate::traits::StatsSource;
use crate::REQUEST_TIMEOUT_SECS;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Base URL for the NASS Quick Stats API.
const QUICK_STATS_BASE_URL: &str = "https://quickstats.nass.usda.gov/api/api_GET";

/// Hierarchical descriptor query for Quick Stats.
///
/// The API is keyed by a taxonomy of `*_desc` parameters rather than a
/// report id; unset fields are simply omitted from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsQuery {
    pub source_desc: Option<String>,
    pub sector_desc: Option<String>,
    pub group_desc: Option<String>,
    pub commodity_desc: Option<String>,
    pub statisticcat_desc: Option<String>,
    pub freq_desc: Option<String>,
    pub agg_level_desc: Option<String>,
    pub year: Option<u16>,
}

impl StatsQuery {
    /// Weekly national cattle slaughter counts for the given year.
    pub fn cattle_slaughter(year: u16) -> Self {
        Self {
            source_desc: Some("SURVEY".to_string()),
            sector_desc: Some("ANIMALS & PRODUCTS".to_string()),
            group_desc: Some("LIVESTOCK".to_string()),
            commodity_desc: Some("CATTLE".to_string()),
            statisticcat_desc: Some("SLAUGHTERED".to_string()),
            freq_desc: Some("WEEKLY".to_string()),
            agg_level_desc: Some("NATIONAL".to_string()),
            year: Some(year),
        }
    }

    /// Flatten set fields into query parameters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let mut push = |name, value: &Option<String>| {
            if let Some(v) = value {
                params.push((name, v.clone()));
            }
        };
        push("source_desc", &self.source_desc);
        push("sector_desc", &self.sector_desc);
        push("group_desc", &self.group_desc);
        push("commodity_desc", &self.commodity_desc);
        push("statisticcat_desc", &self.statisticcat_desc);
        push("freq_desc", &self.freq_desc);
        push("agg_level_desc", &self.agg_level_desc);
        if let Some(year) = self.year {
            params.push(("year", year.to_string()));
        }
        params
    }
}

/// Client for the NASS Quick Stats API.
#[derive(Debug, Clone)]
pub struct NassClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NassClient {
    /// Create a client against the production API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(QUICK_STATS_BASE_URL, api_key)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl StatsSource for NassClient {
    async fn fetch_stats(&self, query: &StatsQuery) -> Result<Value> {
        let mut params = query.to_params();
        params.push(("key", self.api_key.clone()));
        params.push(("format", "JSON".to_string()));

        debug!("fetching quick stats: {:?}", query);

        let response = self
            .http
            .get(&self.base_url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "quick stats returned status {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}
