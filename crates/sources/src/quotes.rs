//! Delayed futures quote client.

use crate::error::{Error, Result};
use crate::traits::QuoteSource;
use crate::REQUEST_TIMEOUT_SECS;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Base URL for the delayed chart/quote endpoint.
const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Top-level chart response.
///
/// Every field defaults so a sparse or partially malformed payload
/// deserializes rather than erroring; the adapter decides what is usable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartResponse {
    #[serde(default)]
    pub chart: Chart,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Vec<ChartResult>,
}

/// One symbol's time-series: a metadata block plus parallel daily arrays.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    #[serde(default)]
    pub indicators: Indicators,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartMeta {
    #[serde(default)]
    pub symbol: String,
    #[serde(rename = "regularMarketPrice", default)]
    pub regular_market_price: f64,
    #[serde(rename = "previousClose", default)]
    pub previous_close: f64,
    #[serde(rename = "chartPreviousClose", default)]
    pub chart_previous_close: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

/// Parallel arrays of daily values. Entries are nullable upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

/// Client for the delayed quote source.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteClient {
    /// Create a client against the production endpoint.
    pub fn new() -> Self {
        Self::with_base_url(CHART_BASE_URL)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QuoteSource for QuoteClient {
    async fn fetch_chart(&self, symbol: &str) -> Result<ChartResponse> {
        let url = format!("{}/{}?interval=1d&range=5d", self.base_url, symbol);
        debug!("fetching chart from: {}", url);

        let response = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .header(reqwest::header::USER_AGENT, "Mozilla/5.0")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "quote for {} returned status {}",
                symbol,
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_payload_deserializes() {
        // A near-empty body still deserializes; defaults fill the gaps.
        let parsed: ChartResponse = serde_json::from_str(r#"{"chart":{}}"#).unwrap();
        assert!(parsed.chart.result.is_empty());

        let parsed: ChartResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(parsed.chart.result.is_empty());
    }

    #[test]
    fn test_full_payload_deserializes() {
        let body = r#"{
            "chart": {
                "result": [{
                    "meta": {
                        "symbol": "LE=F",
                        "regularMarketPrice": 186.5,
                        "previousClose": 185.0
                    },
                    "timestamp": [1755820800, 1755907200],
                    "indicators": {
                        "quote": [{
                            "open": [185.1, null],
                            "high": [187.0, 186.9],
                            "low": [184.8, 185.9],
                            "close": [185.0, 186.5],
                            "volume": [12000, 9800]
                        }]
                    }
                }]
            }
        }"#;
        let parsed: ChartResponse = serde_json::from_str(body).unwrap();
        let result = &parsed.chart.result[0];
        assert_eq!(result.meta.symbol, "LE=F");
        assert_eq!(result.meta.regular_market_price, 186.5);
        assert_eq!(result.indicators.quote[0].open[1], None);
        assert_eq!(result.indicators.quote[0].volume[0], Some(12000));
    }
}
