//! Source traits the adapter layer is generic over.

use crate::error::Result;
use crate::nass::StatsQuery;
use crate::quotes::ChartResponse;
use async_trait::async_trait;
use serde_json::Value;

/// A provider of structured market reports, keyed by report slug id.
///
/// Responses are loosely typed: either a bare list of records or an object
/// wrapping the list under a `results` key. Callers resolve fields through
/// the coalescer rather than relying on any fixed shape.
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Fetch a report as JSON.
    async fn fetch_report(&self, slug_id: &str) -> Result<Value>;

    /// Fetch the plain-text rendition of a report, for markets where the
    /// structured feed is unavailable.
    async fn fetch_report_text(&self, slug_id: &str) -> Result<String>;
}

/// A provider of slaughter statistics keyed by a hierarchical taxonomy of
/// descriptors.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_stats(&self, query: &StatsQuery) -> Result<Value>;
}

/// A provider of delayed quotes, keyed by ticker symbol.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_chart(&self, symbol: &str) -> Result<ChartResponse>;
}
