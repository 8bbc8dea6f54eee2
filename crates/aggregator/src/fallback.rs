//! The fallback chain.

use metrics::counter;
use normalizer::FetchSource;
use serde::Serialize;
use tracing::{debug, warn};

/// Status string attached when a chain falls through to static data.
pub const FALLBACK_STATUS: &str = "Live data unavailable; showing representative demo data.";

/// The outcome of one domain's aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct Aggregated<T> {
    pub records: Vec<T>,
    /// Name of the source that produced the records ("demo" when degraded).
    pub source: String,
    /// `None` for live data; a descriptive status string when the records
    /// came from the last-resort provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl<T> Aggregated<T> {
    pub fn is_fallback(&self) -> bool {
        self.status.is_some()
    }
}

/// Try sources strictly in priority order and accept the first non-empty
/// result. Sequential on purpose: a lower-priority source is only worth
/// its latency and upstream load if everything above it failed. When the
/// whole chain comes back empty, `last_resort` supplies the records and
/// the outcome is tagged with [`FALLBACK_STATUS`].
///
/// No source is retried within one request; re-invoking the chain belongs
/// to the caller on a later, independent request.
pub async fn run_chain<T>(
    chain: &[&dyn FetchSource<T>],
    last_resort: impl FnOnce() -> Vec<T>,
) -> Aggregated<T> {
    for source in chain {
        counter!("chain_attempts_total", "source" => source.name()).increment(1);
        match source.fetch().await {
            Some(records) if !records.is_empty() => {
                debug!("source {} returned {} records", source.name(), records.len());
                return Aggregated {
                    records,
                    source: source.name().to_string(),
                    status: None,
                };
            }
            _ => {
                debug!("source {} returned nothing, trying next", source.name());
                counter!("chain_empty_total", "source" => source.name()).increment(1);
            }
        }
    }

    warn!("all sources empty, serving demo data");
    counter!("chain_fallback_total").increment(1);
    Aggregated {
        records: last_resort(),
        source: "demo".to_string(),
        status: Some(FALLBACK_STATUS.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Canned source for chain tests.
    struct Canned {
        name: &'static str,
        result: Option<Vec<u32>>,
    }

    #[async_trait]
    impl FetchSource<u32> for Canned {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn fetch(&self) -> Option<Vec<u32>> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_first_non_empty_wins() {
        let primary = Canned { name: "primary", result: Some(vec![1, 2]) };
        let secondary = Canned { name: "secondary", result: Some(vec![9]) };
        let chain: [&dyn FetchSource<u32>; 2] = [&primary, &secondary];

        let outcome = run_chain(&chain, Vec::new).await;
        assert_eq!(outcome.records, vec![1, 2]);
        assert_eq!(outcome.source, "primary");
        assert!(outcome.status.is_none());
    }

    #[tokio::test]
    async fn test_empty_primary_falls_through_to_secondary() {
        let primary = Canned { name: "primary", result: Some(vec![]) };
        let secondary = Canned { name: "secondary", result: Some(vec![7, 8, 9]) };
        let chain: [&dyn FetchSource<u32>; 2] = [&primary, &secondary];

        let outcome = run_chain(&chain, Vec::new).await;
        assert_eq!(outcome.records, vec![7, 8, 9]);
        assert_eq!(outcome.source, "secondary");
        assert!(!outcome.is_fallback());
    }

    #[tokio::test]
    async fn test_none_is_treated_like_empty() {
        let primary = Canned { name: "primary", result: None };
        let secondary = Canned { name: "secondary", result: Some(vec![3]) };
        let chain: [&dyn FetchSource<u32>; 2] = [&primary, &secondary];

        let outcome = run_chain(&chain, Vec::new).await;
        assert_eq!(outcome.records, vec![3]);
    }

    #[tokio::test]
    async fn test_total_failure_uses_last_resort_with_status() {
        let primary = Canned { name: "primary", result: None };
        let secondary = Canned { name: "secondary", result: Some(vec![]) };
        let chain: [&dyn FetchSource<u32>; 2] = [&primary, &secondary];

        let outcome = run_chain(&chain, || vec![42]).await;
        assert_eq!(outcome.records, vec![42]);
        assert_eq!(outcome.source, "demo");
        assert_eq!(outcome.status.as_deref(), Some(FALLBACK_STATUS));
        assert!(outcome.is_fallback());
    }
}
