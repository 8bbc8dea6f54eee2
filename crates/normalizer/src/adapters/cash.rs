//! Fed-cattle cash price adapters.
//!
//! Two report families cover the same domain: the direct-slaughter cash
//! trade report and the 5-area weekly weighted average. They share one
//! normalization path; the fallback chain decides which result is used.

use crate::adapters::{FetchSource, MAX_RAW_RECORDS};
use crate::coalesce::{
    self, coalesce_date, coalesce_f64, coalesce_str, coalesce_u32, unwrap_results, RawRecord,
};
use async_trait::async_trait;
use chrono::Utc;
use common::{CashPrice, PriceRange, PriceType};
use metrics::counter;
use sources::ReportSource;
use tracing::debug;

/// Report slug id: Nebraska direct slaughter cattle, weekly.
const DIRECT_CASH_SLUG: &str = "2477";
/// Report slug id: 5-area weekly weighted average direct slaughter cattle.
const FIVE_AREA_SLUG: &str = "2466";

/// Direct-slaughter cash price adapter (primary cash source).
pub struct DirectCashAdapter<S> {
    source: S,
}

impl<S: ReportSource> DirectCashAdapter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S: ReportSource> FetchSource<CashPrice> for DirectCashAdapter<S> {
    fn name(&self) -> &'static str {
        "direct_cash"
    }

    async fn fetch(&self) -> Option<Vec<CashPrice>> {
        fetch_cash(&self.source, DIRECT_CASH_SLUG, "Nebraska", self.name()).await
    }
}

/// 5-area weekly weighted average adapter (secondary cash source).
pub struct FiveAreaCashAdapter<S> {
    source: S,
}

impl<S: ReportSource> FiveAreaCashAdapter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S: ReportSource> FetchSource<CashPrice> for FiveAreaCashAdapter<S> {
    fn name(&self) -> &'static str {
        "five_area_cash"
    }

    async fn fetch(&self) -> Option<Vec<CashPrice>> {
        fetch_cash(&self.source, FIVE_AREA_SLUG, "5 Area", self.name()).await
    }
}

async fn fetch_cash<S: ReportSource>(
    source: &S,
    slug_id: &str,
    default_region: &str,
    adapter: &'static str,
) -> Option<Vec<CashPrice>> {
    counter!("adapter_fetch_total", "adapter" => adapter).increment(1);

    let payload = match source.fetch_report(slug_id).await {
        Ok(p) => p,
        Err(e) => {
            debug!("{} fetch failed: {}", adapter, e);
            return None;
        }
    };

    let prices = normalize_cash_records(&unwrap_results(&payload), default_region);
    if prices.is_empty() {
        counter!("adapter_empty_total", "adapter" => adapter).increment(1);
    }
    Some(prices)
}

/// Normalize raw cash trade records, dropping rows without a positive
/// weighted average price.
fn normalize_cash_records(raw: &[RawRecord], default_region: &str) -> Vec<CashPrice> {
    let today = Utc::now().date_naive();
    raw.iter()
        .take(MAX_RAW_RECORDS)
        .filter_map(|rec| {
            let weighted_avg_price = coalesce_f64(rec, coalesce::AVG_PRICE_FIELDS);
            if weighted_avg_price <= 0.0 {
                return None;
            }

            let region = coalesce_str(rec, coalesce::REGION_FIELDS);
            let dressed = coalesce_f64(rec, coalesce::DRESSED_PRICE_FIELDS);
            Some(CashPrice {
                report_date: coalesce_date(rec, coalesce::REPORT_DATE_FIELDS).unwrap_or(today),
                price_type: PriceType::from_text(&coalesce_str(rec, coalesce::PRICE_TYPE_FIELDS)),
                region: if region.is_empty() {
                    default_region.to_string()
                } else {
                    region
                },
                head_count: coalesce_u32(rec, coalesce::HEAD_COUNT_FIELDS),
                weighted_avg_price,
                price_range: PriceRange {
                    low: coalesce_f64(rec, coalesce::PRICE_LOW_FIELDS),
                    high: coalesce_f64(rec, coalesce::PRICE_HIGH_FIELDS),
                },
                avg_weight: coalesce_f64(rec, coalesce::AVG_WEIGHT_FIELDS),
                dressed_price: (dressed > 0.0).then_some(dressed),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use sources::{Error, Result};

    struct FakeSource {
        payload: Value,
    }

    #[async_trait]
    impl ReportSource for FakeSource {
        async fn fetch_report(&self, _slug_id: &str) -> Result<Value> {
            if self.payload.is_null() {
                return Err(Error::Api("down".to_string()));
            }
            Ok(self.payload.clone())
        }

        async fn fetch_report_text(&self, _slug_id: &str) -> Result<String> {
            Err(Error::Api("no text".to_string()))
        }
    }

    fn fixture() -> Value {
        json!({"results": [
            {
                "report_date": "08/15/2025",
                "purchase_type": "Negotiated Cash",
                "region": "Nebraska",
                "head_count": "12,420",
                "wtd_avg_price": "238.64",
                "price_low": "236.00",
                "price_high": "241.50",
                "avg_weight": "1,412",
                "dressed_price": "376.20"
            },
            {
                "purchase_type": "FORMULA NET",
                "wtd_avg": "240.10",
                "avg_weight": "1,405"
            },
            {
                "purchase_type": "Negotiated Grid Net",
                "wtd_avg": "-1.00"
            }
        ]})
    }

    #[tokio::test]
    async fn test_normalizes_and_filters() {
        let adapter = DirectCashAdapter::new(FakeSource { payload: fixture() });
        let prices = adapter.fetch().await.unwrap();

        // The grid row has a sentinel negative price and is dropped.
        assert_eq!(prices.len(), 2);

        let negotiated = &prices[0];
        assert_eq!(negotiated.price_type, PriceType::Negotiated);
        assert_eq!(negotiated.head_count, 12_420);
        assert_eq!(negotiated.weighted_avg_price, 238.64);
        assert_eq!(negotiated.dressed_price, Some(376.20));
        assert_eq!(negotiated.region, "Nebraska");

        let formula = &prices[1];
        assert_eq!(formula.price_type, PriceType::Formula);
        // Region missing upstream; the adapter default fills in.
        assert_eq!(formula.region, "Nebraska");
        assert_eq!(formula.dressed_price, None);
    }

    #[tokio::test]
    async fn test_five_area_default_region() {
        let adapter = FiveAreaCashAdapter::new(FakeSource {
            payload: json!([{"wtd_avg": "239.00"}]),
        });
        let prices = adapter.fetch().await.unwrap();
        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].region, "5 Area");
    }

    #[tokio::test]
    async fn test_failure_yields_none() {
        let adapter = DirectCashAdapter::new(FakeSource { payload: Value::Null });
        assert!(adapter.fetch().await.is_none());
    }

    #[tokio::test]
    async fn test_empty_shapes_yield_empty() {
        for payload in [json!({}), json!([]), json!({"results": []})] {
            let adapter = DirectCashAdapter::new(FakeSource { payload });
            assert_eq!(adapter.fetch().await, Some(vec![]));
        }
    }
}
