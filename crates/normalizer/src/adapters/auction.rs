//! Auction market report adapter.

use crate::adapters::{FetchSource, MAX_RAW_RECORDS};
use crate::coalesce::{
    self, coalesce_date, coalesce_f64, coalesce_str, coalesce_u32, unwrap_results, RawRecord,
};
use crate::text_report::parse_text_report;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use common::{
    find_barn, normalize_category, AuctionReport, AuctionSale, PriceRange, SaleBarn, Trend,
    WeightRange,
};
use futures::future::join_all;
use metrics::counter;
use sources::ReportSource;
use tracing::debug;

/// Fetches weekly auction reports for a set of requested markets.
///
/// Fan-out: one upstream request per market, issued in parallel. A failure
/// or empty result for one market never blocks the others; partial success
/// is the normal outcome. Per market, the structured JSON report is tried
/// first and the plain-text rendition is parsed as a fallback.
pub struct AuctionAdapter<S> {
    source: S,
    slugs: Vec<String>,
}

impl<S: ReportSource> AuctionAdapter<S> {
    pub fn new(source: S, slugs: Vec<String>) -> Self {
        Self { source, slugs }
    }

    /// Fetch all requested markets and merge the successful results.
    pub async fn fetch_reports(&self) -> Vec<AuctionReport> {
        counter!("adapter_fetch_total", "adapter" => "auction").increment(1);

        let barns: Vec<&SaleBarn> = self
            .slugs
            .iter()
            .filter_map(|slug| {
                let barn = find_barn(slug);
                if barn.is_none() {
                    debug!("unknown market slug: {}", slug);
                }
                barn
            })
            .collect();

        let fetches = barns.iter().map(|barn| self.fetch_market(barn));
        join_all(fetches).await.into_iter().flatten().collect()
    }

    async fn fetch_market(&self, barn: &SaleBarn) -> Option<AuctionReport> {
        match self.source.fetch_report(barn.report_slug).await {
            Ok(payload) => {
                let raw = unwrap_results(&payload);
                if let Some(report) = build_report(barn, &raw) {
                    return Some(report);
                }
            }
            Err(e) => debug!("auction report fetch failed for {}: {}", barn.slug, e),
        }

        // Structured feed unusable; try the plain-text rendition.
        match self.source.fetch_report_text(barn.report_slug).await {
            Ok(text) => report_from_text(barn, &text),
            Err(e) => {
                debug!("text report fetch failed for {}: {}", barn.slug, e);
                counter!("adapter_empty_total", "adapter" => "auction").increment(1);
                None
            }
        }
    }
}

#[async_trait]
impl<S: ReportSource> FetchSource<AuctionReport> for AuctionAdapter<S> {
    fn name(&self) -> &'static str {
        "auction"
    }

    async fn fetch(&self) -> Option<Vec<AuctionReport>> {
        Some(self.fetch_reports().await)
    }
}

/// Build a report from structured records. `None` when no sale survives
/// the positivity filter.
fn build_report(barn: &SaleBarn, raw: &[RawRecord]) -> Option<AuctionReport> {
    let today = Utc::now().date_naive();
    let sales: Vec<AuctionSale> = raw
        .iter()
        .take(MAX_RAW_RECORDS)
        .filter_map(|rec| normalize_sale(rec, barn, today))
        .collect();
    if sales.is_empty() {
        return None;
    }

    let report_date = sales[0].report_date;
    let title = match raw.first().map(|r| coalesce_str(r, coalesce::REPORT_TITLE_FIELDS)) {
        Some(t) if !t.is_empty() => t,
        _ => format!("{} Weekly Summary", barn.name),
    };
    let commentary = raw
        .first()
        .map(|r| coalesce_str(r, coalesce::COMMENTARY_FIELDS))
        .filter(|c| !c.is_empty());

    Some(AuctionReport::new(report_date, title, barn.name, sales, commentary))
}

fn normalize_sale(rec: &RawRecord, barn: &SaleBarn, default_date: NaiveDate) -> Option<AuctionSale> {
    let avg_price = coalesce_f64(rec, coalesce::AVG_PRICE_FIELDS);
    // Zero/negative prices are placeholder rows, not sales.
    if avg_price <= 0.0 {
        return None;
    }

    let grade = coalesce_str(rec, coalesce::GRADE_FIELDS);
    Some(AuctionSale {
        report_date: coalesce_date(rec, coalesce::REPORT_DATE_FIELDS).unwrap_or(default_date),
        location: format!("{}, {}", barn.city, barn.state),
        head_count: coalesce_u32(rec, coalesce::HEAD_COUNT_FIELDS),
        avg_price,
        price_range: PriceRange {
            low: coalesce_f64(rec, coalesce::PRICE_LOW_FIELDS),
            high: coalesce_f64(rec, coalesce::PRICE_HIGH_FIELDS),
        },
        weight_range: WeightRange {
            low: coalesce_f64(rec, coalesce::WEIGHT_LOW_FIELDS),
            high: coalesce_f64(rec, coalesce::WEIGHT_HIGH_FIELDS),
        },
        category: normalize_category(&coalesce_str(rec, coalesce::CATEGORY_FIELDS)),
        grade: (!grade.is_empty()).then_some(grade),
        trend: Trend::from_text(&coalesce_str(rec, coalesce::TREND_FIELDS)),
    })
}

/// Best-effort report from the plain-text rendition. Text rows carry no
/// ranges or dates, so the price range collapses to the single price and
/// the report is dated today.
fn report_from_text(barn: &SaleBarn, text: &str) -> Option<AuctionReport> {
    let today = Utc::now().date_naive();
    let sales: Vec<AuctionSale> = parse_text_report(text)
        .into_iter()
        .take(MAX_RAW_RECORDS)
        .filter(|row| row.price > 0.0)
        .map(|row| AuctionSale {
            report_date: today,
            location: format!("{}, {}", barn.city, barn.state),
            head_count: row.head_count,
            avg_price: row.price,
            price_range: PriceRange { low: row.price, high: row.price },
            weight_range: WeightRange { low: 0.0, high: 0.0 },
            category: normalize_category(&row.category),
            grade: None,
            trend: None,
        })
        .collect();
    if sales.is_empty() {
        return None;
    }

    Some(AuctionReport::new(
        today,
        format!("{} Weekly Summary", barn.name),
        barn.name,
        sales,
        None,
    ))
}
