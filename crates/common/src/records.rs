//! Normalized record definitions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Low/high price bounds in dollars per cwt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub low: f64,
    pub high: f64,
}

/// Low/high weight bounds in pounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub low: f64,
    pub high: f64,
}

/// Price discovery method for fed-cattle cash trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceType {
    /// Direct buyer-seller bargaining, live-weight basis. The most common
    /// unlabeled case, so it is also the default.
    Negotiated,
    /// Price tied to a pre-agreed formula on an external index.
    Formula,
    /// Forward contract priced off the futures board.
    Forward,
    /// Negotiated base with carcass-merit grid adjustments.
    NegotiatedGrid,
}

impl PriceType {
    /// Classify free-text purchase-type vocabulary. Case-insensitive
    /// substring match; anything unrecognized is treated as negotiated.
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("formula") {
            PriceType::Formula
        } else if lower.contains("forward") {
            PriceType::Forward
        } else if lower.contains("grid") {
            PriceType::NegotiatedGrid
        } else {
            PriceType::Negotiated
        }
    }
}

impl Default for PriceType {
    fn default() -> Self {
        PriceType::Negotiated
    }
}

/// Week-over-week price direction reported by the market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Higher,
    Lower,
    Steady,
}

impl Trend {
    /// Map free-text trend commentary to a direction.
    ///
    /// Returns `None` when the text carries no recognizable signal; the
    /// absence of a trend is distinct from "steady" and is preserved.
    pub fn from_text(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        if lower.contains("higher") || lower.contains("up") {
            Some(Trend::Higher)
        } else if lower.contains("lower") || lower.contains("down") {
            Some(Trend::Lower)
        } else if lower.contains("steady") || lower.contains("unch") {
            Some(Trend::Steady)
        } else {
            None
        }
    }
}

/// One category/grade lot within an auction market report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionSale {
    pub report_date: NaiveDate,
    /// Market location, "City, ST".
    pub location: String,
    pub head_count: u32,
    /// Average price in $/cwt. Always > 0; rows at or below zero are
    /// placeholder noise and are dropped during normalization.
    pub avg_price: f64,
    pub price_range: PriceRange,
    pub weight_range: WeightRange,
    /// Normalized livestock class (see [`crate::normalize_category`]).
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

/// One market's weekly auction report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionReport {
    pub report_date: NaiveDate,
    pub title: String,
    pub market: String,
    /// Sum of the constituent sale head counts.
    pub total_head: u32,
    pub sales: Vec<AuctionSale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
}

impl AuctionReport {
    /// Build a report from its sales, deriving the total head count.
    pub fn new(
        report_date: NaiveDate,
        title: impl Into<String>,
        market: impl Into<String>,
        sales: Vec<AuctionSale>,
        commentary: Option<String>,
    ) -> Self {
        let total_head = sales.iter().map(|s| s.head_count).sum();
        Self {
            report_date,
            title: title.into(),
            market: market.into(),
            total_head,
            sales,
            commentary,
        }
    }
}

/// One price-type/region cell from a cash trade report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashPrice {
    pub report_date: NaiveDate,
    pub price_type: PriceType,
    pub region: String,
    pub head_count: u32,
    /// Weighted average price in $/cwt, live basis. Always > 0.
    pub weighted_avg_price: f64,
    pub price_range: PriceRange,
    /// Average live weight in pounds.
    pub avg_weight: f64,
    /// Dressed-basis price in $/cwt of carcass weight, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dressed_price: Option<f64>,
}

/// A dated set of cash price cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashPriceReport {
    pub report_date: NaiveDate,
    pub prices: Vec<CashPrice>,
}

/// One week of federally inspected slaughter counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaughterWeek {
    pub week_ending: NaiveDate,
    pub head_count: u64,
    pub prev_week: u64,
    pub prev_year: u64,
    /// Percent change vs the prior week; 0.0 when the prior figure is 0.
    pub pct_change_week: f64,
    /// Percent change vs the same week a year ago; 0.0 when unknown.
    pub pct_change_year: f64,
    pub region: String,
}

impl SlaughterWeek {
    /// Build a week, deriving both percent-change fields.
    pub fn new(
        week_ending: NaiveDate,
        head_count: u64,
        prev_week: u64,
        prev_year: u64,
        region: impl Into<String>,
    ) -> Self {
        Self {
            week_ending,
            head_count,
            prev_week,
            prev_year,
            pct_change_week: pct_change(head_count, prev_week),
            pct_change_year: pct_change(head_count, prev_year),
            region: region.into(),
        }
    }
}

fn pct_change(current: u64, prior: u64) -> f64 {
    if prior == 0 {
        return 0.0;
    }
    (current as f64 - prior as f64) / prior as f64 * 100.0
}

/// Whether a futures quote came from the upstream feed or was synthesized
/// locally from the front month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteProvenance {
    /// Genuine (delayed) quote from the upstream source.
    Live,
    /// Deferred month estimated from the front-month price. Indicative
    /// only, never authoritative.
    Synthetic,
}

/// A single futures contract quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuturesContract {
    /// Contract symbol, e.g. "LEG26".
    pub symbol: String,
    /// Product name, e.g. "Live Cattle".
    pub display_name: String,
    /// Human contract-month label, e.g. "Feb 2026".
    pub contract_month: String,
    pub last: f64,
    pub change: f64,
    pub change_pct: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub timestamp: DateTime<Utc>,
    pub provenance: QuoteProvenance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_type_from_text() {
        assert_eq!(PriceType::from_text("FORMULA NET"), PriceType::Formula);
        assert_eq!(PriceType::from_text("Forward Contract"), PriceType::Forward);
        assert_eq!(
            PriceType::from_text("Negotiated Grid Net"),
            PriceType::NegotiatedGrid
        );
        // Anything unrecognized defaults to negotiated.
        assert_eq!(PriceType::from_text("Negotiated Cash"), PriceType::Negotiated);
        assert_eq!(PriceType::from_text(""), PriceType::Negotiated);
        assert_eq!(PriceType::from_text("something else"), PriceType::Negotiated);
    }

    #[test]
    fn test_trend_from_text() {
        assert_eq!(Trend::from_text("5.00 higher"), Some(Trend::Higher));
        assert_eq!(Trend::from_text("mostly 2-4 LOWER"), Some(Trend::Lower));
        assert_eq!(Trend::from_text("steady to weak"), Some(Trend::Steady));
        assert_eq!(Trend::from_text("UNCH"), Some(Trend::Steady));
    }

    #[test]
    fn test_trend_absence_is_none_not_steady() {
        assert_eq!(Trend::from_text(""), None);
        assert_eq!(Trend::from_text("N/A"), None);
        assert_eq!(Trend::from_text("no comparison available"), None);
    }

    #[test]
    fn test_auction_report_totals_head() {
        let sale = |head: u32| AuctionSale {
            report_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            location: "Ogallala, NE".to_string(),
            head_count: head,
            avg_price: 250.0,
            price_range: PriceRange { low: 240.0, high: 260.0 },
            weight_range: WeightRange { low: 500.0, high: 600.0 },
            category: "Steers".to_string(),
            grade: None,
            trend: None,
        };
        let report = AuctionReport::new(
            NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            "Weekly Summary",
            "Ogallala Livestock",
            vec![sale(120), sale(95)],
            None,
        );
        assert_eq!(report.total_head, 215);
    }

    #[test]
    fn test_slaughter_week_pct_change() {
        let week = SlaughterWeek::new(
            NaiveDate::from_ymd_opt(2025, 8, 9).unwrap(),
            605_000,
            550_000,
            0,
            "US",
        );
        assert!((week.pct_change_week - 10.0).abs() < 1e-9);
        // Unknown prior year yields 0.0 rather than a divide-by-zero.
        assert_eq!(week.pct_change_year, 0.0);
    }
}
