//! Per-domain aggregation entry points.

use crate::demo::LastResort;
use crate::fallback::{run_chain, Aggregated};
use common::{AuctionReport, CashPrice, CashPriceReport, FuturesContract, SlaughterWeek};
use normalizer::{
    AuctionAdapter, DirectCashAdapter, FetchSource, FiveAreaCashAdapter, FuturesAdapter,
    LmprSlaughterAdapter, NassSlaughterAdapter,
};
use sources::{MprClient, NassClient, QuoteClient};

/// All four domains, fetched for one request.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MarketSnapshot {
    pub auctions: Aggregated<AuctionReport>,
    pub cash: Aggregated<CashPrice>,
    pub slaughter: Aggregated<SlaughterWeek>,
    pub futures: Aggregated<FuturesContract>,
}

/// Auction reports for the requested market slugs.
pub async fn auction_reports(
    mpr: &MprClient,
    slugs: &[String],
    demo: &dyn LastResort,
) -> Aggregated<AuctionReport> {
    let adapter = AuctionAdapter::new(mpr.clone(), slugs.to_vec());
    let chain: [&dyn FetchSource<AuctionReport>; 1] = [&adapter];
    run_chain(&chain, || demo.demo_auctions()).await
}

/// Fed-cattle cash prices: direct trade first, 5-area second.
pub async fn cash_prices(mpr: &MprClient, demo: &dyn LastResort) -> Aggregated<CashPrice> {
    let direct = DirectCashAdapter::new(mpr.clone());
    let five_area = FiveAreaCashAdapter::new(mpr.clone());
    let chain: [&dyn FetchSource<CashPrice>; 2] = [&direct, &five_area];
    run_chain(&chain, || demo.demo_cash()).await
}

/// Weekly slaughter counts: LMPR first, NASS second.
pub async fn slaughter_weeks(
    mpr: &MprClient,
    nass: &NassClient,
    demo: &dyn LastResort,
) -> Aggregated<SlaughterWeek> {
    let lmpr = LmprSlaughterAdapter::new(mpr.clone());
    let nass_adapter = NassSlaughterAdapter::new(nass.clone());
    let chain: [&dyn FetchSource<SlaughterWeek>; 2] = [&lmpr, &nass_adapter];
    run_chain(&chain, || demo.demo_slaughter()).await
}

/// Delayed futures quotes.
pub async fn futures_quotes(
    quotes: &QuoteClient,
    demo: &dyn LastResort,
) -> Aggregated<FuturesContract> {
    let adapter = FuturesAdapter::new(quotes.clone());
    let chain: [&dyn FetchSource<FuturesContract>; 1] = [&adapter];
    run_chain(&chain, || demo.demo_futures()).await
}

/// Fetch all four domains concurrently. The domains are independent, so
/// they run as a join-all: one domain degrading to demo data never delays
/// or cancels the others.
pub async fn fetch_all(
    mpr: &MprClient,
    nass: &NassClient,
    quotes: &QuoteClient,
    auction_slugs: &[String],
    demo: &dyn LastResort,
) -> MarketSnapshot {
    let (auctions, cash, slaughter, futures) = tokio::join!(
        auction_reports(mpr, auction_slugs, demo),
        cash_prices(mpr, demo),
        slaughter_weeks(mpr, nass, demo),
        futures_quotes(quotes, demo),
    );

    MarketSnapshot { auctions, cash, slaughter, futures }
}

/// Wrap aggregated cash cells into a dated report.
pub fn to_cash_report(aggregated: &Aggregated<CashPrice>) -> Option<CashPriceReport> {
    let first = aggregated.records.first()?;
    Some(CashPriceReport {
        report_date: first.report_date,
        prices: aggregated.records.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::DemoData;

    #[test]
    fn test_to_cash_report() {
        let aggregated = Aggregated {
            records: DemoData.demo_cash(),
            source: "demo".to_string(),
            status: None,
        };
        let report = to_cash_report(&aggregated).unwrap();
        assert_eq!(report.prices.len(), 3);
        assert_eq!(report.report_date, report.prices[0].report_date);

        let empty: Aggregated<CashPrice> = Aggregated {
            records: vec![],
            source: "demo".to_string(),
            status: None,
        };
        assert!(to_cash_report(&empty).is_none());
    }
}
