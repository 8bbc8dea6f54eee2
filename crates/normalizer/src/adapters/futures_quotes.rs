//! Delayed cattle futures adapter.
//!
//! The quote source only carries the front-month contract per product.
//! Deferred months are synthesized by walking a small random spread out
//! from the front-month price (typical contango/backwardation shape).
//! Synthesized quotes are indicative only and are flagged
//! [`QuoteProvenance::Synthetic`] so consumers can label them; the RNG is
//! seedable so synthesis is reproducible in tests.

use crate::adapters::FetchSource;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use common::{FuturesContract, QuoteProvenance};
use futures::future::join_all;
use metrics::counter;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sources::{ChartResponse, QuoteSource};
use tracing::debug;

/// Number of deferred months synthesized behind the front month.
pub const SYNTHETIC_MONTHS: usize = 3;

/// Per-step spread bounds for the synthetic walk, as fractions of price.
/// Slight upward skew models the usual mild contango in cattle futures.
const SPREAD_MIN: f64 = -0.010;
const SPREAD_MAX: f64 = 0.015;

struct Product {
    /// Symbol on the quote source, e.g. "LE=F".
    quote_symbol: &'static str,
    display_name: &'static str,
    /// Exchange root used when building contract symbols, e.g. "LE".
    root: &'static str,
    /// Listed contract months (1-12).
    month_cycle: &'static [u32],
}

const PRODUCTS: &[Product] = &[
    Product {
        quote_symbol: "LE=F",
        display_name: "Live Cattle",
        root: "LE",
        month_cycle: &[2, 4, 6, 8, 10, 12],
    },
    Product {
        quote_symbol: "GF=F",
        display_name: "Feeder Cattle",
        root: "GF",
        month_cycle: &[1, 3, 4, 5, 8, 9, 10, 11],
    },
];

/// Futures quote adapter.
pub struct FuturesAdapter<S> {
    source: S,
    seed: u64,
}

impl<S: QuoteSource> FuturesAdapter<S> {
    /// Adapter with a random synthesis seed.
    pub fn new(source: S) -> Self {
        Self::with_seed(source, rand::random())
    }

    /// Adapter with a fixed synthesis seed, for reproducible output.
    pub fn with_seed(source: S, seed: u64) -> Self {
        Self { source, seed }
    }

    /// Fetch the front month for every product and extend each with
    /// synthesized deferred months.
    pub async fn fetch_quotes(&self) -> Vec<FuturesContract> {
        counter!("adapter_fetch_total", "adapter" => "futures").increment(1);

        let today = Utc::now().date_naive();
        let fetches = PRODUCTS.iter().map(|p| self.fetch_product(p, today));
        join_all(fetches).await.into_iter().flatten().collect()
    }

    async fn fetch_product(&self, product: &Product, today: NaiveDate) -> Vec<FuturesContract> {
        match self.source.fetch_chart(product.quote_symbol).await {
            Ok(chart) => build_contracts(product, &chart, today, self.seed),
            Err(e) => {
                debug!("quote fetch failed for {}: {}", product.quote_symbol, e);
                counter!("adapter_empty_total", "adapter" => "futures").increment(1);
                vec![]
            }
        }
    }
}

#[async_trait]
impl<S: QuoteSource> FetchSource<FuturesContract> for FuturesAdapter<S> {
    fn name(&self) -> &'static str {
        "futures"
    }

    async fn fetch(&self) -> Option<Vec<FuturesContract>> {
        Some(self.fetch_quotes().await)
    }
}

fn build_contracts(
    product: &Product,
    chart: &ChartResponse,
    today: NaiveDate,
    seed: u64,
) -> Vec<FuturesContract> {
    let Some(result) = chart.chart.result.first() else {
        return vec![];
    };

    let last = result.meta.regular_market_price;
    if last <= 0.0 {
        return vec![];
    }

    let prev_close = if result.meta.previous_close > 0.0 {
        result.meta.previous_close
    } else {
        result.meta.chart_previous_close
    };
    let change = if prev_close > 0.0 { last - prev_close } else { 0.0 };
    let change_pct = if prev_close > 0.0 { change / prev_close * 100.0 } else { 0.0 };

    let quote = result.indicators.quote.first();
    let open = quote.and_then(|q| last_some(&q.open)).unwrap_or(last);
    let high = quote.and_then(|q| last_some(&q.high)).unwrap_or(last);
    let low = quote.and_then(|q| last_some(&q.low)).unwrap_or(last);
    let close = quote.and_then(|q| last_some(&q.close)).unwrap_or(last);
    let volume = quote.and_then(|q| last_some(&q.volume)).unwrap_or(0);

    let timestamp = result
        .timestamp
        .last()
        .and_then(|secs| DateTime::from_timestamp(*secs, 0))
        .unwrap_or_else(Utc::now);

    let months = upcoming_months(product.month_cycle, today, 1 + SYNTHETIC_MONTHS);
    let Some(&(front_month, front_year)) = months.first() else {
        return vec![];
    };

    let mut contracts = vec![FuturesContract {
        symbol: contract_symbol(product.root, front_month, front_year),
        display_name: product.display_name.to_string(),
        contract_month: month_label(front_month, front_year),
        last,
        change,
        change_pct,
        open,
        high,
        low,
        close,
        volume,
        timestamp,
        provenance: QuoteProvenance::Live,
    }];

    // Deferred months: a cumulative random walk off the front month.
    let mut rng = StdRng::seed_from_u64(seed);
    let mut price = last;
    for &(month, year) in &months[1..] {
        price *= 1.0 + rng.gen_range(SPREAD_MIN..SPREAD_MAX);
        let rounded = (price * 1000.0).round() / 1000.0;
        contracts.push(FuturesContract {
            symbol: contract_symbol(product.root, month, year),
            display_name: product.display_name.to_string(),
            contract_month: month_label(month, year),
            last: rounded,
            change: 0.0,
            change_pct: 0.0,
            open: rounded,
            high: rounded,
            low: rounded,
            close: rounded,
            volume: 0,
            timestamp,
            provenance: QuoteProvenance::Synthetic,
        });
    }

    contracts
}

fn last_some<T: Copy>(values: &[Option<T>]) -> Option<T> {
    values.iter().rev().find_map(|v| *v)
}

/// The next `count` listed contract months on or after `from`.
fn upcoming_months(cycle: &[u32], from: NaiveDate, count: usize) -> Vec<(u32, i32)> {
    let mut months = Vec::with_capacity(count);
    let mut month = from.month();
    let mut year = from.year();
    while months.len() < count {
        if cycle.contains(&month) {
            months.push((month, year));
        }
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    months
}

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_CODES: [char; 12] = ['F', 'G', 'H', 'J', 'K', 'M', 'N', 'Q', 'U', 'V', 'X', 'Z'];

fn month_label(month: u32, year: i32) -> String {
    format!("{} {}", MONTH_ABBREV[(month - 1) as usize], year)
}

fn contract_symbol(root: &str, month: u32, year: i32) -> String {
    format!("{}{}{:02}", root, MONTH_CODES[(month - 1) as usize], year.rem_euclid(100))
}
