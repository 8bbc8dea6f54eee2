//! Upstream data-source clients.
//!
//! One client per feed family:
//! - [`MprClient`] — USDA market reports (structured JSON or plain text)
//! - [`NassClient`] — NASS Quick Stats (hierarchical descriptor queries)
//! - [`QuoteClient`] — delayed futures quotes (chart time-series)
//!
//! The adapter layer is generic over the [`ReportSource`], [`StatsSource`]
//! and [`QuoteSource`] traits so tests can inject fixture responses.
//! Configuration (base URLs, API keys) is passed in at construction; no
//! client reads the process environment.

pub mod error;
pub mod mpr;
pub mod nass;
pub mod quotes;
pub mod traits;

pub use error::{Error, Result};
pub use mpr::MprClient;
pub use nass::{NassClient, StatsQuery};
pub use quotes::{ChartMeta, ChartResponse, QuoteClient};
pub use traits::{QuoteSource, ReportSource, StatsSource};

/// Timeout applied to every outbound request, in seconds. Without a bound
/// a hung upstream call would stall the whole aggregation.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
