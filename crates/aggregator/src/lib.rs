//! Fallback aggregation over the source adapters.
//!
//! Per data domain (auctions, cash prices, slaughter, futures) a static
//! priority chain of adapters is tried in order; the first non-empty
//! result wins. When every adapter comes back empty the bundled demo data
//! provider answers instead and the result carries a status string, so no
//! request ever fails outright — worst case it degrades to clearly-labeled
//! static data.

pub mod config;
pub mod demo;
pub mod domains;
pub mod fallback;

pub use config::Config;
pub use demo::{DemoData, LastResort};
pub use domains::{fetch_all, MarketSnapshot};
pub use fallback::{run_chain, Aggregated};
