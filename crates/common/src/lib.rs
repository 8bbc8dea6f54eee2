//! Shared schema for normalized livestock market data.
//!
//! Every upstream feed (USDA market reports, NASS slaughter statistics,
//! delayed futures quotes) is coerced into the record types defined here.
//! Records are plain immutable values built fresh per request; nothing in
//! this crate performs I/O.

pub mod mappers;
pub mod records;
pub mod sale_barns;

pub use mappers::normalize_category;
pub use records::{
    AuctionReport, AuctionSale, CashPrice, CashPriceReport, FuturesContract, PriceRange,
    PriceType, QuoteProvenance, SlaughterWeek, Trend, WeightRange,
};
pub use sale_barns::{find_barn, SaleBarn, SALE_BARNS};
