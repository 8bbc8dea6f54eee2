//! Normalization layer: per-source adapters that turn loosely-typed
//! upstream payloads into the shared record schema.
//!
//! # Architecture
//!
//! ```text
//! raw payload --> field coalescer / categorical mappers --> normalized records
//!                 (schema drift fails soft, never panics)
//! ```
//!
//! Each adapter wraps one upstream endpoint, is generic over its source
//! trait (so tests inject fixtures), and implements [`FetchSource`] so the
//! fallback chains in the aggregator crate can drive it. Adapters convert
//! every internal failure into `None`/empty output; errors never cross the
//! adapter boundary.

pub mod adapters;
pub mod coalesce;
pub mod text_report;

pub use adapters::auction::AuctionAdapter;
pub use adapters::cash::{DirectCashAdapter, FiveAreaCashAdapter};
pub use adapters::futures_quotes::FuturesAdapter;
pub use adapters::slaughter::{LmprSlaughterAdapter, NassSlaughterAdapter};
pub use adapters::{FetchSource, MAX_RAW_RECORDS};
pub use coalesce::{unwrap_results, RawRecord};
pub use text_report::{parse_text_report, TextRow};
