//! Source adapters: one per upstream report family.
//!
//! Adapter contract: fetch one endpoint, coerce the payload through the
//! coalescer and mappers, emit normalized records. All failures are caught
//! at this boundary and converted to `None`/empty output so the fallback
//! chain can move on; adapters never retry (that policy belongs to the
//! chain's caller, not to per-adapter loops).

pub mod auction;
pub mod cash;
pub mod futures_quotes;
pub mod slaughter;

use async_trait::async_trait;

/// Ceiling on raw records processed per response. Defensive bound against
/// unexpectedly large payloads; consistent across all adapters.
pub const MAX_RAW_RECORDS: usize = 50;

/// A prioritized data source for one record type.
///
/// Implemented by every adapter so the aggregator's fallback chains can
/// drive heterogeneous adapters uniformly. `None` and an empty vector both
/// mean "nothing usable, try the next source".
#[async_trait]
pub trait FetchSource<T>: Send + Sync {
    /// Short source name for logs and metrics labels.
    fn name(&self) -> &'static str;

    /// Fetch and normalize. Must not panic or return an error; upstream
    /// failure degrades to `None`.
    async fn fetch(&self) -> Option<Vec<T>>;
}
