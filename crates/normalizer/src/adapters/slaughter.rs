//! Weekly slaughter statistics adapters.
//!
//! Two independent providers: the LMPR weekly slaughter report (primary,
//! keyed by a simple report id) and NASS Quick Stats (secondary, keyed by
//! a descriptor taxonomy). Their payload shapes differ enough that each
//! gets its own normalization path.

use crate::adapters::{FetchSource, MAX_RAW_RECORDS};
use crate::coalesce::{
    self, coalesce_date, coalesce_str, coalesce_u64, unwrap_results, RawRecord,
};
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use common::SlaughterWeek;
use metrics::counter;
use sources::{ReportSource, StatsQuery, StatsSource};
use tracing::debug;

/// Report slug id: estimated weekly livestock slaughter under federal
/// inspection.
const LMPR_SLAUGHTER_SLUG: &str = "2654";

/// LMPR weekly slaughter adapter (primary).
pub struct LmprSlaughterAdapter<S> {
    source: S,
}

impl<S: ReportSource> LmprSlaughterAdapter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S: ReportSource> FetchSource<SlaughterWeek> for LmprSlaughterAdapter<S> {
    fn name(&self) -> &'static str {
        "lmpr_slaughter"
    }

    async fn fetch(&self) -> Option<Vec<SlaughterWeek>> {
        counter!("adapter_fetch_total", "adapter" => "lmpr_slaughter").increment(1);

        let payload = match self.source.fetch_report(LMPR_SLAUGHTER_SLUG).await {
            Ok(p) => p,
            Err(e) => {
                debug!("lmpr slaughter fetch failed: {}", e);
                return None;
            }
        };

        let weeks = normalize_lmpr_records(&unwrap_results(&payload));
        if weeks.is_empty() {
            counter!("adapter_empty_total", "adapter" => "lmpr_slaughter").increment(1);
        }
        Some(weeks)
    }
}

/// LMPR rows carry prior-week and prior-year counts inline.
fn normalize_lmpr_records(raw: &[RawRecord]) -> Vec<SlaughterWeek> {
    raw.iter()
        .take(MAX_RAW_RECORDS)
        .filter_map(|rec| {
            let week_ending = coalesce_date(rec, coalesce::WEEK_ENDING_FIELDS)?;
            let head_count = coalesce_u64(rec, coalesce::SLAUGHTER_HEAD_FIELDS);
            if head_count == 0 {
                return None;
            }
            let region = coalesce_str(rec, coalesce::REGION_FIELDS);
            Some(SlaughterWeek::new(
                week_ending,
                head_count,
                coalesce_u64(rec, coalesce::PREV_WEEK_FIELDS),
                coalesce_u64(rec, coalesce::PREV_YEAR_FIELDS),
                if region.is_empty() { "US".to_string() } else { region },
            ))
        })
        .collect()
}

/// NASS Quick Stats slaughter adapter (secondary).
pub struct NassSlaughterAdapter<S> {
    source: S,
}

impl<S: StatsSource> NassSlaughterAdapter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S: StatsSource> FetchSource<SlaughterWeek> for NassSlaughterAdapter<S> {
    fn name(&self) -> &'static str {
        "nass_slaughter"
    }

    async fn fetch(&self) -> Option<Vec<SlaughterWeek>> {
        counter!("adapter_fetch_total", "adapter" => "nass_slaughter").increment(1);

        let query = StatsQuery::cattle_slaughter(Utc::now().year() as u16);
        let payload = match self.source.fetch_stats(&query).await {
            Ok(p) => p,
            Err(e) => {
                debug!("nass slaughter fetch failed: {}", e);
                return None;
            }
        };

        let weeks = normalize_nass_records(&unwrap_results(&payload));
        if weeks.is_empty() {
            counter!("adapter_empty_total", "adapter" => "nass_slaughter").increment(1);
        }
        Some(weeks)
    }
}

/// NASS rows carry one count each with no prior-period columns, so weeks
/// are sorted by date and each week's prior-week figure is derived from
/// its predecessor in the series. Prior-year counts are unknown (0).
fn normalize_nass_records(raw: &[RawRecord]) -> Vec<SlaughterWeek> {
    let mut dated: Vec<(chrono::NaiveDate, u64)> = raw
        .iter()
        .take(MAX_RAW_RECORDS)
        .filter_map(|rec| {
            let week_ending = coalesce_date(rec, coalesce::WEEK_ENDING_FIELDS)?;
            let head_count = coalesce_u64(rec, coalesce::SLAUGHTER_HEAD_FIELDS);
            (head_count > 0).then_some((week_ending, head_count))
        })
        .collect();
    dated.sort_by_key(|(date, _)| *date);

    dated
        .iter()
        .enumerate()
        .map(|(i, (week_ending, head_count))| {
            let prev_week = if i > 0 { dated[i - 1].1 } else { 0 };
            SlaughterWeek::new(*week_ending, *head_count, prev_week, 0, "US")
        })
        .collect()
}
