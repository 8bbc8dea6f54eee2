//! Field coalescing for loosely-typed upstream records.
//!
//! Upstream report schemas drift: the same logical field appears under
//! different names across reports and API revisions (`wtd_avg`,
//! `wtd_avg_price`, `weighted_average`). Every extraction goes through a
//! coalescer that tries an ordered candidate list and degrades to a defined
//! default instead of failing. One canonical candidate list exists per
//! logical field; precedence is current API names first, legacy variants
//! after.

use chrono::NaiveDate;
use serde_json::{Map, Value};

/// An untyped upstream record.
pub type RawRecord = Map<String, Value>;

// Canonical candidate lists, one per logical field.
pub const REPORT_DATE_FIELDS: &[&str] = &["report_date", "report_end_date", "published_date"];
pub const REPORT_TITLE_FIELDS: &[&str] = &["report_title", "slug_name", "title"];
pub const HEAD_COUNT_FIELDS: &[&str] = &["head_count", "receipts", "total_receipts"];
pub const AVG_PRICE_FIELDS: &[&str] = &["avg_price", "wtd_avg", "wtd_avg_price", "weighted_average"];
pub const PRICE_LOW_FIELDS: &[&str] = &["price_low", "low_price", "price_min"];
pub const PRICE_HIGH_FIELDS: &[&str] = &["price_high", "high_price", "price_max"];
pub const WEIGHT_LOW_FIELDS: &[&str] = &["weight_low", "wgt_low", "weight_min"];
pub const WEIGHT_HIGH_FIELDS: &[&str] = &["weight_high", "wgt_high", "weight_max"];
pub const AVG_WEIGHT_FIELDS: &[&str] = &["avg_weight", "wtd_avg_weight", "weight_avg"];
pub const CATEGORY_FIELDS: &[&str] = &["class", "category", "commodity"];
pub const GRADE_FIELDS: &[&str] = &["grade", "quality_grade", "frame"];
pub const TREND_FIELDS: &[&str] = &["trend", "price_trend", "comments"];
pub const PRICE_TYPE_FIELDS: &[&str] = &["purchase_type", "price_type", "sale_type"];
pub const REGION_FIELDS: &[&str] = &["region", "area", "market_location_state"];
pub const DRESSED_PRICE_FIELDS: &[&str] = &["dressed_price", "dressed_wtd_avg"];
pub const COMMENTARY_FIELDS: &[&str] = &["narrative", "commentary", "market_comments"];
pub const WEEK_ENDING_FIELDS: &[&str] = &["week_ending", "week_ending_date", "report_date"];
pub const SLAUGHTER_HEAD_FIELDS: &[&str] = &["head_count", "current_week", "Value"];
pub const PREV_WEEK_FIELDS: &[&str] = &["previous_week", "prior_week", "week_ago"];
pub const PREV_YEAR_FIELDS: &[&str] = &["previous_year", "year_ago"];

/// Unwrap the result container of a structured report response.
///
/// Upstream responses are inconsistently either a bare list or an object
/// wrapping the list under `results` (or `data` for the statistics source).
/// Anything else — `null`, scalars, objects without a list — yields an
/// empty vector.
pub fn unwrap_results(value: &Value) -> Vec<RawRecord> {
    static EMPTY: &[Value] = &[];
    let items = match value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map
            .get("results")
            .or_else(|| map.get("data"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY),
        _ => EMPTY,
    };
    items
        .iter()
        .filter_map(|v| v.as_object().cloned())
        .collect()
}

/// First candidate field that parses as a finite number; 0.0 otherwise.
/// String values tolerate thousands separators and a leading `$`.
pub fn coalesce_f64(record: &RawRecord, candidates: &[&str]) -> f64 {
    for name in candidates {
        if let Some(n) = record.get(*name).and_then(numeric_value) {
            return n;
        }
    }
    0.0
}

/// Integer variant of [`coalesce_f64`]. Negative values clamp to 0.
pub fn coalesce_u32(record: &RawRecord, candidates: &[&str]) -> u32 {
    for name in candidates {
        if let Some(n) = record.get(*name).and_then(numeric_value) {
            return n.max(0.0) as u32;
        }
    }
    0
}

/// Wide-integer variant for slaughter head counts.
pub fn coalesce_u64(record: &RawRecord, candidates: &[&str]) -> u64 {
    for name in candidates {
        if let Some(n) = record.get(*name).and_then(numeric_value) {
            return n.max(0.0) as u64;
        }
    }
    0
}

/// First candidate present with non-empty text; empty string otherwise.
/// Numbers are rendered as text so a numeric region code still resolves.
pub fn coalesce_str(record: &RawRecord, candidates: &[&str]) -> String {
    for name in candidates {
        match record.get(*name) {
            Some(Value::String(s)) if !s.trim().is_empty() => return s.trim().to_string(),
            Some(Value::Number(n)) => return n.to_string(),
            _ => {}
        }
    }
    String::new()
}

/// First candidate that parses as a date, in either of the two formats
/// the feeds use (`MM/DD/YYYY` or ISO `YYYY-MM-DD`).
pub fn coalesce_date(record: &RawRecord, candidates: &[&str]) -> Option<NaiveDate> {
    for name in candidates {
        if let Some(Value::String(s)) = record.get(*name) {
            if let Some(date) = parse_date(s) {
                return Some(date);
            }
        }
    }
    None
}

/// Parse a feed-format date string.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    // Timestamps come through as "YYYY-MM-DD HH:MM" on some reports;
    // the date prefix is all we keep.
    let date_part = trimmed.split_whitespace().next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%Y-%m-%d"))
        .ok()
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            let cleaned: String = s
                .trim()
                .chars()
                .filter(|c| *c != ',' && *c != '$')
                .collect();
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_second_candidate_used_when_first_absent() {
        let rec = record(json!({"price_low": "1,234.50"}));
        assert_eq!(coalesce_f64(&rec, &["priceLow", "price_low"]), 1234.50);
    }

    #[test]
    fn test_comma_and_dollar_stripping() {
        let rec = record(json!({"receipts": "12,345", "avg_price": "$185.25"}));
        assert_eq!(coalesce_u32(&rec, HEAD_COUNT_FIELDS), 12_345);
        assert_eq!(coalesce_f64(&rec, AVG_PRICE_FIELDS), 185.25);
    }

    #[test]
    fn test_defaults_when_nothing_parses() {
        let rec = record(json!({"wtd_avg": "n/a", "class": 7}));
        assert_eq!(coalesce_f64(&rec, AVG_PRICE_FIELDS), 0.0);
        assert_eq!(coalesce_u32(&rec, HEAD_COUNT_FIELDS), 0);
        assert_eq!(coalesce_str(&rec, &["missing"]), "");
        // Numeric values still render as text.
        assert_eq!(coalesce_str(&rec, CATEGORY_FIELDS), "7");
    }

    #[test]
    fn test_unparseable_candidate_falls_through() {
        let rec = record(json!({"avg_price": "pending", "wtd_avg": 183.0}));
        assert_eq!(coalesce_f64(&rec, AVG_PRICE_FIELDS), 183.0);
    }

    #[test]
    fn test_unwrap_results_shapes() {
        assert!(unwrap_results(&Value::Null).is_empty());
        assert!(unwrap_results(&json!({})).is_empty());
        assert!(unwrap_results(&json!([])).is_empty());
        assert!(unwrap_results(&json!("nope")).is_empty());
        assert_eq!(unwrap_results(&json!([{"a": 1}, {"b": 2}])).len(), 2);
        assert_eq!(unwrap_results(&json!({"results": [{"a": 1}]})).len(), 1);
        assert_eq!(unwrap_results(&json!({"data": [{"a": 1}]})).len(), 1);
        // Non-object list entries are skipped.
        assert_eq!(unwrap_results(&json!([{"a": 1}, 42, "x"])).len(), 1);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        assert_eq!(parse_date("08/15/2025"), Some(expected));
        assert_eq!(parse_date("2025-08-15"), Some(expected));
        assert_eq!(parse_date("2025-08-15 00:00"), Some(expected));
        assert_eq!(parse_date("last friday"), None);
    }

    #[test]
    fn test_coalesce_date() {
        let rec = record(json!({"published_date": "08/15/2025"}));
        assert_eq!(
            coalesce_date(&rec, REPORT_DATE_FIELDS),
            NaiveDate::from_ymd_opt(2025, 8, 15)
        );
        assert_eq!(coalesce_date(&record(json!({})), REPORT_DATE_FIELDS), None);
    }
}
