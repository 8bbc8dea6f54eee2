//! Static sale-barn catalog.
//!
//! Maps a requested market slug to its display metadata and the upstream
//! market-report slug id used to query it. The catalog is reference data,
//! not derived from any feed.

use serde::Serialize;

/// One auction market in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaleBarn {
    /// Stable identifier used in requests, e.g. "ogallala-livestock".
    pub slug: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    /// Weekday the sale runs.
    pub sale_day: &'static str,
    /// Weekday the market report is published.
    pub report_day: &'static str,
    /// Upstream market-report slug id for this barn's weekly summary.
    pub report_slug: &'static str,
}

/// All markets the aggregation layer knows how to query.
pub const SALE_BARNS: &[SaleBarn] = &[
    SaleBarn {
        slug: "ogallala-livestock",
        name: "Ogallala Livestock Auction Market",
        city: "Ogallala",
        state: "NE",
        sale_day: "Thursday",
        report_day: "Friday",
        report_slug: "1795",
    },
    SaleBarn {
        slug: "bassett-livestock",
        name: "Bassett Livestock Auction",
        city: "Bassett",
        state: "NE",
        sale_day: "Wednesday",
        report_day: "Thursday",
        report_slug: "1779",
    },
    SaleBarn {
        slug: "lexington-livestock",
        name: "Lexington Livestock Market",
        city: "Lexington",
        state: "NE",
        sale_day: "Friday",
        report_day: "Saturday",
        report_slug: "1786",
    },
    SaleBarn {
        slug: "oklahoma-national",
        name: "Oklahoma National Stockyards",
        city: "Oklahoma City",
        state: "OK",
        sale_day: "Monday",
        report_day: "Tuesday",
        report_slug: "1812",
    },
    SaleBarn {
        slug: "joplin-regional",
        name: "Joplin Regional Stockyards",
        city: "Carthage",
        state: "MO",
        sale_day: "Monday",
        report_day: "Tuesday",
        report_slug: "1805",
    },
    SaleBarn {
        slug: "winter-livestock",
        name: "Winter Livestock",
        city: "Dodge City",
        state: "KS",
        sale_day: "Wednesday",
        report_day: "Thursday",
        report_slug: "1814",
    },
    SaleBarn {
        slug: "torrington-livestock",
        name: "Torrington Livestock Markets",
        city: "Torrington",
        state: "WY",
        sale_day: "Friday",
        report_day: "Saturday",
        report_slug: "1832",
    },
    SaleBarn {
        slug: "billings-livestock",
        name: "Billings Livestock Commission",
        city: "Billings",
        state: "MT",
        sale_day: "Thursday",
        report_day: "Friday",
        report_slug: "1841",
    },
];

/// Look up a barn by its request slug.
pub fn find_barn(slug: &str) -> Option<&'static SaleBarn> {
    SALE_BARNS.iter().find(|b| b.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_barn() {
        let barn = find_barn("ogallala-livestock").unwrap();
        assert_eq!(barn.city, "Ogallala");
        assert_eq!(barn.state, "NE");
        assert!(find_barn("no-such-market").is_none());
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in SALE_BARNS.iter().enumerate() {
            for b in &SALE_BARNS[i + 1..] {
                assert_ne!(a.slug, b.slug);
                assert_ne!(a.report_slug, b.report_slug);
            }
        }
    }
}
