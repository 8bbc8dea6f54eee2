//! Line-oriented parser for fixed-column plain-text market reports.
//!
//! Last-resort input when the structured feed is down. The format is only
//! loosely fixed-width: a divider line of `-`/`=` characters separates the
//! header from the data section, and columns are separated by runs of two
//! or more whitespace characters. The parser is best-effort and lossy;
//! rows that do not fit the expected shape are dropped.

/// One parsed data row.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRow {
    pub category: String,
    pub head_count: u32,
    pub price: f64,
}

/// Parse a plain-text report into category/head/price triples.
///
/// A divider line toggles the data section on (and a second one toggles it
/// back off, so trailing footnotes are ignored). In-section lines must
/// yield at least three columns: category label, integer head count,
/// decimal price. Anything else is skipped.
pub fn parse_text_report(raw: &str) -> Vec<TextRow> {
    let mut rows = Vec::new();
    let mut in_data_section = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_divider(trimmed) {
            in_data_section = !in_data_section;
            continue;
        }
        if !in_data_section {
            continue;
        }

        let columns = split_columns(trimmed);
        if columns.len() < 3 {
            continue;
        }
        let Some(head_count) = parse_count(&columns[1]) else {
            continue;
        };
        let Some(price) = parse_price(&columns[2]) else {
            continue;
        };
        rows.push(TextRow {
            category: columns[0].clone(),
            head_count,
            price,
        });
    }

    rows
}

/// A divider is a run of three or more `-` or `=` characters.
fn is_divider(line: &str) -> bool {
    line.len() >= 3 && line.chars().all(|c| c == '-' || c == '=')
}

/// Split on runs of 2+ whitespace, the de facto column separator.
/// Single spaces stay inside a column ("Feeder Steers" is one label).
fn split_columns(line: &str) -> Vec<String> {
    let mut columns = Vec::new();
    let mut current = String::new();
    let mut whitespace_run = 0usize;

    for ch in line.chars() {
        if ch.is_whitespace() {
            whitespace_run += 1;
            if whitespace_run == 1 {
                current.push(' ');
            }
        } else {
            if whitespace_run >= 2 && !current.trim().is_empty() {
                columns.push(current.trim().to_string());
                current.clear();
            }
            whitespace_run = 0;
            current.push(ch);
        }
    }
    if !current.trim().is_empty() {
        columns.push(current.trim().to_string());
    }

    columns
}

fn parse_count(text: &str) -> Option<u32> {
    text.replace(',', "").parse::<u32>().ok()
}

fn parse_price(text: &str) -> Option<f64> {
    text.replace(',', "")
        .trim_start_matches('$')
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_before_divider_is_ignored() {
        let raw = "Steers  120  185.50\n---\nHeifers  95  172.25";
        let rows = parse_text_report(raw);
        assert_eq!(
            rows,
            vec![TextRow {
                category: "Heifers".to_string(),
                head_count: 95,
                price: 172.25,
            }]
        );
    }

    #[test]
    fn test_typical_report() {
        let raw = "\
Ogallala Livestock Auction
Weekly Summary for 08/15/2025
==========================================
Feeder Steers    320   262.50
Feeder Heifers   275   248.75
Slaughter Cows   110   118.00
";
        let rows = parse_text_report(raw);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, "Feeder Steers");
        assert_eq!(rows[0].head_count, 320);
        assert_eq!(rows[0].price, 262.50);
    }

    #[test]
    fn test_second_divider_toggles_section_off() {
        let raw = "\
header
---
Steers  120  185.50
---
footnote  1  2
";
        // The footnote after the closing divider would parse as a row, but
        // the section has toggled off.
        let rows = parse_text_report(raw);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Steers");
    }

    #[test]
    fn test_malformed_rows_are_dropped() {
        let raw = "\
---
only two  columns
Steers  many  185.50
Heifers  95  cheap
Cows  1,250  $118.00
";
        let rows = parse_text_report(raw);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "Cows");
        assert_eq!(rows[0].head_count, 1250);
        assert_eq!(rows[0].price, 118.0);
    }

    #[test]
    fn test_empty_and_dividerless_input() {
        assert!(parse_text_report("").is_empty());
        // No divider means no data section at all.
        assert!(parse_text_report("Steers  120  185.50").is_empty());
    }
}
