//! Two-pass key-value record extraction from plain text.
//!
//! The extractor makes sense of loosely structured text by finding
//! `key: value` lines first, then keeping every remaining non-blank line
//! as a key with an empty value so headings and free text survive in the
//! record. Extraction is total: any string input yields a record, and an
//! empty input yields an empty record rather than an error.
//!
//! # Determinism
//!
//! Given identical text the output record is byte-identical across runs:
//! lines are processed in order, last occurrence wins for duplicate keys,
//! and the record preserves first-insertion order.

use recordex_core::Record;
use regex::Regex;
use std::sync::LazyLock;

/// Matches a `key: value` line. The lazy `.+?` makes the first colon with
/// at least one preceding character define the split; a line whose only
/// colon is the first character does not match and falls through to the
/// second pass.
static KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.+?):\s*(.*)").expect("valid key-value pattern"));

/// Turns plain text into a key-value [`Record`].
#[derive(Clone, Debug, Default)]
pub struct RecordExtractor;

impl RecordExtractor {
    /// Create a new record extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract a record from plain text.
    ///
    /// Pass 1 inserts `key -> value` for every line matching the
    /// `key: value` pattern, trimming whitespace on both sides. Later
    /// occurrences of the same key overwrite earlier ones.
    ///
    /// Pass 2 inserts every line pass 1 did not match, provided it is
    /// non-empty after trimming and its exact text is not already a key,
    /// as a key with an empty value. This keeps headings and free text
    /// without disturbing anything pass 1 extracted.
    pub fn extract(&self, text: &str) -> Record {
        let mut record = Record::new();
        let lines: Vec<&str> = text.lines().collect();
        let mut matched = vec![false; lines.len()];

        for (i, line) in lines.iter().enumerate() {
            if let Some(caps) = KEY_VALUE.captures(line) {
                let key = caps[1].trim().to_string();
                let value = caps[2].trim().to_string();
                record.insert(key, value);
                matched[i] = true;
            }
        }

        for (i, line) in lines.iter().enumerate() {
            if matched[i] || line.trim().is_empty() {
                continue;
            }
            if !record.contains_key(*line) {
                record.insert((*line).to_string(), String::new());
            }
        }

        record
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Record {
        RecordExtractor::new().extract(text)
    }

    #[test]
    fn test_extract_well_formed_lines() {
        let record = extract("Name: Dell\nPrice: 500");

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("Name").unwrap(), "Dell");
        assert_eq!(record.get("Price").unwrap(), "500");
    }

    #[test]
    fn test_extract_empty_input() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_extract_trims_whitespace() {
        let record = extract("  Name  :   Dell Latitude  ");

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("Name").unwrap(), "Dell Latitude");
    }

    #[test]
    fn test_extract_first_colon_defines_split() {
        let record = extract("Time: 10:30:00");

        assert_eq!(record.get("Time").unwrap(), "10:30:00");
    }

    #[test]
    fn test_extract_last_occurrence_wins() {
        let record = extract("Name: Dell\nPrice: 500\nName: HP");

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("Name").unwrap(), "HP");
        // Overwriting keeps the key's original position
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Name", "Price"]);
    }

    #[test]
    fn test_extract_free_text_becomes_empty_valued_key() {
        let record = extract("Laptop Specifications\nName: Dell");

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("Laptop Specifications").unwrap(), "");
        assert_eq!(record.get("Name").unwrap(), "Dell");
    }

    #[test]
    fn test_extract_whitespace_only_line_skipped() {
        let record = extract("Name: Dell\n   \n\nPrice: 500");

        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_extract_heading_that_parses_as_key_value() {
        // "Note: see appendix" is semantically a heading but syntactically
        // a key-value pair, so it gets split. Intent is ambiguous; the
        // split is the documented behavior.
        let record = extract("Note: see appendix");

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("Note").unwrap(), "see appendix");
    }

    #[test]
    fn test_extract_exactly_one_entry_per_well_formed_line() {
        let record = extract("Name: Dell\nPrice: 500\nCPU: i7");

        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_extract_fallback_does_not_overwrite_key_matched_entry() {
        // The line "Name" matches the existing key extracted in pass 1,
        // so its non-empty value survives.
        let record = extract("Name: Dell\nName");

        assert_eq!(record.get("Name").unwrap(), "Dell");
    }

    #[test]
    fn test_extract_value_may_be_empty() {
        let record = extract("Warranty:");

        assert_eq!(record.get("Warranty").unwrap(), "");
    }

    #[test]
    fn test_extract_line_starting_with_colon_falls_through() {
        // ":anchor" has no character before its only colon, so pass 1
        // does not match and the raw line lands in the fallback pass.
        let record = extract(":anchor");

        assert_eq!(record.len(), 1);
        assert_eq!(record.get(":anchor").unwrap(), "");
    }

    #[test]
    fn test_extract_scenario_records() {
        let dell = extract("Name: Dell\nPrice: 500");
        let hp = extract("Name: HP\nPrice: 450");

        assert_eq!(dell.get("Name").unwrap(), "Dell");
        assert_eq!(dell.get("Price").unwrap(), "500");
        assert_eq!(hp.get("Name").unwrap(), "HP");
        assert_eq!(hp.get("Price").unwrap(), "450");
    }

    #[test]
    fn test_extract_deterministic() {
        let text = "Title\nName: Dell\nNote: see appendix\nfree text line";
        let a = extract(text);
        let b = extract(text);

        assert_eq!(a, b);
        let keys_a: Vec<&str> = a.keys().map(String::as_str).collect();
        let keys_b: Vec<&str> = b.keys().map(String::as_str).collect();
        assert_eq!(keys_a, keys_b);
    }

    #[test]
    fn test_extract_key_order_follows_line_order() {
        let record = extract("B: 2\nA: 1\nHeading");
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["B", "A", "Heading"]);
    }
}
