//! The `Record` type and representative text composition.
//!
//! A record is the extracted key-value representation of one document.
//! Records are deliberately schemaless: keys are discovered at parse time,
//! so a plain ordered map is used rather than a fixed struct. `IndexMap`
//! preserves first-insertion order, which gives two guarantees the rest of
//! the pipeline relies on:
//!
//! - JSON output is written with stable key ordering as produced by
//!   extraction, so artifacts are human-diffable.
//! - The representative string fed to the embedder is composed in record
//!   order, so identical text always embeds identically.

use indexmap::IndexMap;

/// Extracted key-value representation of one document.
///
/// Keys are unique within a record; overwriting an existing key keeps its
/// original position. A record may legitimately be empty if the source text
/// was empty or could not be decoded.
pub type Record = IndexMap<String, String>;

/// An ordered sequence of records, indexed by document position.
///
/// The corpus length equals the number of input documents processed,
/// including documents that failed to decode (those yield an empty record,
/// never an omitted entry).
pub type Corpus = Vec<Record>;

/// Compose the single representative string for a record.
///
/// Concatenates `"key: value"` for every entry whose value is non-empty,
/// joined with a single space, in record insertion order. Entries with
/// empty values (headings and free-text lines captured by the fallback
/// pass) are excluded here but remain in the stored record.
///
/// An empty record, or one containing only empty values, yields an empty
/// string.
pub fn representative_text(record: &Record) -> String {
    record
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record_from(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_representative_text_basic() {
        let record = record_from(&[("Name", "Dell"), ("Price", "500")]);
        assert_eq!(representative_text(&record), "Name: Dell Price: 500");
    }

    #[test]
    fn test_representative_text_skips_empty_values() {
        let record = record_from(&[("Laptop Specs", ""), ("Name", "Dell"), ("Notes", "")]);
        assert_eq!(representative_text(&record), "Name: Dell");
    }

    #[test]
    fn test_representative_text_empty_record() {
        let record = Record::new();
        assert_eq!(representative_text(&record), "");
    }

    #[test]
    fn test_representative_text_all_empty_values() {
        let record = record_from(&[("Heading", ""), ("Another Heading", "")]);
        assert_eq!(representative_text(&record), "");
    }

    #[test]
    fn test_representative_text_preserves_insertion_order() {
        let record = record_from(&[("Zebra", "1"), ("Alpha", "2"), ("Mid", "3")]);
        assert_eq!(representative_text(&record), "Zebra: 1 Alpha: 2 Mid: 3");
    }

    #[test]
    fn test_record_overwrite_keeps_position() {
        let mut record = record_from(&[("Name", "Dell"), ("Price", "500")]);
        record.insert("Name".to_string(), "HP".to_string());

        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Name", "Price"]);
        assert_eq!(record.get("Name").unwrap(), "HP");
    }

    #[test]
    fn test_record_json_round_trip_preserves_order() {
        let record = record_from(&[("Name", "Dell"), ("Price", "500"), ("CPU", "i7")]);
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();

        assert_eq!(record, back);
        let keys: Vec<&str> = back.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Name", "Price", "CPU"]);
    }
}
