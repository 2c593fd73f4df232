//! JSON artifact writing and result printing.
//!
//! The extracted-records artifact is a JSON array with one object per
//! input document. Records are `IndexMap`s, so object keys come out in
//! extraction order, and the 4-space indentation is fixed — the file is
//! meant to be human-diffable.

use log::info;
use recordex_core::{Error, Record, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// Serialize records as a pretty-printed JSON array with 4-space indent.
pub fn records_to_json(records: &[Record]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut serializer)
        .map_err(|e| Error::serialization(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| Error::serialization(e.to_string()))
}

/// Write the extracted records artifact to `path`.
pub async fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let json = records_to_json(records)?;
    tokio::fs::write(path, json).await?;
    info!(
        "Wrote {} record(s) to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

/// Print ranked answer records to stdout, one JSON object per rank.
pub fn print_answers(records: &[Record]) -> Result<()> {
    if records.is_empty() {
        println!("No matching records.");
        return Ok(());
    }

    for (rank, record) in records.iter().enumerate() {
        let json = records_to_json(std::slice::from_ref(record))?;
        println!("--- result {} ---", rank + 1);
        println!("{json}");
    }
    Ok(())
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
    fn test_records_to_json_uses_four_space_indent() {
        let records = vec![record_from(&[("Name", "Dell")])];
        let json = records_to_json(&records).unwrap();

        assert!(json.contains("    {"));
        assert!(json.contains("        \"Name\": \"Dell\""));
    }

    #[test]
    fn test_records_to_json_round_trip_preserves_order() {
        let records = vec![
            record_from(&[("Name", "Dell"), ("Price", "500"), ("CPU", "i7")]),
            record_from(&[("Name", "HP"), ("Price", "450")]),
            Record::new(),
        ];

        let json = records_to_json(&records).unwrap();
        let back: Vec<Record> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, records);
        let keys: Vec<&str> = back[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Name", "Price", "CPU"]);
    }

    #[test]
    fn test_records_to_json_empty_corpus() {
        let json = records_to_json(&[]).unwrap();
        assert_eq!(json, "[]");
    }

    #[tokio::test]
    async fn test_write_records_creates_readable_artifact() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("extracted_information.json");
        let records = vec![record_from(&[("Name", "Dell")])];

        write_records(&path, &records).await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let back: Vec<Record> = serde_json::from_str(&contents).unwrap();
        assert_eq!(back, records);
    }
}
