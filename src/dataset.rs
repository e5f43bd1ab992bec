//! Load candidate records from JSON.
//!
//! The input is an array of flat objects. The identifier key is configurable;
//! every other scalar value becomes a field. Numbers and booleans are
//! stringified, `null` is treated as an absent field and nested values are
//! skipped.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use seltab_engine::{Record, SharedRecord};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Identifier key used by the host platform.
pub const DEFAULT_ID_FIELD: &str = "Id";

#[derive(Debug, Error)]
pub enum DatasetError {
	#[error("failed to parse records: {0}")]
	Json(#[from] serde_json::Error),
	#[error("records must be a JSON array")]
	NotAnArray,
	#[error("record #{index} is not a JSON object")]
	NotAnObject { index: usize },
	#[error("record #{index} has no usable `{field}` identifier")]
	MissingId { index: usize, field: String },
	#[error("record #{index} repeats identifier `{id}`")]
	DuplicateId { index: usize, id: String },
}

fn scalar_text(value: &Value) -> Option<String> {
	match value {
		Value::String(text) => Some(text.clone()),
		Value::Number(number) => Some(number.to_string()),
		Value::Bool(flag) => Some(flag.to_string()),
		_ => None,
	}
}

/// Parse records from a JSON document.
pub fn parse_records(json: &str, id_field: &str) -> Result<Vec<SharedRecord>, DatasetError> {
	let Value::Array(items) = serde_json::from_str::<Value>(json)? else {
		return Err(DatasetError::NotAnArray);
	};

	let mut seen = HashSet::new();
	let mut records = Vec::with_capacity(items.len());
	for (index, item) in items.into_iter().enumerate() {
		let Value::Object(object) = item else {
			return Err(DatasetError::NotAnObject { index });
		};
		let id = object
			.get(id_field)
			.and_then(scalar_text)
			.filter(|id| !id.is_empty())
			.ok_or_else(|| DatasetError::MissingId {
				index,
				field: id_field.to_string(),
			})?;
		if !seen.insert(id.clone()) {
			return Err(DatasetError::DuplicateId { index, id });
		}

		let mut record = Record::new(id);
		for (key, value) in &object {
			if key == id_field {
				continue;
			}
			if let Some(text) = scalar_text(value) {
				record = record.with_field(key.as_str(), text);
			}
		}
		records.push(record.shared());
	}

	debug!(count = records.len(), "parsed records");
	Ok(records)
}

/// Read and parse the records file at `path`.
pub fn load_records(path: &Path, id_field: &str) -> Result<Vec<SharedRecord>> {
	let json = fs::read_to_string(path)
		.with_context(|| format!("failed to read records from {}", path.display()))?;
	let records = parse_records(&json, id_field)
		.with_context(|| format!("invalid records file {}", path.display()))?;
	info!(count = records.len(), path = %path.display(), "loaded candidate records");
	Ok(records)
}

/// Field names of the first record, used when no display fields are given.
#[must_use]
pub fn infer_fields(records: &[SharedRecord]) -> Vec<String> {
	records
		.first()
		.map(|record| record.fields.keys().cloned().collect())
		.unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn parses_scalars_and_skips_nested_values() {
		let json = r#"[
			{"Id": "001", "Name": "John", "Age": 42, "Active": true, "Notes": null, "Tags": ["a"]},
			{"Id": 2, "Name": "Jordan"}
		]"#;
		let records = parse_records(json, DEFAULT_ID_FIELD).unwrap();

		assert_eq!(records.len(), 2);
		assert_eq!(records[0].id.as_str(), "001");
		assert_eq!(records[0].get("Age"), Some("42"));
		assert_eq!(records[0].get("Active"), Some("true"));
		assert_eq!(records[0].get("Notes"), None);
		assert_eq!(records[0].get("Tags"), None);
		assert_eq!(records[0].get("Id"), None);
		assert_eq!(records[1].id.as_str(), "2");
	}

	#[test]
	fn rejects_malformed_documents() {
		assert!(matches!(
			parse_records("{}", DEFAULT_ID_FIELD),
			Err(DatasetError::NotAnArray)
		));
		assert!(matches!(
			parse_records("[1]", DEFAULT_ID_FIELD),
			Err(DatasetError::NotAnObject { index: 0 })
		));
		assert!(matches!(
			parse_records(r#"[{"Name": "x"}]"#, DEFAULT_ID_FIELD),
			Err(DatasetError::MissingId { index: 0, .. })
		));
		assert!(matches!(
			parse_records(r#"[{"Id": "a"}, {"Id": "a"}]"#, DEFAULT_ID_FIELD),
			Err(DatasetError::DuplicateId { index: 1, .. })
		));
	}

	#[test]
	fn custom_id_field() {
		let records = parse_records(r#"[{"key": "k1", "Id": "not-the-id"}]"#, "key").unwrap();
		assert_eq!(records[0].id.as_str(), "k1");
		assert_eq!(records[0].get("Id"), Some("not-the-id"));
	}

	#[test]
	fn load_reads_from_disk() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"[{{"Id": "1", "Name": "Ada", "Email": "ada@example.com"}}]"#).unwrap();

		let records = load_records(file.path(), DEFAULT_ID_FIELD).unwrap();
		assert_eq!(infer_fields(&records), vec!["Name", "Email"]);
	}

	#[test]
	fn load_reports_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = load_records(&dir.path().join("absent.json"), DEFAULT_ID_FIELD).unwrap_err();
		assert!(err.to_string().contains("failed to read records"));
	}
}
