use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use seltab::dataset::{infer_fields, load_records};
use seltab::engine::{
	Column, FilterFields, RecordId, SelectionMode, SelectionTable, SharedRecord, TableConfig,
	build_columns,
};
use seltab::{Session, SessionOutcome};
use tracing::{debug, warn};

use crate::settings::ResolvedConfig;

/// Coordinates loading records and running the selection session.
pub(crate) struct SessionWorkflow {
	session: Session,
	commands: Option<PathBuf>,
}

impl SessionWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let commands = config.commands.clone();
		let session = SessionFactory::build(config)?;
		Ok(Self { session, commands })
	}

	/// Run the session against the commands file, or stdin when none is set.
	pub(crate) fn run(self, out: &mut impl Write) -> Result<SessionOutcome> {
		match self.commands {
			Some(path) => {
				let file = File::open(&path)
					.with_context(|| format!("failed to open commands file {}", path.display()))?;
				self.session.run(BufReader::new(file), out)
			}
			None => self.session.run(io::stdin().lock(), out),
		}
	}
}

/// Helper for translating resolved configuration into a ready [`Session`].
struct SessionFactory {
	records: Vec<SharedRecord>,
	columns: Vec<Column>,
	config: TableConfig,
}

impl SessionFactory {
	fn build(config: ResolvedConfig) -> Result<Session> {
		let ResolvedConfig {
			records,
			id_field,
			display_fields,
			display_labels,
			filter_fields,
			filter_labels,
			page_size,
			table_height,
			selection_min,
			selection_max,
			initial_filter,
			preselected,
			filter_label,
			required_message,
			..
		} = config;

		let records = load_records(&records, &id_field)?;
		let display_fields = display_fields.unwrap_or_else(|| infer_fields(&records).join(","));
		let filter_fields = filter_fields.unwrap_or_else(|| display_fields.clone());

		let table_config = TableConfig::new(page_size)
			.context("invalid table configuration")?
			.with_selection(SelectionMode::from_max(selection_max), selection_min)
			.with_filter_fields(FilterFields::resolve(
				Some(&filter_fields),
				filter_labels.as_deref(),
			))
			.with_table_height(table_height)
			.with_required_message(required_message);

		let factory = Self {
			columns: build_columns(&display_fields, display_labels.as_deref()),
			records,
			config: table_config,
		};
		Ok(factory.finish(&preselected, initial_filter, filter_label))
	}

	fn preselected(&self, ids: &[String]) -> Vec<SharedRecord> {
		let found: Vec<SharedRecord> = ids
			.iter()
			.filter_map(|id| {
				let id = RecordId::from(id.as_str());
				self.records.iter().find(|record| record.id == id).cloned()
			})
			.collect();
		if found.len() < ids.len() {
			warn!(
				requested = ids.len(),
				found = found.len(),
				"some preselected identifiers are not in the records file"
			);
		}
		found
	}

	fn finish(
		self,
		preselected: &[String],
		initial_filter: Option<String>,
		filter_label: String,
	) -> Session {
		let seeds = self.preselected(preselected);
		let primary = match self.config.selection_mode {
			SelectionMode::Single => seeds.first().cloned(),
			_ => None,
		};
		debug!(
			seeds = seeds.len(),
			columns = self.columns.len(),
			"building selection table"
		);

		let table = SelectionTable::builder(self.config)
			.candidates(self.records)
			.seed_selection(seeds)
			.seed_record(primary)
			.seed_filter(initial_filter)
			.build();
		Session::new(table, self.columns, filter_label)
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write as _;

	use super::*;

	const RECORDS: &str = r#"[
		{"Id": "1", "Name": "John", "Email": "john@example.com"},
		{"Id": "2", "Name": "Alice", "Email": "alice@example.com"},
		{"Id": "3", "Name": "Jordan", "Email": "jordan@example.com"}
	]"#;

	fn config(dir: &tempfile::TempDir, commands: &str) -> ResolvedConfig {
		let records = dir.path().join("records.json");
		std::fs::write(&records, RECORDS).unwrap();
		let script = dir.path().join("commands.txt");
		let mut file = File::create(&script).unwrap();
		file.write_all(commands.as_bytes()).unwrap();

		ResolvedConfig {
			records,
			commands: Some(script),
			id_field: "Id".into(),
			display_fields: None,
			display_labels: None,
			filter_fields: None,
			filter_labels: None,
			page_size: 20,
			table_height: "400px".into(),
			selection_min: 0,
			selection_max: 2,
			initial_filter: None,
			preselected: Vec::new(),
			filter_label: "Filter".into(),
			required_message: "Select at least {0} record(s).".into(),
		}
	}

	fn ids(records: &[SharedRecord]) -> Vec<&str> {
		records.iter().map(|record| record.id.as_str()).collect()
	}

	#[test]
	fn runs_commands_file() {
		let dir = tempfile::tempdir().unwrap();
		let config = config(&dir, "filter jordan@\ntoggle 3\ndone\n");

		let mut out = Vec::new();
		let outcome = SessionWorkflow::from_config(config)
			.unwrap()
			.run(&mut out)
			.unwrap();

		assert!(outcome.accepted);
		assert_eq!(outcome.filter, "jordan@");
		assert_eq!(ids(&outcome.selection), vec!["3"]);
		let output = String::from_utf8(out).unwrap();
		assert!(output.contains("Name"));
		assert!(output.contains("Email"));
	}

	#[test]
	fn seeds_preselection_and_filter() {
		let dir = tempfile::tempdir().unwrap();
		let mut config = config(&dir, "done\n");
		config.selection_max = 1;
		config.preselected = vec!["2".into(), "missing".into()];
		config.initial_filter = Some("jo".into());

		let outcome = SessionWorkflow::from_config(config)
			.unwrap()
			.run(&mut io::sink())
			.unwrap();

		assert_eq!(outcome.filter, "jo");
		assert_eq!(outcome.primary.map(|r| r.id.to_string()), Some("2".into()));
	}

	#[test]
	fn blank_filter_fields_match_nothing() {
		let dir = tempfile::tempdir().unwrap();
		let mut config = config(&dir, "filter jo\nquit\n");
		config.filter_fields = Some(String::new());

		let mut out = Vec::new();
		let outcome = SessionWorkflow::from_config(config)
			.unwrap()
			.run(&mut out)
			.unwrap();
		assert!(!outcome.accepted);
		assert!(String::from_utf8(out).unwrap().contains("(no records)"));
	}

	#[test]
	fn missing_commands_file_is_reported() {
		let dir = tempfile::tempdir().unwrap();
		let mut config = config(&dir, "");
		config.commands = Some(dir.path().join("absent.txt"));

		let err = SessionWorkflow::from_config(config)
			.unwrap()
			.run(&mut io::sink())
			.unwrap_err();
		assert!(err.to_string().contains("failed to open commands file"));
	}
}
