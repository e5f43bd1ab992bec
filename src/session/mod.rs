//! Line-oriented selection session on top of a [`SelectionTable`].
//!
//! Each input line is parsed into a [`Command`] and mapped onto exactly one
//! table operation. After every state change the Shown View is written to
//! the output so the user always sees selection, filter and page together.

mod command;
mod render;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use seltab_engine::{Column, SelectionTable, SharedRecord, Validation};
use tracing::{debug, info, warn};

pub use command::{Command, CommandError, HELP, parse};
pub use render::render_view;

/// Final state of a session.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
	pub accepted: bool,
	pub filter: String,
	pub selection: Vec<SharedRecord>,
	pub primary: Option<SharedRecord>,
	pub validation: Validation,
}

/// What to do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
	Continue,
	Finish { accepted: bool },
}

pub struct Session {
	table: SelectionTable,
	columns: Vec<Column>,
	filter_label: String,
}

impl Session {
	#[must_use]
	pub fn new(table: SelectionTable, columns: Vec<Column>, filter_label: impl Into<String>) -> Self {
		Self {
			table,
			columns,
			filter_label: filter_label.into(),
		}
	}

	#[must_use]
	pub fn table(&self) -> &SelectionTable {
		&self.table
	}

	/// Drive the session from `input` until `done`, `quit` or end of input.
	/// End of input without `done` leaves the selection unaccepted.
	pub fn run(mut self, input: impl BufRead, out: &mut impl Write) -> Result<SessionOutcome> {
		self.show(out)?;
		for line in input.lines() {
			let line = line.context("failed to read session input")?;
			let command = match parse(&line) {
				Ok(Some(command)) => command,
				Ok(None) => continue,
				Err(err) => {
					writeln!(out, "{err}")?;
					continue;
				}
			};
			if let Step::Finish { accepted } = self.execute(command, out)? {
				return Ok(self.outcome(accepted));
			}
		}
		info!("session input ended without `done`");
		Ok(self.outcome(false))
	}

	/// Run one command, writing any feedback to `out`.
	pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Step> {
		debug!(?command, "executing session command");
		match command {
			Command::Filter(text) => {
				self.table.apply_filter(text);
				self.show(out)?;
			}
			Command::More => {
				if !self.table.more_available() {
					writeln!(out, "all {} records loaded", self.table.num_records_total())?;
					return Ok(Step::Continue);
				}
				self.table.load_more();
				self.show(out)?;
			}
			Command::Select(ids) => {
				let rows = self.table.resolve(&ids);
				if rows.len() < ids.len() {
					warn!(
						requested = ids.len(),
						found = rows.len(),
						"some identifiers were not found"
					);
					writeln!(out, "ignored {} unknown id(s)", ids.len() - rows.len())?;
				}
				self.table.select(rows);
				self.show(out)?;
			}
			Command::Toggle(id) => {
				if self.table.toggle(&id) {
					self.show(out)?;
				} else {
					writeln!(out, "unknown id `{id}`")?;
				}
			}
			Command::Prune => {
				self.table.prune_orphans();
				self.show(out)?;
			}
			Command::Show => self.show(out)?,
			Command::Validate => self.report_validation(out)?,
			Command::Help => writeln!(out, "{HELP}")?,
			Command::Done => {
				let validation = self.table.validate();
				if !validation.is_valid {
					self.report_validation(out)?;
					return Ok(Step::Continue);
				}
				return Ok(Step::Finish { accepted: true });
			}
			Command::Quit => return Ok(Step::Finish { accepted: false }),
		}
		Ok(Step::Continue)
	}

	/// Snapshot the outputs of the table.
	#[must_use]
	pub fn outcome(&self, accepted: bool) -> SessionOutcome {
		SessionOutcome {
			accepted,
			filter: self.table.filter().to_string(),
			selection: self.table.selection().to_vec(),
			primary: self.table.primary().cloned(),
			validation: self.table.validate(),
		}
	}

	fn show(&self, out: &mut impl Write) -> Result<()> {
		write!(
			out,
			"{}",
			render_view(&self.table, &self.columns, &self.filter_label)
		)?;
		Ok(())
	}

	fn report_validation(&self, out: &mut impl Write) -> Result<()> {
		let validation = self.table.validate();
		match validation.error_message {
			Some(message) => writeln!(out, "invalid: {message}")?,
			None => writeln!(out, "valid ({} selected)", validation.selected)?,
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use seltab_engine::{
		FilterFields, Record, SelectionMode, TableConfig, build_columns,
	};

	use super::*;

	fn session(mode: SelectionMode, min: usize) -> Session {
		let records = ["John", "Alice", "Jordan", "Bob"]
			.iter()
			.enumerate()
			.map(|(idx, name)| {
				Record::new((idx + 1).to_string())
					.with_field("Name", *name)
					.shared()
			})
			.collect();
		let config = TableConfig::new(20)
			.unwrap()
			.with_selection(mode, min)
			.with_filter_fields(FilterFields::from_fields(vec!["Name".into()]));
		let table = SelectionTable::builder(config).candidates(records).build();
		Session::new(table, build_columns("Name", None), "Filter")
	}

	fn run(session: Session, script: &str) -> (SessionOutcome, String) {
		let mut out = Vec::new();
		let outcome = session.run(Cursor::new(script), &mut out).unwrap();
		(outcome, String::from_utf8(out).unwrap())
	}

	fn ids(records: &[SharedRecord]) -> Vec<&str> {
		records.iter().map(|r| r.id.as_str()).collect()
	}

	#[test]
	fn scripted_selection_is_accepted() {
		let (outcome, output) = run(
			session(SelectionMode::Multiple, 0),
			"select 2\nfilter jo\ntoggle 3\ndone\n",
		);
		assert!(outcome.accepted);
		assert_eq!(outcome.filter, "jo");
		assert_eq!(ids(&outcome.selection), vec!["2", "3"]);
		assert!(outcome.primary.is_none());
		assert!(output.contains("Filter (2/2)"));
	}

	#[test]
	fn done_is_refused_below_minimum() {
		let (outcome, output) = run(session(SelectionMode::Multiple, 2), "toggle 1\ndone\n");
		assert!(!outcome.accepted);
		assert!(output.contains("invalid: Select at least 2 record(s)."));
		assert!(!outcome.validation.is_valid);
	}

	#[test]
	fn single_mode_reports_primary() {
		let (outcome, _) = run(
			session(SelectionMode::Single, 0),
			"select 1\nselect 4\nok\n",
		);
		assert!(outcome.accepted);
		assert_eq!(outcome.primary.map(|r| r.id.to_string()), Some("4".into()));
	}

	#[test]
	fn unknown_input_is_reported_and_skipped() {
		let (outcome, output) = run(
			session(SelectionMode::Multiple, 0),
			"bogus\ntoggle 99\nselect 1,77\nquit\n",
		);
		assert!(!outcome.accepted);
		assert!(output.contains("unknown command `bogus`"));
		assert!(output.contains("unknown id `99`"));
		assert!(output.contains("ignored 1 unknown id(s)"));
		assert_eq!(ids(&outcome.selection), vec!["1"]);
	}

	#[test]
	fn end_of_input_is_not_acceptance() {
		let (outcome, _) = run(session(SelectionMode::Multiple, 0), "toggle 1\n");
		assert!(!outcome.accepted);
	}

	#[test]
	fn more_reports_when_exhausted() {
		let mut session = session(SelectionMode::Multiple, 0);
		let mut out = Vec::new();
		let step = session.execute(Command::More, &mut out).unwrap();
		assert_eq!(step, Step::Continue);
		assert_eq!(String::from_utf8(out).unwrap(), "all 4 records loaded\n");
	}
}
