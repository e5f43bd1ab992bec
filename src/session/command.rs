use thiserror::Error;

use seltab_engine::RecordId;

/// A single line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Replace the filter text; empty text clears it.
	Filter(String),
	More,
	/// Replace the selection; an empty list clears it.
	Select(Vec<RecordId>),
	Toggle(RecordId),
	Prune,
	Show,
	Validate,
	Help,
	Done,
	Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
	#[error("unknown command `{0}` (try `help`)")]
	Unknown(String),
	#[error("`{0}` needs an argument")]
	MissingArgument(&'static str),
}

pub const HELP: &str = "\
commands:
  filter [text]      filter records, no text clears the filter
  more               load the next page
  select [id,...]    replace the selection, no ids clears it
  toggle <id>        add or remove one record
  prune              drop selected records that are no longer candidates
  show               print the table
  validate           check the selection minimum
  done               accept the selection and exit
  quit               exit without accepting";

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
	let line = line.trim();
	if line.is_empty() || line.starts_with('#') {
		return Ok(None);
	}

	let (word, rest) = match line.split_once(char::is_whitespace) {
		Some((word, rest)) => (word, rest.trim()),
		None => (line, ""),
	};

	let command = match word.to_ascii_lowercase().as_str() {
		"filter" | "f" => Command::Filter(rest.to_string()),
		"more" | "m" => Command::More,
		"select" | "s" => Command::Select(
			rest.split(',')
				.map(str::trim)
				.filter(|id| !id.is_empty())
				.map(RecordId::from)
				.collect(),
		),
		"toggle" | "t" => {
			if rest.is_empty() {
				return Err(CommandError::MissingArgument("toggle"));
			}
			Command::Toggle(RecordId::from(rest))
		}
		"prune" => Command::Prune,
		"show" | "ls" => Command::Show,
		"validate" | "v" => Command::Validate,
		"help" | "?" => Command::Help,
		"done" | "ok" => Command::Done,
		"quit" | "q" | "exit" => Command::Quit,
		other => return Err(CommandError::Unknown(other.to_string())),
	};
	Ok(Some(command))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_arguments() {
		assert_eq!(
			parse("filter  Jo "),
			Ok(Some(Command::Filter("Jo".into())))
		);
		assert_eq!(parse("filter"), Ok(Some(Command::Filter(String::new()))));
		assert_eq!(
			parse("select 1, 2,,3"),
			Ok(Some(Command::Select(vec!["1".into(), "2".into(), "3".into()])))
		);
		assert_eq!(parse("select"), Ok(Some(Command::Select(Vec::new()))));
		assert_eq!(parse("t 42"), Ok(Some(Command::Toggle("42".into()))));
	}

	#[test]
	fn blank_and_comment_lines_are_skipped() {
		assert_eq!(parse("   "), Ok(None));
		assert_eq!(parse("# setup"), Ok(None));
	}

	#[test]
	fn errors_are_reported() {
		assert_eq!(
			parse("frobnicate"),
			Err(CommandError::Unknown("frobnicate".into()))
		);
		assert_eq!(parse("toggle"), Err(CommandError::MissingArgument("toggle")));
	}
}
