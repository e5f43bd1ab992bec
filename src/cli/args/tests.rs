use clap::Parser;

use super::CliArgs;
use super::options::{LogFormatArg, OutputFormat};

#[test]
fn minimal_invocation_uses_defaults() {
	let cli = CliArgs::parse_from(["seltab", "records.json"]);
	assert_eq!(cli.records.to_str(), Some("records.json"));
	assert!(cli.config.is_empty());
	assert_eq!(cli.output, OutputFormat::Plain);
	assert_eq!(cli.log_format, LogFormatArg::Compact);
	assert_eq!(cli.verbose, 0);
	assert!(cli.page_size.is_none());
}

#[test]
fn selection_flags_are_parsed() {
	let cli = CliArgs::parse_from([
		"seltab",
		"data.json",
		"--select",
		"a,b",
		"--selection-max",
		"1",
		"--selection-min",
		"1",
		"-q",
		"jo",
		"-vv",
		"-o",
		"json",
	]);
	assert_eq!(cli.preselected, Some(vec!["a".to_string(), "b".to_string()]));
	assert_eq!(cli.selection_max, Some(1));
	assert_eq!(cli.selection_min, Some(1));
	assert_eq!(cli.filter.as_deref(), Some("jo"));
	assert_eq!(cli.verbose, 2);
	assert_eq!(cli.output, OutputFormat::Json);
}
