use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"seltab",
		"records.json",
		"--display-fields",
		"Name,Email",
		"--filter-fields",
		"Name",
		"--page-size",
		"5",
		"--selection-max",
		"1",
		"--select",
		"7",
		"-q",
		"jo",
	]);

	let mut config = RawConfig::default();
	config.table.page_size = Some(50);
	config.selection.max = Some(3);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.table.display_fields.as_deref(), Some("Name,Email"));
	assert_eq!(config.table.filter_fields.as_deref(), Some("Name"));
	assert_eq!(config.table.page_size, Some(5));
	assert_eq!(config.selection.max, Some(1));
	assert_eq!(config.session.preselected, Some(vec!["7".to_string()]));
	assert_eq!(config.session.initial_filter.as_deref(), Some("jo"));
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["seltab", "records.json"]);
	let resolved = RawConfig::default().resolve(&cli).unwrap();

	assert_eq!(resolved.page_size, 20);
	assert_eq!(resolved.id_field, "Id");
	assert_eq!(resolved.table_height, "400px");
	assert_eq!(resolved.selection_min, 0);
	assert_eq!(resolved.selection_max, 2);
	assert_eq!(resolved.filter_label, "Filter");
	assert!(resolved.initial_filter.is_none());
	assert!(resolved.preselected.is_empty());
}

#[test]
fn resolve_rejects_zero_page_size_from_cli() {
	let cli = CliArgs::parse_from(["seltab", "records.json", "--page-size", "0"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("table.page_size"));
	assert!(message.contains("CLI flag `--page-size`"));
}
