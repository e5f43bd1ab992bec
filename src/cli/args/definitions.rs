use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogFormatArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `seltab` binary.
#[derive(Parser, Debug)]
#[command(
	name = "seltab",
	version,
	long_version = long_version(),
	about = "Filter, page through and select records from a JSON dataset",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "RECORDS",
		help = "JSON file holding an array of record objects"
	)]
	pub(crate) records: PathBuf,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SELTAB_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'f',
		long = "display-fields",
		value_name = "FIELDS",
		help = "Comma-separated fields to display (default: all fields of the first record)"
	)]
	pub(crate) display_fields: Option<String>,
	#[arg(
		long = "display-labels",
		value_name = "LABELS",
		help = "Comma-separated column labels, ignored unless one per field (default: field names)"
	)]
	pub(crate) display_labels: Option<String>,
	#[arg(
		short = 'F',
		long = "filter-fields",
		value_name = "FIELDS",
		help = "Comma-separated fields the filter applies to (default: display fields)"
	)]
	pub(crate) filter_fields: Option<String>,
	#[arg(
		long = "filter-labels",
		value_name = "LABELS",
		help = "Comma-separated labels for the filter fields (default: field names)"
	)]
	pub(crate) filter_labels: Option<String>,
	#[arg(
		long = "id-field",
		value_name = "NAME",
		help = "Name of the identifier key in each record (default: Id)"
	)]
	pub(crate) id_field: Option<String>,
	#[arg(
		short = 's',
		long = "page-size",
		value_name = "NUM",
		help = "Records loaded initially and per load-more (default: 20)"
	)]
	pub(crate) page_size: Option<usize>,
	#[arg(
		long = "table-height",
		value_name = "SIZE",
		help = "Opaque table height passed to renderers (default: 400px)"
	)]
	pub(crate) table_height: Option<String>,
	#[arg(
		long = "selection-min",
		value_name = "NUM",
		help = "Minimum number of selected records (default: 0, no minimum)"
	)]
	pub(crate) selection_min: Option<usize>,
	#[arg(
		long = "selection-max",
		value_name = "NUM",
		help = "0 disables selection, 1 selects one record, anything else many (default: 2)"
	)]
	pub(crate) selection_max: Option<u32>,
	#[arg(
		short = 'q',
		long = "filter",
		value_name = "TEXT",
		help = "Pre-filled filter text (default: empty)"
	)]
	pub(crate) filter: Option<String>,
	#[arg(
		long = "select",
		value_delimiter = ',',
		value_name = "ID",
		help = "Comma-separated identifiers to pre-select (default: none)"
	)]
	pub(crate) preselected: Option<Vec<String>>,
	#[arg(
		long = "filter-label",
		value_name = "TEXT",
		help = "Label shown before the filter counts (default: Filter)"
	)]
	pub(crate) filter_label: Option<String>,
	#[arg(
		long = "required-message",
		value_name = "TEXT",
		help = "Validation message, {0} is replaced by the minimum (default: built-in)"
	)]
	pub(crate) required_message: Option<String>,
	#[arg(
		long = "commands",
		value_name = "FILE",
		help = "Read session commands from a file instead of stdin"
	)]
	pub(crate) commands: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity (-v debug, -vv trace)"
	)]
	pub(crate) verbose: u8,
	#[arg(
		long = "log-format",
		value_enum,
		default_value_t = LogFormatArg::Compact,
		help = "Choose how log lines are formatted on stderr"
	)]
	pub(crate) log_format: LogFormatArg,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
