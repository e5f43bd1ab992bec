use clap::ValueEnum;
use seltab::logging::LogFormat;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// Log line formats selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormatArg {
	Pretty,
	Compact,
	Json,
}

impl From<LogFormatArg> for LogFormat {
	fn from(value: LogFormatArg) -> Self {
		match value {
			LogFormatArg::Pretty => LogFormat::Pretty,
			LogFormatArg::Compact => LogFormat::Compact,
			LogFormatArg::Json => LogFormat::Json,
		}
	}
}
