use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod selection;
mod session;
mod table;

use selection::SelectionSection;
use session::SessionSection;
use table::TableSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	table: TableSection,
	selection: SelectionSection,
	session: SessionSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.table.apply_cli_overrides(cli);
		self.selection.apply_cli_overrides(cli);
		self.session.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			page_size: detect_source(
				cli.page_size.is_some(),
				self.table.page_size.is_some(),
				"SELTAB__TABLE__PAGE_SIZE",
				"--page-size",
				"table.page_size",
			),
		};

		let table = self.table.finalize();
		let selection = self.selection.finalize();
		let session = self.session.finalize();

		let config = ResolvedConfig {
			records: cli.records.clone(),
			commands: cli.commands.clone(),
			id_field: table.id_field,
			display_fields: table.display_fields,
			display_labels: table.display_labels,
			filter_fields: table.filter_fields,
			filter_labels: table.filter_labels,
			page_size: table.page_size,
			table_height: table.table_height,
			selection_min: selection.min,
			selection_max: selection.max,
			initial_filter: session.initial_filter,
			preselected: session.preselected,
			filter_label: session.filter_label,
			required_message: session.required_message,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
