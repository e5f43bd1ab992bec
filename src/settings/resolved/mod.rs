use std::path::PathBuf;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub records: PathBuf,
	pub commands: Option<PathBuf>,
	pub id_field: String,
	/// Comma-separated list; `None` means every field of the first record.
	pub display_fields: Option<String>,
	pub display_labels: Option<String>,
	/// Comma-separated list; `None` falls back to the display fields. An
	/// explicitly blank value matches nothing.
	pub filter_fields: Option<String>,
	pub filter_labels: Option<String>,
	pub page_size: usize,
	pub table_height: String,
	pub selection_min: usize,
	pub selection_max: u32,
	pub initial_filter: Option<String>,
	pub preselected: Vec<String>,
	pub filter_label: String,
	pub required_message: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(super) fn sample() -> ResolvedConfig {
	ResolvedConfig {
		records: PathBuf::from("records.json"),
		commands: None,
		id_field: "Id".into(),
		display_fields: Some("Name,Email".into()),
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
