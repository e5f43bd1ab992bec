use seltab::dataset::DEFAULT_ID_FIELD;
use seltab::engine::{DEFAULT_PAGE_SIZE, DEFAULT_TABLE_HEIGHT};
use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// Column, filter and paging options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TableSection {
	pub(super) display_fields: Option<String>,
	pub(super) display_labels: Option<String>,
	pub(super) filter_fields: Option<String>,
	pub(super) filter_labels: Option<String>,
	pub(super) id_field: Option<String>,
	pub(super) page_size: Option<usize>,
	pub(super) table_height: Option<String>,
}

pub(super) struct TableResolution {
	pub(super) display_fields: Option<String>,
	pub(super) display_labels: Option<String>,
	pub(super) filter_fields: Option<String>,
	pub(super) filter_labels: Option<String>,
	pub(super) id_field: String,
	pub(super) page_size: usize,
	pub(super) table_height: String,
}

impl TableSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.display_fields.clone() {
			self.display_fields = Some(value);
		}
		if let Some(value) = cli.display_labels.clone() {
			self.display_labels = Some(value);
		}
		if let Some(value) = cli.filter_fields.clone() {
			self.filter_fields = Some(value);
		}
		if let Some(value) = cli.filter_labels.clone() {
			self.filter_labels = Some(value);
		}
		if let Some(value) = cli.id_field.clone() {
			self.id_field = Some(value);
		}
		if let Some(value) = cli.page_size {
			self.page_size = Some(value);
		}
		if let Some(value) = cli.table_height.clone() {
			self.table_height = Some(value);
		}
	}

	pub(super) fn finalize(self) -> TableResolution {
		TableResolution {
			display_fields: non_blank(self.display_fields),
			display_labels: non_blank(self.display_labels),
			filter_fields: self.filter_fields,
			filter_labels: non_blank(self.filter_labels),
			id_field: non_blank(self.id_field).unwrap_or_else(|| DEFAULT_ID_FIELD.to_string()),
			page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE.get()),
			table_height: self
				.table_height
				.unwrap_or_else(|| DEFAULT_TABLE_HEIGHT.to_string()),
		}
	}
}
