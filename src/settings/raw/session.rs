use seltab::engine::{DEFAULT_FILTER_LABEL, DEFAULT_REQUIRED_MESSAGE};
use serde::Deserialize;

use super::super::util::{non_blank, sanitize_ids};
use crate::cli::CliArgs;

/// Seeds and user-facing text for the interactive session.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SessionSection {
	pub(super) initial_filter: Option<String>,
	pub(super) preselected: Option<Vec<String>>,
	pub(super) filter_label: Option<String>,
	pub(super) required_message: Option<String>,
}

pub(super) struct SessionResolution {
	pub(super) initial_filter: Option<String>,
	pub(super) preselected: Vec<String>,
	pub(super) filter_label: String,
	pub(super) required_message: String,
}

impl SessionSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.filter.clone() {
			self.initial_filter = Some(value);
		}
		if let Some(value) = &cli.preselected {
			self.preselected = Some(value.clone());
		}
		if let Some(value) = cli.filter_label.clone() {
			self.filter_label = Some(value);
		}
		if let Some(value) = cli.required_message.clone() {
			self.required_message = Some(value);
		}
	}

	pub(super) fn finalize(self) -> SessionResolution {
		SessionResolution {
			initial_filter: non_blank(self.initial_filter),
			preselected: self.preselected.map(sanitize_ids).unwrap_or_default(),
			filter_label: non_blank(self.filter_label)
				.unwrap_or_else(|| DEFAULT_FILTER_LABEL.to_string()),
			required_message: non_blank(self.required_message)
				.unwrap_or_else(|| DEFAULT_REQUIRED_MESSAGE.to_string()),
		}
	}
}
