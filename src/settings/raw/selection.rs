use serde::Deserialize;

use crate::cli::CliArgs;

/// Multiple selection unless configured otherwise.
const DEFAULT_SELECTION_MAX: u32 = 2;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SelectionSection {
	pub(super) min: Option<usize>,
	pub(super) max: Option<u32>,
}

pub(super) struct SelectionResolution {
	pub(super) min: usize,
	pub(super) max: u32,
}

impl SelectionSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.selection_min {
			self.min = Some(value);
		}
		if let Some(value) = cli.selection_max {
			self.max = Some(value);
		}
	}

	pub(super) fn finalize(self) -> SelectionResolution {
		SelectionResolution {
			min: self.min.unwrap_or(0),
			max: self.max.unwrap_or(DEFAULT_SELECTION_MAX),
		}
	}
}
