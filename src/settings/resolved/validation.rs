use tracing::warn;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.page_size == 0 {
		return Err(ConfigError::invalid(
			"table.page_size",
			config.page_size.to_string(),
			sources.source_for_page_size(),
			"must be greater than zero",
		));
	}

	// Unsatisfiable minimums are allowed, the session just never validates.
	if config.selection_min > 0 && config.selection_max == 0 {
		warn!(
			min = config.selection_min,
			"selection is disabled but a minimum is required"
		);
	} else if config.selection_min > 1 && config.selection_max == 1 {
		warn!(
			min = config.selection_min,
			"single selection cannot reach the required minimum"
		);
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::sample;
	use super::*;
	use crate::settings::resolved::SettingSource;

	#[test]
	fn zero_page_size_is_rejected() {
		let mut config = sample();
		config.page_size = 0;
		let sources = ConfigSources {
			page_size: Some(SettingSource::Environment("SELTAB__TABLE__PAGE_SIZE")),
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "table.page_size");
		assert!(matches!(err.origin, SettingSource::Environment(_)));
		assert!(err.to_string().contains("must be greater than zero"));
	}

	#[test]
	fn unreachable_minimum_is_only_a_warning() {
		let mut config = sample();
		config.selection_min = 3;
		config.selection_max = 1;
		assert!(validate(&config, &ConfigSources::default()).is_ok());

		config.selection_max = 0;
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&sample(), &ConfigSources::default()).is_ok());
	}
}
