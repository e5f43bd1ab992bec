use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use seltab::app_dirs;
use tracing::debug;

use crate::cli::CliArgs;

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			debug!(path = %path.display(), "checking default config file");
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("seltab")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("session.preselected"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".seltab.toml"));
		files.push(current_dir.join("seltab.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".seltab.toml")));
		assert!(files.iter().any(|path| path.ends_with("seltab.toml")));
	}

	#[test]
	fn explicit_config_file_is_merged() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("custom.toml");
		fs::write(&path, "[table]\npage_size = 7\ndisplay_fields = \"Name,Email\"\n").unwrap();

		let cli = CliArgs::parse_from([
			"seltab",
			"records.json",
			"--no-config",
			"--config",
			path.to_str().unwrap(),
		]);
		let config = build_config(&cli).unwrap();
		assert_eq!(config.get_int("table.page_size").unwrap(), 7);
		assert_eq!(
			config.get_string("table.display_fields").unwrap(),
			"Name,Email"
		);
	}

	#[test]
	fn missing_explicit_config_file_fails() {
		let cli = CliArgs::parse_from([
			"seltab",
			"records.json",
			"--no-config",
			"--config",
			"/definitely/not/here.toml",
		]);
		assert!(build_config(&cli).is_err());
	}
}
