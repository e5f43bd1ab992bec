//! Logging setup on top of `tracing` and `tracing-subscriber`.
//!
//! Log lines go to stderr so that stdout only carries the session table and
//! the final outcome. `SELTAB_LOG` takes an `EnvFilter` directive and wins
//! over the verbosity flags.

use std::io;

use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV: &str = "SELTAB_LOG";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
	Pretty,
	#[default]
	Compact,
	Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
	pub level: Level,
	pub format: LogFormat,
	pub with_ansi: bool,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			level: Level::WARN,
			format: LogFormat::default(),
			with_ansi: true,
		}
	}
}

impl LogConfig {
	/// Map a `-v` count to a level: none is warn, then info, debug and trace.
	#[must_use]
	pub fn from_verbosity(verbosity: u8) -> Self {
		let level = match verbosity {
			0 => Level::WARN,
			1 => Level::INFO,
			2 => Level::DEBUG,
			_ => Level::TRACE,
		};
		Self {
			level,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_format(mut self, format: LogFormat) -> Self {
		self.format = format;
		self
	}

	fn filter(&self) -> EnvFilter {
		EnvFilter::try_from_env(LOG_ENV)
			.unwrap_or_else(|_| EnvFilter::new(self.level.as_str().to_ascii_lowercase()))
	}
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<()> {
	let registry = tracing_subscriber::registry().with(config.filter());
	let result = match config.format {
		LogFormat::Pretty => registry
			.with(
				fmt::layer()
					.pretty()
					.with_writer(io::stderr)
					.with_ansi(config.with_ansi),
			)
			.try_init(),
		LogFormat::Compact => registry
			.with(
				fmt::layer()
					.compact()
					.with_target(false)
					.with_writer(io::stderr)
					.with_ansi(config.with_ansi),
			)
			.try_init(),
		LogFormat::Json => registry
			.with(fmt::layer().json().with_writer(io::stderr))
			.try_init(),
	};
	result.map_err(|err| anyhow!("failed to initialize logging: {err}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_maps_to_levels() {
		assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
		assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
		assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
		assert_eq!(LogConfig::from_verbosity(9).level, Level::TRACE);
	}

	#[test]
	fn format_builder_overrides_default() {
		let config = LogConfig::from_verbosity(0).with_format(LogFormat::Json);
		assert_eq!(config.format, LogFormat::Json);
	}
}
