mod cli;
mod settings;
mod workflow;

use std::io;

use anyhow::Result;
use cli::{OutputFormat, parse_cli};
use seltab::logging::{self, LogConfig};
use settings::ResolvedConfig;
use workflow::SessionWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	logging::init(&LogConfig::from_verbosity(cli.verbose).with_format(cli.log_format.into()))?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_session(cli.output, resolved)
}

/// Run the session and print its outcome in the chosen format.
fn run_session(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = SessionWorkflow::from_config(settings)?;
	let outcome = workflow.run(&mut io::stdout().lock())?;

	match format {
		OutputFormat::Plain => cli::print_plain(&outcome),
		OutputFormat::Json => cli::print_json(&outcome)?,
	}

	Ok(())
}
