use seltab::engine::SelectionMode;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Records: {}", config.records.display());
	println!("  Id field: {}", config.id_field);
	println!(
		"  Display fields: {}",
		or_default(config.display_fields.as_deref(), "(all fields)")
	);
	if let Some(labels) = &config.display_labels {
		println!("  Display labels: {labels}");
	}
	println!(
		"  Filter fields: {}",
		or_default(config.filter_fields.as_deref(), "(display fields)")
	);
	if let Some(labels) = &config.filter_labels {
		println!("  Filter labels: {labels}");
	}
	println!("  Page size: {}", config.page_size);
	println!("  Table height: {}", config.table_height);
	println!(
		"  Selection: {} (min {})",
		mode_to_word(SelectionMode::from_max(config.selection_max)),
		config.selection_min
	);
	if let Some(filter) = &config.initial_filter {
		println!("  Initial filter: {filter}");
	}
	if !config.preselected.is_empty() {
		println!("  Preselected: {}", config.preselected.join(", "));
	}
	println!("  Filter label: {}", config.filter_label);
	println!("  Required message: {}", config.required_message);
	match &config.commands {
		Some(path) => println!("  Commands: {}", path.display()),
		None => println!("  Commands: (stdin)"),
	}
}

fn or_default<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
	value.unwrap_or(fallback)
}

fn mode_to_word(mode: SelectionMode) -> &'static str {
	match mode {
		SelectionMode::None => "disabled",
		SelectionMode::Single => "single",
		SelectionMode::Multiple => "multiple",
	}
}
