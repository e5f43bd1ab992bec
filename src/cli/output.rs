use anyhow::Result;
use seltab::{SessionOutcome, SharedRecord};
use serde_json::{Map, Value, json};

/// Print the selected identifiers, one per line.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	if !outcome.accepted {
		println!("Selection cancelled (filter: '{}')", outcome.filter);
		return;
	}

	if outcome.selection.is_empty() {
		println!("No selection");
	}
	for record in &outcome.selection {
		println!("{}", record.id);
	}
}

fn record_json(record: &SharedRecord) -> Value {
	let mut object = Map::new();
	object.insert("id".into(), Value::String(record.id.to_string()));
	for (field, value) in &record.fields {
		object.insert(field.clone(), Value::String(value.clone()));
	}
	Value::Object(object)
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let selection: Vec<Value> = outcome.selection.iter().map(record_json).collect();
	let primary = outcome.primary.as_ref().map_or(Value::Null, record_json);

	let payload = json!({
		"accepted": outcome.accepted,
		"filter": outcome.filter,
		"selection": selection,
		"primary": primary,
		"validation": outcome.validation,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
