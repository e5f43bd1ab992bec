use std::collections::HashSet;

/// Trim identifiers, dropping empties and repeats while keeping order.
pub(super) fn sanitize_ids(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	values
		.into_iter()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty() && seen.insert(value.clone()))
		.collect()
}

/// Treat blank strings as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_are_trimmed_and_deduplicated() {
		let ids = sanitize_ids(vec![" a ".into(), "".into(), "b".into(), "a".into()]);
		assert_eq!(ids, vec!["a", "b"]);
	}

	#[test]
	fn blank_strings_become_none() {
		assert_eq!(non_blank(Some("  ".into())), None);
		assert_eq!(non_blank(Some("x".into())), Some("x".into()));
		assert_eq!(non_blank(None), None);
	}
}
