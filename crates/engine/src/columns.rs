//! Column and filter-field construction from comma-delimited host strings.
//!
//! Mismatched label lists never fail: the field names are used instead.

use serde::Serialize;

/// A displayed column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub label: String,
    pub field: String,
}

/// Split a comma-delimited field list, dropping spaces and empty entries.
#[must_use]
pub fn parse_field_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(|part| part.replace(' ', ""))
        .filter(|part| !part.is_empty())
        .collect()
}

fn parse_labels(text: Option<&str>) -> Option<Vec<String>> {
    let text = text?;
    if text.trim().is_empty() {
        return None;
    }
    Some(text.split(',').map(|label| label.trim().to_string()).collect())
}

/// Build columns for `fields`, using `labels` only when their count matches.
#[must_use]
pub fn build_columns(fields: &str, labels: Option<&str>) -> Vec<Column> {
    let fields = parse_field_list(fields);
    let labels = parse_labels(labels).filter(|labels| labels.len() == fields.len());

    fields
        .into_iter()
        .enumerate()
        .map(|(idx, field)| {
            let label = labels
                .as_ref()
                .map_or_else(|| field.clone(), |labels| labels[idx].clone());
            Column { label, field }
        })
        .collect()
}

/// Fields the filter applies to, with the labels shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterFields {
    fields: Vec<String>,
    labels: Vec<String>,
}

impl FilterFields {
    /// Resolve filter fields and their labels.
    ///
    /// Blank `fields` yields no filter fields at all.
    #[must_use]
    pub fn resolve(fields: Option<&str>, labels: Option<&str>) -> Self {
        let fields = fields.map(parse_field_list).unwrap_or_default();
        let labels = parse_labels(labels)
            .filter(|labels| labels.len() == fields.len())
            .unwrap_or_else(|| fields.clone());
        Self { fields, labels }
    }

    /// Filter over exactly `fields`, labelled by their names.
    #[must_use]
    pub fn from_fields(fields: Vec<String>) -> Self {
        Self {
            labels: fields.clone(),
            fields,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Hint text for the filter input.
    #[must_use]
    pub fn placeholder(&self) -> String {
        self.labels.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_list_strips_spaces_and_empties() {
        assert_eq!(
            parse_field_list(" Name , Account Id,,Email "),
            vec!["Name", "AccountId", "Email"]
        );
        assert!(parse_field_list("").is_empty());
    }

    #[test]
    fn matching_labels_are_used() {
        let columns = build_columns("Name,Email", Some("Full name, E-mail"));
        assert_eq!(columns[0].label, "Full name");
        assert_eq!(columns[1].label, "E-mail");
        assert_eq!(columns[1].field, "Email");
    }

    #[test]
    fn mismatched_labels_fall_back_to_fields() {
        let columns = build_columns("Name,Email", Some("Only one"));
        let labels: Vec<_> = columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Name", "Email"]);

        let columns = build_columns("Name", None);
        assert_eq!(columns[0].label, "Name");
    }

    #[test]
    fn filter_labels_fall_back_on_mismatch() {
        let filter = FilterFields::resolve(Some("Name, Email"), Some("Name"));
        assert_eq!(filter.fields(), ["Name", "Email"]);
        assert_eq!(filter.placeholder(), "Name, Email");

        let filter = FilterFields::resolve(Some("Name,Email"), Some("Who, Mail"));
        assert_eq!(filter.labels(), ["Who", "Mail"]);
    }

    #[test]
    fn blank_filter_fields_resolve_to_empty() {
        let filter = FilterFields::resolve(Some("  "), Some("Name"));
        assert!(filter.is_empty());
        assert!(FilterFields::resolve(None, None).is_empty());
    }
}
