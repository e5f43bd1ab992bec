//! Merge the selection and the paginated slice into the rows to display.

use std::collections::HashSet;

use crate::record::{RecordId, SharedRecord};

/// Selected records first, in selection order, followed by the paginated
/// slice without the records that are already selected.
///
/// Selected records stay visible even when the current filter excludes them.
#[must_use]
pub fn compose(selection: &[SharedRecord], page: &[SharedRecord]) -> Vec<SharedRecord> {
    let selected: HashSet<&RecordId> = selection.iter().map(|record| &record.id).collect();

    let mut shown = Vec::with_capacity(selection.len() + page.len());
    shown.extend(selection.iter().cloned());
    shown.extend(
        page.iter()
            .filter(|record| !selected.contains(&record.id))
            .cloned(),
    );
    shown
}
