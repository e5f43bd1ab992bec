//! Case-insensitive substring filtering over a fixed set of fields.

use std::sync::Arc;

use tracing::trace;

use crate::record::{Record, SharedRecord};

/// Result of one filter pass, tagged with the generation that produced it.
///
/// Pagination cursors are only valid against the generation they were seeded
/// on; every filter change or candidate replacement bumps the generation.
#[derive(Debug, Clone, Default)]
pub struct FilteredSet {
    generation: u64,
    records: Arc<[SharedRecord]>,
}

impl FilteredSet {
    #[must_use]
    pub fn new(generation: u64, records: Vec<SharedRecord>) -> Self {
        Self {
            generation,
            records: records.into(),
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn records(&self) -> &[SharedRecord] {
        &self.records
    }

    /// Number of records matching the filter (`numRecordsTotal`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Leading slice of at most `end` records.
    #[must_use]
    pub fn head(&self, end: usize) -> &[SharedRecord] {
        &self.records[..end.min(self.records.len())]
    }
}

/// Returns `true` when `query` should behave as the identity filter.
#[must_use]
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Apply `query` to `candidates`, keeping records where at least one of
/// `fields` contains the query case-insensitively.
///
/// A blank query returns every candidate in source order. A non-blank query
/// with no fields matches nothing.
#[must_use]
pub fn apply(candidates: &[SharedRecord], fields: &[String], query: &str) -> Vec<SharedRecord> {
    if is_blank(query) {
        return candidates.to_vec();
    }

    let needle = query.to_lowercase();
    candidates
        .iter()
        .filter(|record| matches(record, fields, &needle))
        .cloned()
        .collect()
}

/// Check a single record against an already case-folded needle.
pub(crate) fn matches(record: &Record, fields: &[String], needle: &str) -> bool {
    let hit = fields.iter().any(|field| {
        record
            .get(field)
            .filter(|value| !value.is_empty())
            .is_some_and(|value| value.to_lowercase().contains(needle))
    });
    trace!(id = %record.id, hit, "filter decision");
    hit
}
