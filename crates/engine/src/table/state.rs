//! Immutable table state and the reducer that advances it.
//!
//! Every public operation on a table is expressed as a [`TableEvent`]. The
//! reducer takes the current [`TableState`] by reference and returns the next
//! one, so the filtered set, cursor and selection always change together.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use super::config::TableConfig;
use crate::compose::compose;
use crate::filter::{self, FilteredSet};
use crate::pagination::{LoadTicket, Pagination};
use crate::record::{RecordId, SharedRecord};
use crate::selection::SelectionTracker;

/// Events accepted by [`reduce`].
#[derive(Debug, Clone)]
pub enum TableEvent {
    /// Swap in a new candidate set. The current filter is re-applied and the
    /// cursor reseeded; the selection is kept.
    ReplaceCandidates(Vec<SharedRecord>),
    /// Change the filter text and reseed the cursor.
    ApplyFilter(String),
    /// Extend the cursor by one page.
    LoadMore,
    /// Mark a load-more as in flight, see [`TableState::pending_load`].
    BeginLoadMore,
    /// Finish a load-more started with [`TableEvent::BeginLoadMore`].
    CompleteLoadMore(LoadTicket),
    /// Replace the selection.
    Select(Vec<SharedRecord>),
    /// Flip one record in or out of the selection.
    Toggle(SharedRecord),
    /// Drop selected records that are no longer candidates.
    PruneOrphans,
}

/// Coarse view of where the table is in its lifecycle. Selection is
/// orthogonal to all phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TablePhase {
    /// Unfiltered, first page only.
    Idle,
    /// Filtered, first page only.
    Filtered { query: String },
    /// At least one page loaded beyond the first.
    Paginated { query: String, cursor: usize },
}

/// Snapshot of a selection table.
#[derive(Debug, Clone)]
pub struct TableState {
    candidates: Arc<[SharedRecord]>,
    filter: String,
    filtered: FilteredSet,
    pagination: Pagination,
    selection: SelectionTracker,
    next_generation: u64,
}

impl TableState {
    /// Initial state: the full candidate set is the filtered set and the
    /// cursor is not seeded yet.
    #[must_use]
    pub fn new(config: &TableConfig, candidates: Vec<SharedRecord>) -> Self {
        let candidates: Arc<[SharedRecord]> = candidates.into();
        let filtered = FilteredSet::new(0, candidates.to_vec());
        Self {
            candidates,
            filter: String::new(),
            filtered,
            pagination: Pagination::new(config.page_size),
            selection: SelectionTracker::new(config.selection_mode),
            next_generation: 1,
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[SharedRecord] {
        &self.candidates
    }

    /// Current filter text as last supplied.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn filtered(&self) -> &FilteredSet {
        &self.filtered
    }

    #[must_use]
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Ticket of the in-flight load-more, if any.
    #[must_use]
    pub fn pending_load(&self) -> Option<LoadTicket> {
        self.pagination.pending()
    }

    /// Materialized part of the filtered set.
    #[must_use]
    pub fn paginated(&self) -> &[SharedRecord] {
        self.pagination.slice(&self.filtered)
    }

    /// Selection followed by the remaining paginated records.
    #[must_use]
    pub fn shown_view(&self) -> Vec<SharedRecord> {
        compose(self.selection.records(), self.paginated())
    }

    #[must_use]
    pub fn phase(&self) -> TablePhase {
        let first_page = self.pagination.page_size().get().min(self.filtered.len());
        if self.pagination.cursor() > first_page {
            return TablePhase::Paginated {
                query: self.filter.clone(),
                cursor: self.pagination.cursor(),
            };
        }
        if filter::is_blank(&self.filter) {
            TablePhase::Idle
        } else {
            TablePhase::Filtered {
                query: self.filter.clone(),
            }
        }
    }

    fn refilter(&mut self, config: &TableConfig) {
        let records = filter::apply(
            &self.candidates,
            config.filter_fields.fields(),
            &self.filter,
        );
        let generation = self.next_generation;
        self.next_generation += 1;
        self.filtered = FilteredSet::new(generation, records);
        self.pagination.load_initial(&self.filtered);
        debug!(
            generation,
            query = %self.filter,
            total = self.filtered.len(),
            "filtered set recomputed"
        );
    }

    fn find_candidate(&self, id: &RecordId) -> Option<&SharedRecord> {
        self.candidates.iter().find(|record| &record.id == id)
    }
}

/// Compute the state that follows `state` after `event`.
#[must_use]
pub fn reduce(state: &TableState, config: &TableConfig, event: TableEvent) -> TableState {
    let mut next = state.clone();
    match event {
        TableEvent::ReplaceCandidates(records) => {
            next.candidates = records.into();
            next.refilter(config);
        }
        TableEvent::ApplyFilter(query) => {
            next.filter = query;
            next.refilter(config);
        }
        TableEvent::LoadMore => {
            next.pagination.load_more(&next.filtered);
        }
        TableEvent::BeginLoadMore => {
            next.pagination.begin_load_more(&next.filtered);
        }
        TableEvent::CompleteLoadMore(ticket) => {
            next.pagination.complete_load_more(ticket, &next.filtered);
        }
        TableEvent::Select(rows) => {
            next.selection.set_selection(rows);
        }
        TableEvent::Toggle(record) => {
            next.selection.toggle(record);
        }
        TableEvent::PruneOrphans => {
            let present: HashSet<&RecordId> =
                state.candidates.iter().map(|record| &record.id).collect();
            let removed = next.selection.retain(|id| present.contains(id));
            debug!(removed, "pruned orphaned selections");
        }
    }
    next
}

/// Resolve `id` against the selection first, then the candidate set.
pub(crate) fn lookup(state: &TableState, id: &RecordId) -> Option<SharedRecord> {
    state
        .selection
        .records()
        .iter()
        .find(|record| &record.id == id)
        .or_else(|| state.find_candidate(id))
        .cloned()
}
