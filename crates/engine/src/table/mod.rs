//! Coordinator that owns one table session.
//!
//! [`SelectionTable`] holds the configuration, the current [`TableState`] and
//! the Shown View derived from it. Each operation is a single call to
//! [`reduce`] followed by recomposing the view; operations take `&mut self`,
//! so they cannot interleave on one table.

mod builder;
mod config;
mod state;

pub use builder::SelectionTableBuilder;
pub use config::{DEFAULT_TABLE_HEIGHT, TableConfig};
pub use state::{TableEvent, TablePhase, TableState, reduce};

use tracing::warn;

use crate::pagination::LoadTicket;
use crate::record::{RecordId, SharedRecord};
use crate::selection::Validation;
use crate::summary::FilterSummary;

/// A selection table session.
#[derive(Debug, Clone)]
pub struct SelectionTable {
    config: TableConfig,
    state: TableState,
    shown: Vec<SharedRecord>,
}

impl SelectionTable {
    /// Start building a table; see [`SelectionTableBuilder`] for the
    /// initialization order.
    #[must_use]
    pub fn builder(config: TableConfig) -> SelectionTableBuilder {
        SelectionTableBuilder::new(config)
    }

    fn from_state(config: TableConfig, state: TableState) -> Self {
        let shown = state.shown_view();
        Self {
            config,
            state,
            shown,
        }
    }

    /// Apply one event and recompute the Shown View.
    pub fn dispatch(&mut self, event: TableEvent) {
        self.state = reduce(&self.state, &self.config, event);
        self.shown = self.state.shown_view();
    }

    pub fn apply_filter(&mut self, query: impl Into<String>) {
        self.dispatch(TableEvent::ApplyFilter(query.into()));
    }

    pub fn load_more(&mut self) {
        self.dispatch(TableEvent::LoadMore);
    }

    /// Start a load-more whose result is applied later with
    /// [`SelectionTable::complete_load_more`]. Returns `None` when there is
    /// nothing to load or a request is already in flight.
    pub fn begin_load_more(&mut self) -> Option<LoadTicket> {
        self.dispatch(TableEvent::BeginLoadMore);
        self.state.pending_load()
    }

    /// Apply a load-more ticket. Returns `false` when the ticket went stale.
    pub fn complete_load_more(&mut self, ticket: LoadTicket) -> bool {
        let current = self.state.pending_load() == Some(ticket);
        self.dispatch(TableEvent::CompleteLoadMore(ticket));
        current
    }

    pub fn select(&mut self, rows: Vec<SharedRecord>) {
        self.dispatch(TableEvent::Select(rows));
    }

    /// Toggle the record with `id`, looked up in the selection and then the
    /// candidate set. Returns `false` when the id is unknown.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        let Some(record) = state::lookup(&self.state, id) else {
            warn!(%id, "toggle requested for unknown record");
            return false;
        };
        self.dispatch(TableEvent::Toggle(record));
        true
    }

    /// Resolve identifiers to records, skipping unknown ones.
    #[must_use]
    pub fn resolve(&self, ids: &[RecordId]) -> Vec<SharedRecord> {
        ids.iter()
            .filter_map(|id| state::lookup(&self.state, id))
            .collect()
    }

    pub fn replace_candidates(&mut self, records: Vec<SharedRecord>) {
        self.dispatch(TableEvent::ReplaceCandidates(records));
    }

    pub fn prune_orphans(&mut self) {
        self.dispatch(TableEvent::PruneOrphans);
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Rows to display: selection first, then the paginated remainder.
    #[must_use]
    pub fn shown(&self) -> &[SharedRecord] {
        &self.shown
    }

    #[must_use]
    pub fn selection(&self) -> &[SharedRecord] {
        self.state.selection().records()
    }

    #[must_use]
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.state.selection().is_selected(id)
    }

    /// Primary record, only set when selecting a single record.
    #[must_use]
    pub fn primary(&self) -> Option<&SharedRecord> {
        self.state.selection().primary()
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        self.state.filter()
    }

    /// Number of records matching the current filter.
    #[must_use]
    pub fn num_records_total(&self) -> usize {
        self.state.filtered().len()
    }

    #[must_use]
    pub fn more_available(&self) -> bool {
        self.state.pagination().more_available()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.pagination().is_loading()
    }

    #[must_use]
    pub fn phase(&self) -> TablePhase {
        self.state.phase()
    }

    #[must_use]
    pub fn validate(&self) -> Validation {
        self.state
            .selection()
            .validate(self.config.selection_min, &self.config.required_message)
    }

    #[must_use]
    pub fn summary(&self) -> FilterSummary {
        FilterSummary {
            mode: self.config.selection_mode,
            selected: self.state.selection().len(),
            filtered: self.num_records_total(),
        }
    }
}
