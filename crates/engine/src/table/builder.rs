use super::config::TableConfig;
use super::state::{TableEvent, TableState, reduce};
use super::SelectionTable;
use crate::record::SharedRecord;
use crate::selection::SelectionMode;

/// Builds a [`SelectionTable`] from caller-supplied seeds.
///
/// Seeds may be supplied in any order; [`SelectionTableBuilder::build`]
/// always applies them as candidates, then selection, then filter, then the
/// first page. Seeds go through the same reducer as user events, so a seeded
/// selection is indistinguishable from one the user just made.
#[derive(Debug, Clone)]
pub struct SelectionTableBuilder {
    config: TableConfig,
    candidates: Vec<SharedRecord>,
    selection: Vec<SharedRecord>,
    record: Option<SharedRecord>,
    filter: Option<String>,
}

impl SelectionTableBuilder {
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            candidates: Vec::new(),
            selection: Vec::new(),
            record: None,
            filter: None,
        }
    }

    #[must_use]
    pub fn candidates(mut self, records: Vec<SharedRecord>) -> Self {
        self.candidates = records;
        self
    }

    /// Pre-selected records. Takes precedence over [`Self::seed_record`].
    #[must_use]
    pub fn seed_selection(mut self, records: Vec<SharedRecord>) -> Self {
        self.selection = records;
        self
    }

    /// Pre-selected primary record, honoured only in single-selection mode.
    #[must_use]
    pub fn seed_record(mut self, record: Option<SharedRecord>) -> Self {
        self.record = record;
        self
    }

    /// Pre-filled filter text.
    #[must_use]
    pub fn seed_filter(mut self, query: Option<String>) -> Self {
        self.filter = query;
        self
    }

    #[must_use]
    pub fn build(self) -> SelectionTable {
        let Self {
            config,
            candidates,
            selection,
            record,
            filter,
        } = self;

        let mut state = TableState::new(&config, candidates);

        let seed = if !selection.is_empty() {
            Some(selection)
        } else if config.selection_mode == SelectionMode::Single {
            record.map(|record| vec![record])
        } else {
            None
        };
        if let Some(rows) = seed {
            state = reduce(&state, &config, TableEvent::Select(rows));
        }

        state = reduce(
            &state,
            &config,
            TableEvent::ApplyFilter(filter.unwrap_or_default()),
        );

        SelectionTable::from_state(config, state)
    }
}
