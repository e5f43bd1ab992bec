//! Ordered selection with constant-time membership checks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::record::{RecordId, SharedRecord};

/// Template used when the caller does not supply a validation message.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "Select at least {0} record(s).";

/// How many records the user may select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Selection is not offered at all.
    None,
    /// A single primary record.
    Single,
    /// Any number of records.
    #[default]
    Multiple,
}

impl SelectionMode {
    /// Interpret a host-style `selectionMax` value: `0` disables selection,
    /// `1` selects a single record and anything else allows many.
    #[must_use]
    pub fn from_max(max: u32) -> Self {
        match max {
            0 => Self::None,
            1 => Self::Single,
            _ => Self::Multiple,
        }
    }

    #[must_use]
    pub fn allows_selection(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Outcome of checking the selection against a minimum count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub is_valid: bool,
    pub selected: usize,
    pub required: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Selected records in selection order plus the derived identifier set.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    mode: SelectionMode,
    records: Vec<SharedRecord>,
    ids: HashSet<RecordId>,
}

impl SelectionTracker {
    #[must_use]
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            records: Vec::new(),
            ids: HashSet::new(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Selected records in the order they were selected.
    #[must_use]
    pub fn records(&self) -> &[SharedRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    /// The primary record when selecting a single record.
    #[must_use]
    pub fn primary(&self) -> Option<&SharedRecord> {
        match self.mode {
            SelectionMode::Single => self.records.first(),
            _ => None,
        }
    }

    /// Replace the selection with `rows`.
    ///
    /// Repeated identifiers keep their first occurrence. Returns `false` when
    /// selection is disabled, in which case nothing changes.
    pub fn set_selection(&mut self, rows: impl IntoIterator<Item = SharedRecord>) -> bool {
        if !self.mode.allows_selection() {
            warn!("selection ignored: selection is disabled for this table");
            return false;
        }

        let mut ids = HashSet::new();
        let records: Vec<SharedRecord> = rows
            .into_iter()
            .filter(|record| ids.insert(record.id.clone()))
            .collect();

        debug!(count = records.len(), mode = ?self.mode, "selection replaced");
        self.records = records;
        self.ids = ids;
        true
    }

    /// Flip membership of `record`.
    ///
    /// In single mode selecting a record replaces the previous one.
    pub fn toggle(&mut self, record: SharedRecord) -> bool {
        if self.is_selected(&record.id) {
            let remaining: Vec<SharedRecord> = self
                .records
                .iter()
                .filter(|existing| existing.id != record.id)
                .cloned()
                .collect();
            return self.set_selection(remaining);
        }

        match self.mode {
            SelectionMode::Single => self.set_selection([record]),
            _ => {
                let mut next = self.records.clone();
                next.push(record);
                self.set_selection(next)
            }
        }
    }

    /// Keep only selected records whose identifier satisfies `keep`.
    /// Returns the number of records removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&RecordId) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|record| keep(&record.id));
        self.ids = self.records.iter().map(|record| record.id.clone()).collect();
        before - self.records.len()
    }

    /// Check the selection against `min`; `0` means no minimum.
    ///
    /// `template` is the caller's message with `{0}` standing for `min`.
    #[must_use]
    pub fn validate(&self, min: usize, template: &str) -> Validation {
        let selected = self.records.len();
        if min > 0 && selected < min {
            return Validation {
                is_valid: false,
                selected,
                required: min,
                error_message: Some(template.replace("{0}", &min.to_string())),
            };
        }
        Validation {
            is_valid: true,
            selected,
            required: min,
            error_message: None,
        }
    }
}
