use std::num::NonZeroUsize;

use crate::columns::FilterFields;
use crate::error::TableConfigError;
use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::selection::{DEFAULT_REQUIRED_MESSAGE, SelectionMode};

/// Default opaque height handed to the renderer.
pub const DEFAULT_TABLE_HEIGHT: &str = "400px";

/// Session configuration for a [`SelectionTable`](super::SelectionTable).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Records loaded initially and per "load more".
    pub page_size: NonZeroUsize,
    pub selection_mode: SelectionMode,
    /// Minimum selection size for a valid table; `0` disables the check.
    pub selection_min: usize,
    pub filter_fields: FilterFields,
    /// Passed through to the renderer untouched.
    pub table_height: String,
    /// Validation message template, `{0}` is replaced by `selection_min`.
    pub required_message: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            selection_mode: SelectionMode::default(),
            selection_min: 0,
            filter_fields: FilterFields::default(),
            table_height: DEFAULT_TABLE_HEIGHT.to_string(),
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
        }
    }
}

impl TableConfig {
    /// Create a configuration with the given page size and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`TableConfigError::ZeroPageSize`] when `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self, TableConfigError> {
        let page_size = NonZeroUsize::new(page_size).ok_or(TableConfigError::ZeroPageSize)?;
        Ok(Self {
            page_size,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn with_selection(mut self, mode: SelectionMode, min: usize) -> Self {
        self.selection_mode = mode;
        self.selection_min = min;
        self
    }

    #[must_use]
    pub fn with_filter_fields(mut self, fields: FilterFields) -> Self {
        self.filter_fields = fields;
        self
    }

    #[must_use]
    pub fn with_table_height(mut self, height: impl Into<String>) -> Self {
        self.table_height = height.into();
        self
    }

    #[must_use]
    pub fn with_required_message(mut self, template: impl Into<String>) -> Self {
        self.required_message = template.into();
        self
    }
}
