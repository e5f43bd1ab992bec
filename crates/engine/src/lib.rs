//! State engine for selection tables.
//!
//! A table starts from a candidate set of [`Record`]s, narrows it with a
//! substring [`filter`], materializes it page by page through
//! [`Pagination`], and keeps a [`SelectionTracker`] whose records stay
//! visible no matter what the filter or cursor do. [`compose`] merges the
//! selection and the paginated slice into the rows to display, and
//! [`SelectionTable`] drives all of it through a single reducer.

pub mod columns;
pub mod compose;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod record;
pub mod selection;
pub mod summary;
pub mod table;

pub use columns::{Column, FilterFields, build_columns, parse_field_list};
pub use compose::compose;
pub use error::TableConfigError;
pub use filter::FilteredSet;
pub use pagination::{DEFAULT_PAGE_SIZE, LoadTicket, Pagination};
pub use record::{Record, RecordId, SharedRecord};
pub use selection::{DEFAULT_REQUIRED_MESSAGE, SelectionMode, SelectionTracker, Validation};
pub use summary::{DEFAULT_FILTER_LABEL, FilterSummary};
pub use table::{
    DEFAULT_TABLE_HEIGHT, SelectionTable, SelectionTableBuilder, TableConfig, TableEvent,
    TablePhase, TableState, reduce,
};
