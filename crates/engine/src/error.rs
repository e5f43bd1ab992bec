use thiserror::Error;

/// Errors raised while building a [`TableConfig`](crate::TableConfig).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableConfigError {
    /// Page size must be a positive number of records.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
}
