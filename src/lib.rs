//! Library side of the `seltab` binary.
//!
//! The selection-table engine itself lives in `seltab-engine` and is
//! re-exported here. This crate adds what a standalone tool needs around it:
//! dataset loading, logging setup, platform directories and an interactive
//! line-oriented session.

pub mod app_dirs;
pub mod dataset;
pub mod logging;
pub mod session;

pub use seltab_engine as engine;
pub use seltab_engine::{
	Column, FilterFields, Record, RecordId, SelectionMode, SelectionTable, SharedRecord,
	TableConfig, Validation,
};
pub use session::{Session, SessionOutcome};
