//! Converts the summary JSON written by each benchmark run into CSV tables.
//!
//! Runs are laid out as `<out_dir>/<test name>/<N>vu_[<S>B_]<timestamp>.json`.
//! The `find provs` test becomes one table of provider counts; every other
//! test contributes fetch latency and bandwidth rows to a second table.

pub mod config;
pub mod error;
pub mod report;
pub mod run_file;
pub mod summary;

pub use config::ReportConfig;
pub use error::ReportError;
pub use report::{generate, CsvTable};
pub use run_file::RunFileName;
pub use summary::TestKind;
