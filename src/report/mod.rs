//! Reporting for a geophyte selection.
//!
//! - [`summary`]: human-readable counts
//! - [`export`]: the family/genus/species CSV report

pub mod export;
pub mod summary;

pub use export::{report_rows, write_geophytes_csv, write_rows_to_writer, GeophyteRow};
pub use summary::GeophyteSummary;
