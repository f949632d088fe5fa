//! `calscape-geophytes` finds the geophytes (plants with bulbs, corms, rhizomes or tubers) in a
//! Calscape export of California native plants.
//!
//! The pipeline has four stages:
//!
//! 1. [`ingestion::read_calscape_from_path`] reads the Calscape spreadsheet into
//!    [`ingestion::CalscapePlants`] (genus -> species, species -> common name / URL).
//! 2. [`ingestion::read_inat_taxa_from_path`] reads an iNaturalist taxa CSV into
//!    [`ingestion::InatTaxa`] (family <-> genus).
//! 3. [`selection::Geophytes::select`] applies [`selection::GEOPHYTE_RULES`] and groups the
//!    selected species by family and genus.
//! 4. [`report`] prints a [`report::GeophyteSummary`] and optionally writes the CSV report.
//!
//! Selection is based on Philip Rundel, "Making Sense of Geophyte Diversity", Fremontia 44(3),
//! 2016: whole families (Liliaceae, Iridaceae, Tecophilaeaceae) plus explicit genus lists for
//! Brodiaeoideae, Allium and the geophyte genera of Agavoideae.
//!
//! ## Example
//!
//! ```no_run
//! use calscape_geophytes::ingestion::{
//!     read_calscape_from_path, read_inat_taxa_from_path, CalscapeLayout, SheetSelection,
//! };
//! use calscape_geophytes::report::{write_geophytes_csv, GeophyteSummary};
//! use calscape_geophytes::selection::{Geophytes, GEOPHYTE_RULES};
//!
//! # fn main() -> Result<(), calscape_geophytes::GeophyteError> {
//! let plants = read_calscape_from_path(
//!     "calscape.xlsx",
//!     &SheetSelection::First,
//!     &CalscapeLayout::default(),
//! )?;
//! let taxa = read_inat_taxa_from_path("taxa.csv")?;
//! let geophytes = Geophytes::select(&plants, &taxa, GEOPHYTE_RULES)?;
//!
//! println!("{}", GeophyteSummary::from_geophytes(&geophytes));
//! write_geophytes_csv("geophytes.csv", &geophytes, &plants, true)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: spreadsheet and taxonomy readers
//! - [`selection`]: inclusion rules and the selector
//! - [`report`]: summary counts and CSV export
//! - [`types`]: shared data model
//! - [`error`]: the error type used across the pipeline

pub mod error;
pub mod ingestion;
pub mod report;
pub mod selection;
pub mod types;

pub use error::{GeophyteError, GeophyteResult};
