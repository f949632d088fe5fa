//! Readers for the two pipeline inputs.
//!
//! - [`calscape`]: the Calscape plant export (spreadsheet)
//! - [`inat`]: the iNaturalist taxa table (CSV)
//!
//! Both load their whole input into memory and return immutable lookup structures.

pub mod calscape;
pub mod inat;

pub use calscape::{
    column_index, read_calscape_from_path, read_calscape_range, CalscapeLayout, CalscapePlants,
    ColumnSpec, SheetSelection,
};
pub use inat::{read_inat_taxa_from_path, read_inat_taxa_from_reader, InatTaxa};
