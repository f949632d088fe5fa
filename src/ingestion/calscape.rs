//! Calscape spreadsheet ingestion.
//!
//! A Calscape search export is a workbook whose plant table starts a few rows down the sheet,
//! below some banner rows. The reader looks for three columns at fixed positions, checks their
//! header text, and indexes every data row below the header.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::{debug, info, warn};

use crate::error::{GeophyteError, GeophyteResult};
use crate::types::PlantRecord;

/// A required column: its letter (`"A"`, `"AW"`, ...) and the exact header text it must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Spreadsheet column letters.
    pub column: String,
    /// Expected header cell text.
    pub header: String,
}

impl ColumnSpec {
    /// Create a new column spec.
    pub fn new(column: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            header: header.into(),
        }
    }
}

/// Where the plant table lives inside the sheet.
///
/// [`Default`] describes the Calscape export layout: header on row 6, botanical name in column
/// A, common name in column B, plant URL in column AW.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalscapeLayout {
    /// 1-based spreadsheet row holding the column headers.
    pub header_row: u32,
    pub botanical_name: ColumnSpec,
    pub common_name: ColumnSpec,
    pub plant_url: ColumnSpec,
}

impl Default for CalscapeLayout {
    fn default() -> Self {
        Self {
            header_row: 6,
            botanical_name: ColumnSpec::new("A", "Botanical Name"),
            common_name: ColumnSpec::new("B", "Common Name"),
            plant_url: ColumnSpec::new("AW", "Plant Url"),
        }
    }
}

/// Which sheet of the workbook holds the plant table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelection {
    /// The first sheet in workbook order (default).
    First,
    /// A sheet chosen by name.
    Named(String),
}

impl Default for SheetSelection {
    fn default() -> Self {
        Self::First
    }
}

/// Plants from a Calscape export, indexed by genus and by species name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalscapePlants {
    genus_to_species: BTreeMap<String, BTreeSet<String>>,
    records: BTreeMap<String, PlantRecord>,
}

impl CalscapePlants {
    /// Build the indexes from plant records.
    ///
    /// Fails with [`GeophyteError::MalformedName`] (1-based position in `records`) if a
    /// species name is not a binomial.
    pub fn from_records(records: impl IntoIterator<Item = PlantRecord>) -> GeophyteResult<Self> {
        let mut plants = Self::default();
        for (idx0, record) in records.into_iter().enumerate() {
            plants.insert(idx0 + 1, record)?;
        }
        Ok(plants)
    }

    fn insert(&mut self, row: usize, record: PlantRecord) -> GeophyteResult<()> {
        let genus = record
            .genus()
            .ok_or_else(|| GeophyteError::MalformedName {
                row,
                name: record.species.clone(),
            })?
            .to_string();

        self.genus_to_species
            .entry(genus)
            .or_default()
            .insert(record.species.clone());
        let species = record.species.clone();
        if self.records.insert(species.clone(), record).is_some() {
            warn!(row, species = %species, "duplicate botanical name; keeping the later row");
        }
        Ok(())
    }

    /// Genera present in the export, in lexical order.
    pub fn genera(&self) -> impl Iterator<Item = &str> {
        self.genus_to_species.keys().map(String::as_str)
    }

    /// Whether any plant in the export belongs to `genus`.
    pub fn has_genus(&self, genus: &str) -> bool {
        self.genus_to_species.contains_key(genus)
    }

    /// Species of `genus` present in the export; empty if the genus is absent.
    pub fn species_for_genus<'a>(
        &'a self,
        genus: &str,
    ) -> impl Iterator<Item = &'a str> + use<'a> {
        self.genus_to_species
            .get(genus)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Full record for a species, if present.
    pub fn record(&self, species: &str) -> Option<&PlantRecord> {
        self.records.get(species)
    }

    /// Common name of a species.
    pub fn common_name_for_species(&self, species: &str) -> GeophyteResult<&str> {
        self.record(species)
            .map(|r| r.common_name.as_str())
            .ok_or_else(|| GeophyteError::missing_key("species->common name", species))
    }

    /// Calscape URL of a species.
    pub fn url_for_species(&self, species: &str) -> GeophyteResult<&str> {
        self.record(species)
            .map(|r| r.url.as_str())
            .ok_or_else(|| GeophyteError::missing_key("species->url", species))
    }

    /// Number of distinct species names.
    pub fn species_count(&self) -> usize {
        self.records.len()
    }

    /// Number of distinct genera.
    pub fn genus_count(&self) -> usize {
        self.genus_to_species.len()
    }
}

/// Read a Calscape export (`.xlsx`, `.xls`, `.ods`, ...) from disk.
pub fn read_calscape_from_path(
    path: impl AsRef<Path>,
    sheet: &SheetSelection,
    layout: &CalscapeLayout,
) -> GeophyteResult<CalscapePlants> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = match sheet {
        SheetSelection::First => sheet_names.first().cloned().ok_or_else(|| {
            GeophyteError::Workbook {
                message: "workbook has no sheets".to_string(),
            }
        })?,
        SheetSelection::Named(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(GeophyteError::Workbook {
                    message: format!("no sheet named '{name}'. sheets={sheet_names:?}"),
                });
            }
            name.clone()
        }
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let plants = read_calscape_range(&range, layout)?;
    info!(
        path = %path.display(),
        sheet = %sheet_name,
        species = plants.species_count(),
        genera = plants.genus_count(),
        "read calscape export"
    );
    Ok(plants)
}

/// Read the plant table out of an already-loaded sheet range.
///
/// Cells are addressed by absolute position, so the used range does not need to start at A1.
///
/// - Each header cell must match its [`ColumnSpec::header`] exactly.
/// - Rows with an empty botanical name are skipped.
/// - A botanical name without a second token is an error.
pub fn read_calscape_range(
    range: &Range<Data>,
    layout: &CalscapeLayout,
) -> GeophyteResult<CalscapePlants> {
    let header_row0 = layout
        .header_row
        .checked_sub(1)
        .ok_or_else(|| GeophyteError::Workbook {
            message: "header row is 1-based; got 0".to_string(),
        })?;

    let name_col = resolve_column(range, header_row0, layout.header_row, &layout.botanical_name)?;
    let common_col = resolve_column(range, header_row0, layout.header_row, &layout.common_name)?;
    let url_col = resolve_column(range, header_row0, layout.header_row, &layout.plant_url)?;

    let last_row0 = range.end().map(|(row, _)| row).unwrap_or(header_row0);

    let mut plants = CalscapePlants::default();
    for row0 in (header_row0 + 1)..=last_row0 {
        // Report 1-based row number (Excel-like).
        let user_row = row0 as usize + 1;

        let species = cell_string(range, row0, name_col);
        let species = species.trim();
        if species.is_empty() {
            debug!(row = user_row, "skipping row without a botanical name");
            continue;
        }

        let record = PlantRecord::new(
            species,
            cell_string(range, row0, common_col).trim(),
            cell_string(range, row0, url_col).trim(),
        );
        plants.insert(user_row, record)?;
    }

    Ok(plants)
}

/// Convert spreadsheet column letters to a zero-based index (`"A"` -> 0, `"AW"` -> 48).
pub fn column_index(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    let mut acc: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        acc = acc.checked_mul(26)?.checked_add(digit)?;
    }
    Some(acc - 1)
}

fn resolve_column(
    range: &Range<Data>,
    header_row0: u32,
    header_row: u32,
    spec: &ColumnSpec,
) -> GeophyteResult<u32> {
    let col = column_index(&spec.column).ok_or_else(|| GeophyteError::Workbook {
        message: format!("invalid column letters '{}'", spec.column),
    })?;

    let actual = cell_string(range, header_row0, col);
    if actual != spec.header {
        return Err(GeophyteError::HeaderMismatch {
            cell: format!("{}{}", spec.column, header_row),
            expected: spec.header.clone(),
            actual,
        });
    }
    Ok(col)
}

fn cell_string(range: &Range<Data>, row0: u32, col: u32) -> String {
    match range.get_value((row0, col)) {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
