//! CSV export of a geophyte selection.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::GeophyteResult;
use crate::ingestion::CalscapePlants;
use crate::selection::Geophytes;
use crate::types::is_cultivar;

/// One line of the geophyte report.
///
/// Field order is the CSV column order: `family,genus,species,common_name,url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeophyteRow<'a> {
    pub family: &'a str,
    pub genus: &'a str,
    pub species: &'a str,
    pub common_name: &'a str,
    pub url: &'a str,
}

/// Build report rows sorted by family, then genus, then species.
///
/// Common name and URL come from `plants`; a species missing there is a
/// [`crate::GeophyteError::MissingKey`].
pub fn report_rows<'a>(
    geophytes: &'a Geophytes,
    plants: &'a CalscapePlants,
    exclude_cultivars: bool,
) -> GeophyteResult<Vec<GeophyteRow<'a>>> {
    let mut rows = Vec::with_capacity(geophytes.len());
    // FamilyTree levels are BTree*, so iteration is already lexical.
    for (family, genera) in geophytes.family_tree() {
        for (genus, species) in genera {
            for name in species {
                if exclude_cultivars && is_cultivar(name) {
                    continue;
                }
                rows.push(GeophyteRow {
                    family,
                    genus,
                    species: name,
                    common_name: plants.common_name_for_species(name)?,
                    url: plants.url_for_species(name)?,
                });
            }
        }
    }
    Ok(rows)
}

/// Write the geophyte report to `path`.
///
/// Returns the number of data rows written. When there are no rows, no file is created and
/// `Ok(0)` is returned.
pub fn write_geophytes_csv(
    path: impl AsRef<Path>,
    geophytes: &Geophytes,
    plants: &CalscapePlants,
    exclude_cultivars: bool,
) -> GeophyteResult<usize> {
    let path = path.as_ref();
    let rows = report_rows(geophytes, plants, exclude_cultivars)?;
    if rows.is_empty() {
        info!(path = %path.display(), "no geophyte rows; not writing report");
        return Ok(0);
    }

    let mut wtr = csv::Writer::from_path(path)?;
    write_rows_to_writer(&mut wtr, &rows)?;
    info!(path = %path.display(), rows = rows.len(), "wrote geophyte report");
    Ok(rows.len())
}

/// Serialize report rows (with a header line) to an existing CSV writer.
pub fn write_rows_to_writer<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    rows: &[GeophyteRow<'_>],
) -> GeophyteResult<()> {
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
