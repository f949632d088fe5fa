//! iNaturalist taxa ingestion.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{GeophyteError, GeophyteResult};
use crate::types::TaxonRecord;

/// Plant genera from the iNaturalist taxa table, indexed both ways between family and genus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InatTaxa {
    family_to_genera: BTreeMap<String, BTreeSet<String>>,
    genus_to_family: BTreeMap<String, String>,
}

impl InatTaxa {
    /// Build the indexes from taxon rows, keeping only plant genera.
    pub fn from_records(records: impl IntoIterator<Item = TaxonRecord>) -> Self {
        let mut taxa = Self::default();
        for record in records {
            taxa.insert(record);
        }
        taxa
    }

    fn insert(&mut self, record: TaxonRecord) {
        if !record.is_plant_genus() {
            return;
        }
        if record.family.is_empty() {
            debug!(genus = %record.scientific_name, "skipping genus without a family");
            return;
        }

        let TaxonRecord {
            family,
            scientific_name: genus,
            ..
        } = record;

        if let Some(previous) = self.genus_to_family.insert(genus.clone(), family.clone()) {
            if previous != family {
                warn!(
                    genus = %genus,
                    previous = %previous,
                    family = %family,
                    "genus listed under two families; keeping the later one"
                );
                if let Some(genera) = self.family_to_genera.get_mut(&previous) {
                    genera.remove(&genus);
                    if genera.is_empty() {
                        self.family_to_genera.remove(&previous);
                    }
                }
            }
        }
        self.family_to_genera.entry(family).or_default().insert(genus);
    }

    /// Genera of `family`; empty if the family is unknown.
    pub fn genera_for_family<'a>(
        &'a self,
        family: &str,
    ) -> impl Iterator<Item = &'a str> + use<'a> {
        self.family_to_genera
            .get(family)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Family of `genus`.
    pub fn family_for_genus(&self, genus: &str) -> GeophyteResult<&str> {
        self.genus_to_family
            .get(genus)
            .map(String::as_str)
            .ok_or_else(|| GeophyteError::missing_key("genus->family", genus))
    }

    /// Number of distinct families.
    pub fn family_count(&self) -> usize {
        self.family_to_genera.len()
    }

    /// Number of distinct genera.
    pub fn genus_count(&self) -> usize {
        self.genus_to_family.len()
    }
}

/// Read an iNaturalist taxa CSV from disk.
///
/// The file must have a header row naming at least `kingdom`, `taxonRank`, `family` and
/// `scientificName`; other columns are ignored.
pub fn read_inat_taxa_from_path(path: impl AsRef<Path>) -> GeophyteResult<InatTaxa> {
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    let taxa = read_inat_taxa_from_reader(&mut rdr)?;
    info!(
        path = %path.display(),
        families = taxa.family_count(),
        genera = taxa.genus_count(),
        "read inaturalist taxa"
    );
    Ok(taxa)
}

/// Read iNaturalist taxa from an existing CSV reader.
///
/// A row that does not deserialize (missing column, wrong field count) aborts the read.
pub fn read_inat_taxa_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> GeophyteResult<InatTaxa> {
    let mut taxa = InatTaxa::default();
    for result in rdr.deserialize::<TaxonRecord>() {
        taxa.insert(result?);
    }
    Ok(taxa)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(input: &str) -> csv::Reader<&[u8]> {
        csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes())
    }

    #[test]
    fn keeps_only_plant_genera() {
        let input = "\
id,kingdom,taxonRank,family,scientificName
1,Plantae,genus,Liliaceae,Calochortus
2,Plantae,species,Liliaceae,Calochortus albus
3,Animalia,genus,Apidae,Bombus
4,Plantae,genus,Liliaceae,Fritillaria
5,Plantae,genus,Iridaceae,Sisyrinchium
";
        let taxa = read_inat_taxa_from_reader(&mut reader(input)).unwrap();

        assert_eq!(taxa.family_count(), 2);
        assert_eq!(taxa.genus_count(), 3);
        assert_eq!(
            taxa.genera_for_family("Liliaceae").collect::<Vec<_>>(),
            vec!["Calochortus", "Fritillaria"]
        );
        assert_eq!(taxa.family_for_genus("Sisyrinchium").unwrap(), "Iridaceae");
        assert!(taxa.family_for_genus("Bombus").is_err());
        assert_eq!(taxa.genera_for_family("Apidae").count(), 0);
    }

    #[test]
    fn missing_column_is_a_csv_error() {
        let input = "kingdom,taxonRank,scientificName\nPlantae,genus,Allium\n";
        let err = read_inat_taxa_from_reader(&mut reader(input)).unwrap_err();
        assert!(matches!(err, GeophyteError::Csv(_)));
    }

    #[test]
    fn ragged_row_is_a_csv_error() {
        let input = "kingdom,taxonRank,family,scientificName\nPlantae,genus,Amaryllidaceae\n";
        let err = read_inat_taxa_from_reader(&mut reader(input)).unwrap_err();
        assert!(err.to_string().starts_with("csv error"));
    }

    #[test]
    fn later_family_wins_and_indexes_agree() {
        let taxa = InatTaxa::from_records(vec![
            TaxonRecord {
                kingdom: "Plantae".to_string(),
                taxon_rank: "genus".to_string(),
                family: "Liliaceae".to_string(),
                scientific_name: "Allium".to_string(),
            },
            TaxonRecord {
                kingdom: "Plantae".to_string(),
                taxon_rank: "genus".to_string(),
                family: "Amaryllidaceae".to_string(),
                scientific_name: "Allium".to_string(),
            },
        ]);

        assert_eq!(taxa.family_for_genus("Allium").unwrap(), "Amaryllidaceae");
        assert_eq!(taxa.genera_for_family("Liliaceae").count(), 0);
        assert_eq!(taxa.family_count(), 1);
    }

    #[test]
    fn genus_without_family_is_skipped() {
        let input = "kingdom,taxonRank,family,scientificName\nPlantae,genus,,Mystery\n";
        let taxa = read_inat_taxa_from_reader(&mut reader(input)).unwrap();
        assert_eq!(taxa.genus_count(), 0);
        let err = taxa.family_for_genus("Mystery").unwrap_err();
        assert!(err.to_string().contains("genus->family"));
    }
}
