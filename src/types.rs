//! Core data model shared by the readers, the selector and the reporter.
//!
//! Species names are botanical binomials as they appear in the Calscape export, e.g.
//! `"Brodiaea elegans"`. Cultivars carry a quoted suffix: `"Camassia quamash 'Orion'"`.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

/// Character that marks a cultivar suffix inside a species name.
pub const CULTIVAR_MARKER: char = '\'';

/// Family name -> genus name -> species names.
///
/// `BTree*` containers keep every level in lexical order, which is the order the report uses.
pub type FamilyTree = BTreeMap<String, BTreeMap<String, BTreeSet<String>>>;

/// One plant row from the Calscape export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantRecord {
    /// Botanical name, unique within the export.
    pub species: String,
    /// Common name (may be empty).
    pub common_name: String,
    /// Calscape page for the plant (may be empty).
    pub url: String,
}

impl PlantRecord {
    /// Create a new plant record.
    pub fn new(
        species: impl Into<String>,
        common_name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            species: species.into(),
            common_name: common_name.into(),
            url: url.into(),
        }
    }

    /// Genus of this plant, if the name is a well-formed binomial.
    pub fn genus(&self) -> Option<&str> {
        genus_of(&self.species)
    }

    /// Whether this plant is a cultivar.
    pub fn is_cultivar(&self) -> bool {
        is_cultivar(&self.species)
    }
}

/// One row of the iNaturalist taxa table.
///
/// Only the columns the pipeline needs are deserialized; any other columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxonRecord {
    pub kingdom: String,
    #[serde(rename = "taxonRank")]
    pub taxon_rank: String,
    pub family: String,
    #[serde(rename = "scientificName")]
    pub scientific_name: String,
}

impl TaxonRecord {
    /// Whether this row describes a plant genus.
    pub fn is_plant_genus(&self) -> bool {
        self.kingdom == "Plantae" && self.taxon_rank == "genus"
    }
}

/// Returns the genus (first whitespace-delimited token) of a binomial name.
///
/// Returns `None` unless the name has at least two tokens; a bare genus or an empty string is
/// not a species name.
pub fn genus_of(species: &str) -> Option<&str> {
    let mut tokens = species.split_whitespace();
    let genus = tokens.next()?;
    tokens.next().map(|_| genus)
}

/// Whether a species name carries the cultivar marker.
pub fn is_cultivar(species: &str) -> bool {
    species.contains(CULTIVAR_MARKER)
}
