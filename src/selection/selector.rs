//! Geophyte selection and family/genus grouping.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::error::{GeophyteError, GeophyteResult};
use crate::ingestion::{CalscapePlants, InatTaxa};
use crate::types::{genus_of, is_cultivar, FamilyTree};

use super::rules::InclusionRule;

/// The selected geophyte species and their family -> genus -> species grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Geophytes {
    species: BTreeSet<String>,
    family_tree: FamilyTree,
}

impl Geophytes {
    /// Apply `rules` to the plant export, then group the result using the taxonomy.
    ///
    /// - [`InclusionRule::Family`] adds every export species whose genus belongs to the family
    ///   according to `taxa`.
    /// - [`InclusionRule::Genera`] adds every export species of the listed genera, whether or not
    ///   `taxa` knows them.
    ///
    /// Rules may overlap; the species set is a union. Grouping fails with
    /// [`GeophyteError::MissingKey`] if a selected genus has no family in `taxa`.
    pub fn select(
        plants: &CalscapePlants,
        taxa: &InatTaxa,
        rules: &[InclusionRule],
    ) -> GeophyteResult<Self> {
        let mut species: BTreeSet<String> = BTreeSet::new();

        for rule in rules {
            let before = species.len();
            match rule {
                InclusionRule::Family(family) => {
                    for genus in taxa.genera_for_family(family).filter(|g| plants.has_genus(g)) {
                        add_genus(&mut species, plants, genus);
                    }
                }
                InclusionRule::Genera(genera) => {
                    for genus in genera.iter() {
                        add_genus(&mut species, plants, genus);
                    }
                }
            }
            debug!(?rule, added = species.len() - before, "applied inclusion rule");
        }

        let family_tree = build_family_tree(&species, taxa)?;
        info!(
            species = species.len(),
            families = family_tree.len(),
            "selected geophytes"
        );
        Ok(Self {
            species,
            family_tree,
        })
    }

    /// Selected species names, in lexical order.
    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.species.iter().map(String::as_str)
    }

    /// Whether `species` was selected.
    pub fn contains(&self, species: &str) -> bool {
        self.species.contains(species)
    }

    /// Number of selected species, cultivars included.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Whether no species was selected.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Number of selected species that are not cultivars.
    pub fn non_cultivar_count(&self) -> usize {
        self.species.iter().filter(|s| !is_cultivar(s)).count()
    }

    /// Number of distinct (family, genus) pairs.
    pub fn genus_count(&self) -> usize {
        self.family_tree.values().map(|genera| genera.len()).sum()
    }

    /// Number of distinct families.
    pub fn family_count(&self) -> usize {
        self.family_tree.len()
    }

    /// Family -> genus -> species grouping of the selection.
    pub fn family_tree(&self) -> &FamilyTree {
        &self.family_tree
    }
}

fn add_genus(species: &mut BTreeSet<String>, plants: &CalscapePlants, genus: &str) {
    species.extend(plants.species_for_genus(genus).map(str::to_string));
}

/// Group species names by family and genus.
///
/// Every species must resolve to a family through its genus; a miss aborts the grouping.
pub fn build_family_tree<'a>(
    species: impl IntoIterator<Item = &'a String>,
    taxa: &InatTaxa,
) -> GeophyteResult<FamilyTree> {
    let mut tree = FamilyTree::new();
    for name in species {
        let genus = genus_of(name)
            .ok_or_else(|| GeophyteError::missing_key("species->genus", name.as_str()))?;
        let family = taxa.family_for_genus(genus)?;
        tree.entry(family.to_string())
            .or_default()
            .entry(genus.to_string())
            .or_default()
            .insert(name.clone());
    }
    Ok(tree)
}
