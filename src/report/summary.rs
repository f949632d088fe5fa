//! Count summary of a geophyte selection.

use std::fmt;

use crate::selection::Geophytes;

/// Counts reported after a selection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeophyteSummary {
    /// Selected species, cultivars included.
    pub geophytes: usize,
    /// Selected species that are not cultivars.
    pub non_cultivars: usize,
    /// Distinct (family, genus) pairs.
    pub genera: usize,
    /// Distinct families.
    pub families: usize,
}

impl GeophyteSummary {
    /// Compute the counts for a selection.
    pub fn from_geophytes(geophytes: &Geophytes) -> Self {
        Self {
            geophytes: geophytes.len(),
            non_cultivars: geophytes.non_cultivar_count(),
            genera: geophytes.genus_count(),
            families: geophytes.family_count(),
        }
    }

    /// Number of selected cultivars (excluded from the report when cultivars are excluded).
    pub fn cultivars(&self) -> usize {
        self.geophytes - self.non_cultivars
    }
}

impl fmt::Display for GeophyteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Found {} geophytes, {} excluding cultivars",
            self.geophytes, self.non_cultivars
        )?;
        write!(f, "{} genera across {} families", self.genera, self.families)
    }
}
