//! Static taxonomic inclusion rules.
//!
//! Based on Philip Rundel, "Making Sense of Geophyte Diversity", Fremontia 44(3), 2016.

/// One inclusion rule of the geophyte selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InclusionRule {
    /// Every genus of this family that appears in both the taxonomy and the plant export.
    Family(&'static str),
    /// These genera, taken directly from the plant export without consulting the taxonomy.
    Genera(&'static [&'static str]),
}

/// Brodiaeoideae (formerly Themidaceae) genera.
///
/// See <https://www.mobot.org/mobot/research/APweb/genera/themidaceaegen.html> and
/// <https://en.wikipedia.org/wiki/Brodiaeoideae>.
pub const BRODIAEOIDEAE_GENERA: &[&str] = &[
    "Androstephium",
    "Bessera",
    "Bloomeria",
    "Brodiaea",
    "Dandya",
    "Dichelostemma",
    "Milla",
    "Muilla",
    "Petronymphe",
    "Triteleia",
    "Triteleiopsis",
];

/// Geophyte genera of Agavoideae.
///
/// See <https://www.pacificbulbsociety.org/pbswiki/index.php/Agavaceae>.
pub const AGAVOIDEAE_GEOPHYTE_GENERA: &[&str] =
    &["Camassia", "Chlorogalum", "Hesperocallis", "Leucocrinum"];

/// The geophyte rule set, applied in order.
pub const GEOPHYTE_RULES: &[InclusionRule] = &[
    InclusionRule::Family("Liliaceae"),
    InclusionRule::Genera(BRODIAEOIDEAE_GENERA),
    InclusionRule::Genera(&["Allium"]),
    InclusionRule::Family("Iridaceae"),
    InclusionRule::Genera(AGAVOIDEAE_GEOPHYTE_GENERA),
    InclusionRule::Family("Tecophilaeaceae"),
];
