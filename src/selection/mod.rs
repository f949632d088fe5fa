//! Geophyte selection.
//!
//! - [`rules`]: the static inclusion rule set
//! - [`selector`]: applies rules to the plant export and groups the result by family and genus

pub mod rules;
pub mod selector;

pub use rules::{InclusionRule, AGAVOIDEAE_GEOPHYTE_GENERA, BRODIAEOIDEAE_GENERA, GEOPHYTE_RULES};
pub use selector::{build_family_tree, Geophytes};
