use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "calscape-geophytes",
    about = "Find the geophytes in a Calscape export of California native plants"
)]
pub struct Cli {
    /// Path to the .xlsx file listing the plants in Calscape
    #[arg(long, alias = "calscape_xlsx")]
    pub calscape_xlsx: PathBuf,
    /// Path to the iNaturalist taxa CSV
    #[arg(long, alias = "inat_taxa_csv")]
    pub inat_taxa_csv: PathBuf,
    /// Leave cultivars out of the CSV report
    #[arg(long, alias = "exclude_cultivars")]
    pub exclude_cultivars: bool,
    /// Path at which to write the geophytes CSV; nothing is written when omitted
    #[arg(long, alias = "output_csv")]
    pub output_csv: Option<PathBuf>,
    /// Sheet holding the plant table (defaults to the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,
    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
