mod cli;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calscape_geophytes::ingestion::{
    read_calscape_from_path, read_inat_taxa_from_path, CalscapeLayout, SheetSelection,
};
use calscape_geophytes::report::{write_geophytes_csv, GeophyteSummary};
use calscape_geophytes::selection::{Geophytes, GEOPHYTE_RULES};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let sheet = match cli.sheet {
        Some(name) => SheetSelection::Named(name),
        None => SheetSelection::First,
    };
    let plants = read_calscape_from_path(&cli.calscape_xlsx, &sheet, &CalscapeLayout::default())
        .with_context(|| format!("reading Calscape export {}", cli.calscape_xlsx.display()))?;
    let taxa = read_inat_taxa_from_path(&cli.inat_taxa_csv)
        .with_context(|| format!("reading iNaturalist taxa {}", cli.inat_taxa_csv.display()))?;

    let geophytes =
        Geophytes::select(&plants, &taxa, GEOPHYTE_RULES).context("selecting geophytes")?;
    println!("{}", GeophyteSummary::from_geophytes(&geophytes));

    if let Some(path) = cli.output_csv.as_ref() {
        write_geophytes_csv(path, &geophytes, &plants, cli.exclude_cultivars)
            .with_context(|| format!("writing geophytes CSV {}", path.display()))?;
    }

    Ok(())
}
