use calscape_geophytes::ingestion::read_inat_taxa_from_path;
use calscape_geophytes::GeophyteError;

#[test]
fn read_inat_taxa_from_fixture() {
    let taxa = read_inat_taxa_from_path("tests/fixtures/inat_taxa.csv").unwrap();

    assert_eq!(taxa.genus_count(), 18);
    assert_eq!(taxa.family_count(), 7);
    assert_eq!(
        taxa.genera_for_family("Liliaceae").collect::<Vec<_>>(),
        vec!["Calochortus", "Erythronium", "Fritillaria", "Lilium"]
    );
    assert_eq!(taxa.family_for_genus("Allium").unwrap(), "Amaryllidaceae");
    assert_eq!(taxa.family_for_genus("Odontostomum").unwrap(), "Tecophilaeaceae");
}

#[test]
fn species_and_animal_rows_are_not_indexed() {
    let taxa = read_inat_taxa_from_path("tests/fixtures/inat_taxa.csv").unwrap();

    assert!(taxa.family_for_genus("Calochortus albus").is_err());
    assert!(taxa.family_for_genus("Bombus").is_err());
    assert_eq!(taxa.genera_for_family("Apidae").count(), 0);
}

#[test]
fn read_inat_taxa_errors_on_missing_file() {
    let err = read_inat_taxa_from_path("tests/fixtures/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, GeophyteError::Csv(_)));
}
