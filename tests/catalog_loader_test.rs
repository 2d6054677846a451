use std::fs;
use tempfile::TempDir;

use team_builder::catalog::{CatalogSource, CreatureType, CsvCatalogSource};
use team_builder::engine::Backend;
use team_builder::TeamBuilderError;

const SAMPLE: &str = "\
abilities,against_bug,name,pokedex_number,type1,type2,generation,is_legendary
\"['Overgrow', 'Chlorophyll']\",1,Bulbasaur,1,grass,poison,1,0
\"['Blaze', 'Solar Power']\",0.5,Charmander,4,fire,,1,0
\"['Static', 'Lightningrod']\",1,Pikachu,25,electric,,1,0
\"['Pressure', 'Unnerve']\",1,Mewtwo,150,psychic,,1,1
\"['Blaze', 'Flash Fire']\",0.5,Cyndaquil,155,fire,,2,0
";

fn write_catalog(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("pokemon.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_catalog_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, SAMPLE);

    let catalog = CsvCatalogSource::new(&path).load().unwrap();
    assert_eq!(catalog.len(), 5);

    let pikachu = catalog.get(2).unwrap();
    assert_eq!(pikachu.name, "Pikachu");
    assert_eq!(pikachu.type_one, CreatureType::Electric);
    assert_eq!(pikachu.type_two, None);
    assert_eq!(pikachu.dex_number, 25);

    let cyndaquil = catalog.get(4).unwrap();
    assert_eq!(cyndaquil.generation, 2);
}

#[test]
fn test_backend_starts_with_defaults() {
    let dir = TempDir::new().unwrap();
    let source = CsvCatalogSource::new(write_catalog(&dir, SAMPLE));

    let backend = Backend::load(&source).unwrap();
    assert_eq!(backend.catalog().len(), 5);
    assert_eq!(backend.search().len(), 5);
    assert!(backend.roster().is_empty());
    assert!(backend.filters().generations().all(|(_, on)| on));
}

#[test]
fn test_missing_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let source = CsvCatalogSource::new(dir.path().join("absent.csv"));
    assert!(matches!(source.load(), Err(TeamBuilderError::Io(_))));
    assert!(Backend::load(&source).is_err());
}

#[test]
fn test_malformed_row_rejects_entire_catalog() {
    let dir = TempDir::new().unwrap();
    let broken = format!("{SAMPLE}\"['Levitate']\",1,Unown,201,unknown,,2,0\n");
    let source = CsvCatalogSource::new(write_catalog(&dir, &broken));

    match source.load() {
        Err(TeamBuilderError::CatalogRow { row, .. }) => assert_eq!(row, 6),
        other => panic!("expected row error, got {other:?}"),
    }
}

#[test]
fn test_default_source_points_at_working_directory_file() {
    let source = CsvCatalogSource::default();
    assert_eq!(source.path(), std::path::Path::new("pokemon.csv"));
}
