use keyplate_cutouts::{CutoutError, GenerationOptions};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plate.toml");
    fs::write(&path, "kerf = \"0.1\"\nstabilizer_fillet_radius = \"0.5\"\n").unwrap();

    let options = GenerationOptions::load_from_file(&path).unwrap();
    assert_eq!(options.kerf, dec!(0.1));
    assert_eq!(options.stabilizer_fillet_radius, dec!(0.5));
}

#[test]
fn test_load_json_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plate.json");
    fs::write(&path, r#"{ "kerf": "0.075" }"#).unwrap();

    let options = GenerationOptions::load_from_file(&path).unwrap();
    assert_eq!(options.kerf, dec!(0.075));
    assert_eq!(options.stabilizer_fillet_radius, Decimal::ZERO);
}

#[test]
fn test_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plate.yaml");
    fs::write(&path, "kerf: 0.1\n").unwrap();

    let err = GenerationOptions::load_from_file(&path).unwrap_err();
    assert!(matches!(err, CutoutError::Config(_)));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = GenerationOptions::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CutoutError::Io(_)));
}

#[test]
fn test_malformed_files() {
    let dir = TempDir::new().unwrap();

    let path = dir.path().join("bad.toml");
    fs::write(&path, "kerf = [").unwrap();
    assert!(matches!(
        GenerationOptions::load_from_file(&path),
        Err(CutoutError::Toml(_))
    ));

    let path = dir.path().join("bad.json");
    fs::write(&path, "{ \"kerf\": ").unwrap();
    assert!(matches!(
        GenerationOptions::load_from_file(&path),
        Err(CutoutError::Json(_))
    ));
}

#[test]
fn test_loaded_options_are_validated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plate.toml");
    fs::write(&path, "stabilizer_fillet_radius = \"-1\"\n").unwrap();

    let err = GenerationOptions::load_from_file(&path).unwrap_err();
    assert!(matches!(err, CutoutError::Parameter(_)));
}
