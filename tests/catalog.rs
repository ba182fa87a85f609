use std::fs;
use std::path::PathBuf;

use payload_calculator::catalog::{CatalogError, load_fleet};
use payload_calculator::vehicle::VehicleError;

fn write_catalog(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("fleet.yaml");
    fs::write(&path, contents).expect("catalog write");
    (dir, path)
}

#[test]
fn sample_catalog_builds_one_aircraft_per_record() {
    let fleet = load_fleet("data/fleet.yaml").expect("sample catalog");
    assert_eq!(fleet.len(), 3);

    let descriptions: Vec<String> = fleet.iter().map(|a| a.describe()).collect();
    assert!(descriptions[0].contains("Antonov"));
    assert!(descriptions[1].ends_with("Body type: 1."));
    assert!(descriptions[2].contains("fuel tank expansion available: false"));
}

#[test]
fn fractional_body_type_has_the_wrong_shape() {
    let (_dir, path) = write_catalog(
        "- model: economy-liner
  color: white
  empty_weight_tonnes: 4
  max_speed_km_h: 280
  role:
    type: passenger
    body_type: 1.5
",
    );

    let err = load_fleet(&path).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Vehicle(VehicleError::InvalidType {
            field: "body type",
            ..
        })
    ));
}

#[test]
fn fractional_max_speed_has_the_wrong_shape() {
    let (_dir, path) = write_catalog(
        "- model: freighter
  color: white
  empty_weight_tonnes: 300
  max_speed_km_h: 800.5
  role:
    type: cargo
    fuel_tank_expansion: true
",
    );

    let err = load_fleet(&path).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Vehicle(VehicleError::InvalidType {
            field: "max speed",
            ..
        })
    ));
}

#[test]
fn negative_empty_weight_is_rejected() {
    let (_dir, path) = write_catalog(
        "- model: freighter
  color: white
  empty_weight_tonnes: -300
  max_speed_km_h: 800
  role:
    type: utility
",
    );

    let err = load_fleet(&path).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Vehicle(VehicleError::NonPositive { field: "weight" })
    ));
}

#[test]
fn unknown_role_is_reported_with_the_model() {
    let (_dir, path) = write_catalog(
        "- model: zeppelin
  color: silver
  empty_weight_tonnes: 50
  max_speed_km_h: 120
  role:
    type: airship
",
    );

    let err = load_fleet(&path).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedRole { model } if model == "zeppelin"));
}

#[test]
fn missing_catalog_file_surfaces_io_error() {
    let err = load_fleet("data/no_such_fleet.yaml").unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
