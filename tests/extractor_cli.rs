use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use serde_json::{json, Value};
use tempfile::TempDir;

#[test]
fn writes_summary_and_prints_path() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let source = tmp.path().join("gdalinfo.out");
    fs::write(
        &source,
        r#"{"driverShortName":"GTiff","size":[100,100],"wgs84Extent":{"type":"Polygon","coordinates":[]},"other":1}"#,
    )?;

    cargo_bin_cmd!("extractor")
        .current_dir(tmp.path())
        .arg("tile_a")
        .arg(&source)
        .assert()
        .success()
        .stdout("tile_a.json\n");

    let written: Value = serde_json::from_str(&fs::read_to_string(tmp.path().join("tile_a.json"))?)?;
    assert_eq!(
        written,
        json!({"size": [100, 100], "wgs84Extent": {"type": "Polygon", "coordinates": []}})
    );
    Ok(())
}

#[test]
fn missing_key_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;
    let source = tmp.path().join("raw.json");
    fs::write(&source, r#"{"size":[100,100]}"#)?;

    cargo_bin_cmd!("extractor")
        .current_dir(tmp.path())
        .arg("tile_a")
        .arg(&source)
        .assert()
        .failure()
        .stderr(contains("Malformed input"));

    assert!(!tmp.path().join("tile_a.json").exists());
    Ok(())
}

#[test]
fn missing_source_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;

    cargo_bin_cmd!("extractor")
        .current_dir(tmp.path())
        .args(["tile_a", "does_not_exist.json"])
        .assert()
        .failure()
        .stderr(contains("Cannot read"));
    Ok(())
}

#[test]
fn missing_arguments_fail() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = TempDir::new()?;

    cargo_bin_cmd!("extractor")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(contains("Missing argument: <identifier>"));

    cargo_bin_cmd!("extractor")
        .current_dir(tmp.path())
        .arg("tile_a")
        .assert()
        .failure()
        .stderr(contains("Missing argument: <source-path>"));
    Ok(())
}
