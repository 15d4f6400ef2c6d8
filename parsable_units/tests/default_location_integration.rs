//! Integration test for finding `parsable_units.toml` from the working directory.
//!
//! The working directory is process-wide, so the whole scenario runs as one test.

use std::fs;
use std::path::Path;

use parsable_units::config::FormatConfig;
use parsable_units::ConfigError;

fn write_config(dir: &Path, literal_wrap: bool) {
    let content = format!("[format]\nliteral_wrap = {}\n", literal_wrap);
    fs::write(dir.join("parsable_units.toml"), content).unwrap();
}

#[test]
fn test_default_location_search() {
    let original = std::env::current_dir().unwrap();
    let root = tempfile::tempdir().unwrap();

    // Found in the working directory.
    let here = root.path().join("here");
    fs::create_dir(&here).unwrap();
    write_config(&here, true);
    std::env::set_current_dir(&here).unwrap();
    let config = FormatConfig::from_default_location().unwrap();
    assert_eq!(config.format.literal_wrap, Some(true));

    // Found in the parent directory.
    let child = here.join("child");
    fs::create_dir(&child).unwrap();
    std::env::set_current_dir(&child).unwrap();
    let config = FormatConfig::from_default_location().unwrap();
    assert_eq!(config.format.literal_wrap, Some(true));

    // The working directory takes precedence over the parent.
    write_config(&child, false);
    let config = FormatConfig::from_default_location().unwrap();
    assert_eq!(config.format.literal_wrap, Some(false));

    // Neither directory has a file.
    let empty = root.path().join("empty").join("nested");
    fs::create_dir_all(&empty).unwrap();
    std::env::set_current_dir(&empty).unwrap();
    let err = FormatConfig::from_default_location().unwrap_err();
    assert!(matches!(err, ConfigError::NotFound));

    std::env::set_current_dir(&original).unwrap();
}
