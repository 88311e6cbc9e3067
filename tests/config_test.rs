//! Configuration file round-trip and validation tests.

use face_mouse::config::{Config, EXAMPLE_CONFIG};

#[test]
fn test_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = Config::default();
    config.tracking.sensitivity = 5.0;
    config.tracking.tilt_threshold = 12.5;
    config.to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.tracking.sensitivity, 5.0);
    assert_eq!(loaded.tracking.tilt_threshold, 12.5);
    assert_eq!(loaded.tracking.blink_threshold, 0.2);
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(Config::from_file("/nonexistent/config.yaml").is_err());
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "tracking: [not, a, mapping]").unwrap();
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_example_config_loads_and_validates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.yaml");
    std::fs::write(&path, EXAMPLE_CONFIG).unwrap();

    let config = Config::from_file(&path).unwrap();
    config.validate().unwrap();
    assert_eq!(config.tracking.mouth_open_threshold, 30.0);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "tracking:\n  sensitivity: 2.0\nspeech:\n  language: en-US\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.tracking.sensitivity, 2.0);
}

#[test]
fn test_loaded_out_of_range_values_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "tracking:\n  blink_threshold: 2.0\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert!(config.validate().is_err());
}
