//! Loading generator config from JSON.

use churn_synth_core::{config::GeneratorConfig, error::GenError};
use chrono::NaiveDate;
use std::path::PathBuf;

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generator.json");
    std::fs::write(
        &path,
        r#"{
            "record_count": 250,
            "random_seed": 7,
            "output_path": "out/custom.csv",
            "locale": "en_US",
            "reference_date": "2024-12-31",
            "plan_weights": { "basic": 0.2, "standard": 0.3, "premium": 0.5 }
        }"#,
    )
    .unwrap();

    let config = GeneratorConfig::load(&path).unwrap();
    assert_eq!(config.record_count, 250);
    assert_eq!(config.random_seed, Some(7));
    assert_eq!(config.output_path, PathBuf::from("out/custom.csv"));
    assert_eq!(config.locale, "en_US");
    assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2024, 12, 31));
    assert_eq!(config.plan_weights.premium, 0.5);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generator.json");
    std::fs::write(&path, r#"{ "random_seed": 3 }"#).unwrap();

    let config = GeneratorConfig::load(&path).unwrap();
    assert_eq!(config.record_count, 10_000);
    assert_eq!(config.locale, "pt_BR");
    assert_eq!(config.random_seed, Some(3));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generator.json");
    std::fs::write(&path, r#"{ "records": 10 }"#).unwrap();

    assert!(matches!(
        GeneratorConfig::load(&path),
        Err(GenError::Serialization(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = GeneratorConfig::load("does/not/exist.json").unwrap_err();
    assert!(matches!(err, GenError::Io { .. }));
}
