use ccrm_domain::config::{AppConfig, LoggingConfig, RecordsConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let records = RecordsConfig::default();
    assert_eq!(records.data_dir, std::path::PathBuf::from("./data/"));
    assert!(records.seed_sample_data);
    assert!(records.max_credits_per_student.is_none());

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.directory.is_none());
}

#[test]
fn app_config_deserializes() {
    let raw = json!({
        "records": { "data_dir": "/tmp/ccrm", "max_credits_per_student": 18 },
        "logging": { "level": "debug", "json": true }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.records.data_dir, std::path::PathBuf::from("/tmp/ccrm"));
    assert_eq!(cfg.records.max_credits_per_student, Some(18));
    assert!(cfg.records.seed_sample_data, "missing keys fall back to defaults");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
}

#[test]
fn clones_share_until_mutated() {
    let base = AppConfig::default();
    let mut tuned = base.clone();
    tuned.records.seed_sample_data = false;

    assert!(base.records.seed_sample_data);
    assert!(!tuned.records.seed_sample_data);
}
