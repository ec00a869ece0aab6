use pretty_assertions::assert_eq;
use survey_store::{MemoryRecordStore, StoreConfig, StoreError};

#[test]
fn default_is_unbounded_without_level_fields() {
    let config = StoreConfig::default();
    assert_eq!(config.max_records, None);
    assert!(config.level_fields.is_empty());
}

#[test]
fn parses_store_table() {
    let config = StoreConfig::from_toml_str(
        r#"
        [store]
        max_records = 200
        level-fields = ["rating", "self-rating"]
        "#,
    )
    .unwrap();
    assert_eq!(config.max_records, Some(200));
    assert_eq!(config.level_fields, vec!["rating", "self-rating"]);
}

#[test]
fn missing_table_is_default() {
    assert_eq!(StoreConfig::from_toml_str("").unwrap(), StoreConfig::default());
}

#[test]
fn invalid_toml_is_error() {
    let err = StoreConfig::from_toml_str("[store]\nmax_records = \"many\"\n").unwrap_err();
    assert!(matches!(err, StoreError::InvalidConfig(_)));
}

#[test]
fn store_keeps_config() {
    let config = StoreConfig {
        max_records: Some(3),
        ..StoreConfig::default()
    };
    let store = MemoryRecordStore::new(config.clone());
    assert_eq!(store.config(), &config);
}
