use mbti_board::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.defaults.items_per_page, 5);
    assert_eq!(config.remote.base_url, "https://gdscmbti.duckdns.org");
    assert_eq!(config.remote.timeout_seconds, 10);
    assert_eq!(config.categories.labels.len(), 15);
    assert!(!config.categories.labels.iter().any(|l| l == "ENTJ"));
    assert_eq!(config.composer.category, "ISFJ");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("mbti-board/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let (_dir, path) = write_config(
        r#"
[defaults]
items_per_page = 10
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.items_per_page, 10);
    assert_eq!(config.remote, Config::default().remote);
    assert_eq!(config.items_per_page().unwrap().get(), 10);
}

#[test]
fn test_custom_categories_are_injected() {
    let (_dir, path) = write_config(
        r#"
[categories]
labels = ["ISTJ", "ISFJ", "ENTJ"]

[composer]
category = "ENTJ"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let set = config.category_set().unwrap();
    assert_eq!(set.len(), 3);
    assert!(set.contains("ENTJ"));
    assert_eq!(config.composer_category().unwrap().as_str(), "ENTJ");
}

#[test]
fn test_zero_page_size_fails_validation() {
    let (_dir, path) = write_config("[defaults]\nitems_per_page = 0\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("items_per_page"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_duplicate_labels_fail_validation() {
    let (_dir, path) = write_config("[categories]\nlabels = [\"ISTJ\", \"ISTJ\"]\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("ISTJ"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_empty_labels_fail_validation() {
    let (_dir, path) = write_config("[categories]\nlabels = []\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_composer_category_must_be_known() {
    let (_dir, path) = write_config("[composer]\ncategory = \"ENTJ\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("composer.category"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_empty_base_url_fails_validation() {
    let (_dir, path) = write_config("[remote]\nbase_url = \"  \"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_zero_timeout_fails_validation() {
    let (_dir, path) = write_config("[remote]\ntimeout_seconds = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_config("[defaults\nitems_per_page = 5\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_round_trip_through_toml() {
    let config = Config::default();
    let text = toml::to_string(&config).unwrap();
    let (_dir, path) = write_config(&text);
    assert_eq!(Config::load_from(&path).unwrap(), config);
}
