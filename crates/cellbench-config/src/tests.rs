use super::*;
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.scoring.unbounded_soft_cap, 100.0);
    assert_eq!(config.scoring.heatmap_metrics, vec!["nmi", "ari", "asw"]);
    assert_eq!(config.scoring.heatmap_model_limit, 5);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.display.theme, "system");
    assert!(config.catalog.data_dir.is_none());
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config = Config::from_toml(
        r#"
        [scoring]
        unbounded_soft_cap = 250.0

        [display]
        theme = "dark"
        "#,
    )
    .unwrap();
    assert_eq!(config.scoring.unbounded_soft_cap, 250.0);
    assert_eq!(config.scoring.heatmap_model_limit, 5);
    assert_eq!(config.display.font_size, "medium");
    assert_eq!(config.display.preferences().theme, Theme::Dark);
}

#[test]
fn test_non_positive_soft_cap_rejected() {
    let err = Config::from_toml("[scoring]\nunbounded_soft_cap = 0.0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_display_values_are_not_errors() {
    let config = Config::from_toml("[display]\nfont_size = \"gigantic\"\n").unwrap();
    assert_eq!(config.display.preferences().font_size, FontSize::Medium);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_yaml_file_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cellbench.yaml");
    fs::write(
        &path,
        "catalog:\n  data_dir: /srv/cellbench\nlogging:\n  level: debug\n  json: true\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.catalog.data_dir, Some(PathBuf::from("/srv/cellbench")));
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
}

#[test]
fn test_malformed_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cellbench.toml");
    fs::write(&path, "[scoring\nunbounded_soft_cap = ").unwrap();
    assert!(matches!(Config::load_from(&path), Err(ConfigError::Toml(_))));
}
