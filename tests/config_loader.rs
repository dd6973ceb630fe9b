use std::fs;
use tempfile::TempDir;
use unibrowse::config::{Config, ConfigError, ConfigOverrides};

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn config_default_values() {
    let config = Config::default();

    assert_eq!(config.source.base_url, "http://universities.hipolabs.com");
    assert_eq!(config.source.country, "Indonesia");
    assert!(config.source.name.is_none());
    assert_eq!(config.source.timeout_seconds, 30);
    assert_eq!(config.source.connect_timeout_seconds, 5);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.overscan_rows, 2);
    assert_eq!(config.ui.name_max_width, 40);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert_ne!(config.messages.error_generic, config.messages.error_io);
    assert!(config.validate().is_ok());
}

#[test]
fn config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("unibrowse/config.toml"));
}

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[source]
country = "Japan"
timeout_seconds = 10

[messages]
header = "Daftar Universitas"
retry_io = "Coba lagi"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.source.country, "Japan");
    assert_eq!(config.source.timeout_seconds, 10);
    assert_eq!(config.source.connect_timeout_seconds, 5);
    assert_eq!(config.messages.header, "Daftar Universitas");
    assert_eq!(config.messages.retry_io, "Coba lagi");
    assert_eq!(config.messages.retry, "Retry");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn parse_error_names_the_file() {
    let (_dir, path) = write_config("[source\ncountry = ");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn validation_rejects_non_http_url() {
    let (_dir, path) = write_config("[source]\nbase_url = \"ftp://example.test\"\n");
    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => assert!(message.contains("http")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn validation_rejects_empty_country() {
    let mut config = Config::default();
    config.source.country = "  ".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn validation_rejects_zero_timeouts() {
    let mut config = Config::default();
    config.source.connect_timeout_seconds = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.ui.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn validation_rejects_identical_error_messages() {
    let mut config = Config::default();
    config.messages.error_io = config.messages.error_generic.clone();
    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => assert!(message.contains("error_io")),
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn validation_rejects_narrow_names() {
    let mut config = Config::default();
    config.ui.name_max_width = 3;
    assert!(config.validate().is_err());
}

#[test]
fn overrides_replace_only_given_values() {
    let mut config = Config::default();
    config.apply_overrides(ConfigOverrides {
        country: Some("Malaysia".to_string()),
        name: Some("Teknologi".to_string()),
        ..ConfigOverrides::default()
    });
    assert_eq!(config.source.country, "Malaysia");
    assert_eq!(config.source.name.as_deref(), Some("Teknologi"));
    assert_eq!(config.source.base_url, "http://universities.hipolabs.com");
    assert_eq!(config.logging.level, "info");
}
