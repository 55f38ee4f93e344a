//! Tests for configuration loading and validation

use std::io::Write;

use librec_infrastructure::ConfigLoader;

#[test]
fn test_defaults_without_config_file() {
    let loader = ConfigLoader::new().with_config_path("/nonexistent/librec.toml");
    let config = loader.load().unwrap();

    assert_eq!(config.embedding.provider, "null");
    assert_eq!(config.embedding.batch_size, 64);
    assert_eq!(config.index.default_limit, 5);
    assert!(config.index.build_on_startup);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_toml_file_overrides_defaults_per_key() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[embedding]
provider = "ollama"
model = "all-minilm"
batch_size = 16

[index]
default_limit = 9
"#
    )
    .unwrap();
    file.flush().unwrap();

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();

    assert_eq!(config.embedding.provider, "ollama");
    assert_eq!(config.embedding.model, "all-minilm");
    assert_eq!(config.embedding.batch_size, 16);
    assert_eq!(config.index.default_limit, 9);
    // Untouched keys keep their defaults
    assert_eq!(config.embedding.timeout_secs, 30);
    assert!(config.index.build_on_startup);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_zero_batch_size_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[embedding]\nbatch_size = 0").unwrap();
    file.flush().unwrap();

    let error = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();
    assert!(matches!(
        error,
        librec_domain::Error::Configuration { .. }
    ));
}

#[test]
fn test_zero_default_limit_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[index]\ndefault_limit = 0").unwrap();
    file.flush().unwrap();

    assert!(ConfigLoader::new().with_config_path(file.path()).load().is_err());
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[logging]\nlevel = \"verbose\"").unwrap();
    file.flush().unwrap();

    assert!(ConfigLoader::new().with_config_path(file.path()).load().is_err());
}

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("librec.toml");

    let loader = ConfigLoader::new().with_config_path(&path);
    let mut config = loader.load().unwrap();
    config.embedding.provider = "ollama".to_string();
    config.index.default_limit = 7;

    loader.save_to_file(&config, &path).unwrap();
    let reloaded = loader.load().unwrap();

    assert_eq!(reloaded.embedding.provider, "ollama");
    assert_eq!(reloaded.index.default_limit, 7);
}

#[test]
fn test_parse_log_level_accepts_aliases() {
    use librec_infrastructure::logging::parse_log_level;

    assert!(parse_log_level("WARN").is_ok());
    assert!(parse_log_level("warning").is_ok());
    assert!(parse_log_level("chatty").is_err());
}
