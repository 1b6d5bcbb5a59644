//! Configuration loading and validation tests

use colguard_infrastructure::{AppConfig, ConfigLoader, CredentialConfig, ProtectionConfig};
use figment::Jail;
use tempfile::TempDir;

const CONFIG: &str = r#"
[logging]
level = "warn"
json_format = true

[[protection.credentials]]
name = "Default"
password = "correct horse battery staple"
salt = "0123456789abcdef"

[[protection.credentials]]
name = "Billing"
password = "another long password"
salt = "fedcba9876543210"
iterations = 50000
"#;

fn valid_credential(name: &str) -> CredentialConfig {
    CredentialConfig::new(name, "correct horse battery staple", "0123456789abcdef")
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
    assert!(config.logging.file_output.is_none());
    assert!(config.protection.credentials.is_empty());
}

#[test]
fn test_load_from_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file("colguard.toml", CONFIG)?;

        let config = ConfigLoader::new()
            .with_config_path("colguard.toml")
            .load()
            .unwrap();

        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.json_format);
        assert_eq!(config.protection.credentials.len(), 2);
        assert_eq!(config.protection.credentials[0].name, "Default");
        assert_eq!(config.protection.credentials[0].iterations, None);
        assert_eq!(config.protection.credentials[1].iterations, Some(50_000));
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("colguard.toml", CONFIG)?;
        jail.set_env("COLGUARD__LOGGING__LEVEL", "debug");

        let config = ConfigLoader::new()
            .with_config_path("colguard.toml")
            .load()
            .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.protection.credentials.len(), 2);
        Ok(())
    });
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new()
            .with_config_path("absent.toml")
            .load()
            .unwrap();

        assert_eq!(config.logging.level, "info");
        assert!(config.protection.credentials.is_empty());
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("colguard.toml", "[logging]\nlevel = \"loud\"\n")?;

        let err = ConfigLoader::new()
            .with_config_path("colguard.toml")
            .load()
            .unwrap_err();

        assert!(err.is_configuration());
        Ok(())
    });
}

#[test]
fn test_short_salt_rejected_at_load() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "colguard.toml",
            r#"
[[protection.credentials]]
name = "Default"
password = "correct horse battery staple"
salt = "short"
"#,
        )?;

        let err = ConfigLoader::new()
            .with_config_path("colguard.toml")
            .load()
            .unwrap_err();

        assert!(err.is_configuration());
        assert!(err.to_string().contains("salt"));
        Ok(())
    });
}

#[test]
fn test_validation_rules() {
    let short_password = CredentialConfig::new("Default", "short", "0123456789abcdef");
    let unnamed = CredentialConfig::new("  ", "correct horse battery staple", "0123456789abcdef");
    let duplicates = vec![valid_credential("Default"), valid_credential("DEFAULT")];

    assert!(ProtectionConfig::new(vec![valid_credential("Default")]).validate().is_ok());
    assert!(ProtectionConfig::new(vec![]).validate().is_ok());
    for invalid in [vec![short_password], vec![unnamed], duplicates] {
        let err = ProtectionConfig::new(invalid).validate().unwrap_err();
        assert!(err.is_configuration());
    }
}

#[test]
fn test_credential_set_conversion() {
    let config = ProtectionConfig::new(vec![
        valid_credential("Default"),
        valid_credential("Billing").with_iterations(100),
    ]);

    let set = config.credential_set().unwrap();

    assert_eq!(set.len(), 2);
    assert_eq!(set.names(), vec!["Default", "Billing"]);
    assert_eq!(set.iter().nth(1).unwrap().effective_iterations(), 10_000);
}

#[test]
fn test_credential_debug_is_redacted() {
    let rendered = format!("{:?}", valid_credential("Default"));

    assert!(rendered.contains("Default"));
    assert!(!rendered.contains("correct horse"));
    assert!(!rendered.contains("0123456789abcdef"));
}

#[test]
fn test_save_and_reload() {
    Jail::expect_with(|_jail| {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("saved.toml");
        let mut config = AppConfig::default();
        config.logging.level = "debug".to_string();
        config.protection =
            ProtectionConfig::new(vec![valid_credential("Default").with_iterations(20_000)]);

        let loader = ConfigLoader::new().with_config_path(&path);
        loader.save_to_file(&config, &path).unwrap();
        let reloaded = loader.load().unwrap();

        assert_eq!(reloaded.logging.level, "debug");
        assert_eq!(reloaded.protection.credentials.len(), 1);
        assert_eq!(reloaded.protection.credentials[0].iterations, Some(20_000));
        Ok(())
    });
}

#[test]
fn test_save_to_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("colguard.toml");

    let err = ConfigLoader::new()
        .save_to_file(&AppConfig::default(), &path)
        .unwrap_err();

    assert!(matches!(err, colguard_domain::Error::Io { .. }));
    assert!(err.to_string().contains("colguard.toml"));
}
