use std::env;
use std::fs;
use p4conv_rust::p4conv_common_rs::codec::core::PassthroughPolicy;
use p4conv_rust::p4conv_common_rs::utils::config_loader::{CodecConfig, ConfigLoader};
use tempfile::tempdir;

#[test]
fn test_defaults_when_no_file() {
    let dir = tempdir().unwrap();
    let loader = ConfigLoader::with_paths(vec![dir.path().join("missing.toml")])
        .with_env_prefix("P4CONV_TEST_DEFAULTS_".into());

    let config = loader.load().unwrap();
    assert_eq!(config, CodecConfig::default());
    assert_eq!(config.codec.passthrough, PassthroughPolicy::Allow);
    assert!(config.output.hex_prefix);
}

#[test]
fn test_load_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p4conv.toml");
    fs::write(
        &path,
        "[codec]\npassthrough = \"reject\"\n\n[output]\nuppercase = true\n\n[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    let config = ConfigLoader::with_paths(vec![path])
        .with_env_prefix("P4CONV_TEST_TOML_".into())
        .load()
        .unwrap();
    assert_eq!(config.codec.passthrough, PassthroughPolicy::Reject);
    assert!(config.output.uppercase);
    assert!(config.output.hex_prefix);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.encoder().policy(), PassthroughPolicy::Reject);
}

#[test]
fn test_load_json_and_save_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p4conv.json");
    fs::write(&path, r#"{"output": {"hex_prefix": false}}"#).unwrap();

    let loader = ConfigLoader::with_paths(vec![path.clone()])
        .with_env_prefix("P4CONV_TEST_JSON_".into());
    let config = loader.load().unwrap();
    assert!(!config.output.hex_prefix);

    let saved = dir.path().join("saved.toml");
    loader.save_config(&config, &saved).unwrap();
    assert_eq!(loader.load_from_file(&saved).unwrap(), config);
}

#[test]
fn test_env_overrides() {
    let prefix = "P4CONV_TEST_ENV_";
    env::set_var(format!("{}PASSTHROUGH", prefix), "reject");
    env::set_var(format!("{}HEX_PREFIX", prefix), "false");

    let dir = tempdir().unwrap();
    let config = ConfigLoader::with_paths(vec![dir.path().join("none.json")])
        .with_env_prefix(prefix.into())
        .load()
        .unwrap();
    assert_eq!(config.codec.passthrough, PassthroughPolicy::Reject);
    assert!(!config.output.hex_prefix);
}

#[test]
fn test_invalid_values_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("p4conv.toml");
    fs::write(&path, "[logging]\nlevel = \"chatty\"\n").unwrap();
    let loader = ConfigLoader::with_paths(vec![path]).with_env_prefix("P4CONV_TEST_BAD_".into());
    assert!(loader.load().is_err());

    let prefix = "P4CONV_TEST_BADENV_";
    env::set_var(format!("{}PASSTHROUGH", prefix), "sometimes");
    let loader = ConfigLoader::with_paths(vec![dir.path().join("none.json")])
        .with_env_prefix(prefix.into());
    assert!(loader.load().is_err());

    let unsupported = dir.path().join("p4conv.yaml");
    fs::write(&unsupported, "codec: {}").unwrap();
    assert!(ConfigLoader::new().load_from_file(&unsupported).is_err());
}
