// tests/config_test.rs
use gitver::config::{load_config, Config, CONFIG_FILE_NAME};
use gitver::GitverError;
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.default_version, "0.0.0");
    assert_eq!(config.describe.max_candidates, 10);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
default_version = "0.3.0"

[describe]
max_candidates = 4
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.default_version, "0.3.0");
    assert_eq!(config.describe.max_candidates, 4);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = load_config(Some(&dir.path().join("missing.toml")));
    assert!(matches!(result, Err(GitverError::Config(_))));
}

#[test]
fn test_load_malformed_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[describe\nmax_candidates = ").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path()));
    assert!(matches!(result, Err(GitverError::Config(_))));
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "default_version = \"1.1.1\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).expect("Could not change to temp dir");
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    assert_eq!(config.default_version, "1.1.1");
    assert_eq!(config.describe.max_candidates, 10);
}
