//! Integration tests for Configuration System

use super::test_utils::with_xdg_env;
use rankly::config::{ConfigLoader, RanklyConfig};
use rankly::sort::Algorithm;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_workspace_config(workspace: &Path, name: &str, body: &str) {
    let dir = workspace.join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn test_defaults_without_any_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let config = with_xdg_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(config, RanklyConfig::default());
}

#[test]
fn test_global_file_is_loaded() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let config = with_xdg_env(&test_dir, || {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.starts_with(test_dir.path().join("config")));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[session]\ndefault_algorithm = \"mergeSort\"\n").unwrap();
        ConfigLoader::load(workspace.path()).unwrap()
    });
    assert_eq!(config.session.default_algorithm, Algorithm::Merge);
}

#[test]
fn test_workspace_overrides_global() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_workspace_config(
        workspace.path(),
        "config.toml",
        "[session]\ndefault_algorithm = \"binaryInsertionSort\"\nsave_file = \"mine.json\"\n",
    );
    let config = with_xdg_env(&test_dir, || {
        let path = ConfigLoader::global_config_path().unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            "[session]\ndefault_algorithm = \"mergeSort\"\n\n[logging]\nlevel = \"info\"\n",
        )
        .unwrap();
        ConfigLoader::load(workspace.path()).unwrap()
    });
    assert_eq!(config.session.default_algorithm, Algorithm::BinaryInsertion);
    assert_eq!(config.session.save_file, PathBuf::from("mine.json"));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_environment_file_and_variables() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_workspace_config(
        workspace.path(),
        "config.toml",
        "[logging]\nlevel = \"info\"\n",
    );
    write_workspace_config(
        workspace.path(),
        "ci.toml",
        "[logging]\nlevel = \"debug\"\n",
    );

    let config = with_xdg_env(&test_dir, || {
        std::env::set_var("RANKLY_ENV", "ci");
        std::env::set_var("RANKLY__SESSION__SAVE_FILE", "from-env.json");
        let loaded = ConfigLoader::load(workspace.path());
        std::env::remove_var("RANKLY_ENV");
        std::env::remove_var("RANKLY__SESSION__SAVE_FILE");
        loaded.unwrap()
    });
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.session.save_file, PathBuf::from("from-env.json"));
}

#[test]
fn test_invalid_values_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("rankly.toml");
    fs::write(
        &config_file,
        "[logging]\nformat = \"xml\"\noutput = \"printer\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().starts_with("Logging:"));
}

#[test]
fn test_unknown_algorithm_is_a_load_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("rankly.toml");
    fs::write(
        &config_file,
        "[session]\ndefault_algorithm = \"bogoSort\"\n",
    )
    .unwrap();
    assert!(ConfigLoader::load_from_file(&config_file).is_err());
}
