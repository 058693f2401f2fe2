//! Tests for the normtree configuration system.

use std::sync::Mutex;

use normtree_core::config::{CliOverrides, NormtreeConfig, TreeConfig};
use normtree_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear the NORMTREE_ env vars these tests touch.
fn clear_normtree_env_vars() {
    for key in [
        "NORMTREE_TREE_COMPRESS_TREE",
        "NORMTREE_TREE_SPLIT_NAMES",
        "NORMTREE_BATCH_SIZE",
        "NORMTREE_BATCH_THREADS",
        "NORMTREE_PRINT_TREES",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_normtree_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("normtree.toml"),
        r#"
[tree]
compress_tree = true
split_names = true

[batch]
batch_size = 250
"#,
    )
    .unwrap();

    std::env::set_var("NORMTREE_BATCH_SIZE", "500");
    std::env::set_var("NORMTREE_TREE_SPLIT_NAMES", "false");

    let cli = CliOverrides {
        batch_size: Some(42),
        ..Default::default()
    };
    let config = NormtreeConfig::load(dir.path(), Some(&cli)).unwrap();

    // Overrides beat env, env beats the project file.
    assert_eq!(config.batch.batch_size, 42);
    assert!(!config.tree.split_names);
    // Untouched project value survives.
    assert!(config.tree.compress_tree);

    clear_normtree_env_vars();
}

#[test]
fn test_load_without_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_normtree_env_vars();

    let dir = tempdir();
    let config = NormtreeConfig::load(dir.path(), None).unwrap();
    assert_eq!(config, NormtreeConfig::default());
    assert_eq!(config.tree, TreeConfig::default());
}

#[test]
fn test_zero_batch_size_rejected_at_load() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_normtree_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("normtree.toml"), "[batch]\nbatch_size = 0\n").unwrap();
    let err = NormtreeConfig::load(dir.path(), None).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "batch.batch_size"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_negative_width_is_a_parse_error() {
    let err = NormtreeConfig::from_toml("[batch]\nthreads = -4\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_threads_rejected() {
    let config = NormtreeConfig::from_toml("[batch]\nthreads = 0\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_unknown_tree_option_rejected() {
    let err = NormtreeConfig::from_toml("[tree]\nmax_path_width = 4\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_toml_round_trip_preserves_flags() {
    let mut config = NormtreeConfig::default();
    config.tree.compress_operators = true;
    config.debug.print_trees = true;
    let text = config.to_toml().unwrap();
    let back = NormtreeConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_malformed_project_file_reports_path() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_normtree_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("normtree.toml"), "[tree\ncompress_tree = yes").unwrap();
    match NormtreeConfig::load(dir.path(), None).unwrap_err() {
        ConfigError::ParseError { path, .. } => assert!(path.ends_with("normtree.toml")),
        other => panic!("unexpected error: {other}"),
    }
}
