use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = ToolguardConfig::default();

    assert_eq!(config.post_edit.timeout_secs, 120);
    assert_eq!(config.post_edit.test_command, vec!["php", "artisan", "test"]);
    assert_eq!(config.post_edit.test_args, vec!["--compact"]);
    assert!(config.post_edit.typecheck_command.contains(&"--skipLibCheck".to_string()));
    assert_eq!(config.commit_gate.sentinel, PathBuf::from(".claude/.pre-commit-passed"));
    assert_eq!(config.commit_gate.window(), Duration::from_secs(600));
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_without_files_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("missing.toml");

    let config = ToolguardConfig::load(temp_dir.path(), Some(&custom)).expect("missing file is ignored");
    assert_eq!(config.post_edit.max_typecheck_lines, 20);
}

#[test]
fn test_project_toml_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("toolguard.toml"),
        r#"
[post_edit]
timeout_secs = 30
test_command = ["vendor/bin/pest"]

[commit_gate]
validity_window_secs = 900

[[destructive_bash.extra_patterns]]
pattern = '\bdrop\s+table\b'
message = "drop table destroys data"
"#,
    )
    .unwrap();

    let config = ToolguardConfig::figment(temp_dir.path(), None)
        .extract::<ToolguardConfig>()
        .unwrap();

    assert_eq!(config.post_edit.timeout_secs, 30);
    assert_eq!(config.post_edit.test_command, vec!["vendor/bin/pest"]);
    // untouched keys keep their defaults
    assert_eq!(config.post_edit.test_args, vec!["--compact"]);
    assert_eq!(config.commit_gate.validity_window_secs, 900);
    assert_eq!(config.destructive_bash.extra_patterns.len(), 1);
    assert!(ToolguardConfig::sources(temp_dir.path(), None).contains(&temp_dir.path().join("toolguard.toml")));
}

#[test]
fn test_custom_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("policy.yml");
    fs::write(
        &custom,
        r#"
safe_read:
  extra_safe:
    - pattern: '\.rst$'
      category: documentation
  extra_block:
    - '\.sqlite$'
"#,
    )
    .unwrap();

    let config = ToolguardConfig::load(temp_dir.path(), Some(&custom)).unwrap();

    assert_eq!(config.safe_read.extra_block, vec![r"\.sqlite$"]);
    assert_eq!(config.safe_read.extra_safe[0].category, SafeCategory::Documentation);
    assert_eq!(ToolguardConfig::sources(temp_dir.path(), Some(&custom)), vec![custom.clone()]);
}

#[test]
fn test_malformed_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let custom = temp_dir.path().join("broken.toml");
    fs::write(&custom, "[post_edit]\ntimeout_secs = \"soon\"\n").unwrap();

    assert!(ToolguardConfig::load(temp_dir.path(), Some(&custom)).is_err());
}

#[test]
fn test_validate_rejects_zero_values() {
    let mut config = ToolguardConfig::default();
    config.post_edit.timeout_secs = 0;
    assert!(config.validate().is_err());

    let mut config = ToolguardConfig::default();
    config.commit_gate.validity_window_secs = 0;
    assert!(config.validate().is_err());

    let mut config = ToolguardConfig::default();
    config.post_edit.test_command.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_invalid_extra_regex() {
    let mut config = ToolguardConfig::default();
    config.file_protection.extra_patterns.push(ProtectedPatternConfig {
        pattern: "[".to_string(),
        message: "broken".to_string(),
        context: String::new(),
    });

    assert!(config.validate().is_err());
}
