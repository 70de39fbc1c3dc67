//! Policy table tests

use super::*;
use crate::config::{DangerPatternConfig, ProtectedPatternConfig, SafePatternConfig};

#[test]
fn test_builtin_tables_compile() {
    let policies = PolicySet::from_config(&ToolguardConfig::default()).expect("builtin tables compile");

    assert_eq!(policies.sensitive_reads.len(), tables::SENSITIVE_READS.len());
    assert_eq!(policies.safe_reads.len(), tables::SAFE_READS.len());
    assert_eq!(policies.destructive_commands.len(), tables::DESTRUCTIVE_COMMANDS.len());
    assert_eq!(policies.protected_files.len(), tables::PROTECTED_FILES.len());
}

#[test]
fn test_policy_pattern_is_case_insensitive() {
    let pattern = PolicyPattern::new(r"\.env", ()).unwrap();

    assert!(pattern.is_match(".env"));
    assert!(pattern.is_match(".ENV"));
    assert!(pattern.is_match("config/.EnV.local"));
    assert!(!pattern.is_match("environment.md"));
}

#[test]
fn test_policy_pattern_search_is_unanchored() {
    let pattern = PolicyPattern::new(r"README", ()).unwrap();
    assert!(pattern.is_match("/project/docs/readme-old.txt"));
}

#[test]
fn test_invalid_pattern_reports_source() {
    let err = PolicyPattern::new(r"([unclosed", ()).unwrap_err();
    assert!(format!("{:#}", err).contains("([unclosed"));
}

#[test]
fn test_first_match_wins() {
    let table = PatternTable::compile(vec![
        (r"git", "first"),
        (r"git\s+reset", "second"),
    ])
    .unwrap();

    let hit = table.first_match("git reset --hard").unwrap();
    assert_eq!(hit.payload, "first");
    assert!(table.first_match("ls -la").is_none());
}

#[test]
fn test_extras_are_appended_after_builtins() {
    let mut config = ToolguardConfig::default();
    config.safe_read.extra_block.push(r"\.sqlite$".to_string());
    config.safe_read.extra_safe.push(SafePatternConfig {
        pattern: r"\.rst$".to_string(),
        category: SafeCategory::Documentation,
    });
    config.destructive_bash.extra_patterns.push(DangerPatternConfig {
        pattern: r"\bdrop\s+database\b".to_string(),
        message: "drop database destroys all data".to_string(),
    });
    config.file_protection.extra_patterns.push(ProtectedPatternConfig {
        pattern: r"Dockerfile$".to_string(),
        message: "⚠️ Container image".to_string(),
        context: String::new(),
    });

    let policies = PolicySet::from_config(&config).unwrap();

    assert_eq!(policies.sensitive_reads.iter().last().unwrap().source, r"\.sqlite$");
    assert_eq!(
        policies.safe_reads.first_match("guide.rst").unwrap().payload,
        SafeCategory::Documentation
    );
    assert_eq!(
        policies.destructive_commands.first_match("DROP DATABASE app").unwrap().payload,
        "drop database destroys all data"
    );
    assert_eq!(
        policies.protected_files.first_match("docker/Dockerfile").unwrap().payload.label,
        "⚠️ Container image"
    );
}

#[test]
fn test_invalid_extra_pattern_fails_compilation() {
    let mut config = ToolguardConfig::default();
    config.safe_read.extra_block.push("(".to_string());

    let err = PolicySet::from_config(&config).unwrap_err();
    assert!(format!("{:#}", err).contains("sensitive read patterns"));
}

#[test]
fn test_safe_category_reasons() {
    assert_eq!(SafeCategory::Documentation.reason(), "Safe read: documentation file");
    assert_eq!(SafeCategory::Configuration.reason(), "Safe read: configuration file");
    assert_eq!(SafeCategory::AssistantConfig.reason(), "Safe read: Claude configuration");
    assert_eq!(SafeCategory::Generic.reason(), "Safe read: safe file pattern");
}
