//! Patterns command implementation
//!
//! Lists the compiled tables in evaluation order, built-ins first.

use crate::cli::{Output, TableName};
use crate::config::ToolguardConfig;
use crate::policy::{PatternTable, PolicySet};
use anyhow::Result;
use std::path::Path;

/// Execute the patterns command
pub fn execute(
    table: Option<TableName>,
    project_dir: &Path,
    config_path: Option<&Path>,
    output: &Output,
) -> Result<()> {
    let config = ToolguardConfig::load(project_dir, config_path)?;
    let policies = PolicySet::from_config(&config)?;

    output.header("📋 Policy Patterns");

    let show = |name: TableName| table.is_none_or(|selected| selected == name);

    if show(TableName::SensitiveReads) {
        list(output, "Sensitive reads (never auto-approved)", &policies.sensitive_reads, |_| {
            String::new()
        });
    }
    if show(TableName::SafeReads) {
        list(output, "Safe reads (auto-approved)", &policies.safe_reads, |category| {
            category.to_string()
        });
    }
    if show(TableName::DestructiveCommands) {
        list(output, "Destructive commands (ask)", &policies.destructive_commands, |message| {
            message.clone()
        });
    }
    if show(TableName::ProtectedFiles) {
        list(output, "Protected files (ask)", &policies.protected_files, |protection| {
            protection.label.clone()
        });
    }

    Ok(())
}

fn list<P>(output: &Output, title: &str, table: &PatternTable<P>, detail: impl Fn(&P) -> String) {
    output.category(&format!("{} ({})", title, table.len()));
    for (index, pattern) in table.iter().enumerate() {
        output.pattern_row(index + 1, &pattern.source, &detail(&pattern.payload));
    }
}
