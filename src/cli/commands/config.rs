//! Configuration command implementations

use crate::cli::{ConfigCommands, ConfigFormat, Output};
use crate::config::ToolguardConfig;
use crate::policy::PolicySet;
use anyhow::{Context, Result};
use std::path::Path;

/// Execute config commands
pub fn execute(cmd: ConfigCommands, project_dir: &Path, config_path: Option<&Path>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { format } => show(format, project_dir, config_path, output),
        ConfigCommands::Validate => validate(project_dir, config_path, output),
    }
}

fn show(format: ConfigFormat, project_dir: &Path, config_path: Option<&Path>, output: &Output) -> Result<()> {
    let config = ToolguardConfig::load(project_dir, config_path)?;

    for source in ToolguardConfig::sources(project_dir, config_path) {
        output.verbose(&format!("Merged: {}", source.display()));
    }

    let rendered = match format {
        ConfigFormat::Toml => toml::to_string_pretty(&config).context("Failed to render config as TOML")?,
        ConfigFormat::Json => serde_json::to_string_pretty(&config).context("Failed to render config as JSON")?,
        ConfigFormat::Yaml => serde_yml::to_string(&config).context("Failed to render config as YAML")?,
    };

    println!("{}", rendered.trim_end());
    Ok(())
}

fn validate(project_dir: &Path, config_path: Option<&Path>, output: &Output) -> Result<()> {
    output.header("✅ Validating Configuration");

    let sources = ToolguardConfig::sources(project_dir, config_path);
    if sources.is_empty() {
        output.info("No configuration files found, using built-in defaults");
    }
    for source in &sources {
        output.list_item(&source.display().to_string());
    }

    let config = ToolguardConfig::load(project_dir, config_path)?;
    config.validate().context("Configuration is invalid")?;
    let policies = PolicySet::from_config(&config)?;

    output.success("Configuration is valid");
    output.blank_line();
    output.key_value("Sensitive read patterns:", &policies.sensitive_reads.len().to_string(), false);
    output.key_value("Safe read patterns:", &policies.safe_reads.len().to_string(), false);
    output.key_value("Destructive command patterns:", &policies.destructive_commands.len().to_string(), false);
    output.key_value("Protected file patterns:", &policies.protected_files.len().to_string(), false);
    output.key_value("Validator timeout:", &format!("{}s", config.post_edit.timeout_secs), false);
    output.key_value(
        "Pre-commit window:",
        &format!("{}s", config.commit_gate.validity_window_secs),
        false,
    );

    Ok(())
}
