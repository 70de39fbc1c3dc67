//! Show system status
//!
//! Displays the project directory, the configuration sources, the commit
//! gate sentinel and whether the validators can be found on PATH.

use crate::cli::Output;
use crate::config::ToolguardConfig;
use crate::hooks::pre_commit_gate::{Freshness, sentinel_freshness};
use crate::utils::command_exists;
use anyhow::Result;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Execute the status command
pub fn execute(project_dir: &Path, config_path: Option<&Path>, output: &Output) -> Result<()> {
    output.header("📊 toolguard Status");

    output.category("Project");
    output.key_value("Directory:", &project_dir.display().to_string(), true);

    output.category("Configuration");
    let sources = ToolguardConfig::sources(project_dir, config_path);
    if sources.is_empty() {
        output.info("Built-in defaults (no config files found)");
    }
    for source in &sources {
        output.list_item(&source.display().to_string());
    }

    let config = match ToolguardConfig::load(project_dir, config_path) {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("Configuration failed to load: {:#}", e));
            output.indent("Hooks fall back to the built-in defaults");
            ToolguardConfig::default()
        }
    };

    output.category("Commit gate");
    let sentinel = project_dir.join(&config.commit_gate.sentinel);
    let modified = fs::metadata(&sentinel).and_then(|metadata| metadata.modified()).ok();
    match sentinel_freshness(SystemTime::now(), modified, config.commit_gate.window()) {
        Freshness::Fresh => output.status_indicator("FRESH", "pre-commit validation passed", true),
        Freshness::Stale { minutes } => {
            output.status_indicator("EXPIRED", &format!("last pass {} min ago", minutes), false)
        }
        Freshness::Absent => output.status_indicator("MISSING", &sentinel.display().to_string(), false),
    }

    output.category("Validators");
    let validators = [
        ("Test runner", config.post_edit.test_command.first()),
        ("Type checker", config.post_edit.typecheck_command.first()),
    ];
    for (label, program) in validators {
        match program {
            Some(program) => output.status_indicator(label, program, command_exists(program)),
            None => output.status_indicator(label, "not configured", false),
        }
    }

    Ok(())
}
