//! Check command implementation
//!
//! Runs a hook on a value given on the command line instead of a stdin
//! event. Unlike `hook`, configuration errors are reported, not swallowed.

use crate::cli::Output;
use crate::config::ToolguardConfig;
use crate::external::SystemRunner;
use crate::hooks::{HookContext, HookInput, HookKind, HookResponse, InputField, PermissionDecision, dispatch};
use crate::policy::PolicySet;
use anyhow::Result;
use std::path::Path;

/// Execute the check command
pub async fn execute(
    kind: HookKind,
    value: &str,
    project_dir: &Path,
    config_path: Option<&Path>,
    output: &Output,
) -> Result<()> {
    let config = ToolguardConfig::load(project_dir, config_path)?;
    let policies = PolicySet::from_config(&config)?;
    let context = HookContext::new(config, policies, project_dir.to_path_buf(), SystemRunner);

    let input = match kind.input_field() {
        InputField::FilePath => HookInput::with_file_path(value),
        InputField::Command => HookInput::with_command(value),
    };

    output.header(&format!("🔍 {} ({})", kind.name(), kind.event()));
    output.key_value("Input:", value, false);
    output.verbose(&format!("Project: {}", project_dir.display()));

    let response = dispatch(kind, &input, &context).await;
    summarize(&response, output);

    // The raw decision is printed even in quiet mode
    if let Some(rendered) = response.render()? {
        println!("{}", rendered);
    }

    Ok(())
}

fn summarize(response: &HookResponse, output: &Output) {
    match response {
        HookResponse::Silent => output.info("No decision; the host applies its default handling"),
        HookResponse::Permission {
            decision,
            reason,
            context,
        } => {
            let is_allow = *decision == PermissionDecision::Allow;
            output.status_indicator(&decision.as_str().to_uppercase(), reason, is_allow);
            if let Some(context) = context {
                output.indent(context);
            }
        }
        HookResponse::Block { reason } => {
            output.status_indicator("BLOCK", reason.lines().next().unwrap_or_default(), false)
        }
        HookResponse::Message(lines) => {
            for line in lines {
                output.indent(line);
            }
        }
    }
    output.blank_line();
}
