//! Hook command implementation
//!
//! Reads one tool-use event from stdin and writes the decision to stdout.
//! The host treats a non-zero exit or garbage on stdout as a hook failure,
//! so every problem here is logged and swallowed.

use crate::external::SystemRunner;
use crate::hooks::{HookContext, HookInput, HookKind, dispatch};
use anyhow::Result;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Execute a hook against stdin
pub async fn execute(kind: HookKind, project_dir: &Path, config_path: Option<&Path>) -> Result<()> {
    let raw = match io::read_to_string(io::stdin()) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(hook = kind.name(), error = %e, "failed to read hook input");
            return Ok(());
        }
    };

    let Some(input) = HookInput::parse(&raw) else {
        debug!(hook = kind.name(), "hook input is not a JSON object");
        return Ok(());
    };

    let context = HookContext::load(project_dir, config_path, SystemRunner);
    let response = dispatch(kind, &input, &context).await;

    if let Err(e) = response.write_to(&mut io::stdout().lock()) {
        warn!(hook = kind.name(), error = %format!("{:#}", e), "failed to write hook output");
    }

    Ok(())
}
