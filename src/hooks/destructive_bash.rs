//! Destructive command hook
//!
//! Asks for explicit confirmation before commands that can destroy
//! uncommitted work, untracked files or project data. It never denies
//! outright; the operator decides.

use super::{HookContext, HookInput, HookResponse};
use crate::policy::{PolicyPattern, PolicySet};
use anyhow::Result;
use tracing::debug;

/// First destructive pattern matching `command`
pub fn find_destructive<'a>(command: &str, policies: &'a PolicySet) -> Option<&'a PolicyPattern<String>> {
    policies.destructive_commands.first_match(command)
}

pub fn execute<R>(input: &HookInput, context: &HookContext<R>) -> Result<HookResponse> {
    let Some(command) = input.command() else {
        return Ok(HookResponse::Silent);
    };

    match find_destructive(command, &context.policies) {
        Some(pattern) => {
            debug!(command, pattern = %pattern.source, "destructive command");
            Ok(HookResponse::ask(format!("⚠️ Destructive command: {}", pattern.payload)))
        }
        None => Ok(HookResponse::Silent),
    }
}
