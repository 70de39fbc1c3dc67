//! Protected file hook
//!
//! Adds a confirmation prompt before edits to environment files, dependency
//! manifests and framework wiring (config, migrations, routes, bootstrap,
//! providers, kernels, exception handler).

use super::{HookContext, HookInput, HookResponse};
use crate::policy::{PolicyPattern, PolicySet, Protection};
use crate::shared::paths::base_name;
use anyhow::Result;
use tracing::debug;

pub fn check_protected_file<'a>(
    file_path: &str,
    policies: &'a PolicySet,
) -> Option<&'a PolicyPattern<Protection>> {
    policies.protected_files.first_match(file_path)
}

pub fn execute<R>(input: &HookInput, context: &HookContext<R>) -> Result<HookResponse> {
    let Some(file_path) = input.file_path() else {
        return Ok(HookResponse::Silent);
    };

    let Some(pattern) = check_protected_file(file_path, &context.policies) else {
        return Ok(HookResponse::Silent);
    };

    debug!(file_path, pattern = %pattern.source, "protected file");
    let protection = &pattern.payload;

    Ok(HookResponse::ask_with_context(
        format!("{}: {}", protection.label, base_name(file_path)),
        protection.context.clone(),
    ))
}
