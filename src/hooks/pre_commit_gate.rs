//! Commit gate hook
//!
//! Denies `git commit` unless the pre-commit workflow has passed recently.
//! The workflow records its pass by touching a sentinel file; this hook only
//! ever reads it.

use super::{HookContext, HookInput, HookResponse};
use crate::config::CommitGateConfig;
use anyhow::Result;
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{debug, info};

const MISSING_MESSAGE: &str = "Run /pre-commit first. Modified files need PHPStan/Pint validation.";

lazy_static! {
    static ref COMMIT_PATTERNS: Vec<Regex> = [
        r"\bgit\s+commit\b",     // git commit
        r"\bgit\s+.*\s+commit\b", // git -c key=value commit
    ]
    .iter()
    .map(|pattern| {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("static commit pattern")
    })
    .collect();
}

/// Sentinel state at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Absent,
    Stale { minutes: u64 },
    Fresh,
}

/// Outcome of the gate for a commit command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateVerdict {
    /// Commit may proceed; carries the sentinel contents
    Pass(String),
    /// Commit is denied with this message
    Denied(String),
}

pub fn is_git_commit_command(command: &str) -> bool {
    COMMIT_PATTERNS.iter().any(|pattern| pattern.is_match(command))
}

/// Classify a sentinel by its modification time. A sentinel is stale once
/// its age exceeds `window`; timestamps in the future count as brand new.
pub fn sentinel_freshness(now: SystemTime, modified: Option<SystemTime>, window: Duration) -> Freshness {
    let Some(modified) = modified else {
        return Freshness::Absent;
    };

    let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
    if age > window {
        Freshness::Stale {
            minutes: age.as_secs() / 60,
        }
    } else {
        Freshness::Fresh
    }
}

/// Check the sentinel under `project_dir` at instant `now`
pub fn check_pre_commit_state(project_dir: &Path, config: &CommitGateConfig, now: SystemTime) -> GateVerdict {
    let sentinel = project_dir.join(&config.sentinel);
    let error = |e: std::io::Error| GateVerdict::Denied(format!("Error checking pre-commit state: {}", e));

    let modified = if sentinel.exists() {
        match fs::metadata(&sentinel).and_then(|metadata| metadata.modified()) {
            Ok(modified) => Some(modified),
            Err(e) => return error(e),
        }
    } else {
        None
    };

    match sentinel_freshness(now, modified, config.window()) {
        Freshness::Absent => GateVerdict::Denied(MISSING_MESSAGE.to_string()),
        Freshness::Stale { minutes } => GateVerdict::Denied(format!(
            "Pre-commit validation expired ({} min ago). Run /pre-commit again.",
            minutes
        )),
        Freshness::Fresh => match fs::read_to_string(&sentinel) {
            Ok(contents) => GateVerdict::Pass(contents.trim().to_string()),
            Err(e) => error(e),
        },
    }
}

pub fn execute<R>(input: &HookInput, context: &HookContext<R>) -> Result<HookResponse> {
    let Some(command) = input.command() else {
        return Ok(HookResponse::Silent);
    };

    if !is_git_commit_command(command) {
        return Ok(HookResponse::Silent);
    }

    match check_pre_commit_state(&context.project_dir, &context.config.commit_gate, SystemTime::now()) {
        GateVerdict::Pass(contents) => {
            info!(sentinel = %contents, "Pre-commit passed");
            Ok(HookResponse::Silent)
        }
        GateVerdict::Denied(message) => {
            debug!(command, %message, "commit denied");
            Ok(HookResponse::deny(message))
        }
    }
}
