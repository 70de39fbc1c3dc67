//! Utility functions for toolguard

use std::path::PathBuf;

/// Resolve the project directory.
///
/// `explicit` normally comes from `--project-dir` or `CLAUDE_PROJECT_DIR`;
/// without it the current directory is used.
pub fn resolve_project_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Check if a command exists in PATH
pub fn command_exists(command: &str) -> bool {
    which::which(command).is_ok()
}
