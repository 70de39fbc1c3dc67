//! # toolguard - Policy hooks for AI coding assistants
//!
//! toolguard is invoked by an assistant host around tool use. Each hook reads
//! one JSON event from stdin and answers with a decision on stdout:
//!
//! - **safe-read**: auto-approve reads of documentation and config files
//! - **destructive-bash**: ask before `rm -rf`, `git reset --hard` and friends
//! - **file-protection**: ask before editing `.env`, manifests, migrations, routes
//! - **post-edit-tests**: run the related test file or the type checker after an edit
//! - **pre-commit-gate**: deny `git commit` until a fresh pre-commit pass exists
//!
//! ## Quick Start
//!
//! ```bash
//! # Try a policy without the host
//! toolguard check destructive-bash "git reset --hard"
//!
//! # What the host runs
//! echo '{"tool_input":{"file_path":"README.md"}}' | toolguard hook safe-read
//! ```

pub mod cli;
pub mod config;
pub mod external;
pub mod hooks;
pub mod policy;
pub mod shared;
pub mod utils;

pub use cli::{Cli, Output};
pub use config::ToolguardConfig;

/// Result type alias for toolguard operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
