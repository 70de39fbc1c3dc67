//! Hook implementations
//!
//! Each hook reads one tool-use event and produces a [`HookResponse`]:
//!
//! - `safe-read`: auto-approve reads of documentation and config files
//! - `destructive-bash`: ask before commands that destroy work
//! - `file-protection`: ask before editing critical project files
//! - `post-edit-tests`: run the related test or type check after an edit
//! - `pre-commit-gate`: deny commits until a fresh pre-commit pass exists

use crate::config::ToolguardConfig;
use crate::external::CommandRunner;
use crate::policy::PolicySet;
use clap::ValueEnum;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod decision;
pub mod destructive_bash;
pub mod file_protection;
pub mod input;
pub mod pre_commit_gate;
pub mod safe_read;


pub use decision::{HookResponse, PermissionDecision};
pub use input::HookInput;

/// The available hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HookKind {
    /// Auto-approve safe file reads (PreToolUse, Read)
    SafeRead,
    /// Confirm destructive shell commands (PreToolUse, Bash)
    DestructiveBash,
    /// Confirm edits to protected files (PreToolUse, Edit/Write)
    FileProtection,
    /// Run related tests or type checks (PostToolUse, Edit/Write)
    PostEditTests,
    /// Require a fresh pre-commit pass before `git commit` (PreToolUse, Bash)
    PreCommitGate,
}

/// Which `tool_input` field a hook reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    FilePath,
    Command,
}

impl HookKind {
    pub fn name(self) -> &'static str {
        match self {
            HookKind::SafeRead => "safe-read",
            HookKind::DestructiveBash => "destructive-bash",
            HookKind::FileProtection => "file-protection",
            HookKind::PostEditTests => "post-edit-tests",
            HookKind::PreCommitGate => "pre-commit-gate",
        }
    }

    /// Host lifecycle event this hook is registered for
    pub fn event(self) -> &'static str {
        match self {
            HookKind::PostEditTests => "PostToolUse",
            _ => "PreToolUse",
        }
    }

    pub fn input_field(self) -> InputField {
        match self {
            HookKind::DestructiveBash | HookKind::PreCommitGate => InputField::Command,
            _ => InputField::FilePath,
        }
    }
}

/// Everything a hook needs besides the event itself
pub struct HookContext<R> {
    pub config: ToolguardConfig,
    pub policies: PolicySet,
    pub project_dir: PathBuf,
    pub runner: R,
}

impl<R: CommandRunner> HookContext<R> {
    pub fn new(config: ToolguardConfig, policies: PolicySet, project_dir: PathBuf, runner: R) -> Self {
        Self {
            config,
            policies,
            project_dir,
            runner,
        }
    }

    /// Load configuration for a hook run, falling back to the built-in
    /// defaults when the configuration cannot be loaded or is invalid
    pub fn load(project_dir: &Path, custom_config: Option<&Path>, runner: R) -> Self {
        let loaded = ToolguardConfig::load(project_dir, custom_config).and_then(|config| {
            config.validate()?;
            let policies = PolicySet::from_config(&config)?;
            Ok((config, policies))
        });

        let (config, policies) = match loaded {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(error = %format!("{:#}", e), "invalid configuration, using built-in defaults");
                (ToolguardConfig::default(), PolicySet::builtin())
            }
        };

        Self::new(config, policies, project_dir.to_path_buf(), runner)
    }
}

/// Run a hook. Failures degrade to [`HookResponse::Silent`] so a broken hook
/// never blocks the host.
pub async fn dispatch<R: CommandRunner>(
    kind: HookKind,
    input: &HookInput,
    context: &HookContext<R>,
) -> HookResponse {
    debug!(hook = kind.name(), tool = ?input.tool_name(), "dispatching hook");

    let result = match kind {
        HookKind::SafeRead => safe_read::execute(input, context),
        HookKind::DestructiveBash => destructive_bash::execute(input, context),
        HookKind::FileProtection => file_protection::execute(input, context),
        HookKind::PostEditTests => post_edit_tests::execute(input, context).await,
        HookKind::PreCommitGate => pre_commit_gate::execute(input, context),
    };

    match result {
        Ok(response) => response,
        Err(e) => {
            warn!(hook = kind.name(), error = %format!("{:#}", e), "hook failed, passing through");
            HookResponse::Silent
        }
    }
}
