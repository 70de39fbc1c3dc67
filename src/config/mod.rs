//! Configuration management for toolguard
//!
//! Configuration is layered with figment, lowest priority first:
//! compiled-in defaults, the user config (`~/.config/toolguard/config.toml`),
//! the project config (`toolguard.{toml,json,yaml,yml}` in the project
//! directory) or an explicit `--config` file, and finally `TOOLGUARD_*`
//! environment variables (`__` separates nested keys).

use crate::policy::{PolicySet, SafeCategory};
use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

mod smart_load;

#[cfg(test)]
mod tests;

/// Project config file names, merged in this order
const PROJECT_CONFIG_FILES: &[&str] = &[
    "toolguard.toml",
    "toolguard.json",
    "toolguard.yaml",
    "toolguard.yml",
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ToolguardConfig {
    /// Safe-read auto-approval
    pub safe_read: SafeReadConfig,

    /// Destructive shell command confirmation
    pub destructive_bash: DestructiveBashConfig,

    /// Protected file confirmation
    pub file_protection: FileProtectionConfig,

    /// Post-edit test and type-check runner
    pub post_edit: PostEditConfig,

    /// Commit gate
    pub commit_gate: CommitGateConfig,
}

/// Extra safe-read patterns, appended after the built-in tables
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SafeReadConfig {
    /// Additional patterns that are never auto-approved
    pub extra_block: Vec<String>,

    /// Additional patterns that are auto-approved
    pub extra_safe: Vec<SafePatternConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafePatternConfig {
    pub pattern: String,

    #[serde(default)]
    pub category: SafeCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DestructiveBashConfig {
    /// Additional dangerous command patterns
    pub extra_patterns: Vec<DangerPatternConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DangerPatternConfig {
    pub pattern: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FileProtectionConfig {
    /// Additional protected file patterns
    pub extra_patterns: Vec<ProtectedPatternConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedPatternConfig {
    pub pattern: String,

    /// Short warning label
    pub message: String,

    /// Longer explanation, may be empty
    #[serde(default)]
    pub context: String,
}

/// Post-edit validation runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostEditConfig {
    /// Application source root, relative to the project
    pub source_root: String,

    /// Extension of application source and test files
    pub source_extension: String,

    /// Directory holding the test suite
    pub test_root: String,

    /// Suffix appended to a source file stem to name its test
    pub test_suffix: String,

    /// Directories mirroring the source tree
    pub test_dirs: Vec<String>,

    /// Path fragment identifying controllers
    pub controller_marker: String,

    /// Directories checked for controller tests by base name
    pub controller_test_dirs: Vec<String>,

    /// UI source root checked with the type checker
    pub ui_root: String,

    /// Script extensions under `ui_root` that trigger a type check
    pub ui_extensions: Vec<String>,

    /// Test command; the test path is appended, then `test_args`
    pub test_command: Vec<String>,

    /// Arguments placed after the test path
    pub test_args: Vec<String>,

    /// Project-wide type-check command
    pub typecheck_command: Vec<String>,

    /// Wall-clock limit for either command
    pub timeout_secs: u64,

    /// Maximum type-check lines embedded in a block decision
    pub max_typecheck_lines: usize,
}

/// Commit gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitGateConfig {
    /// Sentinel written by the pre-commit workflow, relative to the project
    pub sentinel: PathBuf,

    /// How long a sentinel stays valid
    pub validity_window_secs: u64,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl Default for PostEditConfig {
    fn default() -> Self {
        Self {
            source_root: "app".to_string(),
            source_extension: "php".to_string(),
            test_root: "tests".to_string(),
            test_suffix: "Test".to_string(),
            test_dirs: strings(&["tests/Unit", "tests/Feature"]),
            controller_marker: "Controllers/".to_string(),
            controller_test_dirs: strings(&["tests/Feature", "tests/Feature/Http/Controllers"]),
            ui_root: "resources/js".to_string(),
            ui_extensions: strings(&["ts", "tsx"]),
            test_command: strings(&["php", "artisan", "test"]),
            test_args: strings(&["--compact"]),
            typecheck_command: strings(&["npx", "tsc", "--noEmit", "--skipLibCheck", "--pretty", "false"]),
            timeout_secs: 120,
            max_typecheck_lines: 20,
        }
    }
}

impl PostEditConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CommitGateConfig {
    fn default() -> Self {
        Self {
            sentinel: PathBuf::from(".claude/.pre-commit-passed"),
            validity_window_secs: 600,
        }
    }
}

impl CommitGateConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.validity_window_secs)
    }
}

impl ToolguardConfig {
    /// Load the layered configuration for a project
    pub fn load(project_dir: &Path, custom_config: Option<&Path>) -> Result<Self> {
        let config: ToolguardConfig = Self::figment(project_dir, custom_config)
            .extract()
            .context("Failed to load toolguard configuration")?;

        Ok(config)
    }

    /// Build the figment without extracting it
    pub fn figment(project_dir: &Path, custom_config: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // A custom config replaces the user and project files
        if let Some(custom_path) = custom_config {
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            if let Some(user_path) = Self::user_config_path() {
                figment = figment.merge(Toml::file(user_path));
            }

            let project = |name: &str| project_dir.join(name);
            figment = figment
                .merge(Toml::file(project("toolguard.toml")))
                .merge(Json::file(project("toolguard.json")))
                .merge(Yaml::file(project("toolguard.yaml")))
                .merge(Yaml::file(project("toolguard.yml")));
        }

        figment.merge(Env::prefixed("TOOLGUARD_").split("__"))
    }

    /// Config files that exist and take part in the merge
    pub fn sources(project_dir: &Path, custom_config: Option<&Path>) -> Vec<PathBuf> {
        if let Some(custom_path) = custom_config {
            return vec![custom_path.to_path_buf()];
        }

        Self::user_config_path()
            .into_iter()
            .chain(PROJECT_CONFIG_FILES.iter().map(|name| project_dir.join(name)))
            .filter(|path| path.is_file())
            .collect()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.post_edit.timeout_secs == 0 {
            anyhow::bail!("post_edit.timeout_secs cannot be 0");
        }

        if self.post_edit.test_command.is_empty() {
            anyhow::bail!("post_edit.test_command cannot be empty");
        }

        if self.post_edit.typecheck_command.is_empty() {
            anyhow::bail!("post_edit.typecheck_command cannot be empty");
        }

        if self.commit_gate.validity_window_secs == 0 {
            anyhow::bail!("commit_gate.validity_window_secs cannot be 0");
        }

        if self.commit_gate.sentinel.as_os_str().is_empty() {
            anyhow::bail!("commit_gate.sentinel cannot be empty");
        }

        PolicySet::from_config(self)?;

        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config/toolguard/config.toml"))
    }
}
