//! Command-line interface for toolguard
//!
//! `toolguard hook <name>` is what the assistant host invokes; the other
//! commands are for people inspecting and testing the policies.

use crate::hooks::HookKind;
use crate::utils::resolve_project_dir;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

/// toolguard - Policy hooks for AI coding assistants
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path (replaces the user and project config files)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Project directory (defaults to the current directory)
    #[arg(long, value_name = "DIR", env = "CLAUDE_PROJECT_DIR", global = true)]
    pub project_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a hook on the tool-use event read from stdin
    Hook {
        /// Hook to run
        #[arg(value_enum)]
        hook: HookKind,
    },
    /// Run a hook on a path or command given on the command line
    Check {
        /// Hook to run
        #[arg(value_enum)]
        hook: HookKind,
        /// File path or shell command, depending on the hook
        value: String,
    },
    /// List the effective pattern tables
    Patterns {
        /// Only show one table
        #[arg(value_enum)]
        table: Option<TableName>,
    },
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show project, config and validator status
    Status,
    /// Show version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the merged configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
    /// Validate configuration and compile every pattern table
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
    Yaml,
}

/// Pattern tables, in the order hooks consult them
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableName {
    SensitiveReads,
    SafeReads,
    DestructiveCommands,
    ProtectedFiles,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose, self.quiet);
        let project_dir = resolve_project_dir(self.project_dir);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Hook { hook }) => commands::hook::execute(hook, &project_dir, config_path).await,
            Some(Commands::Check { hook, value }) => {
                commands::check::execute(hook, &value, &project_dir, config_path, &output).await
            }
            Some(Commands::Patterns { table }) => {
                commands::patterns::execute(table, &project_dir, config_path, &output)
            }
            Some(Commands::Config(cmd)) => commands::config::execute(cmd, &project_dir, config_path, &output),
            Some(Commands::Status) => commands::status::execute(&project_dir, config_path, &output),
            Some(Commands::Version) => commands::version::execute(&output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

/// Install the tracing subscriber. Logs go to stderr; stdout belongs to
/// the hook wire format.
fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_env("TOOLGUARD_LOG").unwrap_or_else(|_| {
        if verbose {
            tracing_subscriber::EnvFilter::new("debug")
        } else {
            tracing_subscriber::EnvFilter::new("warn")
        }
    });

    // try_init: a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(console::user_attended_stderr())
        .try_init();
}
