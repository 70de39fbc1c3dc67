//! External validation commands
//!
//! The post-edit runner shells out to a test runner or a type checker. Both
//! go through [`CommandRunner`] so hooks can be exercised without spawning
//! real processes.

use anyhow::{Context, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tracing::{debug, info};

pub mod typecheck;

/// A fully specified external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub timeout: Duration,
}

impl Invocation {
    /// Build from a configured argv vector
    pub fn from_argv(argv: &[String], cwd: &Path, timeout: Duration) -> Result<Self> {
        let (program, args) = argv.split_first().context("External command is empty")?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
            timeout,
        })
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Shell-like rendering for logs
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What happened when an external command was run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The process exited; `output` is stdout followed by stderr
    Exited { success: bool, output: String },

    /// The process exceeded its wall-clock limit and was killed
    TimedOut(Duration),

    /// The process could not be started
    SpawnFailed(String),
}

impl CommandOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, CommandOutcome::Exited { success: true, .. })
    }
}

/// Capability to run an external validator
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> impl Future<Output = CommandOutcome>;
}

/// Runs commands as child processes on the Tokio runtime
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> CommandOutcome {
        info!(command = %invocation.display(), cwd = %invocation.cwd.display(), "running external command");

        let mut command = tokio::process::Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        match tokio::time::timeout(invocation.timeout, command.output()).await {
            Err(_) => {
                debug!(limit = ?invocation.timeout, "external command timed out");
                CommandOutcome::TimedOut(invocation.timeout)
            }
            Ok(Err(e)) => CommandOutcome::SpawnFailed(e.to_string()),
            Ok(Ok(output)) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                debug!(status = %output.status, bytes = text.len(), "external command finished");

                CommandOutcome::Exited {
                    success: output.status.success(),
                    output: text,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str, timeout: Duration) -> Invocation {
        Invocation::from_argv(&["sh".to_string(), "-c".to_string()], Path::new("."), timeout)
            .unwrap()
            .arg(script)
    }

    #[test]
    fn test_invocation_from_argv() {
        let argv = vec!["php".to_string(), "artisan".to_string(), "test".to_string()];
        let invocation = Invocation::from_argv(&argv, Path::new("/srv/shop"), Duration::from_secs(120))
            .unwrap()
            .arg("/srv/shop/tests/Unit/FooTest.php")
            .args(["--compact"]);

        assert_eq!(invocation.program, "php");
        assert_eq!(invocation.display(), "php artisan test /srv/shop/tests/Unit/FooTest.php --compact");
        assert_eq!(invocation.cwd, PathBuf::from("/srv/shop"));
    }

    #[test]
    fn test_empty_argv_is_rejected() {
        assert!(Invocation::from_argv(&[], Path::new("."), Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn test_system_runner_captures_both_streams() {
        let outcome = SystemRunner
            .run(&sh("echo out; echo err >&2; exit 3", Duration::from_secs(10)))
            .await;

        match outcome {
            CommandOutcome::Exited { success, output } => {
                assert!(!success);
                assert!(output.contains("out"));
                assert!(output.contains("err"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_system_runner_success() {
        let outcome = SystemRunner.run(&sh("exit 0", Duration::from_secs(10))).await;
        assert!(outcome.succeeded());
    }

    #[tokio::test]
    async fn test_system_runner_times_out() {
        let outcome = SystemRunner.run(&sh("sleep 5", Duration::from_millis(100))).await;
        assert_eq!(outcome, CommandOutcome::TimedOut(Duration::from_millis(100)));
    }

    #[tokio::test]
    async fn test_system_runner_spawn_failure() {
        let invocation = Invocation::from_argv(
            &["nonexistent_command_12345".to_string()],
            Path::new("."),
            Duration::from_secs(1),
        )
        .unwrap();

        assert!(matches!(
            SystemRunner.run(&invocation).await,
            CommandOutcome::SpawnFailed(_)
        ));
    }
}
