use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;

use crate::domain::CommandOutcome;
use crate::ports::GitPort;

/// Per-command bound applied when none is configured.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs the `git` executable as a subprocess rooted at the application directory.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    root: PathBuf,
    program: OsString,
    timeout: Duration,
}

impl GitCommandAdapter {
    pub fn new(root: PathBuf) -> Self {
        Self { root, program: OsString::from("git"), timeout: DEFAULT_COMMAND_TIMEOUT }
    }

    /// Use a different executable, e.g. a git binary outside `PATH`.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl GitPort for GitCommandAdapter {
    async fn run(&self, args: &[&str]) -> CommandOutcome {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .current_dir(&self.root)
            // Never block on a credential prompt.
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let started = Instant::now();
        // On timeout the output future is dropped, which kills the child.
        let outcome = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                CommandOutcome { succeeded: output.status.success(), output: text }
            }
            Ok(Err(err)) => CommandOutcome::failure(err.to_string()),
            Err(_elapsed) => CommandOutcome::timed_out(),
        };

        tracing::debug!(
            args = ?args,
            succeeded = outcome.succeeded,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "git command finished"
        );
        outcome
    }
}
