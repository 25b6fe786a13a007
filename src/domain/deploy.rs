//! Typed values produced and consumed by the deploy sequence.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use url::Url;

/// Branch GitHub Pages serves from.
pub const HOSTING_BRANCH: &str = "gh-pages";

/// Branch assumed when `git branch --show-current` yields nothing.
pub const FALLBACK_BRANCH: &str = "main";

/// Remote every push and subtree push targets.
pub const REMOTE: &str = "origin";

/// Output recorded for a command killed by the runner's timeout.
pub const TIMEOUT_MESSAGE: &str = "Command timed out";

/// Result of a single git invocation. Never an error: failures are data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub succeeded: bool,
    /// Standard output followed by standard error.
    pub output: String,
}

impl CommandOutcome {
    pub fn success(output: impl Into<String>) -> Self {
        Self { succeeded: true, output: output.into() }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        Self { succeeded: false, output: output.into() }
    }

    pub fn timed_out() -> Self {
        Self::failure(TIMEOUT_MESSAGE)
    }
}

/// One attempted step of a deploy, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployStepReport {
    pub command: String,
    pub success: bool,
    pub output: String,
}

impl DeployStepReport {
    pub fn new(command: impl Into<String>, outcome: CommandOutcome) -> Self {
        Self { command: command.into(), success: outcome.succeeded, output: outcome.output }
    }
}

/// Outcome of a deploy.
///
/// `success` only says the sequence ran past the gating steps. Callers inspect
/// each step's `success` to learn what actually happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployResult {
    pub success: bool,
    pub message: String,
    pub steps: Vec<DeployStepReport>,
    /// Public Pages URL, empty when the remote address could not be parsed.
    #[serde(default)]
    pub url: String,
}

impl DeployResult {
    pub fn aborted(message: impl Into<String>, steps: Vec<DeployStepReport>) -> Self {
        Self { success: false, message: message.into(), steps, url: String::new() }
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = &DeployStepReport> {
        self.steps.iter().filter(|s| !s.success)
    }
}

/// Commit message for a deploy made at `at`, with minute resolution.
pub fn commit_message(at: NaiveDateTime) -> String {
    format!("Deploy portfolio - {}", at.format("%Y-%m-%d %H:%M"))
}

/// Human-readable command line for a step report, quoting arguments with spaces.
pub fn display_command(args: &[&str]) -> String {
    let mut line = String::from("git");
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}

/// Branches listed by `git branch -a`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchListing {
    local: BTreeSet<String>,
    /// Remote-tracking branches as `(remote, branch)`.
    remote: BTreeSet<(String, String)>,
}

impl BranchListing {
    pub fn parse(output: &str) -> Self {
        let mut listing = Self::default();

        for line in output.lines() {
            let entry = line.trim_start_matches(['*', '+', ' ']).trim_end();
            // Symbolic refs: "remotes/origin/HEAD -> origin/main"
            let entry = entry.split(" -> ").next().unwrap_or_default();
            if entry.is_empty() || entry.starts_with('(') {
                continue;
            }

            match entry.strip_prefix("remotes/") {
                Some(rest) => {
                    if let Some((remote, branch)) = rest.split_once('/') {
                        listing.remote.insert((remote.to_string(), branch.to_string()));
                    }
                }
                None => {
                    listing.local.insert(entry.to_string());
                }
            }
        }

        listing
    }

    pub fn has_local(&self, branch: &str) -> bool {
        self.local.contains(branch)
    }

    pub fn has_remote_tracking(&self, branch: &str) -> bool {
        self.remote.iter().any(|(_, name)| name == branch)
    }

    /// True when `branch` exists locally or on any remote.
    pub fn contains(&self, branch: &str) -> bool {
        self.has_local(branch) || self.has_remote_tracking(branch)
    }
}

/// Owner and repository name extracted from a remote address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    /// Parse `[user@]host:owner/repo.git`, `https://host/owner/repo.git` or
    /// `ssh://git@host/owner/repo.git`. Returns `None` for anything else.
    pub fn from_remote(address: &str) -> Option<Self> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }

        let path = match Url::parse(address) {
            Ok(url) if !url.host_str().unwrap_or_default().is_empty() => url.path().to_string(),
            // `file:///srv/git/site.git` and the like.
            Ok(url) if !url.cannot_be_a_base() => return None,
            // scp-like `[user@]host:path`, which may also parse as a `host:` scheme.
            _ => {
                let (host, path) = address.split_once(':')?;
                if host.is_empty() || host.contains('/') {
                    return None;
                }
                path.to_string()
            }
        };

        let path = path.trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let owner = segments.next()?;
        let repo = segments.next()?;
        Some(Self { owner: owner.to_string(), repo: repo.to_string() })
    }

    pub fn pages_url(&self) -> String {
        format!("https://{}.github.io/{}/", self.owner, self.repo)
    }
}

/// Pages URL for a remote address, or an empty string when it cannot be derived.
pub fn pages_url_for_remote(address: &str) -> String {
    RepoSlug::from_remote(address).map(|slug| slug.pages_url()).unwrap_or_default()
}
