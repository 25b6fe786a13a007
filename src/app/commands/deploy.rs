//! Publish the rendered portfolio to the hosting branch.
//!
//! The sequence is best-effort: only the repository check and the initial
//! staging gate it. Every other step is recorded and the sequence moves on,
//! so the caller always sees exactly what was attempted.

use chrono::NaiveDateTime;

use super::generate;
use crate::app::AppContext;
use crate::domain::deploy::{commit_message, display_command, pages_url_for_remote};
use crate::domain::site_paths::OUTPUT_DIR;
use crate::domain::{
    BranchListing, CommandOutcome, DeployResult, DeployStepReport, FALLBACK_BRANCH, HOSTING_BRANCH,
    PortfolioDocument, REMOTE,
};
use crate::ports::{DocumentStore, GitPort, PageRenderer};

pub const NOT_A_REPOSITORY: &str = "Not a git repository. Please initialize with 'git init' first.";
pub const STAGING_FAILED: &str = "Failed to stage files";
pub const DEPLOYED: &str = "Portfolio deployed successfully!";

const SUBTREE_PUSH: [&str; 6] = ["subtree", "push", "--prefix", OUTPUT_DIR, REMOTE, HOSTING_BRANCH];

/// Ordered record of the steps a deploy attempted.
struct StepLog<'a, G: GitPort> {
    git: &'a G,
    steps: Vec<DeployStepReport>,
}

impl<'a, G: GitPort> StepLog<'a, G> {
    fn new(git: &'a G) -> Self {
        Self { git, steps: Vec::new() }
    }

    fn push(&mut self, command: &str, outcome: CommandOutcome) {
        self.steps.push(DeployStepReport::new(command, outcome));
    }

    /// Run a step, record it, and report whether it succeeded.
    async fn record(&mut self, args: &[&str]) -> bool {
        let outcome = self.git.run(args).await;
        let succeeded = outcome.succeeded;
        if !succeeded {
            tracing::warn!(args = ?args, output = %outcome.output.trim(), "Deploy step failed");
        }
        self.push(&display_command(args), outcome);
        succeeded
    }

    /// Run a read-only query whose output feeds a parser. Not recorded.
    async fn probe(&self, args: &[&str]) -> CommandOutcome {
        self.git.run(args).await
    }

    fn into_steps(self) -> Vec<DeployStepReport> {
        self.steps
    }
}

/// Render the portfolio and publish it, committing at `now`.
///
/// Never fails: every problem ends up in the returned report.
pub async fn execute<S, G, R>(ctx: &AppContext<S, G, R>, now: NaiveDateTime) -> DeployResult
where
    S: DocumentStore,
    G: GitPort,
    R: PageRenderer,
{
    tracing::info!(root = %ctx.paths().root().display(), "Starting deploy");

    if let Err(err) = generate::execute(ctx) {
        tracing::warn!(error = %err, "Render before deploy failed");
        return DeployResult::aborted(format!("Failed to generate portfolio: {err}"), Vec::new());
    }

    let mut log = StepLog::new(ctx.git());

    if !log.probe(&["status"]).await.succeeded {
        tracing::warn!("Deploy aborted: not a git repository");
        return DeployResult::aborted(NOT_A_REPOSITORY, log.into_steps());
    }
    log.push("git status", CommandOutcome::success("Repository detected"));

    // The document is staged alongside the page, so a first deploy creates it.
    if let Ok(None) = ctx.store().try_load() {
        if let Err(err) = ctx.store().save(&PortfolioDocument::default()) {
            tracing::warn!(error = %err, "Failed to create default portfolio document");
            return DeployResult::aborted(format!("{STAGING_FAILED}: {err}"), log.into_steps());
        }
        tracing::info!("Created default portfolio document");
    }

    let output_file = ctx.paths().output_file_relative();
    if !log.record(&["add", output_file.as_str(), ctx.paths().data_file_relative()]).await {
        return DeployResult::aborted(STAGING_FAILED, log.into_steps());
    }

    // "nothing to commit" is a legitimate outcome of an identical redeploy.
    let message = commit_message(now);
    log.record(&["commit", "-m", message.as_str()]).await;

    let current = log.probe(&["branch", "--show-current"]).await;
    let branch = match current.output.trim() {
        name if current.succeeded && !name.is_empty() => name.to_string(),
        _ => FALLBACK_BRANCH.to_string(),
    };

    let listing = log.probe(&["branch", "-a"]).await;
    let hosting_exists =
        listing.succeeded && BranchListing::parse(&listing.output).contains(HOSTING_BRANCH);

    if !hosting_exists && !log.record(&SUBTREE_PUSH).await {
        log.record(&["checkout", "-b", HOSTING_BRANCH]).await;
    }

    log.record(&["push", "-u", REMOTE, branch.as_str()]).await;

    // Authoritative publish; the steps above only prepare for it.
    log.record(&SUBTREE_PUSH).await;

    let remote = log.probe(&["remote", "get-url", REMOTE]).await;
    let url = if remote.succeeded { pages_url_for_remote(&remote.output) } else { String::new() };

    let steps = log.into_steps();
    tracing::info!(
        steps = steps.len(),
        failed = steps.iter().filter(|s| !s.success).count(),
        url = %url,
        "Deploy finished"
    );

    DeployResult { success: true, message: DEPLOYED.to_string(), steps, url }
}
